use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use wayfarer::core::constants::AUTOSAVE_INTERVAL_SECONDS;
use wayfarer::save::SaveManager;
use wayfarer::ui::{
    CharacterCreationScreen, CreationFocus, GameScreen, MainMenuScreen, MenuAction,
};
use wayfarer::{GameSession, TICK_INTERVAL_MS};

enum Screen {
    MainMenu,
    CharacterCreation,
    Game,
}

struct App {
    screen: Screen,
    session: GameSession,
    save_manager: SaveManager,
    main_menu: MainMenuScreen,
    creation: CharacterCreationScreen,
    game: GameScreen,
    should_quit: bool,
}

impl App {
    fn new(save_manager: SaveManager) -> Self {
        let session = match save_manager.load() {
            Some(record) => GameSession::restore(record.character, record.combat_log),
            None => GameSession::new(),
        };
        Self {
            screen: Screen::MainMenu,
            session,
            save_manager,
            main_menu: MainMenuScreen::new(),
            creation: CharacterCreationScreen::new(),
            game: GameScreen::new(),
            should_quit: false,
        }
    }

    fn has_save(&self) -> bool {
        self.session.character.is_some() || self.save_manager.save_exists()
    }

    fn save(&self) {
        if let Err(e) = self.save_manager.save(&self.session) {
            eprintln!("wayfarer: save failed: {}", e);
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match self.screen {
            Screen::MainMenu => self.handle_menu_key(code),
            Screen::CharacterCreation => self.handle_creation_key(code),
            Screen::Game => self.handle_game_key(code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let has_save = self.has_save();
        match code {
            KeyCode::Up => self.main_menu.move_up(),
            KeyCode::Down => self.main_menu.move_down(has_save),
            KeyCode::Enter => match self.main_menu.selected(has_save) {
                MenuAction::NewGame => {
                    self.creation = CharacterCreationScreen::new();
                    self.screen = Screen::CharacterCreation;
                }
                MenuAction::Continue => {
                    if self.session.character.is_some() {
                        self.screen = Screen::Game;
                    }
                }
                MenuAction::ResetSave => {
                    if let Err(e) = self.save_manager.delete() {
                        eprintln!("wayfarer: could not delete save: {}", e);
                    }
                    self.session.reset();
                    self.main_menu = MainMenuScreen::new();
                }
                MenuAction::Quit => self.should_quit = true,
            },
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_creation_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.screen = Screen::MainMenu,
            KeyCode::Tab => self.creation.next_focus(),
            KeyCode::Up => self.creation.move_up(),
            KeyCode::Down => self.creation.move_down(),
            KeyCode::Left => self.creation.move_left(),
            KeyCode::Right => self.creation.move_right(),
            KeyCode::Backspace => self.creation.handle_backspace(),
            KeyCode::Enter => {
                self.creation.validate();
                if self.creation.is_valid() {
                    self.session.create_character(
                        self.creation.get_name(),
                        self.creation.selected_class(),
                        self.creation.advantages(),
                        self.creation.disadvantages(),
                    );
                    self.save();
                    self.screen = Screen::Game;
                }
            }
            KeyCode::Char(' ') if self.creation.focus != CreationFocus::Name => {
                self.creation.toggle_trait()
            }
            KeyCode::Char(c) => self.creation.handle_char_input(c),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.session.stop_adventure();
                self.save();
                self.screen = Screen::MainMenu;
            }
            KeyCode::Tab => self.game.next_tab(),
            KeyCode::BackTab => self.game.previous_tab(),
            KeyCode::Char('a') => {
                self.session.start_adventure();
            }
            KeyCode::Char('s') => self.session.stop_adventure(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let save_manager = SaveManager::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(save_manager));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();
    let mut last_autosave = Instant::now();

    loop {
        terminal.draw(|f| {
            let area = f.size();
            match app.screen {
                Screen::MainMenu => app.main_menu.draw(f, area, app.has_save()),
                Screen::CharacterCreation => app.creation.draw(f, area),
                Screen::Game => app.game.draw(f, area, &app.session),
            }
        })?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        let delta = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();

        let tick = app.session.tick(delta, &mut rng);
        if tick.save_requested {
            app.save();
        }

        if last_autosave.elapsed().as_secs() >= AUTOSAVE_INTERVAL_SECONDS {
            app.save();
            last_autosave = Instant::now();
        }

        if app.should_quit {
            app.save();
            return Ok(());
        }
    }
}
