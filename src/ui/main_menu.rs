use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewGame,
    Continue,
    ResetSave,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::NewGame => "New Game",
            MenuAction::Continue => "Continue",
            MenuAction::ResetSave => "Reset Save",
            MenuAction::Quit => "Quit",
        }
    }
}

pub struct MainMenuScreen {
    pub selected_index: usize,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Menu entries for the current save situation.
    pub fn actions(&self, has_save: bool) -> Vec<MenuAction> {
        if has_save {
            vec![
                MenuAction::Continue,
                MenuAction::NewGame,
                MenuAction::ResetSave,
                MenuAction::Quit,
            ]
        } else {
            vec![MenuAction::NewGame, MenuAction::Quit]
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, has_save: bool) {
        if self.selected_index + 1 < self.actions(has_save).len() {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self, has_save: bool) -> MenuAction {
        let actions = self.actions(has_save);
        actions[self.selected_index.min(actions.len() - 1)]
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, has_save: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Min(6),    // Menu
                Constraint::Length(2), // Controls
            ])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from("⚔️  WAYFARER  ⚔️"),
            Line::from("an idle adventure"),
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .actions(has_save)
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(format!("  {}", action.label()))).style(style)
            })
            .collect();
        let menu = List::new(items).block(Block::default().borders(Borders::ALL));
        f.render_widget(menu, chunks[1]);

        let controls = Paragraph::new("[↑/↓] Select    [Enter] Confirm    [q] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[2]);
    }
}
