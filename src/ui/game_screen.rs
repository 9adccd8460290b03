use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::character::attributes::AttributeType;
use crate::character::Character;
use crate::core::adventure::AdventurePhase;
use crate::core::session::GameSession;

/// Tabs of the in-game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTab {
    Character,
    Abilities,
    Adventure,
}

impl GameTab {
    pub fn all() -> [GameTab; 3] {
        [GameTab::Character, GameTab::Abilities, GameTab::Adventure]
    }

    fn title(&self) -> &'static str {
        match self {
            GameTab::Character => "Character",
            GameTab::Abilities => "Abilities",
            GameTab::Adventure => "Adventure",
        }
    }
}

pub struct GameScreen {
    pub tab: GameTab,
}

impl GameScreen {
    pub fn new() -> Self {
        Self {
            tab: GameTab::Adventure,
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = GameTab::all();
        let index = tabs.iter().position(|&t| t == self.tab).unwrap_or(0);
        self.tab = tabs[(index + 1) % tabs.len()];
    }

    pub fn previous_tab(&mut self) {
        let tabs = GameTab::all();
        let index = tabs.iter().position(|&t| t == self.tab).unwrap_or(0);
        self.tab = tabs[(index + tabs.len() - 1) % tabs.len()];
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let titles: Vec<Line> = GameTab::all().iter().map(|t| Line::from(t.title())).collect();
        let selected = GameTab::all()
            .iter()
            .position(|&t| t == self.tab)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, chunks[0]);

        match (&self.tab, &session.character) {
            (_, None) => {
                let empty = Paragraph::new("No character. Return to the menu to create one.")
                    .alignment(Alignment::Center);
                f.render_widget(empty, chunks[1]);
            }
            (GameTab::Character, Some(character)) => {
                self.draw_character_tab(f, chunks[1], character)
            }
            (GameTab::Abilities, Some(character)) => {
                self.draw_abilities_tab(f, chunks[1], character)
            }
            (GameTab::Adventure, Some(_)) => self.draw_adventure_tab(f, chunks[1], session),
        }

        let hint = if session.adventure.is_active() {
            "[Tab] Next tab  [s] Stop adventure  [Esc] Menu  [q] Quit"
        } else {
            "[Tab] Next tab  [a] Start adventure  [Esc] Menu  [q] Quit"
        };
        let controls = Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[2]);
    }

    fn draw_character_tab(&self, f: &mut Frame, area: Rect, character: &Character) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Name line
                Constraint::Length(3), // HP gauge
                Constraint::Length(3), // XP gauge
                Constraint::Length(6), // Attributes
                Constraint::Min(4),    // Traits + equipment
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled(
                character.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  Lv{} {}",
                character.level,
                character.class.display_name()
            )),
        ]);
        f.render_widget(Paragraph::new(header), chunks[0]);

        let hp_gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" HP "))
            .gauge_style(Style::default().fg(Color::Red))
            .ratio(character.hp_fraction())
            .label(format!("{}/{}", character.current_hp, character.max_hp));
        f.render_widget(hp_gauge, chunks[1]);

        let xp_gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" XP "))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(character.exp_fraction())
            .label(format!("{}/{}", character.exp, character.exp_to_next));
        f.render_widget(xp_gauge, chunks[2]);

        let primaries = character.class.primary_stats();
        let attribute_lines: Vec<Line> = AttributeType::all()
            .iter()
            .map(|&attr| {
                let marker = if primaries.contains(&attr) { "★" } else { " " };
                let style = if primaries.contains(&attr) {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!(
                        "{} {:<12} {}",
                        marker,
                        attr.display_name(),
                        character.attributes.get(attr)
                    ),
                    style,
                ))
            })
            .collect();
        let attributes = Paragraph::new(attribute_lines)
            .block(Block::default().borders(Borders::ALL).title(" Attributes "));
        f.render_widget(attributes, chunks[3]);

        let mut detail_lines = Vec::new();
        for selection in &character.advantages {
            detail_lines.push(Line::from(Span::styled(
                format!(
                    "+ {} Lv{}",
                    selection.kind.display_name(),
                    selection.effective_level()
                ),
                Style::default().fg(Color::Green),
            )));
        }
        for selection in &character.disadvantages {
            detail_lines.push(Line::from(Span::styled(
                format!(
                    "- {} Lv{}",
                    selection.kind.display_name(),
                    selection.effective_level()
                ),
                Style::default().fg(Color::Red),
            )));
        }
        for item in &character.equipment {
            detail_lines.push(Line::from(format!("🎒 {}", item)));
        }
        let details = Paragraph::new(detail_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Traits & Equipment "),
        );
        f.render_widget(details, chunks[4]);
    }

    fn draw_abilities_tab(&self, f: &mut Frame, area: Rect, character: &Character) {
        let items: Vec<ListItem> = character
            .abilities
            .iter()
            .map(|entry| {
                let bar = progress_bar(entry.progress_fraction(), 12);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<16}", entry.ability.display_name()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("Lv{:<3}", entry.level)),
                    Span::styled(bar, Style::default().fg(Color::Cyan)),
                    Span::raw(format!(
                        " {}/{}  used {}x",
                        entry.exp, entry.exp_to_next, entry.times_used
                    )),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Abilities "));
        f.render_widget(list, area);
    }

    fn draw_adventure_tab(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Status
                Constraint::Min(6),    // Log
            ])
            .split(area);

        let status_lines = match session.adventure.phase {
            AdventurePhase::Idle => vec![Line::from(Span::styled(
                "Resting at camp. Press [a] to set out.",
                Style::default().fg(Color::Gray),
            ))],
            AdventurePhase::Exploring => vec![
                Line::from(Span::styled(
                    "Exploring...",
                    Style::default().fg(Color::Green),
                )),
                Line::from(session.adventure.narration.clone()),
            ],
            AdventurePhase::InCombat => match &session.adventure.monster {
                Some(monster) => vec![
                    Line::from(Span::styled(
                        "In combat!",
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!(
                        "{} {}  HP {}/{}",
                        monster.icon, monster.name, monster.current_hp, monster.max_hp
                    )),
                    Line::from(Span::styled(
                        progress_bar(monster.hp_fraction(), 20),
                        Style::default().fg(Color::Red),
                    )),
                ],
                None => vec![Line::from("In combat!")],
            },
        };
        let status = Paragraph::new(status_lines)
            .block(Block::default().borders(Borders::ALL).title(" Adventure "));
        f.render_widget(status, chunks[0]);

        // Newest entries at the bottom, oldest scrolled away first.
        let visible = chunks[1].height.saturating_sub(2) as usize;
        let skip = session.combat_log.len().saturating_sub(visible);
        let log_lines: Vec<Line> = session
            .combat_log
            .iter()
            .skip(skip)
            .map(|m| Line::from(m.clone()))
            .collect();
        let log = Paragraph::new(log_lines)
            .block(Block::default().borders(Borders::ALL).title(" Log "));
        f.render_widget(log, chunks[1]);
    }
}

/// Fixed-width text progress bar for list rows where a Gauge won't fit.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
