use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::ClassKind;
use crate::character::traits::{TraitKind, TraitSelection};
use crate::core::constants::{
    CHARACTER_NAME_MAX_LENGTH, MAX_TRAITS_PER_KIND, TRAIT_LEVEL_MAX, TRAIT_LEVEL_MIN,
};

/// Which part of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationFocus {
    Name,
    Class,
    Advantages,
    Disadvantages,
}

/// One row in a trait column: picked or not, and at what level.
#[derive(Debug, Clone, Copy)]
struct TraitRow {
    kind: TraitKind,
    level: Option<u32>,
}

pub struct CharacterCreationScreen {
    pub name_input: String,
    pub focus: CreationFocus,
    pub validation_error: Option<String>,
    class_index: usize,
    advantage_rows: Vec<TraitRow>,
    disadvantage_rows: Vec<TraitRow>,
    advantage_cursor: usize,
    disadvantage_cursor: usize,
}

impl CharacterCreationScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            focus: CreationFocus::Name,
            validation_error: None,
            class_index: 0,
            advantage_rows: TraitKind::advantages()
                .iter()
                .map(|&kind| TraitRow { kind, level: None })
                .collect(),
            disadvantage_rows: TraitKind::disadvantages()
                .iter()
                .map(|&kind| TraitRow { kind, level: None })
                .collect(),
            advantage_cursor: 0,
            disadvantage_cursor: 0,
        }
    }

    pub fn selected_class(&self) -> ClassKind {
        ClassKind::all()[self.class_index]
    }

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            CreationFocus::Name => CreationFocus::Class,
            CreationFocus::Class => CreationFocus::Advantages,
            CreationFocus::Advantages => CreationFocus::Disadvantages,
            CreationFocus::Disadvantages => CreationFocus::Name,
        };
    }

    pub fn handle_char_input(&mut self, c: char) {
        if self.focus != CreationFocus::Name {
            return;
        }
        if self.name_input.chars().count() < CHARACTER_NAME_MAX_LENGTH {
            self.name_input.push(c);
        }
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        if self.focus == CreationFocus::Name {
            self.name_input.pop();
            self.validate();
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            CreationFocus::Advantages => {
                self.advantage_cursor = self.advantage_cursor.saturating_sub(1)
            }
            CreationFocus::Disadvantages => {
                self.disadvantage_cursor = self.disadvantage_cursor.saturating_sub(1)
            }
            _ => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            CreationFocus::Advantages => {
                if self.advantage_cursor + 1 < self.advantage_rows.len() {
                    self.advantage_cursor += 1;
                }
            }
            CreationFocus::Disadvantages => {
                if self.disadvantage_cursor + 1 < self.disadvantage_rows.len() {
                    self.disadvantage_cursor += 1;
                }
            }
            _ => {}
        }
    }

    /// Left/right: switch class, or adjust the highlighted trait's level.
    pub fn move_left(&mut self) {
        match self.focus {
            CreationFocus::Class => {
                self.class_index = self.class_index.saturating_sub(1);
            }
            CreationFocus::Advantages | CreationFocus::Disadvantages => {
                if let Some(level) = self.cursor_row_mut().level.as_mut() {
                    *level = level.saturating_sub(1).max(TRAIT_LEVEL_MIN);
                }
            }
            _ => {}
        }
    }

    pub fn move_right(&mut self) {
        match self.focus {
            CreationFocus::Class => {
                if self.class_index + 1 < ClassKind::all().len() {
                    self.class_index += 1;
                }
            }
            CreationFocus::Advantages | CreationFocus::Disadvantages => {
                if let Some(level) = self.cursor_row_mut().level.as_mut() {
                    *level = (*level + 1).min(TRAIT_LEVEL_MAX);
                }
            }
            _ => {}
        }
    }

    /// Space: toggle the highlighted trait, respecting the 2-per-kind cap.
    pub fn toggle_trait(&mut self) {
        let (rows, cursor) = match self.focus {
            CreationFocus::Advantages => (&mut self.advantage_rows, self.advantage_cursor),
            CreationFocus::Disadvantages => (&mut self.disadvantage_rows, self.disadvantage_cursor),
            _ => return,
        };
        let picked = rows.iter().filter(|r| r.level.is_some()).count();
        let row = &mut rows[cursor];
        if row.level.is_some() {
            row.level = None;
        } else if picked < MAX_TRAITS_PER_KIND {
            row.level = Some(TRAIT_LEVEL_MIN);
        }
    }

    fn cursor_row_mut(&mut self) -> &mut TraitRow {
        match self.focus {
            CreationFocus::Disadvantages => &mut self.disadvantage_rows[self.disadvantage_cursor],
            _ => &mut self.advantage_rows[self.advantage_cursor],
        }
    }

    pub fn advantages(&self) -> Vec<TraitSelection> {
        self.advantage_rows
            .iter()
            .filter_map(|r| r.level.map(|level| TraitSelection::new(r.kind, level)))
            .collect()
    }

    pub fn disadvantages(&self) -> Vec<TraitSelection> {
        self.disadvantage_rows
            .iter()
            .filter_map(|r| r.level.map(|level| TraitSelection::new(r.kind, level)))
            .collect()
    }

    pub fn validate(&mut self) {
        self.validation_error = if self.name_input.trim().is_empty() {
            Some("Name must not be empty".to_string())
        } else {
            None
        };
    }

    pub fn is_valid(&self) -> bool {
        !self.name_input.trim().is_empty()
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Name
                Constraint::Length(3), // Class
                Constraint::Min(8),    // Traits
                Constraint::Length(2), // Validation + controls
            ])
            .split(area);

        let title = Paragraph::new("Create Your Hero")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        // Name field
        let name_block = Block::default()
            .borders(Borders::ALL)
            .title(" Name ")
            .border_style(self.focus_style(CreationFocus::Name));
        let name = Paragraph::new(format!("{}_", self.name_input)).block(name_block);
        f.render_widget(name, chunks[1]);

        // Class picker
        let class_line: Vec<Span> = ClassKind::all()
            .iter()
            .enumerate()
            .flat_map(|(i, class)| {
                let style = if i == self.class_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                vec![
                    Span::styled(format!(" {} ", class.display_name()), style),
                    Span::raw("  "),
                ]
            })
            .collect();
        let class_block = Block::default()
            .borders(Borders::ALL)
            .title(" Class ")
            .border_style(self.focus_style(CreationFocus::Class));
        f.render_widget(Paragraph::new(Line::from(class_line)).block(class_block), chunks[2]);

        // Trait columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        self.draw_trait_column(
            f,
            columns[0],
            " Advantages (max 2) ",
            &self.advantage_rows,
            self.advantage_cursor,
            CreationFocus::Advantages,
        );
        self.draw_trait_column(
            f,
            columns[1],
            " Disadvantages (max 2) ",
            &self.disadvantage_rows,
            self.disadvantage_cursor,
            CreationFocus::Disadvantages,
        );

        // Validation + controls
        let footer = if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                "[Tab] Section  [↑/↓] Move  [Space] Toggle  [←/→] Class/Level  [Enter] Create  [Esc] Back",
                Style::default().fg(Color::Gray),
            ))
        };
        f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[4]);
    }

    fn draw_trait_column(
        &self,
        f: &mut Frame,
        area: Rect,
        title: &str,
        rows: &[TraitRow],
        cursor: usize,
        focus: CreationFocus,
    ) {
        let mut lines = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let marker = if row.level.is_some() { "[x]" } else { "[ ]" };
            let level = match row.level {
                Some(level) => format!(" Lv{}", level),
                None => String::new(),
            };
            let text = format!(
                "{} {}{}: {}",
                marker,
                row.kind.display_name(),
                level,
                row.kind.description()
            );
            let style = if self.focus == focus && i == cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if row.level.is_some() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(self.focus_style(focus));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn focus_style(&self, focus: CreationFocus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }
}
