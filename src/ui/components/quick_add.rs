//! Quick-add form component for creating tasks.
//!
//! The form collects a free-text description, a priority, and an optional due
//! date. It expands when it gains focus and collapses again on an outside
//! mouse press or keyboard blur, but only while no text has been entered.
//! A valid submission produces exactly one [`Action::CreateTask`] and resets
//! the draft; an empty submission shows an inline error instead.

use chrono::{Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DisplayConfig;
use crate::constants::{FORM_COLLAPSED_HEIGHT, FORM_EXPANDED_HEIGHT, FORM_PLACEHOLDER, FORM_TITLE};
use crate::tasks::{NewTask, Priority};
use crate::ui::components::badge::priority_style;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;

/// Label in front of the priority chips. The chip hit-boxes are computed
/// relative to its width, so rendering and mouse handling stay in agreement.
const PRIORITY_PREFIX: &str = "Priority: ";

/// Editable draft of a task, separate from the widget that renders it.
///
/// The default draft is empty text, medium priority, and no due date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub text: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// True when the text is empty after trimming
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Convert the draft into a creation payload, trimming the text
    pub fn to_new_task(&self) -> Result<NewTask, DraftError> {
        let content = self.text.trim();
        if content.is_empty() {
            return Err(DraftError::EmptySubmission);
        }

        Ok(NewTask {
            content: content.to_string(),
            priority: self.priority,
            due_date: self.due_date,
        })
    }
}

/// The only validation failure the form can produce. Its `Display` output is
/// the message rendered inline under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Task description cannot be empty")]
    EmptySubmission,
}

/// Quick-add form widget state.
///
/// Visibility of the options region is derived on demand from `expanded` and
/// the draft text; it is never stored. Expansion survives a submission so
/// several tasks can be added in a row.
pub struct QuickAddComponent {
    pub draft: TaskDraft,
    pub cursor_position: usize,
    pub error: Option<DraftError>,
    pub expanded: bool,
    pub focused: bool,
    pub display_config: DisplayConfig,
}

impl Default for QuickAddComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickAddComponent {
    pub fn new() -> Self {
        Self {
            draft: TaskDraft::default(),
            cursor_position: 0,
            error: None,
            expanded: false,
            focused: false,
            display_config: DisplayConfig::default(),
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    /// Whether the options region is visible: while expanded, or while any
    /// text is present. The text check is on the raw length, so
    /// whitespace-only text keeps the options visible even though it cannot
    /// be submitted and does not prevent collapsing.
    #[must_use]
    pub fn is_form_visible(&self) -> bool {
        self.expanded || !self.draft.text.is_empty()
    }

    /// Rows the form needs in the main layout for its current state
    #[must_use]
    pub fn desired_height(&self) -> u16 {
        if self.is_form_visible() {
            FORM_EXPANDED_HEIGHT + u16::from(self.error.is_some())
        } else {
            FORM_COLLAPSED_HEIGHT
        }
    }

    /// Collapse the form, but only while the text is blank after trimming
    pub fn collapse_if_blank(&mut self) {
        if self.draft.is_blank() {
            self.expanded = false;
        }
    }

    /// Handle a mouse event against the form's rendered area.
    ///
    /// A press inside focuses the form (and may pick a priority chip); a
    /// press anywhere else applies the collapse rule and hands focus back to
    /// the task list when the form held it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }

        // Check if the press is within the form area
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if is_in_area {
            if let Some(priority) = self.priority_chip_at(mouse.column, mouse.row, area) {
                self.draft.priority = priority;
            }
            Action::FocusQuickAdd
        } else {
            self.collapse_if_blank();
            if self.focused {
                Action::FocusTaskList
            } else {
                Action::None
            }
        }
    }

    fn handle_submit(&mut self) -> Action {
        match self.draft.to_new_task() {
            Ok(new_task) => {
                log::info!(
                    "Creating task {:?} (priority {}, due {:?})",
                    new_task.content,
                    new_task.priority.label(),
                    new_task.due_date
                );
                self.clear_draft();
                Action::CreateTask(new_task)
            }
            Err(error) => {
                self.error = Some(error);
                Action::None
            }
        }
    }

    /// Reset the draft after a submission. Expansion and focus are untouched.
    fn clear_draft(&mut self) {
        self.draft = TaskDraft::default();
        self.cursor_position = 0;
        self.error = None;
    }

    /// Screen row of the priority chips, when they are on screen
    fn priority_row_y(&self, area: Rect) -> Option<u16> {
        if !self.is_form_visible() || area.height < FORM_EXPANDED_HEIGHT {
            return None;
        }

        // Top border, input row, then the optional error row
        Some(area.y + 2 + u16::from(self.error.is_some()))
    }

    /// Priority chip under the given screen position, if any
    fn priority_chip_at(&self, column: u16, row: u16, area: Rect) -> Option<Priority> {
        let chips_y = self.priority_row_y(area)?;
        if row != chips_y {
            return None;
        }

        let local = usize::from(column.checked_sub(area.x + 1)?);
        chip_bounds()
            .into_iter()
            .find(|(start, end, _)| local >= *start && local < *end)
            .map(|(_, _, priority)| priority)
    }

    fn render_input_line(&self) -> Line<'static> {
        if self.draft.text.is_empty() && !self.focused {
            return Line::from(Span::styled(
                FORM_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
        }

        if !self.focused {
            return Line::from(self.draft.text.clone());
        }

        let byte_pos: usize = self
            .draft
            .text
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum();
        let (before, after) = self.draft.text.split_at(byte_pos);

        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled("█", Style::default().fg(Color::White)),
            Span::raw(after.to_string()),
        ])
    }

    fn render_priority_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            PRIORITY_PREFIX,
            Style::default().fg(Color::Gray),
        )];

        for priority in Priority::ALL {
            let chip = priority_style(priority);
            let selected = priority == self.draft.priority;
            let marker = if selected { "●" } else { "○" };

            spans.push(Span::styled(
                marker,
                Style::default().fg(chip.color).add_modifier(if selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
            ));

            let label_style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {}", chip.label), label_style));
            spans.push(Span::raw("  "));
        }

        Line::from(spans)
    }

    fn render_due_line(&self) -> Line<'static> {
        let due_span = match self.draft.due_date {
            Some(date) => {
                let formatted = date.format(&self.display_config.date_format).to_string();
                let text = if self.display_config.human_dates {
                    format!("{} ({})", formatted, datetime::format_human_date(date))
                } else {
                    formatted
                };
                Span::styled(text, Style::default().fg(Color::Rgb(255, 165, 0)))
            }
            None => Span::styled("none", Style::default().fg(Color::DarkGray)),
        };

        Line::from(vec![
            Span::styled("Due date: ", Style::default().fg(Color::Gray)),
            due_span,
        ])
    }

    fn render_instructions_line(&self) -> Line<'static> {
        let instructions = [
            ("Enter", Color::Green, " Add"),
            (" • ", Color::Gray, ""),
            ("Tab", Color::Cyan, " Priority"),
            (" • ", Color::Gray, ""),
            ("↑/↓", Color::Yellow, " Due"),
            (" • ", Color::Gray, ""),
            ("Esc", Color::Red, " Back"),
        ];

        let mut spans = Vec::new();
        for (key, color, desc) in instructions {
            spans.push(Span::styled(
                key,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(desc, Style::default().fg(Color::Gray)));
        }

        Line::from(spans)
    }
}

impl Component for QuickAddComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.collapse_if_blank();
                Action::FocusTaskList
            }
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab => {
                self.draft.priority = self.draft.priority.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.draft.priority = self.draft.priority.previous();
                Action::None
            }
            KeyCode::Up => {
                self.draft.due_date = Some(match self.draft.due_date {
                    Some(date) => date + Duration::days(1),
                    None => datetime::today(),
                });
                Action::None
            }
            KeyCode::Down => {
                if let Some(date) = self.draft.due_date {
                    self.draft.due_date = Some(date - Duration::days(1));
                }
                Action::None
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.draft.due_date = None;
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_pos: usize = self
                    .draft
                    .text
                    .chars()
                    .take(self.cursor_position)
                    .map(|ch| ch.len_utf8())
                    .sum();
                self.draft.text.insert(byte_pos, c);
                self.cursor_position += 1;
                self.error = None;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos: usize = self
                        .draft
                        .text
                        .chars()
                        .take(self.cursor_position)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    let prev_char_len = self
                        .draft
                        .text
                        .chars()
                        .nth(self.cursor_position - 1)
                        .map(|ch| ch.len_utf8())
                        .unwrap_or(1);
                    self.draft.text.remove(byte_pos - prev_char_len);
                    self.cursor_position -= 1;
                    self.error = None;
                }
                Action::None
            }
            KeyCode::Delete => {
                let char_count = self.draft.text.chars().count();
                if self.cursor_position < char_count {
                    let byte_pos: usize = self
                        .draft
                        .text
                        .chars()
                        .take(self.cursor_position)
                        .map(|ch| ch.len_utf8())
                        .sum();
                    self.draft.text.remove(byte_pos);
                    self.error = None;
                }
                Action::None
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                Action::None
            }
            KeyCode::Right => {
                let char_count = self.draft.text.chars().count();
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.draft.text.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let theme_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(FORM_TITLE)
            .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(theme_color));

        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if !self.is_form_visible() {
            let placeholder = Paragraph::new(self.render_input_line());
            f.render_widget(placeholder, inner);
            return;
        }

        let mut constraints = vec![Constraint::Length(1)]; // input
        if self.error.is_some() {
            constraints.push(Constraint::Length(1)); // error
        }
        constraints.push(Constraint::Length(1)); // priority chips
        constraints.push(Constraint::Length(1)); // due date
        constraints.push(Constraint::Length(1)); // instructions

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut row = 0;
        f.render_widget(Paragraph::new(self.render_input_line()), chunks[row]);
        row += 1;

        if let Some(error) = self.error {
            let error_line = Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(Paragraph::new(error_line), chunks[row]);
            row += 1;
        }

        f.render_widget(Paragraph::new(self.render_priority_line()), chunks[row]);
        row += 1;
        f.render_widget(Paragraph::new(self.render_due_line()), chunks[row]);
        row += 1;
        f.render_widget(
            Paragraph::new(self.render_instructions_line()).alignment(Alignment::Center),
            chunks[row],
        );
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.expanded = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.collapse_if_blank();
    }
}

/// Column spans of the priority chips within the priority row, relative to
/// the row's first column. Each chip is a marker, a space, and its label,
/// with a two-column gap between chips.
fn chip_bounds() -> [(usize, usize, Priority); 3] {
    let mut bounds = [(0, 0, Priority::Medium); 3];
    let mut start = PRIORITY_PREFIX.chars().count();

    for (i, priority) in Priority::ALL.into_iter().enumerate() {
        let width = 2 + priority.label().chars().count();
        bounds[i] = (start, start + width, priority);
        start += width + 2;
    }

    bounds
}
