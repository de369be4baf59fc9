//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{FORM_HINTS, LIST_HINTS};
use crate::ui::app_component::Focus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with shortcuts for the focused area
    pub fn render(f: &mut Frame, area: Rect, focus: Focus) {
        let status_text = match focus {
            Focus::QuickAdd => FORM_HINTS,
            Focus::TaskList => LIST_HINTS,
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
