use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::tasks::Priority;

/// Fixed presentation attributes for a priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    pub label: &'static str,
    pub color: Color,
}

/// Look up the presentation attributes for a priority
#[must_use]
pub fn priority_style(priority: Priority) -> PriorityStyle {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Rgb(255, 165, 0), // orange
        Priority::Low => Color::Blue,
    };

    PriorityStyle {
        label: priority.label(),
        color,
    }
}

/// Create a priority badge with a flag symbol
#[must_use]
pub fn priority_badge(priority: Priority) -> Span<'static> {
    let style = priority_style(priority);

    match priority {
        Priority::High | Priority::Medium => Span::styled(
            "⚑",
            Style::default().fg(style.color).add_modifier(Modifier::BOLD),
        ),
        Priority::Low => Span::styled("⚐", Style::default().fg(style.color)), // outline flag for the lowest level
    }
}
