//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help overlay
    pub fn render(f: &mut Frame) {
        // Adaptive help panel size based on terminal size
        let area = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(area.width, area.height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, area);
        f.render_widget(Clear, help_area);

        let help_content = r"
TASKPAD - Quick task capture

QUICK-ADD FORM
--------------
a / i        Focus the form
Enter        Add the task
Tab          Next priority (Shift+Tab: previous)
Up / Down    Step the due date (Up from empty: today)
Ctrl+X       Clear the due date
Esc          Back to the task list

TASK LIST
---------
j/k or arrows   Move selection
Space / Enter   Toggle completion
d               Delete selected task

GENERAL
-------
?            Toggle this help
q / Ctrl+C   Quit

Press '?' or Esc to close
";

        let help_paragraph = Paragraph::new(help_content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan));

        f.render_widget(help_paragraph, help_area);
    }
}
