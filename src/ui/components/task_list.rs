use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::config::DisplayConfig;
use crate::constants::{EMPTY_LIST_MESSAGE, LIST_TITLE, TASK_COMPLETED_ICON, TASK_PENDING_ICON};
use crate::tasks::Task;
use crate::ui::components::badge::priority_badge;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub display_config: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            display_config: DisplayConfig::default(),
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    /// Replace the displayed tasks, keeping the selection in bounds
    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    /// Handle a mouse event against the list's rendered area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        // Check if mouse is within the list area
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            // Left click for selection
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let local_index = (mouse.row - area.y - 1) as usize;
                    let clicked_index = self.list_state.offset() + local_index;

                    // Guard against clicks beyond the available data
                    if clicked_index >= self.tasks.len() {
                        return Action::FocusTaskList;
                    }

                    self.selected_index = clicked_index;
                    self.update_list_state();
                    Action::FocusTaskList
                } else {
                    Action::None
                }
            }
            // Mouse wheel for navigation
            MouseEventKind::ScrollUp => Action::PreviousTask,
            MouseEventKind::ScrollDown => Action::NextTask,
            _ => Action::None,
        }
    }

    fn open_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    fn format_due_date(&self, due_date: NaiveDate) -> String {
        if self.display_config.human_dates {
            datetime::format_human_date(due_date)
        } else {
            due_date.format(&self.display_config.date_format).to_string()
        }
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'_> {
        let status_icon = if task.completed {
            TASK_COMPLETED_ICON
        } else {
            TASK_PENDING_ICON
        };
        let status_style = if task.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        // Build the line with multiple spans for proper color rendering
        let mut line_spans = Vec::new();
        line_spans.push(Span::styled(format!("{} ", status_icon), status_style));

        line_spans.push(priority_badge(task.priority));
        line_spans.push(Span::raw(" "));

        let content_style = if task.completed {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(task.content.clone(), content_style));

        if let Some(due_date) = task.due_date {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                self.format_due_date(due_date),
                Style::default().fg(Color::Rgb(255, 165, 0)), // Orange color
            ));
        }

        // Selection highlighting handled by the stateful widget
        ListItem::new(Line::from(line_spans))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(task) = self.tasks.get(self.selected_index) {
                    Action::ToggleTask(task.id)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.tasks.get(self.selected_index) {
                    Action::DeleteTask(task.id)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("{} ({} open)", LIST_TITLE, self.open_count());

        if self.tasks.is_empty() {
            let empty_list = List::new(vec![ListItem::new(EMPTY_LIST_MESSAGE)])
                .block(Block::default().borders(Borders::ALL).title(title));

            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
            let mut list_state = self.list_state.clone();

            let tasks_list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                );

            f.render_stateful_widget(tasks_list, rect, &mut list_state);
            self.list_state = list_state;
        }
    }
}
