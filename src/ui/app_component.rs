use crate::config::Config;
use crate::tasks::{Task, TaskStore};
use crate::ui::components::{HelpPanel, QuickAddComponent, StatusBar, TaskListComponent};
use crate::ui::core::{actions::Action, event_handler::EventType, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Which region owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    QuickAdd,
    #[default]
    TaskList,
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: TaskStore,
    pub focus: Focus,
    pub show_help: bool,
}

pub struct AppComponent {
    // Component composition
    quick_add: QuickAddComponent,
    task_list: TaskListComponent,

    // Application state
    state: AppState,
    config: Config,

    // Areas from the last render, used to route mouse events
    form_area: Rect,
    list_area: Rect,

    // Simple UI state
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config) -> Self {
        let mut quick_add = QuickAddComponent::new();
        let mut task_list = TaskListComponent::new();
        quick_add.update_display_config(config.display.clone());
        task_list.update_display_config(config.display.clone());

        let mut state = AppState::default();
        if config.ui.start_in_form {
            state.focus = Focus::QuickAdd;
            quick_add.on_focus();
        }

        Self {
            quick_add,
            task_list,
            state,
            config,
            form_area: Rect::default(),
            list_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Application state, for inspection
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn quick_add(&self) -> &QuickAddComponent {
        &self.quick_add
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    /// Update the task list with the store's current contents
    fn sync_component_data(&mut self) {
        let tasks: Vec<Task> = if self.config.display.show_completed {
            self.state.store.tasks().to_vec()
        } else {
            self.state
                .store
                .tasks()
                .iter()
                .filter(|task| !task.completed)
                .cloned()
                .collect()
        };
        self.task_list.update_data(tasks);
    }

    /// Handle keyboard shortcuts that aren't component-specific
    fn handle_global_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::debug!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('i') => {
                log::debug!("Global key: 'a'/'i' - focusing the quick-add form");
                Action::FocusQuickAdd
            }
            KeyCode::Char('?') => {
                log::debug!("Global key: '?' - opening help panel");
                Action::ShowHelp(true)
            }
            KeyCode::Esc => {
                log::debug!("Global key: Esc - quitting application");
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Move keyboard focus, running blur and focus hooks on the way
    fn set_focus(&mut self, focus: Focus) {
        if self.state.focus == focus {
            return;
        }

        match self.state.focus {
            Focus::QuickAdd => self.quick_add.on_blur(),
            Focus::TaskList => self.task_list.on_blur(),
        }

        self.state.focus = focus;

        match focus {
            Focus::QuickAdd => self.quick_add.on_focus(),
            Focus::TaskList => self.task_list.on_focus(),
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::CreateTask(new_task) => {
                let content = new_task.content.clone();
                let id = self.state.store.add(new_task);
                log::info!("Task: Created '{}' ({})", content, id);
                Action::None
            }
            Action::ToggleTask(id) => {
                if self.state.store.toggle(id) {
                    log::debug!("Task: Toggled completion of {}", id);
                } else {
                    log::debug!("Task: Toggle ignored, {} not found", id);
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                match self.state.store.remove(id) {
                    Some(task) => log::info!("Task: Deleted '{}' ({})", task.content, id),
                    None => log::debug!("Task: Delete ignored, {} not found", id),
                }
                Action::None
            }
            Action::FocusQuickAdd => {
                self.set_focus(Focus::QuickAdd);
                Action::None
            }
            Action::FocusTaskList => {
                self.set_focus(Focus::TaskList);
                Action::None
            }
            Action::ShowHelp(show) => {
                log::debug!("Help: {} help panel", if show { "showing" } else { "hiding" });
                self.state.show_help = show;
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Mouse(mouse) => {
                if self.state.show_help {
                    // Any click dismisses the overlay
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        Action::ShowHelp(false)
                    } else {
                        Action::None
                    }
                } else {
                    // The form sees every press so it can collapse on an
                    // outside click; the list only reacts within its area
                    let form_action = self.quick_add.handle_mouse(mouse, self.form_area);
                    if matches!(form_action, Action::FocusQuickAdd) {
                        form_action
                    } else {
                        match self.task_list.handle_mouse(mouse, self.list_area) {
                            Action::None => form_action,
                            list_action => list_action,
                        }
                    }
                }
            }
            EventType::Key(key) => {
                if self.state.show_help {
                    // Any key dismisses the overlay
                    Action::ShowHelp(false)
                } else {
                    match self.state.focus {
                        Focus::QuickAdd => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                log::debug!("Global key: Ctrl+C - quitting application");
                                Action::Quit
                            } else {
                                self.quick_add.handle_key_events(key)
                            }
                        }
                        Focus::TaskList => {
                            let list_action = self.task_list.handle_key_events(key);
                            if matches!(list_action, Action::None) {
                                self.handle_global_key(key)
                            } else {
                                list_action
                            }
                        }
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.quick_add.update(action);
        let action = self.task_list.update(action);

        // Handle app-level actions
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.quick_add.update(action);

        // Return for app-level handling
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect, self.quick_add.desired_height());

        // Remember the regions so the next mouse event can be routed
        self.form_area = chunks[0];
        self.list_area = chunks[1];

        self.quick_add.render(f, chunks[0]);
        self.task_list.render(f, chunks[1]);
        StatusBar::render(f, chunks[2], self.state.focus);

        // Render the help panel on top if visible
        if self.state.show_help {
            HelpPanel::render(f);
        }
    }
}
