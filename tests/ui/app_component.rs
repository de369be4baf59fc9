use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use taskpad::config::Config;
use taskpad::tasks::{NewTask, Priority};
use taskpad::ui::app_component::{AppComponent, AppState, Focus};
use taskpad::ui::core::{actions::Action, EventType};

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn left_press(column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
}

/// Put a task into the store directly, then flush component data
fn inject_task(app: &mut AppComponent, content: &str) {
    app.handle_app_action(Action::CreateTask(NewTask {
        content: content.to_string(),
        priority: Priority::default(),
        due_date: None,
    }));
    app.handle_event(EventType::Tick).unwrap();
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.focus, Focus::TaskList);
    assert!(state.store.is_empty());
    assert!(!state.show_help);
}

#[test]
fn test_new_app_focuses_task_list() {
    let app = AppComponent::new(Config::default());
    assert_eq!(app.state().focus, Focus::TaskList);
    assert!(!app.quick_add().expanded);
}

#[test]
fn test_start_in_form_config() {
    let mut config = Config::default();
    config.ui.start_in_form = true;

    let app = AppComponent::new(config);
    assert_eq!(app.state().focus, Focus::QuickAdd);
    assert!(app.quick_add().expanded);
    assert!(app.quick_add().focused);
}

#[test]
fn test_quick_add_flow_creates_task() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    assert_eq!(app.state().focus, Focus::QuickAdd);
    assert!(app.quick_add().expanded);

    type_text(&mut app, "Buy milk");
    app.handle_event(key(KeyCode::Enter)).unwrap();

    let store = &app.state().store;
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].content, "Buy milk");
    assert_eq!(store.tasks()[0].priority, Priority::Medium);
    assert_eq!(store.tasks()[0].due_date, None);

    // The draft resets and the form keeps focus for the next entry
    assert_eq!(app.state().focus, Focus::QuickAdd);
    assert_eq!(app.quick_add().draft.text, "");
    assert!(app.quick_add().expanded);

    // The list component received the new task
    assert_eq!(app.task_list().tasks.len(), 1);
}

#[test]
fn test_tasks_stack_newest_first() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    type_text(&mut app, "first");
    app.handle_event(key(KeyCode::Enter)).unwrap();

    type_text(&mut app, "second");
    app.handle_event(key(KeyCode::Tab)).unwrap(); // Medium -> High
    app.handle_event(key(KeyCode::Enter)).unwrap();

    let store = &app.state().store;
    assert_eq!(store.len(), 2);
    assert_eq!(store.tasks()[0].content, "second");
    assert_eq!(store.tasks()[0].priority, Priority::High);
    assert_eq!(store.tasks()[1].content, "first");
}

#[test]
fn test_empty_submission_creates_nothing() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();

    assert!(app.state().store.is_empty());
    assert!(app.quick_add().error.is_some());
    assert_eq!(app.state().focus, Focus::QuickAdd);
}

#[test]
fn test_escape_returns_to_list_and_collapses_blank_form() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    app.handle_event(key(KeyCode::Esc)).unwrap();

    assert_eq!(app.state().focus, Focus::TaskList);
    assert!(!app.quick_add().expanded);
    assert!(!app.quick_add().focused);
}

#[test]
fn test_text_blocks_collapse_on_escape() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    type_text(&mut app, "draft in progress");
    app.handle_event(key(KeyCode::Esc)).unwrap();

    assert_eq!(app.state().focus, Focus::TaskList);
    assert!(app.quick_add().expanded, "Text should keep the form expanded");
    assert_eq!(app.quick_add().draft.text, "draft in progress");
}

#[test]
fn test_toggle_and_delete_selected_task() {
    let mut app = AppComponent::new(Config::default());
    inject_task(&mut app, "older");
    inject_task(&mut app, "newer");

    // The newest task sits at the top and starts selected
    app.handle_event(key(KeyCode::Char(' '))).unwrap();
    assert!(app.state().store.tasks()[0].completed);
    assert_eq!(app.state().store.open_count(), 1);

    app.handle_event(key(KeyCode::Char('d'))).unwrap();
    assert_eq!(app.state().store.len(), 1);
    assert_eq!(app.state().store.tasks()[0].content, "older");
}

#[test]
fn test_quit_keys() {
    let mut app = AppComponent::new(Config::default());
    app.handle_event(key(KeyCode::Char('q'))).unwrap();
    assert!(app.should_quit());

    let mut app = AppComponent::new(Config::default());
    app.handle_event(ctrl('c')).unwrap();
    assert!(app.should_quit());

    let mut app = AppComponent::new(Config::default());
    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_form_focus_swallows_global_keys() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    app.handle_event(key(KeyCode::Char('q'))).unwrap();

    assert!(!app.should_quit(), "'q' should be typed, not quit");
    assert_eq!(app.quick_add().draft.text, "q");

    // Ctrl+C still quits from inside the form
    app.handle_event(ctrl('c')).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_help_overlay_opens_and_any_key_closes() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('?'))).unwrap();
    assert!(app.state().show_help);

    app.handle_event(key(KeyCode::Char('x'))).unwrap();
    assert!(!app.state().show_help);
    assert!(!app.should_quit());
    assert!(app.state().store.is_empty(), "Keys closing help should not leak");
}

#[test]
fn test_mouse_click_closes_help() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('?'))).unwrap();
    app.handle_event(left_press(5, 5)).unwrap();
    assert!(!app.state().show_help);
}

#[test]
fn test_mouse_press_outside_form_blurs_it() {
    let mut app = AppComponent::new(Config::default());

    app.handle_event(key(KeyCode::Char('a'))).unwrap();
    assert_eq!(app.state().focus, Focus::QuickAdd);

    // Nothing has been rendered, so every press lands outside the form
    app.handle_event(left_press(5, 5)).unwrap();
    assert_eq!(app.state().focus, Focus::TaskList);
    assert!(!app.quick_add().expanded);
}

#[test]
fn test_hidden_completed_tasks_are_filtered_from_list() {
    let mut config = Config::default();
    config.display.show_completed = false;

    let mut app = AppComponent::new(config);
    inject_task(&mut app, "do then hide");

    app.handle_event(key(KeyCode::Char(' '))).unwrap();

    assert_eq!(app.state().store.len(), 1, "The store keeps completed tasks");
    assert!(app.state().store.tasks()[0].completed);
    assert!(app.task_list().tasks.is_empty(), "The list should hide completed tasks");
}

#[test]
fn test_resize_and_tick_events_are_accepted() {
    let mut app = AppComponent::new(Config::default());
    app.handle_event(EventType::Resize(120, 40)).unwrap();
    app.handle_event(EventType::Tick).unwrap();
    assert!(!app.should_quit());
}
