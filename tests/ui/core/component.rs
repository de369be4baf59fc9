use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use taskpad::ui::core::{actions::Action, Component};

struct ProbeComponent;

impl Component for ProbeComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('n') => Action::NextTask,
            _ => Action::None,
        }
    }

    fn render(&mut self, _f: &mut Frame, _rect: Rect) {}
}

#[test]
fn test_default_update_passes_actions_through() {
    let mut probe = ProbeComponent;
    assert!(matches!(probe.update(Action::Quit), Action::Quit));
    assert!(matches!(probe.update(Action::None), Action::None));
}

#[test]
fn test_lifecycle_defaults_are_callable() {
    let mut probe = ProbeComponent;
    probe.on_focus();
    probe.on_blur();
}

#[test]
fn test_key_handling_maps_to_actions() {
    let mut probe = ProbeComponent;
    let action = probe.handle_key_events(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
    assert!(matches!(action, Action::NextTask));
}
