use taskpad::ui::core::event_handler::{EventHandler, EventType};

#[test]
fn test_event_type_enum_exists() {
    // Test that EventType enum is accessible and has a valid size
    let event_size = std::mem::size_of::<EventType>();
    // EventType enum should have a non-zero size
    assert!(event_size > 0, "EventType enum should have a non-zero size");
}

#[test]
fn test_event_type_resize_carries_dimensions() {
    let event = EventType::Resize(80, 24);
    match event {
        EventType::Resize(width, height) => {
            assert_eq!(width, 80);
            assert_eq!(height, 24);
        }
        _ => panic!("Expected Resize"),
    }
}

#[test]
fn test_handler_render_pacing() {
    let mut handler = EventHandler::new();

    // A fresh handler allows the first frame immediately
    assert!(handler.should_render());

    handler.mark_render();
    assert!(!handler.should_render(), "Frames should be at least 16ms apart");
    assert!(handler.time_since_last_render().as_millis() < 16);
}

#[test]
fn test_handler_default_matches_new() {
    let handler = EventHandler::default();
    assert!(handler.should_render());
}
