use ratatui::style::{Color, Modifier};
use taskpad::tasks::Priority;
use taskpad::ui::components::badge::*;

#[test]
fn test_priority_style_colors() {
    assert_eq!(priority_style(Priority::High).color, Color::Red);
    assert_eq!(priority_style(Priority::Medium).color, Color::Rgb(255, 165, 0));
    assert_eq!(priority_style(Priority::Low).color, Color::Blue);
}

#[test]
fn test_priority_style_labels_match_priority() {
    for priority in Priority::ALL {
        assert_eq!(priority_style(priority).label, priority.label());
    }
}

#[test]
fn test_priority_badge_glyphs() {
    assert!(
        priority_badge(Priority::High).content.contains('⚑'),
        "High priority should use the solid flag"
    );
    assert!(priority_badge(Priority::Medium).content.contains('⚑'));
    assert!(
        priority_badge(Priority::Low).content.contains('⚐'),
        "Low priority should use the outline flag"
    );
}

#[test]
fn test_priority_badge_styles() {
    let high = priority_badge(Priority::High);
    assert_eq!(high.style.fg, Some(Color::Red));
    assert!(high.style.add_modifier.contains(Modifier::BOLD));

    let low = priority_badge(Priority::Low);
    assert_eq!(low.style.fg, Some(Color::Blue));
    assert!(!low.style.add_modifier.contains(Modifier::BOLD));
}
