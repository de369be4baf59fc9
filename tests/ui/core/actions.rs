use taskpad::tasks::{NewTask, Priority};
use taskpad::ui::core::actions::Action;

#[test]
fn test_action_enum_exists() {
    // Test that Action enum is accessible and has a valid size
    let action_size = std::mem::size_of::<Action>();
    // Action enum should have a non-zero size
    assert!(action_size > 0, "Action enum should have a non-zero size");
}

#[test]
fn test_action_carries_task_payload() {
    let action = Action::CreateTask(NewTask {
        content: "write tests".to_string(),
        priority: Priority::High,
        due_date: None,
    });

    match action {
        Action::CreateTask(new_task) => {
            assert_eq!(new_task.content, "write tests");
            assert_eq!(new_task.priority, Priority::High);
        }
        _ => panic!("Expected CreateTask"),
    }
}

#[test]
fn test_action_is_cloneable() {
    let action = Action::ShowHelp(true);
    let copy = action.clone();

    match (action, copy) {
        (Action::ShowHelp(a), Action::ShowHelp(b)) => assert_eq!(a, b),
        _ => panic!("Clone should preserve the variant"),
    }
}
