//! Default tasks used to initialise an empty board.

use crate::fields::Status;
use crate::task::Task;

/// The fixed task set written to storage the first time the board is opened
/// with no persisted data. One task per column so the board is never empty.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Add your first task".to_string(),
            description: "Press 'a' on the board to open the new-task dialog.".to_string(),
            status: Status::Todo,
        },
        Task {
            id: 2,
            title: "Look around the board".to_string(),
            description: "Arrow keys move between columns and cards; Enter shows details."
                .to_string(),
            status: Status::Doing,
        },
        Task {
            id: 3,
            title: "Install taskboard".to_string(),
            description: String::new(),
            status: Status::Done,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_column() {
        let tasks = seed_tasks();
        assert_eq!(tasks.len(), 3);
        for status in Status::ALL {
            assert!(tasks.iter().any(|t| t.status == status));
        }
    }

    #[test]
    fn seed_ids_are_sequential_from_one() {
        let tasks = seed_tasks();
        for (i, t) in tasks.iter().enumerate() {
            assert_eq!(t.id, i as u64 + 1);
        }
    }
}
