//! Task form handling for the terminal user interface.
//!
//! One form type backs both popup dialogs: the create dialog starts
//! blank, the detail dialog is pre-populated from the selected task.
//! Field order matches the visual layout.

use crate::fields::Status;
use crate::task::Task;
use crate::tui::input::InputField;

/// Order constants for the form fields.
pub const TITLE_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 1;
pub const STATUS_FIELD: usize = 2;

/// Form for viewing or entering a task's fields.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub status: usize,
    pub current_field: usize,
    pub statuses: Vec<Status>,
}

impl TaskForm {
    /// Create a blank form for the create dialog.
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            description: InputField::new(),
            status: 0,
            current_field: 0,
            statuses: Status::ALL.to_vec(),
        };
        form.update_active_field();
        form
    }

    /// Create a form pre-populated from an existing task.
    pub fn from_task(task: &Task) -> Self {
        let mut form = Self::new();
        form.title = InputField::with_value(&task.title);
        form.description = InputField::with_value(&task.description);
        form.status = form
            .statuses
            .iter()
            .position(|&s| s == task.status)
            .unwrap_or(0);
        form.update_active_field();
        form
    }

    /// Reset all fields to blank, ready for the next create dialog.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The status currently picked in the selector.
    pub fn selected_status(&self) -> Status {
        self.statuses[self.status]
    }

    /// Total number of fields (two text inputs + the status selector).
    pub fn field_count(&self) -> usize {
        3
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.field_count() - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_FIELD;
        self.description.active = self.current_field == DESCRIPTION_FIELD;
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_char(c),
            DESCRIPTION_FIELD => self.description.handle_char(c),
            _ => {}
        }
    }

    /// Handle backspace input for the currently active field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_backspace(),
            DESCRIPTION_FIELD => self.description.handle_backspace(),
            _ => {}
        }
    }

    /// Handle delete input for the currently active field.
    pub fn handle_delete(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_delete(),
            DESCRIPTION_FIELD => self.description.handle_delete(),
            _ => {}
        }
    }

    /// Handle left/right arrow keys: cursor movement in text fields,
    /// wrap-around cycling in the status selector.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_FIELD => {
                if right {
                    self.title.move_cursor_right()
                } else {
                    self.title.move_cursor_left()
                }
            }
            DESCRIPTION_FIELD => {
                if right {
                    self.description.move_cursor_right()
                } else {
                    self.description.move_cursor_left()
                }
            }
            STATUS_FIELD => {
                if right {
                    self.status = (self.status + 1) % self.statuses.len();
                } else {
                    self.status = if self.status == 0 {
                        self.statuses.len() - 1
                    } else {
                        self.status - 1
                    };
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 9,
            title: "Water the plants".to_string(),
            description: "Just the ones on the balcony".to_string(),
            status: Status::Doing,
        }
    }

    #[test]
    fn from_task_populates_every_field() {
        let form = TaskForm::from_task(&sample_task());
        assert_eq!(form.title.value, "Water the plants");
        assert_eq!(form.description.value, "Just the ones on the balcony");
        assert_eq!(form.selected_status(), Status::Doing);
    }

    #[test]
    fn blank_form_defaults_to_todo() {
        let form = TaskForm::new();
        assert!(form.title.value.is_empty());
        assert!(form.description.value.is_empty());
        assert_eq!(form.selected_status(), Status::Todo);
        assert_eq!(form.current_field, TITLE_FIELD);
    }

    #[test]
    fn field_navigation_wraps_both_directions() {
        let mut form = TaskForm::new();
        form.next_field();
        assert_eq!(form.current_field, DESCRIPTION_FIELD);
        form.next_field();
        assert_eq!(form.current_field, STATUS_FIELD);
        form.next_field();
        assert_eq!(form.current_field, TITLE_FIELD);
        form.prev_field();
        assert_eq!(form.current_field, STATUS_FIELD);
    }

    #[test]
    fn status_selector_cycles_with_wraparound() {
        let mut form = TaskForm::new();
        form.current_field = STATUS_FIELD;

        form.handle_left_right(false);
        assert_eq!(form.selected_status(), Status::Done);
        form.handle_left_right(true);
        assert_eq!(form.selected_status(), Status::Todo);
        form.handle_left_right(true);
        assert_eq!(form.selected_status(), Status::Doing);
    }

    #[test]
    fn typing_goes_to_the_active_field_only() {
        let mut form = TaskForm::new();
        form.handle_char('h');
        form.handle_char('i');
        assert_eq!(form.title.value, "hi");
        assert!(form.description.value.is_empty());

        form.next_field();
        form.handle_char('x');
        assert_eq!(form.description.value, "x");

        form.handle_backspace();
        assert!(form.description.value.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = TaskForm::from_task(&sample_task());
        form.reset();
        assert!(form.title.value.is_empty());
        assert!(form.description.value.is_empty());
        assert_eq!(form.selected_status(), Status::Todo);
    }
}
