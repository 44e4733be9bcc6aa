// @generated by actiongen. Do not edit.

use super::database_action::{DatabaseAction, Task};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default)]
pub struct shutDown_t;

impl DatabaseAction for shutDown_t {
    fn user_option(&self) -> &'static str {
        "Shut down the system gracefully"
    }

    fn task_type(&self) -> Task {
        Task::SHUT_DOWN
    }
}
