// @generated by actiongen. Do not edit.

use super::database_action::{DatabaseAction, Task};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default)]
pub struct makeTable_t;

impl DatabaseAction for makeTable_t {
    fn user_option(&self) -> &'static str {
        "Make a table"
    }

    fn task_type(&self) -> Task {
        Task::MAKE_TABLE
    }
}
