// @generated by actiongen. Do not edit.

pub mod database_action;
#[path = "shutDown.rs"]
pub mod shut_down;
#[path = "makeTable.rs"]
pub mod make_table;

use std::sync::OnceLock;

pub use database_action::{DatabaseAction, Task};

pub type PossibleActions = Vec<Box<dyn DatabaseAction>>;

static POSSIBLE_ACTIONS: OnceLock<PossibleActions> = OnceLock::new();

/// Every registered action in declaration order, built once on first use.
pub fn possible_actions() -> &'static [Box<dyn DatabaseAction>] {
    POSSIBLE_ACTIONS.get_or_init(|| {
        let mut ret: PossibleActions = Vec::with_capacity(2);
        ret.push(Box::new(shut_down::shutDown_t));
        ret.push(Box::new(make_table::makeTable_t));
        ret
    })
}
