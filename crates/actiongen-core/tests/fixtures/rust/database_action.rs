// @generated by actiongen. Do not edit.

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    SHUT_DOWN,
    MAKE_TABLE
}

/// Capability shared by every registered action.
pub trait DatabaseAction: Send + Sync {
    /// Label shown to the user when picking an action.
    fn user_option(&self) -> &'static str;

    /// Which kind of task this action submits.
    fn task_type(&self) -> Task;
}
