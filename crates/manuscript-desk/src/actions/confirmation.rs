//! Confirmation popup actions
//!
//! The popup asks a yes/no question before a destructive action runs.

use crate::state::ConfirmationIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationAction {
    /// Ask before carrying out the intent
    Show(ConfirmationIntent),
    /// Handled by middleware, which dispatches the intent's action
    Confirm,
    /// Close the popup after the intent was dispatched
    Confirmed,
    /// Close the popup without doing anything (n, Esc, q)
    Cancel,
}
