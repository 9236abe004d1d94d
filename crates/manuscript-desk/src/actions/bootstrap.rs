/// Startup actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Sent once after the worker is running; middleware load preferences and data
    Start,
}
