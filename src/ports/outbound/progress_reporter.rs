/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing feedback (e.g., to stderr) so the use
/// cases never print directly.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (a spinner) with a message
    fn start_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, ending any running activity
    fn report_completion(&self, message: &str);
}
