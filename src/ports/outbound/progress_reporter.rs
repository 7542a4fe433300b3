/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while a workflow runs.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an activity indicator for a long-running step
    ///
    /// # Arguments
    /// * `message` - Description of the step
    fn start_activity(&self, message: &str);

    /// Reports an error or warning message, stopping any activity indicator
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, stopping any activity indicator
    fn report_completion(&self, message: &str);
}
