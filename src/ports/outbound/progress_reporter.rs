/// ProgressReporter port for operator feedback during index loading
///
/// Everything reported through this port goes to stderr (or a test
/// capture), keeping stdout reserved for the diagram itself.
pub trait ProgressReporter {
    /// Reports a status message.
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal error or warning.
    fn report_error(&self, message: &str);

    /// Reports completion of an operation.
    fn report_completion(&self, message: &str);
}
