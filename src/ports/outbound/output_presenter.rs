use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the workflow output is presented.
pub trait OutputPresenter {
    /// Presents the content to the output destination, byte-for-byte
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &[u8]) -> Result<()>;
}
