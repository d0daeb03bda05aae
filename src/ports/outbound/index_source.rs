use crate::shared::Result;

/// IndexSource port for loading one package index source.
///
/// Implementations retrieve a compressed index archive (typically over
/// HTTP) and hand back the raw APKINDEX text it contains. One call
/// corresponds to one index source; the caller decides how a failure
/// affects the overall merge.
pub trait IndexSource {
    /// Loads the raw APKINDEX text from `url`.
    ///
    /// # Errors
    /// Returns an error if the archive cannot be retrieved, decompressed,
    /// or does not contain an APKINDEX member.
    fn load(&self, url: &str) -> Result<String>;
}
