use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for diagram generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ApkvizError {
    #[error("Failed to download package index: {url}\nDetails: {details}\n\n💡 Hint: Check your network connection and that the mirror URL is reachable")]
    IndexFetch { url: String, details: String },

    #[error("Failed to extract APKINDEX from archive: {details}\n\n💡 Hint: The index archive may be corrupt; try a different mirror or branch")]
    ArchiveExtract { details: String },

    #[error("Package '{name}' not found in the package index.\n\n💡 Hint: Check the spelling, or add the repository that provides it to apkviz.config.yml")]
    PackageNotFound { name: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_index_fetch_display() {
        let error = ApkvizError::IndexFetch {
            url: "https://example.org/APKINDEX.tar.gz".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to download package index"));
        assert!(display.contains("https://example.org/APKINDEX.tar.gz"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_archive_extract_display() {
        let error = ApkvizError::ArchiveExtract {
            details: "archive does not contain an APKINDEX member".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to extract APKINDEX"));
        assert!(display.contains("does not contain an APKINDEX member"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_package_not_found_display() {
        let error = ApkvizError::PackageNotFound {
            name: "no-such-pkg".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package 'no-such-pkg' not found in the package index"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_display() {
        let error = ApkvizError::FileWrite {
            path: PathBuf::from("/test/output.mmd"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.mmd"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }
}
