use crate::shared::error::ApkvizError;
use crate::shared::Result;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;
use tar::Archive;

/// Name of the index member inside an APKINDEX.tar.gz archive.
const INDEX_MEMBER: &str = "APKINDEX";

/// Extracts the APKINDEX member from a gzip-compressed tar archive.
///
/// APKINDEX.tar.gz archives carry a signature member alongside the index
/// itself; only the `APKINDEX` member is read, everything else is
/// skipped. Non-UTF-8 bytes in the member are replaced rather than
/// rejected.
///
/// # Errors
/// Returns an error if the archive cannot be decompressed or does not
/// contain an `APKINDEX` member.
pub fn extract_index(bytes: &[u8]) -> Result<String> {
    let decoder = GzDecoder::new(bytes);
    let mut archive = Archive::new(decoder);

    let entries = archive.entries().map_err(|e| ApkvizError::ArchiveExtract {
        details: format!("not a readable tar archive: {}", e),
    })?;

    for entry in entries {
        let mut entry = entry.map_err(|e| ApkvizError::ArchiveExtract {
            details: format!("corrupt archive entry: {}", e),
        })?;

        let is_index = {
            let path = entry.path().map_err(|e| ApkvizError::ArchiveExtract {
                details: format!("unreadable entry path: {}", e),
            })?;
            path.as_ref() == Path::new(INDEX_MEMBER)
        };

        if is_index {
            let mut raw = Vec::new();
            entry
                .read_to_end(&mut raw)
                .map_err(|e| ApkvizError::ArchiveExtract {
                    details: format!("failed to read {} member: {}", INDEX_MEMBER, e),
                })?;
            return Ok(String::from_utf8_lossy(&raw).into_owned());
        }
    }

    Err(ApkvizError::ArchiveExtract {
        details: format!("archive does not contain an {} member", INDEX_MEMBER),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn gzipped_tar(members: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, content) in members {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_extract_index_member() {
        let raw = "P:curl\nD:libcurl\n\n";
        let bytes = gzipped_tar(&[(".SIGN.RSA.key.pub", "sig"), ("APKINDEX", raw)]);

        let extracted = extract_index(&bytes).unwrap();
        assert_eq!(extracted, raw);
    }

    #[test]
    fn test_extract_missing_member_is_error() {
        let bytes = gzipped_tar(&[("DESCRIPTION", "alpine main")]);

        let result = extract_index(&bytes);
        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("does not contain an APKINDEX member"));
    }

    #[test]
    fn test_extract_garbage_bytes_is_error() {
        let result = extract_index(b"this is neither gzip nor tar");
        assert!(result.is_err());
    }
}
