//! APKINDEX text-record parsing.
//!
//! An APKINDEX file is a sequence of blank-line-delimited records. Each
//! line is `<key>:<value>`; only `P:` (package name) and `D:` (space
//! separated dependency tokens) matter here. A dependency token may carry
//! a version-constraint suffix (`zlib>=1.2.13`) which is stripped, since
//! the traversal works on bare names only.

use crate::index::domain::{IndexTable, PackageRecord};

/// Parses raw APKINDEX text into an index table.
///
/// A record without a `P:` line is dropped silently. Records sharing a
/// name within one source overwrite in file order, matching the
/// cross-source merge rule.
pub fn parse_records(raw: &str) -> IndexTable {
    let mut table = IndexTable::new();
    let mut name: Option<String> = None;
    let mut depends: Vec<String> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if let Some(pkg) = name.take() {
                table.insert(PackageRecord::new(pkg, depends));
            }
            depends = Vec::new();
            continue;
        }
        if let Some(value) = line.strip_prefix("P:") {
            name = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("D:") {
            depends = value.split_whitespace().map(strip_constraint).collect();
        }
    }

    // Final record when the source does not end with a blank line.
    if let Some(pkg) = name {
        table.insert(PackageRecord::new(pkg, depends));
    }

    table
}

/// Drops a version-comparison suffix from a dependency token:
/// `zlib>=1.2.13` and `musl=1.2.4-r0` both reduce to the bare name.
fn strip_constraint(token: &str) -> String {
    token
        .split(['=', '<', '>'])
        .next()
        .unwrap_or(token)
        .to_string()
}
