//! Campus codes and their display names.
//!
//! The table is a `static` slice, so lookups never allocate and never fail.
//! Name lookups fall back to the code itself; the type lookup falls back to
//! `"Unknown"`. The two fallbacks are intentionally different.

use serde::Serialize;

/// Display metadata for one campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CampusEntry {
    pub code: &'static str,
    pub full: &'static str,
    pub short: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Returned by `campus_type` for codes outside the table.
pub const UNKNOWN_CAMPUS_TYPE: &str = "Unknown";

static CAMPUSES: [CampusEntry; 2] = [
    CampusEntry {
        code: "TECH",
        full: "SNS College of Technology",
        short: "SNS Tech",
        kind: "Technology",
    },
    CampusEntry {
        code: "ARTS",
        full: "Dr. SNS Rajalakshmi College of Arts and Science",
        short: "SNS Arts & Science",
        kind: "Arts & Science",
    },
];

/// Entry for `code`, if it is a known campus. Codes are case-sensitive.
pub fn lookup(code: &str) -> Option<&'static CampusEntry> {
    CAMPUSES.iter().find(|entry| entry.code == code)
}

/// Full display name, or `code` unchanged when unknown.
pub fn full_name(code: &str) -> &str {
    lookup(code).map_or(code, |entry| entry.full)
}

/// Abbreviated display name, or `code` unchanged when unknown.
pub fn short_name(code: &str) -> &str {
    lookup(code).map_or(code, |entry| entry.short)
}

/// Category label, or `"Unknown"` when unknown.
pub fn campus_type(code: &str) -> &'static str {
    lookup(code).map_or(UNKNOWN_CAMPUS_TYPE, |entry| entry.kind)
}

/// Every campus, TECH first.
pub fn all_campuses() -> &'static [CampusEntry] {
    &CAMPUSES
}
