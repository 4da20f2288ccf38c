//! Line format of the data file.
//!
//! One record per line, five fields joined by commas:
//!
//! ```text
//! last_name,first_name,date,subject,flag
//! ```
//!
//! `flag` is `1` for present and `0` for absent. There is no header and no
//! quoting, so field values must not contain commas or line breaks.

use crate::record::AttendanceRecord;

/// Field separator.
pub const DELIMITER: char = ',';

/// Number of fields on a well-formed line.
pub const FIELD_COUNT: usize = 5;

/// Flag written for an attended class.
pub const PRESENT_FLAG: &str = "1";

/// Flag written for a missed class.
pub const ABSENT_FLAG: &str = "0";

/// Problems found while decoding a line. The record is still produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineIssue {
    /// The line had fewer than five fields; the missing ones are empty.
    MissingFields {
        /// Number of fields actually present.
        found: usize,
    },
    /// The last field was neither `1` nor `0`; read as absent.
    UnknownFlag,
}

/// Encode a record as a line, without the terminator.
#[must_use]
pub fn encode(record: &AttendanceRecord) -> String {
    let flag = if record.attended {
        PRESENT_FLAG
    } else {
        ABSENT_FLAG
    };
    [
        record.last_name.as_str(),
        record.first_name.as_str(),
        record.date.as_str(),
        record.subject.as_str(),
        flag,
    ]
    .join(",")
}

/// Decode a line (without its terminator) into a record.
///
/// Fields are taken left to right. The fifth field is the remainder of the
/// line, so any extra commas end up in it. Missing trailing fields become
/// empty strings, and anything other than exactly `1` in the last field
/// means absent.
#[must_use]
pub fn decode(line: &str) -> (AttendanceRecord, Option<LineIssue>) {
    let mut fields = line.splitn(FIELD_COUNT, DELIMITER);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let last_name = next();
    let first_name = next();
    let date = next();
    let subject = next();
    let flag = next();

    let found = line.splitn(FIELD_COUNT, DELIMITER).count();
    let issue = if found < FIELD_COUNT {
        Some(LineIssue::MissingFields { found })
    } else if flag != PRESENT_FLAG && flag != ABSENT_FLAG {
        Some(LineIssue::UnknownFlag)
    } else {
        None
    };

    let record = AttendanceRecord {
        last_name,
        first_name,
        date,
        subject,
        attended: flag == PRESENT_FLAG,
    };
    (record, issue)
}
