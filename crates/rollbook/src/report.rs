//! Fixed-width text tables for records and percentages.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::record::AttendanceRecord;

const LAST_NAME_WIDTH: usize = 15;
const FIRST_NAME_WIDTH: usize = 15;
const DATE_WIDTH: usize = 12;
const SUBJECT_WIDTH: usize = 20;
const STUDENT_WIDTH: usize = 30;

/// Write one record as a table row.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_record(out: &mut impl Write, record: &AttendanceRecord) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<LAST_NAME_WIDTH$}{:<FIRST_NAME_WIDTH$}{:<DATE_WIDTH$}{:<SUBJECT_WIDTH$}{}",
        record.last_name,
        record.first_name,
        record.date,
        record.subject,
        record.status()
    )
}

/// Write the records table: a count line, a header, a rule and one row per record.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_records(out: &mut impl Write, records: &[AttendanceRecord]) -> std::io::Result<()> {
    writeln!(out, "\nFound {} records:", records.len())?;
    writeln!(
        out,
        "{:<LAST_NAME_WIDTH$}{:<FIRST_NAME_WIDTH$}{:<DATE_WIDTH$}{:<SUBJECT_WIDTH$}Status",
        "Last Name", "First Name", "Date", "Subject"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for record in records {
        write_record(out, record)?;
    }
    Ok(())
}

/// Write the attendance percentage table, one row per student key.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_percentages(
    out: &mut impl Write,
    percentages: &BTreeMap<String, f64>,
    precision: usize,
) -> std::io::Result<()> {
    writeln!(out, "\nStudent Attendance Percentage:")?;
    writeln!(out, "{:<STUDENT_WIDTH$}Attendance (%)", "Student")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for (student, percent) in percentages {
        writeln!(out, "{student:<STUDENT_WIDTH$}{percent:.precision$}")?;
    }
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized or `out` cannot be
/// written.
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
