use svue_model::Semester;
use thiserror::Error;

/// Errors that abort a reconciliation before any diffing happens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffError {
    /// The two snapshots' current grading periods fall in different halves of
    /// the school year. Assignment lists and grading-period indices of two
    /// different semesters are not comparable, so the engine refuses to diff
    /// rather than produce a nonsensical result.
    #[error(
        "current grading periods span different semesters: \
         `{older_label}` is in {older} and `{newer_label}` is in {newer}"
    )]
    SemesterMismatch {
        older_label: String,
        newer_label: String,
        older: Semester,
        newer: Semester,
    },
}

pub type Result<T> = std::result::Result<T, DiffError>;
