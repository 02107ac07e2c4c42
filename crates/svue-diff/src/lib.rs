//! Snapshot reconciliation engine.
//!
//! Given two parsed gradebook snapshots for the same student, [`reconcile`]
//! reports how the course schedule changed (drops, additions, period
//! switches) and, for courses present in both snapshots, how the current
//! term's assignments and grade changed. The engine is a pure function of its
//! two inputs: it never mutates either snapshot and every result references
//! into them.
//!
//! Matching keys, in priority order: class period together with the stable
//! course ID, then the stable course ID alone (a period switch), and for
//! assignments the portal's `GradebookID`. Assignment order across two
//! fetches is not stable, so position never influences pairing.

pub mod changeset;
pub mod engine;
pub mod error;

pub use changeset::{
    Changeset, CourseAssignmentChange, CourseChange, CourseGradeChange, CourseSwitch,
};
pub use engine::reconcile;
pub use error::DiffError;
