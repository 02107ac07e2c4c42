//! Output types of a reconciliation: the structured diff between two
//! snapshots. Everything is serializable and borrows the input snapshots;
//! nothing here is mutated after [`crate::reconcile`] returns.

use serde::Serialize;
use svue_model::{Assignment, AssignmentPoints, AssignmentScore, Course, Gradebook};

/// The structured diff between two gradebook snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct Changeset<'a> {
    #[serde(skip)]
    older: &'a Gradebook,
    #[serde(skip)]
    newer: &'a Gradebook,
    /// Courses that moved to a different class period but kept their stable ID.
    pub course_switches: Vec<CourseSwitch<'a>>,
    /// Courses present only in the newer snapshot.
    pub course_additions: Vec<&'a Course>,
    /// Courses present only in the older snapshot.
    pub course_drops: Vec<&'a Course>,
    /// Per matched course, what changed in the current term.
    pub course_changes: Vec<CourseChange<'a>>,
}

impl<'a> Changeset<'a> {
    pub(crate) fn new(older: &'a Gradebook, newer: &'a Gradebook) -> Self {
        Self {
            older,
            newer,
            course_switches: Vec::new(),
            course_additions: Vec::new(),
            course_drops: Vec::new(),
            course_changes: Vec::new(),
        }
    }

    /// The older ("before") input snapshot.
    pub fn older(&self) -> &'a Gradebook {
        self.older
    }

    /// The newer ("after") input snapshot.
    pub fn newer(&self) -> &'a Gradebook {
        self.newer
    }

    /// True when nothing changed between the two snapshots.
    pub fn is_empty(&self) -> bool {
        self.course_switches.is_empty()
            && self.course_additions.is_empty()
            && self.course_drops.is_empty()
            && self.course_changes.is_empty()
    }
}

/// A course that kept its stable ID but changed class period.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSwitch<'a> {
    pub before: &'a Course,
    pub after: &'a Course,
    pub before_period: u32,
    pub after_period: u32,
}

/// Changes within one course matched across both snapshots.
///
/// Emitted only when the grade changed or at least one assignment changed,
/// appeared, or disappeared; untouched courses produce no record.
#[derive(Debug, Clone, Serialize)]
pub struct CourseChange<'a> {
    /// The course as it appeared in the older snapshot.
    pub course: &'a Course,
    pub grade_change: Option<CourseGradeChange>,
    pub assignment_changes: Vec<CourseAssignmentChange<'a>>,
    pub assignment_additions: Vec<&'a Assignment>,
    pub assignment_removals: Vec<&'a Assignment>,
}

impl CourseChange<'_> {
    /// True when the record carries no detected change.
    pub fn is_empty(&self) -> bool {
        self.grade_change.is_none()
            && self.assignment_changes.is_empty()
            && self.assignment_additions.is_empty()
            && self.assignment_removals.is_empty()
    }
}

/// A non-zero movement of a course's raw percentage grade.
#[derive(Debug, Clone, Serialize)]
pub struct CourseGradeChange {
    /// `new - previous`; never zero.
    pub delta_pct: f64,
    pub grade_increased: bool,
    pub previous_grade_pct: f64,
    pub new_grade_pct: f64,
    pub previous_letter_grade: String,
    pub new_letter_grade: String,
}

/// A matched assignment whose name, score, or points differ between the
/// snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct CourseAssignmentChange<'a> {
    pub before: &'a Assignment,
    pub after: &'a Assignment,
    pub name_changed: bool,
    pub score_changed: bool,
    pub possible_score_changed: bool,
    pub points_changed: bool,
    pub possible_points_changed: bool,
    pub score_increased: bool,
    pub points_increased: bool,
    pub previous_score: AssignmentScore,
    pub new_score: AssignmentScore,
    pub previous_points: AssignmentPoints,
    pub new_points: AssignmentPoints,
}
