//! Snapshot value tree: grading periods, courses, marks, assignments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of report-period rows that collapse into one term mark.
///
/// The source institution reports two periods per quarter (a progress row and
/// a final row), so a gradebook with eight report periods carries four marks
/// per course. This is a fixed property of that institution's report-period
/// layout, not something inferred from the data.
pub const REPORT_PERIODS_PER_TERM: usize = 2;

/// Maps a report-period index onto the index of the corresponding term mark
/// in [`Course::marks`].
pub fn term_index(report_index: usize) -> usize {
    report_index / REPORT_PERIODS_PER_TERM
}

/// Root of one gradebook snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradebook {
    /// All grading periods of the school year, ordered by index.
    pub grading_periods: Vec<GradingPeriod>,
    /// The grading period that was current when the snapshot was captured.
    pub current_grading_period: GradingPeriod,
    /// The student's courses, ordered by class period.
    pub courses: Vec<Course>,
}

impl Gradebook {
    /// Position of the current grading period within [`Self::grading_periods`],
    /// matched by name.
    ///
    /// When the current period's name is not found among the listed periods
    /// the index defaults to 0. That fallback is defined behavior (the portal
    /// occasionally labels the current period inconsistently), not an error.
    pub fn current_period_index(&self) -> usize {
        self.grading_periods
            .iter()
            .find(|p| p.name == self.current_grading_period.name)
            .map_or(0, |p| p.index)
    }

    /// Index of the current term mark in each course's mark list.
    pub fn current_term_index(&self) -> usize {
        term_index(self.current_period_index())
    }

    /// The mark of `course` for the currently active grading period, if the
    /// course carries a mark for that term.
    pub fn current_mark_of<'c>(&self, course: &'c Course) -> Option<&'c CourseMark> {
        course.marks.get(self.current_term_index())
    }

    /// Semester of the current grading period, when its label carries a
    /// quarter marker.
    pub fn current_semester(&self) -> Option<Semester> {
        self.current_grading_period.semester()
    }
}

/// One school-wide grading period, usually half of a quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingPeriod {
    /// Zero-based position in the school's report-period list.
    pub index: usize,
    /// Free-text label, e.g. `"1st Qtr Progress (Q1)"`.
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl GradingPeriod {
    /// Derives the semester from the quarter marker in the period label.
    ///
    /// `Q1`/`Q2` fall in the first semester, `Q3`/`Q4` in the second. The
    /// match is substring-based and case-insensitive; labels with no marker
    /// yield `None`.
    pub fn semester(&self) -> Option<Semester> {
        let label = self.name.to_uppercase();
        if label.contains("Q1") || label.contains("Q2") {
            Some(Semester::First)
        } else if label.contains("Q3") || label.contains("Q4") {
            Some(Semester::Second)
        } else {
            None
        }
    }
}

/// Half of the school year, derived from grading-period labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "semester 1",
            Semester::Second => "semester 2",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the student's classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Class period in the student's daily schedule. Primary matching key
    /// across snapshots.
    pub period: u32,
    /// School-assigned identity parsed from the combined title string.
    /// Secondary matching key across snapshots.
    pub id: CourseId,
    pub room: String,
    pub teacher: String,
    pub teacher_email: String,
    /// One mark per term, in the same order as the school's terms.
    pub marks: Vec<CourseMark>,
}

/// Identity of a course: the stable school-assigned ID plus the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseId {
    pub id: String,
    pub name: String,
}

/// A student's grades and assignments in one course for one grading period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMark {
    /// Grading-period label.
    pub name: String,
    pub letter_grade: String,
    /// Raw percentage grade, 0-100.
    pub raw_grade_score: f64,
    /// Per-category weighted summaries.
    pub grade_summaries: Vec<AssignmentGradeCalc>,
    pub assignments: Vec<Assignment>,
}

/// Grade summary for one weighted category (Tests, Homework, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentGradeCalc {
    pub category: String,
    /// Category weight in percent.
    pub weight: f64,
    pub points: f64,
    pub points_possible: f64,
    /// Impact of this category on the overall grade, in percent.
    pub weighted_percentage: f64,
    pub letter_grade: String,
}

/// One gradebook entry made by an instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Portal-internal ID. Expected, not guaranteed, to persist across
    /// snapshots; tertiary matching key.
    pub gradebook_id: String,
    pub name: String,
    /// Weighted category the assignment belongs to.
    pub category: String,
    /// Date the entry was created.
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    /// Raw earned/possible score.
    pub score: AssignmentScore,
    /// Kind of score in [`Self::score`], e.g. `"Raw Score"`.
    pub score_type: String,
    /// Score scaled to the points the entry actually counts for.
    pub points: AssignmentPoints,
    pub notes: String,
}

/// Raw score of an assignment. `graded: false` means the instructor has not
/// entered a grade yet; both numbers are zero in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssignmentScore {
    pub graded: bool,
    pub score: f64,
    pub possible_score: f64,
}

impl AssignmentScore {
    pub fn not_graded() -> Self {
        Self {
            graded: false,
            score: 0.0,
            possible_score: 0.0,
        }
    }
}

/// Points an assignment counts for toward the grade, possibly scaled up or
/// down from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPoints {
    pub points: f64,
    pub possible_points: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(index: usize, name: &str) -> GradingPeriod {
        GradingPeriod {
            index,
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 10, 4).unwrap(),
        }
    }

    fn mark(name: &str) -> CourseMark {
        CourseMark {
            name: name.to_string(),
            letter_grade: "A".to_string(),
            raw_grade_score: 94.0,
            grade_summaries: Vec::new(),
            assignments: Vec::new(),
        }
    }

    fn gradebook_with_current(current: &str) -> Gradebook {
        Gradebook {
            grading_periods: vec![
                period(0, "1st Qtr Progress (Q1)"),
                period(1, "1st Quarter (Q1)"),
                period(2, "2nd Qtr Progress (Q2)"),
                period(3, "2nd Quarter (Q2)"),
            ],
            current_grading_period: period(0, current),
            courses: vec![Course {
                period: 1,
                id: CourseId {
                    id: "ALG2-01".to_string(),
                    name: "Algebra II".to_string(),
                },
                room: "204".to_string(),
                teacher: "R. Feynman".to_string(),
                teacher_email: "rf@school.test".to_string(),
                marks: vec![mark("1st Quarter (Q1)"), mark("2nd Quarter (Q2)")],
            }],
        }
    }

    #[test]
    fn current_period_matched_by_name() {
        let gb = gradebook_with_current("2nd Qtr Progress (Q2)");
        assert_eq!(gb.current_period_index(), 2);
        assert_eq!(gb.current_term_index(), 1);
        let mark = gb.current_mark_of(&gb.courses[0]).expect("current mark");
        assert_eq!(mark.name, "2nd Quarter (Q2)");
    }

    #[test]
    fn current_period_falls_back_to_zero_when_unmatched() {
        // Defined fallback: an unknown current-period label selects index 0.
        let gb = gradebook_with_current("Summer Session");
        assert_eq!(gb.current_period_index(), 0);
        assert_eq!(gb.current_term_index(), 0);
    }

    #[test]
    fn term_index_halves_report_periods() {
        assert_eq!(term_index(0), 0);
        assert_eq!(term_index(1), 0);
        assert_eq!(term_index(6), 3);
        assert_eq!(term_index(7), 3);
    }

    #[test]
    fn semester_from_label_marker() {
        assert_eq!(period(0, "1st Qtr Progress (Q1)").semester(), Some(Semester::First));
        assert_eq!(period(0, "4th quarter (q4)").semester(), Some(Semester::Second));
        assert_eq!(period(0, "Summer Session").semester(), None);
    }

    #[test]
    fn current_mark_missing_for_short_mark_list() {
        let mut gb = gradebook_with_current("2nd Qtr Progress (Q2)");
        gb.courses[0].marks.truncate(1);
        assert!(gb.current_mark_of(&gb.courses[0]).is_none());
    }
}
