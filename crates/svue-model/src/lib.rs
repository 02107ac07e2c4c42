//! Typed model of one StudentVUE gradebook snapshot.
//!
//! A snapshot is an immutable value tree: school-wide grading periods, the
//! period that was current at capture time, and the student's courses with
//! their per-term marks and assignments. The [`scalars`] module holds the
//! format-specific decoders for the portal's attribute strings (percentages,
//! dates, `x out of y` scores, `x/y` points, `Name (ID)` course titles).

pub mod error;
pub mod gradebook;
pub mod scalars;

pub use error::ScalarError;
pub use gradebook::{
    Assignment, AssignmentGradeCalc, AssignmentPoints, AssignmentScore, Course, CourseId,
    CourseMark, Gradebook, GradingPeriod, Semester, term_index,
};
pub use scalars::{parse_course_title, parse_date, parse_percentage, parse_points, parse_score};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_serializes() {
        let assignment = Assignment {
            gradebook_id: "12345".to_string(),
            name: "Chapter 3 Quiz".to_string(),
            category: "Tests".to_string(),
            date: parse_date("10/2/2024").expect("date"),
            due_date: parse_date("10/4/2024").expect("due date"),
            score: parse_score("9 out of 10").expect("score"),
            score_type: "Raw Score".to_string(),
            points: parse_points("9/10").expect("points"),
            notes: String::new(),
        };
        let json = serde_json::to_string(&assignment).expect("serialize assignment");
        let round: Assignment = serde_json::from_str(&json).expect("deserialize assignment");
        assert_eq!(round, assignment);
    }
}
