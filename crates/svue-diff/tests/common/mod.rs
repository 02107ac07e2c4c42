//! Shared snapshot builders for the reconciliation tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use svue_model::{
    Assignment, AssignmentPoints, AssignmentScore, Course, CourseId, CourseMark, Gradebook,
    GradingPeriod,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// The eight report periods of the reference institution: a progress row and
/// a final row per quarter.
pub fn school_periods() -> Vec<GradingPeriod> {
    let labels = [
        "1st Qtr Progress (Q1)",
        "1st Quarter (Q1)",
        "2nd Qtr Progress (Q2)",
        "2nd Quarter (Q2)",
        "3rd Qtr Progress (Q3)",
        "3rd Quarter (Q3)",
        "4th Qtr Progress (Q4)",
        "4th Quarter (Q4)",
    ];
    labels
        .iter()
        .enumerate()
        .map(|(index, name)| GradingPeriod {
            index,
            name: (*name).to_string(),
            start_date: date(2024, 9, 3),
            end_date: date(2025, 6, 12),
        })
        .collect()
}

/// Snapshot with the given current-period label. `"1st Quarter (Q1)"` maps to
/// report index 1 and therefore term 0, so single-mark courses work.
pub fn gradebook(current_label: &str, courses: Vec<Course>) -> Gradebook {
    let grading_periods = school_periods();
    let current_grading_period = grading_periods
        .iter()
        .find(|p| p.name == current_label)
        .cloned()
        .unwrap_or_else(|| GradingPeriod {
            index: 0,
            name: current_label.to_string(),
            start_date: date(2024, 9, 3),
            end_date: date(2025, 6, 12),
        });
    Gradebook {
        grading_periods,
        current_grading_period,
        courses,
    }
}

pub fn course(period: u32, id: &str, name: &str, marks: Vec<CourseMark>) -> Course {
    Course {
        period,
        id: CourseId {
            id: id.to_string(),
            name: name.to_string(),
        },
        room: "101".to_string(),
        teacher: "A. Teacher".to_string(),
        teacher_email: "teacher@school.test".to_string(),
        marks,
    }
}

pub fn mark(raw_grade: f64, letter: &str, assignments: Vec<Assignment>) -> CourseMark {
    CourseMark {
        name: "1st Quarter (Q1)".to_string(),
        letter_grade: letter.to_string(),
        raw_grade_score: raw_grade,
        grade_summaries: Vec::new(),
        assignments,
    }
}

pub fn assignment(id: &str, name: &str, score: (f64, f64), points: (f64, f64)) -> Assignment {
    Assignment {
        gradebook_id: id.to_string(),
        name: name.to_string(),
        category: "Homework".to_string(),
        date: date(2024, 10, 1),
        due_date: date(2024, 10, 3),
        score: AssignmentScore {
            graded: true,
            score: score.0,
            possible_score: score.1,
        },
        score_type: "Raw Score".to_string(),
        points: AssignmentPoints {
            points: points.0,
            possible_points: points.1,
        },
        notes: String::new(),
    }
}
