//! Human-readable rendering of a changeset and of a single snapshot.

use std::fmt::Write;

use svue_diff::{Changeset, CourseAssignmentChange, CourseChange};
use svue_model::{AssignmentPoints, AssignmentScore, Gradebook};

/// Renders the changeset as a plain-text digest suitable for a terminal or a
/// notification body. Returns a single "no changes" line when the two
/// snapshots are identical.
pub fn render_text(changeset: &Changeset<'_>) -> String {
    if changeset.is_empty() {
        return "No changes between snapshots.\n".to_string();
    }

    let mut out = String::new();

    for switch in &changeset.course_switches {
        let _ = writeln!(
            out,
            "> {} ({}) moved: period {} -> {}",
            switch.before.id.name, switch.before.id.id, switch.before_period, switch.after_period
        );
    }
    for course in &changeset.course_drops {
        let _ = writeln!(
            out,
            "- dropped: {} ({}), period {}",
            course.id.name, course.id.id, course.period
        );
    }
    for course in &changeset.course_additions {
        let _ = writeln!(
            out,
            "+ added: {} ({}), period {}",
            course.id.name, course.id.id, course.period
        );
    }
    for change in &changeset.course_changes {
        render_course_change(&mut out, change);
    }

    out
}

fn render_course_change(out: &mut String, change: &CourseChange<'_>) {
    let course = change.course;
    match &change.grade_change {
        Some(grade) => {
            let _ = writeln!(
                out,
                "~ {} ({}): {}% {} -> {}% {} ({}{}%)",
                course.id.name,
                course.id.id,
                fmt_num(grade.previous_grade_pct),
                grade.previous_letter_grade,
                fmt_num(grade.new_grade_pct),
                grade.new_letter_grade,
                if grade.grade_increased { "+" } else { "" },
                fmt_num(grade.delta_pct),
            );
        }
        None => {
            let _ = writeln!(out, "~ {} ({}):", course.id.name, course.id.id);
        }
    }

    for pair in &change.assignment_changes {
        render_assignment_change(out, pair);
    }
    for assignment in &change.assignment_additions {
        let _ = writeln!(
            out,
            "    + {}: {}",
            assignment.name,
            fmt_score(&assignment.score)
        );
    }
    for assignment in &change.assignment_removals {
        let _ = writeln!(out, "    - {} (removed)", assignment.name);
    }
}

fn render_assignment_change(out: &mut String, pair: &CourseAssignmentChange<'_>) {
    let mut parts: Vec<String> = Vec::new();
    if pair.name_changed {
        parts.push(format!("renamed from `{}`", pair.before.name));
    }
    if pair.score_changed || pair.possible_score_changed {
        parts.push(format!(
            "score {} -> {}",
            fmt_score(&pair.previous_score),
            fmt_score(&pair.new_score)
        ));
    }
    if pair.points_changed || pair.possible_points_changed {
        parts.push(format!(
            "points {} -> {}",
            fmt_points(&pair.previous_points),
            fmt_points(&pair.new_points)
        ));
    }
    let _ = writeln!(out, "    * {}: {}", pair.after.name, parts.join(", "));
}

/// Renders a one-snapshot overview: the current grading period and each
/// course's current-term standing.
pub fn render_snapshot(gradebook: &Gradebook) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "current grading period: {}",
        gradebook.current_grading_period.name
    );
    for course in &gradebook.courses {
        match gradebook.current_mark_of(course) {
            Some(mark) => {
                let _ = writeln!(
                    out,
                    "P{} {} ({}) — {} {}%  [{}]",
                    course.period,
                    course.id.name,
                    course.id.id,
                    mark.letter_grade,
                    fmt_num(mark.raw_grade_score),
                    course.teacher,
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "P{} {} ({}) — no mark for the current term",
                    course.period, course.id.name, course.id.id,
                );
            }
        }
    }
    out
}

fn fmt_score(score: &AssignmentScore) -> String {
    if !score.graded {
        return "not graded".to_string();
    }
    format!("{}/{}", fmt_num(score.score), fmt_num(score.possible_score))
}

fn fmt_points(points: &AssignmentPoints) -> String {
    format!(
        "{}/{}",
        fmt_num(points.points),
        fmt_num(points.possible_points)
    )
}

/// Formats a float without trailing zeros (`94.20` -> `94.2`, `10.0` -> `10`).
fn fmt_num(v: f64) -> String {
    let s = format!("{v}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
