//! The reconciliation passes: semester guard, course-set diff, per-course
//! assignment diff, grade-delta detection.

use std::collections::{BTreeMap, HashMap, HashSet};

use svue_model::{Assignment, Course, CourseMark, Gradebook};
use tracing::debug;

use crate::changeset::{
    Changeset, CourseAssignmentChange, CourseChange, CourseGradeChange, CourseSwitch,
};
use crate::error::{DiffError, Result};

/// Computes the changeset between two snapshots of the same student's
/// gradebook, `older` being the earlier capture.
///
/// Fails fast with [`DiffError::SemesterMismatch`] when the snapshots'
/// current grading periods fall in different halves of the school year;
/// no course diffing happens in that case.
pub fn reconcile<'a>(older: &'a Gradebook, newer: &'a Gradebook) -> Result<Changeset<'a>> {
    check_semesters(older, newer)?;

    let mut changeset = Changeset::new(older, newer);
    let pairs = diff_course_sets(older, newer, &mut changeset);
    debug!(
        paired = pairs.len(),
        switches = changeset.course_switches.len(),
        additions = changeset.course_additions.len(),
        drops = changeset.course_drops.len(),
        "course sets reconciled"
    );

    for (course_a, course_b) in pairs {
        diff_course(older, newer, course_a, course_b, &mut changeset);
    }
    debug!(changed = changeset.course_changes.len(), "course marks reconciled");

    Ok(changeset)
}

/// Refuses to compare snapshots taken in different semesters. Labels without
/// a quarter marker leave the semester undetermined and never trigger the
/// guard.
fn check_semesters(older: &Gradebook, newer: &Gradebook) -> Result<()> {
    if let (Some(older_sem), Some(newer_sem)) = (older.current_semester(), newer.current_semester())
        && older_sem != newer_sem
    {
        return Err(DiffError::SemesterMismatch {
            older_label: older.current_grading_period.name.clone(),
            newer_label: newer.current_grading_period.name.clone(),
            older: older_sem,
            newer: newer_sem,
        });
    }
    Ok(())
}

/// Reconciles the two course sets and returns the matched pairs.
///
/// Matching is by class period plus stable ID first, then by stable ID at any
/// period (a switch). Courses matched neither way are drops (older side) or
/// additions (newer side). The newer-side pool is an owned map that entries
/// are removed from as they are consumed, so a course can only ever be
/// claimed once.
fn diff_course_sets<'a>(
    older: &'a Gradebook,
    newer: &'a Gradebook,
    changeset: &mut Changeset<'a>,
) -> Vec<(&'a Course, &'a Course)> {
    // BTreeMap keyed by period keeps every pass deterministic.
    let map_a: BTreeMap<u32, &Course> = older.courses.iter().map(|c| (c.period, c)).collect();
    let mut pool_b: BTreeMap<u32, &Course> = newer.courses.iter().map(|c| (c.period, c)).collect();

    let mut pairs: Vec<(&Course, &Course)> = Vec::new();

    for (&period, &course_a) in &map_a {
        // Same period and same stable ID: unchanged placement. This takes
        // priority over ID-only matching, so a course that kept both keys is
        // never miscategorized as a switch.
        let positional = pool_b
            .get(&period)
            .filter(|c| c.id.id == course_a.id.id)
            .copied();
        if let Some(course_b) = positional {
            pool_b.remove(&period);
            pairs.push((course_a, course_b));
            continue;
        }

        // Same stable ID somewhere else in the schedule: a period switch.
        let by_id = pool_b
            .iter()
            .find(|(_, c)| c.id.id == course_a.id.id)
            .map(|(&after_period, &c)| (after_period, c));
        match by_id {
            Some((after_period, course_b)) => {
                pool_b.remove(&after_period);
                changeset.course_switches.push(CourseSwitch {
                    before: course_a,
                    after: course_b,
                    before_period: period,
                    after_period,
                });
                pairs.push((course_a, course_b));
            }
            None => changeset.course_drops.push(course_a),
        }
    }

    // Whatever is left in the pool has no older-side counterpart by stable
    // ID, unless that ID was already consumed by a pairing above (duplicate
    // IDs in the newer schedule); consumed IDs are skipped, the rest are
    // additions.
    for course_b in pool_b.into_values() {
        let id_known = older.courses.iter().any(|c| c.id.id == course_b.id.id);
        if !id_known {
            changeset.course_additions.push(course_b);
        }
    }

    pairs
}

/// Diffs one matched course pair: current-term assignments, then the grade.
///
/// When either side carries no mark for the current term (mark list shorter
/// than the term index implies) there is nothing to compare and the pair is
/// skipped.
fn diff_course<'a>(
    older: &Gradebook,
    newer: &Gradebook,
    course_a: &'a Course,
    course_b: &'a Course,
    changeset: &mut Changeset<'a>,
) {
    let (Some(mark_a), Some(mark_b)) = (
        older.current_mark_of(course_a),
        newer.current_mark_of(course_b),
    ) else {
        debug!(course = %course_a.id.id, "no current mark on one side; skipping");
        return;
    };

    let mut change = CourseChange {
        course: course_a,
        grade_change: grade_change(mark_a, mark_b),
        assignment_changes: Vec::new(),
        assignment_additions: Vec::new(),
        assignment_removals: Vec::new(),
    };
    diff_assignment_lists(mark_a, mark_b, &mut change);

    if !change.is_empty() {
        changeset.course_changes.push(change);
    }
}

/// Reconciles two assignment lists by `gradebook_id`.
///
/// Assignment order across two fetches is not stable even when content is
/// identical, so pairing is keyed purely on the portal's ID: the older list
/// drives change/removal emission in its own order, and the newer list drives
/// additions in its own order. A reordered but otherwise identical list
/// therefore produces no additions or removals.
fn diff_assignment_lists<'a>(
    mark_a: &'a CourseMark,
    mark_b: &'a CourseMark,
    change: &mut CourseChange<'a>,
) {
    let by_id_b: HashMap<&str, &Assignment> = mark_b
        .assignments
        .iter()
        .map(|a| (a.gradebook_id.as_str(), a))
        .collect();
    let ids_a: HashSet<&str> = mark_a
        .assignments
        .iter()
        .map(|a| a.gradebook_id.as_str())
        .collect();

    for assignment_a in &mark_a.assignments {
        match by_id_b.get(assignment_a.gradebook_id.as_str()) {
            Some(&assignment_b) => {
                if let Some(pair_change) = diff_assignment_pair(assignment_a, assignment_b) {
                    change.assignment_changes.push(pair_change);
                }
            }
            None => change.assignment_removals.push(assignment_a),
        }
    }

    for assignment_b in &mark_b.assignments {
        if !ids_a.contains(assignment_b.gradebook_id.as_str()) {
            change.assignment_additions.push(assignment_b);
        }
    }
}

/// Pairwise diff of one matched assignment.
///
/// Comparison is exact f64 equality: the values come from fixed-precision
/// portal strings, never from computed floats, so an epsilon would only mask
/// real edits. Name-only edits count as a change.
fn diff_assignment_pair<'a>(
    a: &'a Assignment,
    b: &'a Assignment,
) -> Option<CourseAssignmentChange<'a>> {
    let name_changed = a.name != b.name;
    let score_changed = b.score.score - a.score.score != 0.0;
    let possible_score_changed = b.score.possible_score - a.score.possible_score != 0.0;
    let points_changed = b.points.points - a.points.points != 0.0;
    let possible_points_changed = b.points.possible_points - a.points.possible_points != 0.0;

    if !name_changed
        && !score_changed
        && !possible_score_changed
        && !points_changed
        && !possible_points_changed
    {
        return None;
    }

    Some(CourseAssignmentChange {
        before: a,
        after: b,
        name_changed,
        score_changed,
        possible_score_changed,
        points_changed,
        possible_points_changed,
        score_increased: b.score.score - a.score.score > 0.0,
        points_increased: b.points.points - a.points.points > 0.0,
        previous_score: a.score,
        new_score: b.score,
        previous_points: a.points,
        new_points: b.points,
    })
}

/// Any non-zero movement of the current mark's raw grade counts; there is no
/// threshold.
fn grade_change(mark_a: &CourseMark, mark_b: &CourseMark) -> Option<CourseGradeChange> {
    let delta = mark_b.raw_grade_score - mark_a.raw_grade_score;
    if delta == 0.0 {
        return None;
    }
    Some(CourseGradeChange {
        delta_pct: delta,
        grade_increased: delta > 0.0,
        previous_grade_pct: mark_a.raw_grade_score,
        new_grade_pct: mark_b.raw_grade_score,
        previous_letter_grade: mark_a.letter_grade.clone(),
        new_letter_grade: mark_b.letter_grade.clone(),
    })
}
