//! Decoders for the portal's scalar attribute formats.
//!
//! Each decoder takes one raw attribute string and returns a typed value or a
//! [`ScalarError`] carrying the offending input. All of them are pure and
//! whitespace-tolerant at the edges; none of them defaults a malformed value.

use chrono::NaiveDate;

use crate::error::{Result, ScalarError};
use crate::gradebook::{AssignmentPoints, AssignmentScore, CourseId};

/// Literal the portal sends for an assignment with no grade entered yet.
const NOT_GRADED: &str = "Not Graded";

/// Date format used throughout the portal's gradebook attributes.
/// `%m`/`%d` accept one- or two-digit components, so `1/2/2006` parses.
const PORTAL_DATE_FORMAT: &str = "%m/%d/%Y";

/// Decodes a percentage attribute, e.g. `"87.5%"` → `87.5`.
pub fn parse_percentage(raw: &str) -> Result<f64> {
    let err = || ScalarError::Percentage(raw.to_string());
    let body = raw.trim().strip_suffix('%').ok_or_else(err)?;
    body.trim().parse::<f64>().map_err(|_| err())
}

/// Decodes a `M/D/YYYY` date attribute, e.g. `"10/4/2024"`.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), PORTAL_DATE_FORMAT)
        .map_err(|_| ScalarError::Date(raw.to_string()))
}

/// Decodes a score attribute: `"Not Graded"` or `"<x> out of <y>"`.
///
/// The `out of` form tolerates any amount of whitespace between the tokens,
/// including none (`"9out of10"` is accepted, matching the portal's loose
/// formatting).
pub fn parse_score(raw: &str) -> Result<AssignmentScore> {
    let trimmed = raw.trim();
    if trimmed == NOT_GRADED {
        return Ok(AssignmentScore::not_graded());
    }

    let err = || ScalarError::Score(raw.to_string());
    let (score, rest) = split_number(trimmed).ok_or_else(err)?;
    let rest = rest.trim_start().strip_prefix("out").ok_or_else(err)?;
    let rest = rest.trim_start().strip_prefix("of").ok_or_else(err)?;
    let (possible_score, rest) = split_number(rest.trim_start()).ok_or_else(err)?;
    if !rest.trim().is_empty() {
        return Err(err());
    }

    Ok(AssignmentScore {
        graded: true,
        score,
        possible_score,
    })
}

/// Decodes a points attribute, e.g. `"5/8"` → 5 points out of a possible 8.
pub fn parse_points(raw: &str) -> Result<AssignmentPoints> {
    let err = || ScalarError::Points(raw.to_string());
    let (points, possible_points) = raw.trim().split_once('/').ok_or_else(err)?;
    Ok(AssignmentPoints {
        points: points.trim().parse::<f64>().map_err(|_| err())?,
        possible_points: possible_points.trim().parse::<f64>().map_err(|_| err())?,
    })
}

/// Decodes a combined course title, e.g. `"Algebra II (ALG2-01)"`.
///
/// The parenthesized group is the school's stable course ID. Course names may
/// contain parentheses of their own (`"AP Lang (Honors) (ENG401)"`), so the
/// *last* well-formed `(...)` group wins.
pub fn parse_course_title(raw: &str) -> Result<CourseId> {
    let err = || ScalarError::CourseTitle(raw.to_string());
    let trimmed = raw.trim_end();
    let close = trimmed.rfind(')').ok_or_else(err)?;
    let open = trimmed[..close].rfind('(').ok_or_else(err)?;

    let id = trimmed[open + 1..close].trim();
    let name = trimmed[..open].trim();
    if id.is_empty() || name.is_empty() {
        return Err(err());
    }

    Ok(CourseId {
        id: id.to_string(),
        name: name.to_string(),
    })
}

/// Splits a leading decimal number off `s`, returning the parsed value and
/// the remainder.
fn split_number(s: &str) -> Option<(f64, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_decodes() {
        assert_eq!(parse_percentage("87.5%"), Ok(87.5));
        assert_eq!(parse_percentage("100%"), Ok(100.0));
        assert_eq!(parse_percentage(" 92.25% "), Ok(92.25));
    }

    #[test]
    fn percentage_rejects_missing_sign_and_bad_number() {
        assert!(matches!(parse_percentage("87.5"), Err(ScalarError::Percentage(_))));
        assert!(matches!(parse_percentage("abc%"), Err(ScalarError::Percentage(_))));
        assert!(matches!(parse_percentage(""), Err(ScalarError::Percentage(_))));
    }

    #[test]
    fn date_decodes_without_zero_padding() {
        assert_eq!(
            parse_date("1/2/2006"),
            Ok(NaiveDate::from_ymd_opt(2006, 1, 2).unwrap())
        );
        assert_eq!(
            parse_date("10/14/2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 10, 14).unwrap())
        );
    }

    #[test]
    fn date_rejects_other_layouts() {
        assert!(parse_date("2024-10-14").is_err());
        assert!(parse_date("14/10/2024").is_err()); // no month 14
        assert!(parse_date("10/14").is_err());
    }

    #[test]
    fn score_decodes_graded_and_not_graded() {
        assert_eq!(
            parse_score("9 out of 10"),
            Ok(AssignmentScore {
                graded: true,
                score: 9.0,
                possible_score: 10.0,
            })
        );
        assert_eq!(parse_score("Not Graded"), Ok(AssignmentScore::not_graded()));
    }

    #[test]
    fn score_tolerates_irregular_whitespace() {
        let expected = AssignmentScore {
            graded: true,
            score: 8.5,
            possible_score: 12.0,
        };
        assert_eq!(parse_score("8.5 out  of   12"), Ok(expected));
        assert_eq!(parse_score("8.5out of12"), Ok(expected));
    }

    #[test]
    fn score_rejects_malformed_inputs() {
        assert!(matches!(parse_score("9 of 10"), Err(ScalarError::Score(_))));
        assert!(matches!(parse_score("out of 10"), Err(ScalarError::Score(_))));
        assert!(matches!(parse_score("9 out of"), Err(ScalarError::Score(_))));
        assert!(matches!(parse_score("graded"), Err(ScalarError::Score(_))));
    }

    #[test]
    fn points_decode() {
        assert_eq!(
            parse_points("5/8"),
            Ok(AssignmentPoints {
                points: 5.0,
                possible_points: 8.0,
            })
        );
        assert_eq!(
            parse_points("2.5/10"),
            Ok(AssignmentPoints {
                points: 2.5,
                possible_points: 10.0,
            })
        );
    }

    #[test]
    fn points_reject_malformed_inputs() {
        assert!(matches!(parse_points("5"), Err(ScalarError::Points(_))));
        assert!(matches!(parse_points("5/"), Err(ScalarError::Points(_))));
        assert!(matches!(parse_points("a/b"), Err(ScalarError::Points(_))));
    }

    #[test]
    fn course_title_decodes() {
        let id = parse_course_title("Algebra II (ALG2-01)").expect("title");
        assert_eq!(id.name, "Algebra II");
        assert_eq!(id.id, "ALG2-01");
    }

    #[test]
    fn course_title_takes_last_parenthesized_group() {
        let id = parse_course_title("AP Lang (Honors) (ENG401)").expect("title");
        assert_eq!(id.name, "AP Lang (Honors)");
        assert_eq!(id.id, "ENG401");
    }

    #[test]
    fn course_title_rejects_missing_group() {
        assert!(matches!(
            parse_course_title("Algebra II"),
            Err(ScalarError::CourseTitle(_))
        ));
        assert!(matches!(
            parse_course_title("(ALG2-01)"),
            Err(ScalarError::CourseTitle(_))
        ));
        assert!(matches!(parse_course_title(""), Err(ScalarError::CourseTitle(_))));
    }
}
