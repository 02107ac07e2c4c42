//! Event-driven walk over the gradebook document.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use svue_model::{
    Assignment, AssignmentGradeCalc, Course, CourseMark, Gradebook, GradingPeriod,
    parse_course_title, parse_date, parse_percentage, parse_points, parse_score,
};

use crate::error::{DecodeError, Result};

/// Decodes one gradebook snapshot from the portal's XML document.
///
/// The reader tolerates unknown elements and attributes (the portal adds
/// fields over time) but fails on anything structurally required: a missing
/// `<Gradebook>` root, a missing current `<ReportingPeriod>`, an absent key
/// attribute, or a scalar attribute its format decoder rejects.
pub fn decode_gradebook(xml: &str) -> Result<Gradebook> {
    let mut reader = Reader::from_str(xml);
    let mut state = DecodeState::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => state.open(&e)?,
            Event::Empty(e) => {
                let name = e.name().as_ref().to_vec();
                state.open(&e)?;
                state.close(&name);
            }
            Event::End(e) => state.close(e.name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
    }

    state.finish()
}

#[derive(Default)]
struct DecodeState {
    saw_root: bool,
    grading_periods: Vec<GradingPeriod>,
    current_grading_period: Option<GradingPeriod>,
    courses: Vec<Course>,
    open_course: Option<Course>,
    open_mark: Option<CourseMark>,
}

impl DecodeState {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.name().as_ref() {
            b"Gradebook" => self.saw_root = true,
            b"ReportPeriod" => {
                let attrs = Attrs::read(e, "ReportPeriod")?;
                self.grading_periods.push(grading_period(&attrs)?);
            }
            b"ReportingPeriod" => {
                let attrs = Attrs::read(e, "ReportingPeriod")?;
                self.current_grading_period = Some(grading_period(&attrs)?);
            }
            b"Course" => {
                let attrs = Attrs::read(e, "Course")?;
                self.open_course = Some(course(&attrs)?);
            }
            b"Mark" => {
                let attrs = Attrs::read(e, "Mark")?;
                self.open_mark = Some(mark(&attrs)?);
            }
            b"AssignmentGradeCalc" => {
                let attrs = Attrs::read(e, "AssignmentGradeCalc")?;
                let summary = grade_summary(&attrs)?;
                self.open_mark
                    .as_mut()
                    .ok_or(DecodeError::MissingElement("Mark"))?
                    .grade_summaries
                    .push(summary);
            }
            b"Assignment" => {
                let attrs = Attrs::read(e, "Assignment")?;
                let assignment = assignment(&attrs)?;
                self.open_mark
                    .as_mut()
                    .ok_or(DecodeError::MissingElement("Mark"))?
                    .assignments
                    .push(assignment);
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"Mark" => {
                if let (Some(mark), Some(course)) = (self.open_mark.take(), self.open_course.as_mut())
                {
                    course.marks.push(mark);
                }
            }
            b"Course" => {
                if let Some(course) = self.open_course.take() {
                    self.courses.push(course);
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Result<Gradebook> {
        if !self.saw_root {
            return Err(DecodeError::MissingElement("Gradebook"));
        }
        let current_grading_period = self
            .current_grading_period
            .ok_or(DecodeError::MissingElement("ReportingPeriod"))?;
        Ok(Gradebook {
            grading_periods: self.grading_periods,
            current_grading_period,
            courses: self.courses,
        })
    }
}

fn grading_period(attrs: &Attrs) -> Result<GradingPeriod> {
    Ok(GradingPeriod {
        index: attrs.number("Index")?,
        name: attrs.require("GradePeriod")?.to_string(),
        start_date: attrs.date("StartDate")?,
        end_date: attrs.date("EndDate")?,
    })
}

fn course(attrs: &Attrs) -> Result<Course> {
    let title = attrs.require("Title")?;
    let id = parse_course_title(title).map_err(|source| DecodeError::Scalar {
        element: attrs.element,
        attribute: "Title",
        source,
    })?;
    Ok(Course {
        period: attrs.number("Period")?,
        id,
        room: attrs.optional("Room").to_string(),
        teacher: attrs.optional("Staff").to_string(),
        teacher_email: attrs.optional("StaffEMail").to_string(),
        marks: Vec::new(),
    })
}

fn mark(attrs: &Attrs) -> Result<CourseMark> {
    Ok(CourseMark {
        name: attrs.require("MarkName")?.to_string(),
        letter_grade: attrs.optional("CalculatedScoreString").to_string(),
        raw_grade_score: attrs.number("CalculatedScoreRaw")?,
        grade_summaries: Vec::new(),
        assignments: Vec::new(),
    })
}

fn grade_summary(attrs: &Attrs) -> Result<AssignmentGradeCalc> {
    Ok(AssignmentGradeCalc {
        category: attrs.require("Type")?.to_string(),
        weight: attrs.percentage("Weight")?,
        points: attrs.number("Points")?,
        points_possible: attrs.number("PointsPossible")?,
        weighted_percentage: attrs.percentage("WeightedPct")?,
        letter_grade: attrs.optional("CalculatedMark").to_string(),
    })
}

fn assignment(attrs: &Attrs) -> Result<Assignment> {
    let score_raw = attrs.require("Score")?;
    let score = parse_score(score_raw).map_err(|source| DecodeError::Scalar {
        element: attrs.element,
        attribute: "Score",
        source,
    })?;
    let points_raw = attrs.require("Points")?;
    let points = parse_points(points_raw).map_err(|source| DecodeError::Scalar {
        element: attrs.element,
        attribute: "Points",
        source,
    })?;
    Ok(Assignment {
        gradebook_id: attrs.require("GradebookID")?.to_string(),
        name: attrs.require("Measure")?.to_string(),
        category: attrs.optional("Type").to_string(),
        date: attrs.date("Date")?,
        due_date: attrs.date("DueDate")?,
        score,
        score_type: attrs.optional("ScoreType").to_string(),
        points,
        notes: attrs.optional("Notes").to_string(),
    })
}

/// Attributes of one element, decoded to owned strings up front so the
/// builders above can borrow freely.
struct Attrs {
    element: &'static str,
    values: Vec<(String, String)>,
}

impl Attrs {
    fn read(e: &BytesStart<'_>, element: &'static str) -> Result<Self> {
        let mut values = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| DecodeError::Attr {
                element,
                message: err.to_string(),
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| DecodeError::Attr {
                    element,
                    message: err.to_string(),
                })?
                .into_owned();
            values.push((key, value));
        }
        Ok(Self { element, values })
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn require(&self, attribute: &'static str) -> Result<&str> {
        self.get(attribute).ok_or(DecodeError::MissingAttribute {
            element: self.element,
            attribute,
        })
    }

    fn optional(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    fn number<T: std::str::FromStr>(&self, attribute: &'static str) -> Result<T> {
        let raw = self.require(attribute)?;
        raw.trim().parse::<T>().map_err(|_| DecodeError::Number {
            element: self.element,
            attribute,
            value: raw.to_string(),
        })
    }

    fn date(&self, attribute: &'static str) -> Result<chrono::NaiveDate> {
        parse_date(self.require(attribute)?).map_err(|source| DecodeError::Scalar {
            element: self.element,
            attribute,
            source,
        })
    }

    fn percentage(&self, attribute: &'static str) -> Result<f64> {
        parse_percentage(self.require(attribute)?).map_err(|source| DecodeError::Scalar {
            element: self.element,
            attribute,
            source,
        })
    }
}
