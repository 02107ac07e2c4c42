use thiserror::Error;

/// Format errors raised by the scalar decoders.
///
/// Each variant carries the raw attribute value that failed to parse so the
/// caller can report exactly what the portal sent. Decoders never default a
/// malformed value; the only special-cased input is the literal
/// `"Not Graded"` score, which is a defined format, not an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScalarError {
    #[error("expected percentage in the form `x%`, got `{0}`")]
    Percentage(String),
    #[error("expected date in the form `M/D/YYYY`, got `{0}`")]
    Date(String),
    #[error("expected score in the form `x out of y` or `Not Graded`, got `{0}`")]
    Score(String),
    #[error("expected points in the form `x/y`, got `{0}`")]
    Points(String),
    #[error("expected course title in the form `Name (ID)`, got `{0}`")]
    CourseTitle(String),
}

pub type Result<T> = std::result::Result<T, ScalarError>;
