use svue_model::ScalarError;
use thiserror::Error;

/// Errors raised while decoding a gradebook document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not well-formed XML.
    #[error("malformed gradebook XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// An attribute could not be read or unescaped.
    #[error("bad attribute in <{element}>: {message}")]
    Attr {
        element: &'static str,
        message: String,
    },
    /// A required attribute is absent.
    #[error("missing attribute `{attribute}` on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    /// A structurally required element never appeared (or a child element
    /// appeared outside its parent).
    #[error("missing <{0}> element in gradebook document")]
    MissingElement(&'static str),
    /// A scalar attribute failed its format decoder.
    #[error("bad `{attribute}` on <{element}>: {source}")]
    Scalar {
        element: &'static str,
        attribute: &'static str,
        #[source]
        source: ScalarError,
    },
    /// A plain numeric attribute did not parse.
    #[error("bad numeric attribute `{attribute}` on <{element}>: `{value}`")]
    Number {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
