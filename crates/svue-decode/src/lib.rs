//! Decoder from the portal's gradebook XML into [`svue_model::Gradebook`].
//!
//! The portal returns an attribute-heavy document: every scalar lives in an
//! attribute, repeated elements nest under plural containers
//! (`ReportingPeriods/ReportPeriod`, `Courses/Course`, `Marks/Mark`,
//! `Assignments/Assignment`). This crate walks that document with an
//! event-driven reader and routes each attribute through the scalar decoders
//! in `svue-model`, so a malformed percentage or date surfaces with its
//! element and attribute context instead of a silent default.
//!
//! Fetching the document (the SOAP transport and its fault envelope) is a
//! separate concern and not handled here; callers hand in the gradebook XML
//! as a string.

pub mod error;
pub mod reader;

pub use error::DecodeError;
pub use reader::decode_gradebook;
