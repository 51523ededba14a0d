// ABOUTME: Color notation conversion engine for hueshift.
// ABOUTME: Parses textual color notations and derives all equivalent forms.

pub mod engine;
pub mod error;
pub mod format;
pub mod parse;
pub mod space;

pub use engine::{convert, Conversion, Engine, Notation};
pub use error::ConvertError;
