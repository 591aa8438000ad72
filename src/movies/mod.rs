//! Movie data shapes and the pure logic around them

pub mod mapping;
mod models;
mod validation;

pub use mapping::IMAGE_HOST;
pub use models::{FormField, FormState, MoviePayload, MovieRecord, SearchPage, SearchResult};
pub use validation::{parse_number, validate, ValidationError, Violation};
