use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid output filename: {name} - {reason}")]
    InvalidOutputFilename { name: String, reason: String },
}
