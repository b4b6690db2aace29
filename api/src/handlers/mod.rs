pub mod error;

pub use error::{handle_domain_error, invalid_id_response, validation_error_response};
