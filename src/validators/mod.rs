pub mod domain;
pub mod ip;
pub mod url;

pub use domain::DomainValidator;
pub use ip::IpValidator;
pub use url::UrlValidator;

use crate::core::results::KeyType;
use crate::core::traits::KeyValidator;

/// Get the validator for a key type
pub fn get_validator(key_type: KeyType) -> Box<dyn KeyValidator> {
    match key_type {
        KeyType::Ip => Box::new(IpValidator::new()),
        KeyType::Domain => Box::new(DomainValidator::new()),
        KeyType::Url => Box::new(UrlValidator::new()),
    }
}

/// Get all available validators
pub fn all_validators() -> Vec<Box<dyn KeyValidator>> {
    vec![
        Box::new(IpValidator::new()),
        Box::new(DomainValidator::new()),
        Box::new(UrlValidator::new()),
    ]
}
