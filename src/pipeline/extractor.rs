use crate::core::results::{KeySet, KeyType};
use crate::core::traits::KeyValidator;
use crate::utils::PatternUtils;
use crate::validators;

/// Keys pulled out of one file's records
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub keys: KeySet,
    /// Raw records scanned
    pub records: usize,
    /// Candidate tokens that failed validation
    pub rejected: usize,
}

/// Turns raw records into a validated [`KeySet`]
pub struct KeyExtractor {
    validator: Box<dyn KeyValidator>,
}

impl KeyExtractor {
    pub fn new(key_type: KeyType) -> Self {
        Self::with_validator(validators::get_validator(key_type))
    }

    pub fn with_validator(validator: Box<dyn KeyValidator>) -> Self {
        Self { validator }
    }

    pub fn key_type(&self) -> KeyType {
        self.validator.key_type()
    }

    /// Split every record into candidates and keep the valid, normalized ones.
    /// Invalid candidates are counted, never reported as errors.
    pub fn extract<S: AsRef<str>>(&self, records: &[S]) -> Extraction {
        let mut extraction = Extraction {
            records: records.len(),
            ..Extraction::default()
        };

        for record in records {
            for candidate in PatternUtils::candidates(record.as_ref(), self.validator.separators()) {
                match self.validator.validate(candidate) {
                    Some(key) => {
                        extraction.keys.insert(key);
                    }
                    None => extraction.rejected += 1,
                }
            }
        }

        extraction
    }
}
