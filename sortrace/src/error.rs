use alloc::string::{String, ToString};

/// Precondition failures surfaced by run constructors, before any step is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Counting sort needs one bucket per value in `min..=max`.
    #[error("counting sort needs {range} buckets, more than the limit of {limit}")]
    CountingRangeTooLarge { range: u128, limit: usize },
}

/// Returned when an algorithm name does not match any [`crate::Algorithm`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sorting algorithm `{name}`")]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
