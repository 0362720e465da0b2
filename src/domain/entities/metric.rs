//! Click counter entity.

/// A click counter keyed by short code.
///
/// Counters are created implicitly on first increment and never deleted. A
/// code does not need to belong to an existing link to accumulate clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeScore {
    pub code: String,
    pub score: i64,
}

impl CodeScore {
    pub fn new(code: impl Into<String>, score: i64) -> Self {
        Self {
            code: code.into(),
            score,
        }
    }
}
