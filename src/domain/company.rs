use serde::{Deserialize, Serialize};

/// Ordered company-like names pulled from a page, in document order.
///
/// Every item is trimmed and non-empty; the only way in is through
/// [`ExtractionResult::from_candidates`], which enforces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult(Vec<String>);

impl ExtractionResult {
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = candidates
            .into_iter()
            .filter_map(|candidate| normalize_candidate(candidate.as_ref()))
            .collect();

        ExtractionResult(names)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }

    /// First `n` names, used when summarising a parse in the step log.
    pub fn sample(&self, n: usize) -> &[String] {
        &self.0[..self.0.len().min(n)]
    }
}

pub fn normalize_candidate(text: &str) -> Option<String> {
    match text.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    }
}
