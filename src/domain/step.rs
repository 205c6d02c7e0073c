use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    #[serde(rename = "thought")]
    Think,
    #[serde(rename = "action")]
    Act,
    #[serde(rename = "observation")]
    Observe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(rename = "content")]
    pub text: String,
}

/// Append-only record of a run. One think/act/observe triple per iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog(Vec<StepRecord>);

impl StepLog {
    pub fn new() -> Self {
        StepLog::default()
    }

    pub fn record(&mut self, kind: StepKind, text: impl Into<String>) {
        self.0.push(StepRecord {
            kind,
            text: text.into(),
        });
    }

    pub fn record_triple(&mut self, thought: &str, action: &str, observation: &str) {
        self.record(StepKind::Think, thought);
        self.record(StepKind::Act, action);
        self.record(StepKind::Observe, observation);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.0
    }

    pub fn last_observation(&self) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|r| r.kind == StepKind::Observe)
            .map(|r| r.text.as_str())
    }
}
