use std::fmt;

use url::Url;

use super::{company::ExtractionResult, page::Page};

const OBSERVATION_PREVIEW_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Parse,
    Save,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetching the page"),
            Stage::Parse => write!(f, "parsing companies"),
            Stage::Save => write!(f, "saving companies"),
        }
    }
}

/// Where a run currently stands. Each variant owns whatever the next step
/// needs, so nothing is shared between steps except this value.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentState {
    Init,
    Fetched(Page),
    Parsed(ExtractionResult),
    Saved { count: usize },
    Failed { stage: Stage, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Fetch(Url),
    Parse,
    Save,
    Analyze,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fetch(url) => write!(f, "fetch_webpage:{}", url),
            Action::Parse => write!(f, "parse_companies"),
            Action::Save => write!(f, "save_companies"),
            Action::Analyze => write!(f, "analyze_observation"),
        }
    }
}

impl AgentState {
    pub fn thought(&self, target: &Url, last_observation: Option<&str>) -> String {
        match self {
            AgentState::Init => format!(
                "I need to scrape company names from {}. I'll fetch the page content first.",
                target
            ),
            AgentState::Fetched(_) => {
                "I have the HTML content. Now I need to parse it and extract company names."
                    .to_string()
            }
            AgentState::Parsed(_) => {
                "I've successfully extracted the company names. I should save them to a file."
                    .to_string()
            }
            AgentState::Saved { .. } => {
                let preview: String = last_observation
                    .unwrap_or_default()
                    .chars()
                    .take(OBSERVATION_PREVIEW_LEN)
                    .collect();
                format!("I observed: {}... I need to analyze this further.", preview)
            }
            AgentState::Failed { stage, .. } => format!(
                "There was an error while {}. I'll move on to the next step.",
                stage
            ),
        }
    }

    pub fn next_action(&self, target: &Url) -> Action {
        match self {
            AgentState::Init => Action::Fetch(target.clone()),
            AgentState::Fetched(_) => Action::Parse,
            AgentState::Parsed(_) => Action::Save,
            AgentState::Saved { .. } => Action::Analyze,
            AgentState::Failed { stage, .. } => match stage {
                Stage::Fetch => Action::Parse,
                Stage::Parse => Action::Save,
                Stage::Save => Action::Analyze,
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AgentState::Failed { .. })
    }
}
