use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{company::ExtractionResult, step::StepLog};

use super::PipelineError;

/// Writes run artifacts as pretty JSON. Existing files are overwritten.
pub struct DataPersistance {
    companies_path: PathBuf,
    history_path: PathBuf,
}

impl DataPersistance {
    pub fn new(companies_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        DataPersistance {
            companies_path: companies_path.into(),
            history_path: history_path.into(),
        }
    }

    pub fn companies_path(&self) -> &Path {
        &self.companies_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    pub async fn persist(&self, companies: &ExtractionResult) -> Result<(), PipelineError> {
        write_json(&self.companies_path, companies).await?;
        log::info!(
            "Saved {} companies to {}",
            companies.len(),
            self.companies_path.display()
        );
        Ok(())
    }

    pub async fn persist_history(&self, history: &StepLog) -> Result<(), PipelineError> {
        write_json(&self.history_path, history).await?;
        log::info!(
            "Saved {} history entries to {}",
            history.len(),
            self.history_path.display()
        );
        Ok(())
    }
}

pub async fn load_companies(path: &Path) -> Result<Vec<String>, PipelineError> {
    read_json(path).await
}

pub async fn load_history(path: &Path) -> Result<StepLog, PipelineError> {
    read_json(path).await
}

async fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(data)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
