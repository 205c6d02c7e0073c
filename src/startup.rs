use std::time::Duration;

use anyhow::Context;

use crate::{
    configuration::Settings,
    domain::step::StepLog,
    services::{DataPersistance, PageFetcher, ReactAgent},
};

pub fn build_agent(configuration: &Settings) -> anyhow::Result<ReactAgent> {
    let application = &configuration.application;
    let target_url = application
        .target_url()
        .with_context(|| format!("Invalid target url: {}", application.target_url))?;

    let fetcher = PageFetcher::new(
        &application.user_agent,
        Duration::from_secs(application.request_timeout_secs),
        &configuration.output.page_path,
    )
    .context("Failed to build http client")?;

    let store = DataPersistance::new(
        &configuration.output.companies_path,
        &configuration.output.history_path,
    );

    Ok(ReactAgent::new(
        target_url,
        fetcher,
        store,
        application.failure_policy,
    ))
}

/// Runs the agent loop and writes its history next to the other artifacts.
pub async fn run(configuration: &Settings) -> anyhow::Result<StepLog> {
    let agent = build_agent(configuration)?;
    let history = agent.run(configuration.application.max_iterations).await;

    agent
        .store()
        .persist_history(&history)
        .await
        .context("Failed to save reasoning history")?;

    Ok(history)
}
