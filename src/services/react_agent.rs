use url::Url;

use crate::{
    configuration::FailurePolicy,
    domain::{
        agent_state::{Action, AgentState, Stage},
        step::StepLog,
    },
};

use super::{extract_candidates, DataPersistance, PageFetcher, PipelineError};

const SAMPLE_SIZE: usize = 5;

pub struct ReactAgent {
    target_url: Url,
    fetcher: PageFetcher,
    store: DataPersistance,
    failure_policy: FailurePolicy,
}

impl ReactAgent {
    pub fn new(
        target_url: Url,
        fetcher: PageFetcher,
        store: DataPersistance,
        failure_policy: FailurePolicy,
    ) -> Self {
        ReactAgent {
            target_url,
            fetcher,
            store,
            failure_policy,
        }
    }

    pub fn store(&self) -> &DataPersistance {
        &self.store
    }

    /// Runs exactly `max_iterations` think/act/observe rounds, unless the
    /// policy is `Halt` and a step fails. Step errors end up in the log as
    /// observations and are never returned.
    pub async fn run(&self, max_iterations: u32) -> StepLog {
        log::info!("Starting ReAct loop against {}", self.target_url);

        let mut history = StepLog::new();
        let mut state = AgentState::Init;

        for i in 0..max_iterations {
            log::info!("Iteration {}", i + 1);

            let thought = state.thought(&self.target_url, history.last_observation());
            log::info!("Thought: {}", thought);

            let action = state.next_action(&self.target_url);
            log::info!("Action: {}", action);

            let (observation, next_state) = self.observe(&action, state).await;
            log::info!("Observation: {}", observation);

            history.record_triple(&thought, &action.to_string(), &observation);
            state = next_state;

            if state.is_failed() && self.failure_policy == FailurePolicy::Halt {
                log::error!("Halting ReAct loop after iteration {}", i + 1);
                break;
            }
        }

        log::info!("ReAct loop completed with {} steps", history.len());
        history
    }

    async fn observe(&self, action: &Action, state: AgentState) -> (String, AgentState) {
        match action {
            Action::Fetch(url) => match self.fetcher.fetch(url).await {
                Ok(page) => (
                    format!(
                        "Successfully retrieved html content and saved to {}",
                        self.fetcher.page_path().display()
                    ),
                    AgentState::Fetched(page),
                ),
                Err(e) => failed(Stage::Fetch, "Error fetching webpage", e),
            },
            Action::Parse => {
                let result = match state {
                    AgentState::Fetched(page) => extract_candidates(&page),
                    _ => Err(PipelineError::MissingInput("page")),
                };

                match result {
                    Ok(companies) => (
                        format!(
                            "Extracted {} companies. First few: {:?}",
                            companies.len(),
                            companies.sample(SAMPLE_SIZE)
                        ),
                        AgentState::Parsed(companies),
                    ),
                    Err(e) => failed(Stage::Parse, "Error parsing companies", e),
                }
            }
            Action::Save => {
                let result = match &state {
                    AgentState::Parsed(companies) => {
                        self.store.persist(companies).await.map(|_| companies.len())
                    }
                    _ => Err(PipelineError::MissingInput("extracted companies")),
                };

                match result {
                    Ok(count) => (
                        format!(
                            "Saved {} companies to {}",
                            count,
                            self.store.companies_path().display()
                        ),
                        AgentState::Saved { count },
                    ),
                    Err(e) => failed(Stage::Save, "Error saving companies", e),
                }
            }
            Action::Analyze => ("Nothing left to do".to_string(), state),
        }
    }
}

fn failed(stage: Stage, context: &str, e: PipelineError) -> (String, AgentState) {
    log::error!("Failed while {}: {:?}", stage, e);

    (
        format!("{}: {}", context, e),
        AgentState::Failed {
            stage,
            reason: e.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;
    use url::Url;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{
        configuration::{FailurePolicy, DEFAULT_USER_AGENT},
        domain::step::{StepKind, StepLog},
        services::{load_companies, DataPersistance, PageFetcher},
    };

    use super::ReactAgent;

    const HTML: &str = r#"
        <html><body>
            <div class="company-card"><span class="company-name">Stripe</span></div>
            <div class="company-card"><span class="company-name"> Airbnb </span></div>
            <h4>Featured</h4>
        </body></html>
    "#;

    fn build_agent(dir: &TempDir, url: Url, failure_policy: FailurePolicy) -> ReactAgent {
        let fetcher = PageFetcher::new(
            DEFAULT_USER_AGENT,
            Duration::from_secs(5),
            dir.path().join("page.html"),
        )
        .unwrap();
        let store = DataPersistance::new(
            dir.path().join("companies.json"),
            dir.path().join("history.json"),
        );

        ReactAgent::new(url, fetcher, store, failure_policy)
    }

    async fn serve(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/companies"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn companies_url(server: &MockServer) -> Url {
        Url::parse(&format!("{}/companies", server.uri())).unwrap()
    }

    fn texts(history: &StepLog, kind: StepKind) -> Vec<String> {
        history
            .records()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.text.clone())
            .collect()
    }

    #[tokio::test]
    async fn successful_run_fetches_parses_and_saves() {
        let server = serve(200, HTML).await;
        let dir = tempfile::tempdir().unwrap();
        let agent = build_agent(&dir, companies_url(&server), FailurePolicy::Continue);

        let history = agent.run(3).await;

        assert_eq!(history.len(), 9);
        let kinds: Vec<StepKind> = history.records().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            [StepKind::Think, StepKind::Act, StepKind::Observe].repeat(3)
        );
        assert_eq!(
            texts(&history, StepKind::Act),
            vec![
                format!("fetch_webpage:{}", companies_url(&server)),
                "parse_companies".to_string(),
                "save_companies".to_string(),
            ]
        );

        let observations = texts(&history, StepKind::Observe);
        assert!(observations[0].starts_with("Successfully retrieved html content"));
        assert_eq!(
            observations[1],
            r#"Extracted 2 companies. First few: ["Stripe", "Airbnb"]"#
        );
        assert!(observations[2].starts_with("Saved 2 companies to"));

        let saved = load_companies(agent.store().companies_path())
            .await
            .unwrap();
        assert_eq!(saved, vec!["Stripe", "Airbnb"]);
        assert!(dir.path().join("page.html").exists());
    }

    #[tokio::test]
    async fn failed_fetch_still_runs_every_iteration() {
        let server = serve(500, "oops").await;
        let dir = tempfile::tempdir().unwrap();
        let agent = build_agent(&dir, companies_url(&server), FailurePolicy::Continue);

        let history = agent.run(3).await;

        assert_eq!(history.len(), 9);
        assert_eq!(
            texts(&history, StepKind::Act)[1..],
            ["parse_companies", "save_companies"]
        );

        let observations = texts(&history, StepKind::Observe);
        assert!(observations[0].starts_with("Error fetching webpage"));
        assert!(observations[1].starts_with("Error parsing companies"));
        assert!(observations[2].starts_with("Error saving companies"));
        assert!(!agent.store().companies_path().exists());

        let thoughts = texts(&history, StepKind::Think);
        assert!(thoughts[1].starts_with("There was an error while fetching the page"));
    }

    #[tokio::test]
    async fn transport_error_is_captured_as_observation() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::parse("http://127.0.0.1:1/companies").unwrap();
        let agent = build_agent(&dir, url, FailurePolicy::Continue);

        let history = agent.run(3).await;

        assert_eq!(history.len(), 9);
        let observations = texts(&history, StepKind::Observe);
        assert!(observations[0].starts_with("Error fetching webpage: network failure"));
        assert_eq!(
            observations[1],
            "Error parsing companies: no page available from an earlier step"
        );
    }

    #[tokio::test]
    async fn halt_policy_stops_after_failed_step() {
        let server = serve(404, "missing").await;
        let dir = tempfile::tempdir().unwrap();
        let agent = build_agent(&dir, companies_url(&server), FailurePolicy::Halt);

        let history = agent.run(3).await;

        assert_eq!(history.len(), 3);
        assert!(history
            .last_observation()
            .unwrap()
            .starts_with("Error fetching webpage"));
    }

    #[tokio::test]
    async fn extra_iterations_analyze_last_observation() {
        let server = serve(200, HTML).await;
        let dir = tempfile::tempdir().unwrap();
        let agent = build_agent(&dir, companies_url(&server), FailurePolicy::Continue);

        let history = agent.run(5).await;

        assert_eq!(history.len(), 15);
        let actions = texts(&history, StepKind::Act);
        assert_eq!(actions[3..], ["analyze_observation", "analyze_observation"]);

        let thoughts = texts(&history, StepKind::Think);
        assert!(thoughts[3].starts_with("I observed: Saved 2 companies to"));
        assert_eq!(
            thoughts[4],
            "I observed: Nothing left to do... I need to analyze this further."
        );
    }

    #[tokio::test]
    async fn zero_iterations_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::parse("http://127.0.0.1:1/companies").unwrap();
        let agent = build_agent(&dir, url, FailurePolicy::Continue);

        assert!(agent.run(0).await.is_empty());
    }
}
