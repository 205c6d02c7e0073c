use env_logger::Env;
use scout::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let history = run(&configuration).await?;

    log::info!(
        "Reasoning history saved to {}",
        configuration.output.history_path.display()
    );
    log::info!("Recorded {} steps", history.len());

    Ok(())
}
