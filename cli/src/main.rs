//! CLI entrypoint for sysprobe
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use sysprobe_application::{RunAgentUseCase, ToolDispatcher};
use sysprobe_domain::{AgentPromptTemplate, Platform};
use sysprobe_infrastructure::{
    ConfigLoader, ConfigOverrides, ConfigSources, OpenAiCompatibleClient, SystemProcessRunner,
    default_tool_spec, select_executor,
};
use sysprobe_presentation::{Cli, ConsoleConfirmation, ConsoleInput, ConsoleProgress, print_welcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let sources = ConfigSources::discover(cli.config.clone(), cli.no_config);
    let overrides = ConfigOverrides {
        model: cli.model.clone(),
        base_url: cli.base_url.clone(),
        allow: cli.allow_override(),
        deny: cli.deny_override(),
    };
    let settings =
        ConfigLoader::load(&sources, &overrides).context("Failed to load configuration")?;

    let platform = Platform::current();
    info!(%platform, "Starting sysprobe");

    // === Dependency Injection ===
    let executor = select_executor(platform.clone(), Arc::new(SystemProcessRunner));
    let dispatcher = Arc::new(ToolDispatcher::new(
        settings.policy(),
        executor,
        default_tool_spec(),
    ));
    let model_client =
        Arc::new(OpenAiCompatibleClient::new(&settings).context("Failed to create HTTP client")?);
    let confirmation = Arc::new(ConsoleConfirmation::stdin());

    let mut agent = RunAgentUseCase::new(
        model_client,
        dispatcher,
        confirmation,
        AgentPromptTemplate::react_system(&platform),
    );

    print_welcome(&settings, &platform);

    let mut input = ConsoleInput::new().context("Failed to initialize the line editor")?;
    let progress = if std::io::stdout().is_terminal() {
        ConsoleProgress::new()
    } else {
        ConsoleProgress::without_spinner()
    };

    let result = agent.run_session(&mut input, &progress).await;
    println!("Agent session ended.");

    let stats = result?;
    info!(
        turns = stats.turns,
        answered = stats.answered_turns,
        tool_calls = stats.tool_calls_executed,
        declined = stats.tool_calls_declined,
        "Session summary"
    );
    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
