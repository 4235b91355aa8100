//! CLI entrypoint for Local Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use council_application::{
    ConversationLogger, GenerationPreset, NoProgress, ProgressNotifier, RunCouncilInput,
    RunCouncilUseCase,
};
use council_domain::Topic;
use council_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, LmStudioGateway};
use council_presentation::{
    Cli, ConsoleTurnPresenter, CouncilShell, OutputConfig, ProgressReporter, ReedlineInput,
    SimpleProgress,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // COUNCIL_LOG wins over -v flags
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_env("COUNCIL_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for source in ConfigLoader::sources(cli.config.as_deref()) {
            let mark = if source.found { "FOUND" } else { "     " };
            println!("  [{}] {:<8} {}", mark, format!("{}:", source.label), source.location);
        }
        return Ok(());
    }

    info!("Starting Local Council");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let registry = Arc::new(config.council.to_registry()?);
    let generation = config.generation_params();
    let session = config.session_params();
    let output = OutputConfig::default()
        .with_color(config.output.color)
        .with_box_width(config.output.box_width)
        .with_spinner(config.output.spinner && !cli.quiet);

    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(
        LmStudioGateway::new(&config.endpoint.url, generation)?
            .with_health_timeout(Duration::from_secs(config.endpoint.health_timeout_seconds)),
    );

    let mut run = RunCouncilUseCase::new(Arc::clone(&gateway), Arc::clone(&registry), session);
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::open(path) {
            Ok(logger) => {
                info!("Writing conversation log to {}", logger.path().display());
                run = run.with_conversation_logger(Arc::new(logger) as Arc<dyn ConversationLogger>);
            }
            Err(e) => warn!("Conversation log disabled ({}): {}", path.display(), e),
        }
    }

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if output.spinner {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let shell = CouncilShell::new(
        run,
        gateway,
        Box::new(ConsoleTurnPresenter::new(output)),
        progress,
        Box::new(ReedlineInput::new()),
    );

    shell.print_welcome();
    if !shell.test_connection().await {
        bail!(
            "Start LM Studio, load the council models and enable the server on {}, then run again",
            config.endpoint.url
        );
    }

    if let (Some(mode), Some(topic)) = (cli.mode, cli.topic.as_deref()) {
        let topic = Topic::parse(topic)?;
        shell
            .run_session(RunCouncilInput::new(mode.into(), topic))
            .await;
    }

    shell.run().await;

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(preset) = cli.preset {
        config.generation.preset = GenerationPreset::from(preset);
    }
    if cli.no_conclusion {
        config.debate.conclusion = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.clone());
    }
}
