use anyhow::{Context, Result};
use ewebsock_check::cli::output::{format_execution_event, format_step_list, style};
use ewebsock_check::cli::{commands::ListCommand, Cli, Command};
use ewebsock_check::core::config::PipelineConfig;
use ewebsock_check::execution::{ExecutionEngine, ExecutionEvent, OutputSink, ProcessRunner};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config = PipelineConfig::builtin()?;

    match cli.command() {
        Command::Run(_) => run_pipeline(&config).await,
        Command::List(cmd) => list_checks(&config, &cmd),
    }
}

async fn run_pipeline(config: &PipelineConfig) -> Result<()> {
    let mut pipeline = config.to_pipeline();

    let mut engine = ExecutionEngine::new(ProcessRunner::new(), OutputSink::Inherit);
    engine.add_event_handler(|event| {
        let line = format_execution_event(&event);
        match event {
            ExecutionEvent::StepStarted { .. } => debug!("{}", line),
            _ => info!("{}", line),
        }
    });

    if let Err(err) = engine.execute(&mut pipeline).await {
        std::process::exit(err.exit_code());
    }

    Ok(())
}

fn list_checks(config: &PipelineConfig, cmd: &ListCommand) -> Result<()> {
    let pipeline = config.to_pipeline();

    if cmd.json {
        let data = serde_json::json!({
            "name": pipeline.name,
            "steps": pipeline.steps(),
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!("{}", style(&pipeline.name).bold());
        println!("{}", format_step_list(&pipeline));
    }

    Ok(())
}
