// Main entry point
use anyhow::anyhow;
use clap::Parser;
use colored::Colorize;
use langid::application::controller::DetectionController;
use langid::application::render_plan::{ImmediateScheduler, PacedScheduler};
use langid::domain::error::DetectError;
use langid::domain::model::{DetectionMethod, DetectionResponse};
use langid::domain::traits::Scheduler;
use langid::domain::validation::input_feedback;
use langid::infrastructure::config::{self, load_config, Config};
use langid::interfaces::cli::Cli;
use langid::presentation::html::HtmlView;
use langid::presentation::json::{to_json, SilentView};
use langid::presentation::samples::{find_sample, type_out, SAMPLES, TYPING_INTERVAL};
use langid::presentation::terminal::TerminalView;
use langid::presentation::theme::Theme;
use langid::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let mut config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if cli.no_animate {
        config.animate = false;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.list_samples {
        for sample in SAMPLES {
            println!("{:<10} {}", sample.name.cyan(), sample.text);
        }
        return Ok(());
    }

    let text = match &cli.sample {
        Some(name) => find_sample(name)
            .map(|s| s.text.to_string())
            .ok_or_else(|| anyhow!("Unknown sample: {} (see --list-samples)", name))?,
        None => cli.text.join(" "),
    };

    if cli.check {
        let feedback = input_feedback(&text);
        if feedback.is_ready() {
            println!("{}", feedback.message().green());
            return Ok(());
        }
        eprintln!("{}", feedback.message().red());
        std::process::exit(1);
    }

    let state = AppState::new(config)?;

    if cli.health {
        let health = state.service.health().await?;
        println!("{}: {}", health.status.green(), health.message);
        return Ok(());
    }
    if cli.status {
        print_status(&state).await;
        return Ok(());
    }

    let method = cli
        .method
        .map(DetectionMethod::from)
        .unwrap_or(state.config.default_method);

    let submitted = tokio::select! {
        result = submit(&cli, &state, &text, method) => result?,
        Ok(()) = shutdown_rx => {
            eprintln!("\nInterrupted");
            return Ok(());
        }
    };

    if !submitted {
        std::process::exit(1);
    }
    Ok(())
}

/// Run one submit in the output mode chosen on the command line.
/// Returns whether results were rendered.
async fn submit(
    cli: &Cli,
    state: &AppState,
    text: &str,
    method: DetectionMethod,
) -> anyhow::Result<bool> {
    let service = state.service.clone();

    if cli.json {
        let controller = DetectionController::new(service, SilentView::default());
        let outcome = controller.submit(text, method).await;
        println!("{}", to_json(&outcome)?);
        return Ok(finished(outcome)?);
    }

    if cli.html {
        let controller = DetectionController::new(service, HtmlView::new()).with_width(cli.width);
        let outcome = controller.submit(text, method).await;
        print!("{}", controller.into_view().to_html());
        return Ok(finished(outcome)?);
    }

    let config = &state.config;
    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if config.animate && cli.sample.is_some() {
        type_out(&mut std::io::stdout(), text, TYPING_INTERVAL).await?;
    }

    let scheduler: Arc<dyn Scheduler> = if config.animate {
        Arc::new(PacedScheduler)
    } else {
        Arc::new(ImmediateScheduler)
    };
    let controller = DetectionController::new(service, TerminalView::stdout(theme, config.enable_emoji))
        .with_scheduler(scheduler);
    let outcome = controller.submit(text, method).await;
    Ok(finished(outcome)?)
}

/// Submit failures are already on screen; only ambient errors propagate.
fn finished(outcome: Result<DetectionResponse, DetectError>) -> Result<bool, DetectError> {
    match outcome {
        Ok(_) => Ok(true),
        Err(err) if err.is_submit_failure() => Ok(false),
        Err(err) => Err(err),
    }
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = logging.filter_directive();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn print_status(state: &AppState) {
    let config: &Config = &state.config;
    println!("{}", "langid Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Endpoint: {}", state.service.detect_url());
    println!("Default method: {}", config.default_method);
    println!("Timeout: {}s", config.timeout_secs);

    match state.service.health().await {
        Ok(health) => println!("Service: {} ({})", health.status.green(), health.message),
        Err(e) => println!("Service: {} ({})", "unreachable".red(), e),
    }
}
