//! Application entry point and dispatch.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use mortcalc_cli::output::write_export;
use mortcalc_cli::presenter::CLIResultPresenter;
use mortcalc_cli::spinner::CLIProgressReporter;
use mortcalc_orchestration::interfaces::{Action, ActionOutput, RemoteService};
use mortcalc_orchestration::orchestrator::{Outcome, RequestOrchestrator};
use mortcalc_orchestration::HttpService;
use mortcalc_tui::{TuiApp, TuiSettings};

use crate::config::AppConfig;
use crate::errors::ConfigError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        mortcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let service = connect(config)?;

    if config.tui {
        return run_tui(config, service);
    }

    run_cli(config, service)
}

fn connect(config: &AppConfig) -> Result<Arc<dyn RemoteService>> {
    let timeout = config.timeout_duration()?;
    let service = HttpService::new(config.service_url.as_str(), timeout)
        .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
    tracing::debug!(url = %config.service_url, ?timeout, "service configured");
    Ok(Arc::new(service))
}

fn run_cli(config: &AppConfig, service: Arc<dyn RemoteService>) -> Result<()> {
    let formatter = config.formatter()?;
    let form = config.to_form();
    let presenter = CLIResultPresenter::new(formatter, config.schedule, config.quiet);
    let reporter = CLIProgressReporter::new(!config.quiet);

    let started = Instant::now();
    let calculate = RequestOrchestrator::new(Action::Calculate, Arc::clone(&service));
    match settle(calculate.run(&form, &reporter), &presenter)? {
        ActionOutput::Calculation(result) => presenter.present_result(&result, started.elapsed()),
        ActionOutput::Export(_) => bail!("calculate answered with an export"),
    }

    if let Some(target) = &config.export {
        let export = RequestOrchestrator::new(Action::Export, service);
        match settle(export.run(&form, &reporter), &presenter)? {
            ActionOutput::Export(file) => {
                let path = write_export(target, &file)
                    .with_context(|| format!("writing {}", target.display()))?;
                presenter.present_export(&path);
            }
            ActionOutput::Calculation(_) => bail!("export answered with a calculation"),
        }
    }

    Ok(())
}

/// Unwrap a run's output, reporting failures through the presenter.
fn settle(outcome: Outcome, presenter: &CLIResultPresenter) -> Result<ActionOutput> {
    match outcome {
        Outcome::Succeeded(output) => Ok(output),
        Outcome::Failed(err) => {
            presenter.present_error(&err);
            Err(err.into())
        }
        Outcome::Rejected => bail!("action already in flight"),
    }
}

fn run_tui(config: &AppConfig, service: Arc<dyn RemoteService>) -> Result<()> {
    let settings = TuiSettings {
        formatter: config.formatter()?,
        export_dir: config.export.clone().unwrap_or_else(|| PathBuf::from(".")),
        service_label: config.service_url.clone(),
        form: config.to_form(),
    };

    let mut app = TuiApp::new(service, settings);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
