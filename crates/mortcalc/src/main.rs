//! mortcalc: loan amortization calculator client.

use mortcalc_lib::{app, config, errors};
use mortcalc_orchestration::error::ClientError;

fn main() {
    let config = config::AppConfig::parse();

    let directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(config::log_filter(config.tui, &directives))
        .init();

    if let Err(err) = app::run(&config) {
        // Client errors were already shown by the presenter.
        if err.downcast_ref::<ClientError>().is_none() {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(errors::exit_code(&err));
    }
}
