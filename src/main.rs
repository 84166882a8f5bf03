// Prints today's "Did You Know?" fact as JSON.
//
// This is the composition root: it reads the settings, owns the catalog and
// decides what "today" is. Any rendering is left to whoever reads stdout.

use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use didyouknow::catalog::Catalog;
use didyouknow::settings::Settings;

fn main() -> ExitCode {
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(e) = settings_error {
        warn!(error = %e, "using default settings");
    }

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog.with_day_counting(settings.day_counting),
        Err(e) => {
            error!(error = %e, "built-in catalog is invalid");
            return ExitCode::FAILURE;
        }
    };
    info!(count = catalog.fact_count(), day_counting = ?catalog.day_counting(), "catalog loaded");

    let fact = catalog.fact_of_the_day();
    match serde_json::to_string_pretty(fact) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "could not serialize the fact of the day");
            ExitCode::FAILURE
        }
    }
}
