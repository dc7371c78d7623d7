use std::path::Path;

use storefront_core::settings::StorefrontSettings;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Loads settings from `config` when given, otherwise from the defaults. `SF_*`
/// environment variables override either source.
pub fn load_settings(config: Option<&Path>) -> anyhow::Result<StorefrontSettings> {
    let settings = match config {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            StorefrontSettings::load(path)?.with_env_overrides()?
        }
        None => StorefrontSettings::from_env()?,
    };
    tracing::debug!(
        "Using locale {} / {} with {} -> {} rate {}",
        settings.locale,
        settings.currency,
        settings.source_currency,
        settings.currency,
        settings.exchange_rate
    );
    Ok(settings)
}
