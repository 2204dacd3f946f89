//! Système de logging pour adnpix

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Niveau configuré, relevé d'un cran par `-v` de la ligne de commande
pub fn effective_level(config: &LoggingConfig, verbosity: u8) -> &'static str {
    let configured: u8 = match config.level.to_lowercase().as_str() {
        "trace" => 0,
        "debug" => 1,
        "info" => 2,
        "warn" => 3,
        "error" => 4,
        _ => 2,
    };
    match configured.saturating_sub(verbosity) {
        0 => "trace",
        1 => "debug",
        2 => "info",
        3 => "warn",
        _ => "error",
    }
}

/// Initialise le système de logging (`RUST_LOG` prime sur la configuration)
pub fn init_logging(config: &LoggingConfig, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(config, verbosity)));

    match config.format.to_lowercase().as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .compact()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Macro pour le logging des opérations critiques
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}

/// Macro pour le logging des erreurs
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {{
        let error = $error;
        tracing::error!("Erreur: {}", error);
        error
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_raises_level() {
        let config = LoggingConfig::default();
        assert_eq!(effective_level(&config, 0), "warn");
        assert_eq!(effective_level(&config, 1), "info");
        assert_eq!(effective_level(&config, 2), "debug");
        assert_eq!(effective_level(&config, 9), "trace");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = LoggingConfig {
            level: "bavard".to_string(),
            ..Default::default()
        };
        assert_eq!(effective_level(&config, 0), "info");
    }
}
