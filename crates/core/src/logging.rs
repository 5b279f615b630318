//! Initialisation du logging

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// `RUST_LOG` a priorité; sinon `default_level` est utilisé.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Un second appel (tests, bibliothèque hôte) ne doit pas paniquer
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Niveau de log correspondant à un compteur de verbosité (`-v`, `-vv`, ...)
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Macro pour le logging des opérations longues
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = $crate::tracing::span!($crate::tracing::Level::INFO, $name);
        let _enter = span.enter();
        $crate::tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        $crate::tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}
