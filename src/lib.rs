//! FrameVision ROI
//!
//! Cost comparison between frame-based and event-based inspection deployments.
//! It handles:
//! - Input validation against documented ranges
//! - Monthly data volume and cost breakdowns per configuration
//! - Savings, data reduction and payback figures
//! - Sensitivity sweeps and scenario matrices
//! - CSV/JSON export, a CLI and a stateless HTTP service

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod metrics;
pub mod models;
pub mod reference;
pub mod server;
pub mod sweep;
pub mod validation;

pub use metrics::{evaluate, Evaluation, Evaluator};
pub use models::{ComparisonResult, CostBreakdown, CostModelInput, EgressMode, Scenario};
pub use reference::ReferenceData;
pub use validation::{ValidationError, ValidationErrorKind};

/// Process exit code for rejected input
pub const EXIT_VALIDATION: i32 = 2;
/// Process exit code for any other failure
pub const EXIT_FAILURE: i32 = 1;

/// Error type for the CLI and service edge
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Reference data error: {0}")]
    Reference(#[from] reference::ReferenceError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Exit code the binary reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => EXIT_VALIDATION,
            _ => EXIT_FAILURE,
        }
    }
}

/// Initialize logging
///
/// Honours `RUST_LOG`; defaults to info for this crate. Logs go to stderr so
/// JSON written to stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = if verbose {
        "framevision_roi=debug,tower_http=debug"
    } else {
        "framevision_roi=info,tower_http=info"
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let validation = AppError::from(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            "frame_camera_count",
            "0 is outside the allowed range 1..=64",
        ));
        assert_eq!(validation.exit_code(), EXIT_VALIDATION);
        assert!(validation.to_string().contains("frame_camera_count"));

        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(io.exit_code(), EXIT_FAILURE);
    }
}
