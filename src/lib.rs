#![doc(test(attr(deny(warnings))))]

//! Advisor Core derives financial metrics, rule-based recommendations, and a
//! composite health score from a read-only snapshot of a user's finances.

pub mod cache;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod metrics;
pub mod rules;
pub mod score;
pub mod snapshot;
pub mod time;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("advisor_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Advisor Core tracing initialized.");
    });
}
