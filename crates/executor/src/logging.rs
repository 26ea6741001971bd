//! Logging initialization.
//!
//! The crates log through `tracing` under `chronicle::*` targets. Nothing is
//! printed until a subscriber is installed; embedders with their own
//! subscriber never need to call [`init_tracing`].

use once_cell::sync::OnceCell;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

static INSTALLED: OnceCell<bool> = OnceCell::new();

/// Install a human-readable `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Only the first call in a
/// process does anything; it returns whether the subscriber was installed
/// (false when another global subscriber was already set).
///
/// # Example
///
/// ```ignore
/// chronicle_executor::logging::init_tracing("chronicle=debug");
/// ```
pub fn init_tracing(default_filter: &str) -> bool {
    *INSTALLED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .finish()
            .try_init()
            .is_ok()
    })
}
