//! Shared helpers for the tests of the Miden circuit map crates.

pub use miden_crypto::{Felt, WORD_SIZE, Word};

pub mod rand;
pub mod strategies;

/// Installs a global `tracing` subscriber filtered by the `MIDEN_LOG` environment variable.
///
/// Calling this more than once is harmless: only the first call installs a subscriber.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MIDEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}
