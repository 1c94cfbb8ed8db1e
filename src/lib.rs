#![doc(test(attr(deny(warnings))))]

//! SmartSaver client: typed access to the SmartSaver backend, demo fallbacks,
//! per-screen view state and the interactive shell built on top of them.

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
pub mod views;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SmartSaver tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
