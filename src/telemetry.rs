//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a JSON `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod test {
    #[test]
    fn test_init_twice() {
        super::init();
        super::init();

        tracing::info!("still fine");
    }
}
