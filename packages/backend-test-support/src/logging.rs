//! Test logging initialisation.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn,sqlx=error,sea_orm=error";

/// Install a test-writer subscriber once per process.
///
/// Level precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_FILTER`].
/// Safe to call from every test; later calls are no-ops and an already
/// installed global subscriber is left alone.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
