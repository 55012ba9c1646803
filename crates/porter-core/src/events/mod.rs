//! Process lifecycle events shared by the `porter` CLI and `porter-ui`.
//!
//! Every binary logs startup, shutdown and any error that ends a command with
//! the same event names, tagged with the binary that emitted them.

use tracing::{error, info};

/// Log that `binary` finished starting up.
pub fn log_app_startup(binary: &str) {
    info!(
        event = "porter.app.started",
        binary = binary,
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown(binary: &str) {
    info!(event = "porter.app.stopped", binary = binary);
}

/// Log an error that aborted the current command or window.
pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "porter.app.failed",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
