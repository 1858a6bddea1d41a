/// Process-boundary error handling.
use tracing::error;

/// Exit status for every fatal error.
pub const EXIT_FAILURE: i32 = 1;

/// Log a fatal error as a single line and terminate with [`EXIT_FAILURE`].
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(EXIT_FAILURE);
    }
}
