/// Diagnostic logging setup shared by every binary.
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber: stderr only, `DEBUG` when verbose,
/// otherwise `INFO`.
///
/// Standard output is left untouched so a report written to stdout is never
/// interleaved with log lines. Colour codes are only emitted when stderr is a
/// terminal.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");
}
