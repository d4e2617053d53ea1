use tracing::Level;

pub fn setup_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout carries the console dialog, so logs go to stderr without colors.
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}
