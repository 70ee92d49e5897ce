use std::io::{self, IsTerminal, Write};

use insertion_sort::insertion_sort;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let mut sample: Vec<i64> = vec![2, 4, 5, 1, 3];
    tracing::info!(len = sample.len(), "sorting sample");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{:?}", insertion_sort(&mut sample))?;
    stdout.flush()
}
