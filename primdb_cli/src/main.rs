use std::io::{self, Write};

use anyhow::Context;
use primdb_core::Database;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_ROOT: &str = "./primdb_data";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ROOT.to_string());
    let mut db = Database::open(&root);
    debug!(root = %root, "opened database");

    println!("primdb (type 'help' or 'exit')");

    loop {
        print!("db> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            // end of input
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        match db.execute(input) {
            Ok(out) => println!("{out}"),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
