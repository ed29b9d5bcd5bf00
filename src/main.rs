//! # KJPL
//!
//! Command line front end. Runs a program file, or an interactive
//! session when no file is given.

use clap::Parser;
use kjpl::mach::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kjpl", version, about = "Run KJPL programs")]
struct Args {
    /// Program file to run. Starts an interactive session when omitted.
    file: Option<PathBuf>,

    /// Deepest allowed nesting of CALL.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Deepest allowed nesting of blocks and calls together.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Most statements one program may execute.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_STEPS)]
    max_steps: usize,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let config = Config {
        max_call_depth: args.max_call_depth,
        max_nesting: args.max_nesting,
        max_steps: args.max_steps,
    };
    std::process::exit(kjpl::term::main(config, args.file.as_deref()));
}

/// Enable with `RUST_LOG=kjpl=debug` or `RUST_LOG=kjpl=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
