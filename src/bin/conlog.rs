//! One binary, two uses: scriptable one-shot logging and a demo tour of the
//! renderers.

use clap::Parser;
use conlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
