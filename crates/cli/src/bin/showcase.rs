use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    showcase_cli::main_entry()
}
