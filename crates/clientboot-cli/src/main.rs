//! clientboot
//!
//! Resolves the read and write data-access clients once at startup, then
//! prints their data sources or exits non-zero with every failure message.

mod report;

use std::io;
use std::process::ExitCode;

use clientboot_core::{bootstrap, logger_from_env, BootConfig, Bootstrap};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let boot = Bootstrap::new(BootConfig::default(), logger_from_env());
    let clients = bootstrap::initialize(boot).await;

    match report::report(clients, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Failed to write report: {}", e);
            ExitCode::FAILURE
        }
    }
}
