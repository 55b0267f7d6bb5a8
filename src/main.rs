// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `weather_temp` binary module.
//!
//! Invoked by the configuration-management host with the path of a JSON
//! parameter file. Prints exactly one JSON object on stdout; logs go to
//! stderr and are filtered with `RUST_LOG` (default `warn`).

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_temp::host::{ModuleArgs, ModuleOutput};

#[derive(Parser)]
#[command(name = "weather_temp")]
#[command(about = "Store the current temperature of a city, rewriting the file only on change")]
struct Cli {
    /// JSON file holding the module parameters
    args_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = run(std::env::args_os()).await;

    println!("{}", output.to_json());
    if output.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run<I, T>(args: I) -> ModuleOutput
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return ModuleOutput::rejected(format!("invalid command line: {e}")),
    };

    let document = match std::fs::read_to_string(&cli.args_file) {
        Ok(document) => document,
        Err(e) => {
            return ModuleOutput::rejected(format!(
                "cannot read module arguments from {}: {e}",
                cli.args_file.display()
            ));
        }
    };

    let invocation = match ModuleArgs::from_json(&document) {
        Ok(args) => args.validate(),
        Err(e) => return ModuleOutput::rejected(format!("invalid module arguments: {e}")),
    };

    match invocation {
        Ok(invocation) => {
            tracing::debug!(?invocation, "Starting temperature check");
            invocation.run().await
        }
        Err(e) => ModuleOutput::rejected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_args_file_argument_is_reported_as_json() {
        let output = run(["weather_temp"]).await;
        assert!(output.is_failure());
        let json: serde_json::Value = serde_json::from_str(&output.to_json()).unwrap();
        assert_eq!(json["failed"], true);
        assert!(
            json["msg"]
                .as_str()
                .unwrap()
                .starts_with("invalid command line:")
        );
    }

    #[tokio::test]
    async fn unreadable_args_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("args.json");
        let output = run([OsString::from("weather_temp"), missing.into_os_string()]).await;
        assert!(output.is_failure());
        assert!(output.to_json().contains("cannot read module arguments"));
    }

    #[tokio::test]
    async fn invalid_args_document() {
        let dir = tempfile::tempdir().unwrap();
        let args = dir.path().join("args.json");
        std::fs::write(&args, r#"{"api_key": "k", "city": "Oslo"}"#).unwrap();
        let output = run([OsString::from("weather_temp"), args.into_os_string()]).await;
        assert!(output.is_failure());
        assert!(output.to_json().contains("invalid module arguments"));
    }
}
