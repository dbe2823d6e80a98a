// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! deploy-intent-cli entry point.

mod cli_parser;

use std::process::ExitCode;

use deploy_intent::cli::{self, CliError};
use deploy_intent::{config, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let rest = args.get(2..).unwrap_or(&[]);

    match command {
        "help" | "--help" | "-h" => {
            if let Some(sub) = args.get(2) {
                cli_parser::print_command_help(sub);
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("deploy-intent-cli {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "check" | "resolve" => run_command(command, rest).await,
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::from(cli::EXIT_INPUT)
        }
    }
}

async fn run_command(command: &str, args: &[String]) -> ExitCode {
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(cli::EXIT_INPUT);
        }
    };
    logging::init(config.log_format);

    let env = config::env_snapshot();
    let result = match command {
        "check" => cli::run_check(args, &env),
        _ => cli::run_resolve(args, &env, &config).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => report_failure(command, &e),
    }
}

fn report_failure(command: &str, error: &CliError) -> ExitCode {
    eprintln!("Error: {}", error);
    if matches!(
        error,
        CliError::MissingArgument(_) | CliError::UnknownArgument(_)
    ) {
        cli_parser::print_command_help(command);
    }
    ExitCode::from(error.exit_code())
}
