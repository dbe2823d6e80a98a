// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Help text for deploy-intent-cli.

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "deploy-intent-cli - deployment parameter resolution and validation v{}

USAGE:
    deploy-intent-cli <COMMAND> [OPTIONS]

COMMANDS:
    check        Resolve defaults and validate an intent file
    resolve      Print the fully resolved intent as JSON
    version      Show version information
    help         Show this help message

OPTIONS:
    -h, --help     Show help for command
    -V, --version  Show version information

EXAMPLES:
    deploy-intent-cli check intent.json
    deploy-intent-cli resolve intent.json
    deploy-intent-cli resolve intent.json --pin-digests
    deploy-intent-cli help resolve

ENVIRONMENT:
    DEPLOY_GIT_SOURCE, DEPLOY_GIT_OWNER, DEPLOY_GIT_NAME
                                      Repository identity of the pipeline
    DEPLOY_APP_LABEL                  Fallback application name
    DEPLOY_BUILD_VERSION              Build version, default image tag
    DEPLOY_RELEASE_ACTION             Release action override (e.g. rollback-canary)
    DEPLOY_LABEL_<KEY>                Pipeline label <key>
    DEPLOY_CREDENTIAL_NAMESPACE       Namespace when none is set
    DEPLOY_CREDENTIAL_PROJECT         Image repository when none is set
    DEPLOY_INTENT_CONFIG              Engine configuration file (TOML)
    DEPLOY_INTENT_DIGEST_CONCURRENCY  Registry lookups in flight
    DEPLOY_INTENT_REGISTRY_FILE       Digest table for --pin-digests
    DEPLOY_INTENT_LOG_FORMAT          text or json
    RUST_LOG                          Log level (debug, info, warn, error)

EXIT CODES:
    0  Success / intent valid
    1  Validation failed
    2  Configuration or input error
    3  Digest resolution error
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "check" => print_check_help(),
        "resolve" => print_resolve_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'deploy-intent-cli help' for general usage.",
                command
            );
        }
    }
}

fn print_check_help() {
    eprintln!(
        "deploy-intent-cli check - Validate a deployment intent

USAGE:
    deploy-intent-cli check <INTENT.JSON>

DESCRIPTION:
    Fills in defaults from pipeline hints, then checks every required
    property. Prints all warnings and errors.

EXIT CODES:
    0  Intent is valid (warnings allowed)
    1  One or more validation errors
    2  Intent file missing or malformed
"
    );
}

fn print_resolve_help() {
    eprintln!(
        "deploy-intent-cli resolve - Print the resolved deployment intent

USAGE:
    deploy-intent-cli resolve <INTENT.JSON> [--pin-digests]

OPTIONS:
    --pin-digests  Replace sidecar image tags with content digests looked
                   up in DEPLOY_INTENT_REGISTRY_FILE

DESCRIPTION:
    Resolves and validates the intent. When valid, writes it to stdout as
    JSON; findings go to stderr.

EXIT CODES:
    0  Resolved intent printed
    1  One or more validation errors
    2  Configuration or input error
    3  Digest lookup failed
"
    );
}
