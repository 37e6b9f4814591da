/*!
# Jotter - A Small JSON Journal

This file contains the main application flow: parse arguments, set up
logging, load configuration and hand the command to its handler.

## Usage

```text
jotter [OPTIONS] <COMMAND>

Commands:
  new     Writes a new entry
  edit    Rewrites an existing entry
  show    Prints one entry in full
  list    Lists entries with a title and preview for each
  delete  Deletes one entry after confirmation
  clear   Deletes every entry after confirmation
  export  Writes entries to a JSON export file
  import  Merges a JSON export file into the journal by entry id

Options:
  -v, --verbose              Print verbose (debug) logs to stderr
      --log-format <FORMAT>  Log output format [default: text] [possible values: text, json]
```

## Configuration

- `JOTTER_EDITOR` or `EDITOR`: The editor used to compose entries (defaults to "vim")
- `JOTTER_DIR`: The directory holding `entries.json` (defaults to "~/.local/share/jotter")
*/

use clap::Parser;
use jotter::cli::CliArgs;
use jotter::config::Config;
use jotter::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use jotter::errors::AppResult;
use jotter::{logging, ops};
use std::process::ExitCode;
use tracing::{debug, error, info_span};
use uuid::Uuid;

/// Runs one command and maps the outcome to the process exit code.
///
/// Errors are logged once and printed to stderr; the exit code is then 1.
fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.log_format, args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let invocation_id = Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        invocation_id = %invocation_id
    );
    let _guard = span.enter();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration loaded: {:?}", config);

    ops::run(args.command, &config)
}
