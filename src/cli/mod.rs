//! CLI module for postdash.
//!
//! Called early in `main()` to handle flags before the TUI starts:
//!
//! ```ignore
//! use postdash::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let route = match run_cli_command(command) {
//!     Ok(Some(route)) => route,
//!     Ok(None) => return Ok(()),
//!     Err(code) => std::process::exit(code),
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{help_text, version_text, VERSION};

/// Run a CLI command if applicable.
///
/// - `Ok(Some(route))` - start the TUI at `route`
/// - `Ok(None)` - output printed, exit successfully
/// - `Err(code)` - bad arguments, exit with `code`
pub fn run_cli_command(command: CliCommand) -> Result<Option<String>, i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Ok(None)
        }
        CliCommand::Help => {
            println!("{}", help_text());
            Ok(None)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, help_text());
            Err(2)
        }
        CliCommand::Run { route } => Ok(Some(route)),
    }
}
