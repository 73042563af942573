//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the TUI starting at `route`
    Run { route: String },
    /// Bad arguments; the message is printed with the usage
    Invalid(String),
}

/// Parse command-line arguments, program name first.
///
/// ```
/// use postdash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postdash".to_string(), "/posts/3".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run { route: "/posts/3".to_string() }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut route: Option<String> = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--route" | "-r" => match args.next() {
                Some(value) => route = Some(value),
                None => return CliCommand::Invalid(format!("{} requires a path", arg)),
            },
            _ if arg.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option: {}", arg));
            }
            _ => route = Some(arg),
        }
    }

    CliCommand::Run {
        route: route.unwrap_or_else(|| "/".to_string()),
    }
}
