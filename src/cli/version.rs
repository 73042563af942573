//! `--version` and `--help` output.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("postdash {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}
A terminal dashboard for posts and users.

USAGE:
    postdash [OPTIONS] [PATH]

ARGS:
    <PATH>    Initial route: / (default) or /posts/<id>

OPTIONS:
    -r, --route <PATH>    Same as PATH
    -h, --help            Print help
    -V, --version         Print version

ENVIRONMENT:
    POSTDASH_API_URL      API base URL (default: https://jsonplaceholder.typicode.com)
    POSTDASH_LOG          Log filter (default: info)",
        version_text()
    )
}
