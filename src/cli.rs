use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches the config file.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Competitive programming contest reminder
///
/// Lists upcoming contests from clist.by on a few whitelisted judges and prints
/// ready-to-post reminder announcements.
///
/// Commands:
/// - view: upcoming contests
/// - upcoming: contests ending within the next 48 hours
/// - details <CONTEST_ID>: announcement text for one contest
///
/// Requires CLIST_USER and CLIST_API_KEY in the environment.
#[derive(Parser, Debug)]
#[command(about, long_about, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// One of: view, details, upcoming
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Contest id for `details`
    #[arg(value_name = "CONTEST_ID")]
    pub contest_id: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration", value_name = "PATH")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(
        long = "clear-log-file",
        help_heading = "Configuration",
        conflicts_with = "new_log_file_path"
    )]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr. Standard output stays reserved for contest text.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug", value_name = "PATH")]
    pub log_file: Option<String>,
}
