use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::{env, process};

use clap::Parser;
use code_dbg_core::editor::create_opener;
use code_dbg_core::{CodeDbgError, EditorChannel, LaunchPayload, LaunchUrl};
use code_dbg_utils::{info, init_logging, init_logging_with_level, LogFormat, LogLevel};

/// Binary name that implies `--insiders`
const INSIDERS_ALIAS: &str = "code-dbg-insiders";

/// Launch VS Code debugger from terminal without launch.json
#[derive(Parser, Debug)]
#[command(name = "code-dbg")]
#[command(version)]
#[command(about = "Launch VS Code debugger from terminal without launch.json", long_about = None)]
#[command(override_usage = "code-dbg [OPTIONS] -- <exe> [exe-args...]")]
#[command(after_help = "Use -- to separate code-dbg options from the executable and its arguments.\n\
                        This is required if your executable takes arguments starting with --")]
struct Cli
{
    /// Working directory for the process (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,
    /// Use VS Code Insiders URL scheme and launcher
    #[arg(long, default_value_t = false)]
    insiders: bool,
    /// Only generate and print the URL, do not launch VS Code
    #[arg(long, default_value_t = false)]
    url_only: bool,
    /// Log verbosity for code-dbg itself (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
    /// Path to executable to debug (relative or absolute)
    #[arg(required = true)]
    exe: String,
    /// Arguments to pass to the executable
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main()
{
    let raw_args: Vec<OsString> = env::args_os().collect();

    // Require -- so options can never be confused with the executable's own flags
    if !has_separator(&raw_args) {
        eprintln!("Error: Missing '--' separator");
        eprintln!("Usage: code-dbg [OPTIONS] -- <exe> [exe-args...]");
        eprintln!("Example: code-dbg --cwd=/tmp -- ./app.exe arg1 arg2");
        process::exit(1);
    }

    let mut cli = Cli::parse_from(&raw_args);
    if invoked_as_insiders(raw_args.first().map(OsString::as_os_str)) {
        cli.insiders = true;
    }

    let logging = match cli.log_level {
        Some(level) => init_logging_with_level(level, LogFormat::from_env()),
        None => init_logging(),
    };
    let _logging = match logging {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let channel = if cli.insiders {
        EditorChannel::Insiders
    } else {
        EditorChannel::Stable
    };

    let (payload, url) = match prepare(&cli, channel) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Always printed, for logging and for test automation
    println!("{url}");

    if cli.url_only {
        return;
    }

    let opener = create_opener(channel);
    info!(opener = opener.name(), channel = %channel, "Launching editor");
    if let Err(e) = opener.open(&url) {
        eprintln!("Error: {}", e);
        if matches!(e, CodeDbgError::EditorNotFound { .. }) {
            eprintln!("Please ensure VS Code is installed and the proper command is available.");
            eprintln!();
            eprintln!("You can manually open this URL in VS Code:");
            eprintln!("{url}");
        }
        process::exit(1);
    }

    println!("Launching debugger for: {}", payload.exe_name());
}

fn prepare(cli: &Cli, channel: EditorChannel) -> Result<(LaunchPayload, LaunchUrl), CodeDbgError>
{
    info!("Preparing launch of {} with args: {:?}", cli.exe, cli.args);
    let payload = LaunchPayload::resolve(&cli.exe, cli.args.clone(), cli.cwd.as_deref())?;
    let url = LaunchUrl::new(channel, &payload)?;
    Ok((payload, url))
}

/// Whether a bare `--` appears after the program name
fn has_separator(raw_args: &[OsString]) -> bool
{
    raw_args.iter().skip(1).any(|arg| arg == "--")
}

fn invoked_as_insiders(program: Option<&OsStr>) -> bool
{
    program
        .and_then(|p| Path::new(p).file_stem())
        .is_some_and(|stem| stem == INSIDERS_ALIAS)
}
