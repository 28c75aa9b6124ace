//! filtrace CLI — the command-line front-end for the filament tracing tools.
//!
//! Provides `filtrace params init` for writing a fresh `default.parameters`
//! file and `filtrace params show` for inspecting the resolved parameters.
//! All diagnostics flow through one [`Diagnostics`] facade; fatal errors and
//! usage-requested exits come back as [`ExitRequest`] values that `main`
//! maps to the process exit code.
//!
//! [`ExitRequest`]: filtrace_diagnostics::ExitRequest

#![warn(missing_docs)]

mod params;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use filtrace_diagnostics::{Diagnostics, UsageSource};

/// filtrace — trace filament-like curves in video frames.
#[derive(Parser, Debug)]
#[command(name = "filtrace", version, about = "Filament tracing front-end")]
pub struct Cli {
    /// Directory the `default.parameters` file is resolved from.
    #[arg(long, global = true, default_value = ".")]
    pub params_dir: PathBuf,

    /// Show debug messages, bypassing the parameters file.
    #[arg(long, global = true)]
    pub show_debug: bool,

    /// Show progress messages, bypassing the parameters file.
    #[arg(long, global = true)]
    pub show_progress: bool,

    /// The subcommand to run; prints brief usage when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the `default.parameters` file.
    #[command(subcommand)]
    Params(ParamsCommand),
}

/// Subcommands of `filtrace params`.
#[derive(Subcommand, Debug)]
pub enum ParamsCommand {
    /// Write a fresh `default.parameters` with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Load the parameters file and print the resolved values.
    Show,
}

/// Renders clap's brief usage line for the help operation.
struct BriefUsage;

impl UsageSource for BriefUsage {
    fn brief(&self) -> String {
        let mut cmd = Cli::command();
        cmd.render_usage().to_string()
    }
}

fn main() {
    let cli = Cli::parse();

    // Either override flag bypasses the parameters file entirely.
    let mut diag = if cli.show_debug || cli.show_progress {
        Diagnostics::with_flags(io::stdout(), cli.show_debug, cli.show_progress)
    } else {
        Diagnostics::with_params_dir(io::stdout(), &cli.params_dir)
    };

    let code = match cli.command {
        Some(Command::Params(ParamsCommand::Init { force })) => {
            params::init(&cli.params_dir, force, &mut diag)
        }
        Some(Command::Params(ParamsCommand::Show)) => params::show(&cli.params_dir, &mut diag),
        None => {
            let request = diag.help(
                true,
                &BriefUsage,
                format_args!("run 'filtrace <command> --help' for details\n"),
            );
            request.map_or(0, |r| r.code())
        }
    };

    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["filtrace"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.params_dir, PathBuf::from("."));
        assert!(!cli.show_debug);
        assert!(!cli.show_progress);
    }

    #[test]
    fn parse_params_init_default() {
        let cli = Cli::parse_from(["filtrace", "params", "init"]);
        match cli.command {
            Some(Command::Params(ParamsCommand::Init { force })) => assert!(!force),
            _ => panic!("expected params init"),
        }
    }

    #[test]
    fn parse_params_init_force() {
        let cli = Cli::parse_from(["filtrace", "params", "init", "--force"]);
        match cli.command {
            Some(Command::Params(ParamsCommand::Init { force })) => assert!(force),
            _ => panic!("expected params init"),
        }
    }

    #[test]
    fn parse_params_show_with_globals() {
        let cli = Cli::parse_from([
            "filtrace",
            "params",
            "show",
            "--params-dir",
            "/tmp/run",
            "--show-progress",
        ]);
        assert!(matches!(
            cli.command,
            Some(Command::Params(ParamsCommand::Show))
        ));
        assert_eq!(cli.params_dir, PathBuf::from("/tmp/run"));
        assert!(cli.show_progress);
        assert!(!cli.show_debug);
    }

    #[test]
    fn brief_usage_names_the_binary() {
        let usage = BriefUsage.brief();
        assert!(usage.contains("filtrace"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
