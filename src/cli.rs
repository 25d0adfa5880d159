//! Command-line interface.

use crate::chooser::validate_folder_name;
use crate::config::Config;
use crate::keymap::KeymapPreset;
use crate::utils::{expand_path, get_home_dir};
use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

/// Pick a directory in the terminal and print its path
#[derive(Parser, Debug)]
#[command(
    name = "dirchooser",
    version,
    about = "Pick a directory in the terminal and print its path",
    long_about = "Browse folders, optionally create one, and print the chosen \
                  absolute path on stdout. Exits 0 when a folder was chosen and \
                  1 when cancelled.",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Offer to create a folder with this name in the current directory
    #[arg(long, value_name = "NAME", value_parser = parse_folder_name)]
    pub new_dir_name: Option<String>,

    /// Directory to start in (default: configured start_dir, then home)
    #[arg(long, short, value_name = "PATH")]
    pub start: Option<PathBuf>,

    /// Color theme for this session (also respects NO_COLOR env var)
    #[arg(long, value_parser = ["dark", "light", "nocolor"])]
    pub theme: Option<String>,

    /// Keymap preset for this session
    #[arg(long, value_parser = ["standard", "vim", "emacs"])]
    pub keymap: Option<String>,

    /// Terminate the printed path with NUL instead of a newline
    #[arg(long, short = '0')]
    pub print0: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,
    },
    /// Print the log file location
    Logs,
    /// Print the configuration file location
    Config,
}

fn parse_folder_name(name: &str) -> Result<String, String> {
    validate_folder_name(name)?;
    Ok(name.to_string())
}

impl Cli {
    /// Run a subcommand. Returns `false` when there is none and the TUI
    /// should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Completions { shell }) => Self::cmd_completions(*shell)?,
            Some(Commands::Logs) => {
                println!("{}", crate::utils::get_log_dir().join("dirchooser.log").display());
            }
            Some(Commands::Config) => {
                println!("{}", crate::utils::get_config_path().display());
            }
            None => return Ok(false),
        }
        Ok(true)
    }

    fn cmd_completions(shell: Option<Shell>) -> Result<()> {
        let Some(shell) = shell.or_else(Shell::from_env) else {
            bail!("Could not automatically detect shell");
        };

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        Ok(())
    }

    /// Apply session overrides (`--theme`, `--keymap`) on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(keymap) = &self.keymap {
            config.keymap.preset = keymap.parse::<KeymapPreset>().map_err(anyhow::Error::msg)?;
        }
        Ok(())
    }

    /// Directory the chooser opens first: `--start`, then the configured
    /// `start_dir`, then the home directory. Relative paths resolve
    /// against `cwd`.
    pub fn start_dir(&self, config: &Config, cwd: &Path) -> PathBuf {
        if let Some(start) = &self.start {
            return expand_path(&start.to_string_lossy(), cwd);
        }
        if let Some(start) = &config.start_dir {
            let home = get_home_dir();
            return expand_path(&start.to_string_lossy(), &home);
        }
        get_home_dir()
    }
}
