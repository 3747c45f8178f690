//! Shell completions command

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use tracing::info;

use crate::cli::output::{path_style, success};
use crate::cli::Cli;

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");

        match &self.output {
            Some(path) => {
                write_script(self.shell, &mut std::fs::File::create(path)?);
                if !cli.quiet {
                    success(&format!(
                        "{} completions written to {}",
                        self.shell,
                        path_style().apply_to(path.display())
                    ));
                }
            }
            None => write_script(self.shell, &mut io::stdout().lock()),
        }

        Ok(())
    }
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    clap_complete::generate(shell, &mut Cli::command(), "wneud", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_mentions_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let mut buf = Vec::new();
            write_script(shell, &mut buf);

            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("changelog"), "{shell}");
            assert!(script.contains("completions"), "{shell}");
        }
    }

    #[test]
    fn test_parse_shell_argument() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["wneud", "completions", "powershell"]).unwrap();
        match cli.command {
            crate::cli::Commands::Completions(cmd) => assert_eq!(cmd.shell, Shell::PowerShell),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
