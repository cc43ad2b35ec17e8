use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "application-intake", about = "Job application intake service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Apply migrations and start the HTTP server (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
}

impl Cli {
    /// The subcommand to run, falling back to `serve`
    pub fn resolved_command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
