//! Command selection

use super::Args;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan a directory and print its dependency index
    Scan(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Scan(args)
    }
}
