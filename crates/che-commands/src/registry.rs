//! Command registry: every subcommand the CLI exposes.

use clap::Subcommand;
use tracing::debug;

use crate::context::CommandContext;
use crate::error::CommandError;
use crate::open::{self, OpenArgs};

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open a file in Eclipse Che
    #[command(long_about = "Open the given file in the Eclipse Che editor")]
    Open(OpenArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "open",
        }
    }

    pub async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        debug!("Running command: {}", self.name());
        match self {
            Self::Open(args) => open::run(args, ctx).await,
        }
    }
}
