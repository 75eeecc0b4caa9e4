//! `open` command: show a local file in the workspace's browser editor.
//!
//! Flow:
//!   1. Resolve the file argument to an existing absolute path
//!   2. Read the Che workspace configuration
//!   3. Fetch the workspace runtime and find the `theia` control endpoint
//!   4. Connect to the local editor gateway with that endpoint as origin
//!   5. Send the `open` and `data` envelopes, then close

use std::path::PathBuf;

use che_transport::CommandChannel;
use che_workspace::WorkspaceResolver;
use clap::Args;
use tracing::{debug, info};

use crate::config::CheEnv;
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::target::resolve_target;

#[derive(Args, Debug, Clone)]
pub struct OpenArgs {
    /// File to open in the editor
    pub file: Option<PathBuf>,
}

pub async fn run(args: &OpenArgs, ctx: &CommandContext) -> Result<(), CommandError> {
    let file = args.file.as_deref().ok_or(CommandError::MissingArgument)?;
    let target = resolve_target(file, ctx.cwd.as_deref())?;
    debug!("Resolved {} to {target}", file.display());

    let env = CheEnv::from_lookup(|name| ctx.var(name))?;

    let resolver = WorkspaceResolver::new(env.api_url, env.machine_token);
    let endpoint = resolver.resolve_endpoint(&env.workspace_id).await?;
    info!("Workspace {} editor endpoint: {endpoint}", env.workspace_id);

    let channel = CommandChannel::connect(&ctx.channel, endpoint.as_str()).await?;
    channel.open_file(&target).await?;
    Ok(())
}
