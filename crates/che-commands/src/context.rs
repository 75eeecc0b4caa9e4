//! Host process state a command reads.

use std::path::PathBuf;

use che_transport::ChannelConfig;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub struct CommandContext {
    env: EnvLookup,
    /// Directory relative file arguments are resolved against
    pub cwd: Option<PathBuf>,
    pub channel: ChannelConfig,
}

impl CommandContext {
    pub fn new(
        env: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
        cwd: Option<PathBuf>,
        channel: ChannelConfig,
    ) -> Self {
        Self {
            env: Box::new(env),
            cwd,
            channel,
        }
    }

    /// Context backed by the real process environment and working directory.
    pub fn from_process() -> Self {
        Self::new(
            |name| std::env::var(name).ok(),
            std::env::current_dir().ok(),
            ChannelConfig::default(),
        )
    }

    pub fn var(&self, name: &str) -> Option<String> {
        (self.env)(name)
    }
}
