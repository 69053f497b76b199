use crate::policy::SuppressPolicy;
use std::time::Duration;

/// Navigation
#[derive(Clone, Debug, Default, clap::Parser)]
#[command(rename_all_env = "SCREAMING_SNAKE_CASE", next_help_heading = "Navigation")]
pub struct NavigatorConfig {
    /// Navigation failures which get absorbed instead of being reported
    #[arg(long = "navigation-suppress", env = "NAVIGATION_SUPPRESS", value_enum, default_value = "all")]
    pub suppress: SuppressPolicy,

    /// Maximum time a single navigation waits for the router to be loaded
    #[arg(long, env)]
    pub router_load_timeout: Option<humantime::Duration>,
}

impl NavigatorConfig {
    pub fn load_timeout(&self) -> Option<Duration> {
        self.router_load_timeout.map(Into::into)
    }
}
