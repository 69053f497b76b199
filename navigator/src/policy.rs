use crate::error::NavigationError;

/// Decides which navigation failures are absorbed instead of being returned to the caller.
///
/// Loader failures are not navigation failures and are never absorbed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SuppressPolicy {
    /// Absorb every navigation failure. The caller can't tell a redundant navigation from a
    /// broken route.
    #[default]
    #[clap(name = "all")]
    All,
    /// Absorb only navigations to the current location.
    #[clap(name = "duplicates")]
    Duplicates,
    /// Return every navigation failure.
    #[clap(name = "none")]
    None,
}

impl SuppressPolicy {
    pub fn suppresses(&self, err: &NavigationError) -> bool {
        match self {
            Self::All => true,
            Self::Duplicates => err.is_duplicated(),
            Self::None => false,
        }
    }
}
