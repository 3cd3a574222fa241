use core::fmt;

use crate::domain::dto::Rejection;

/// Error surfaced to the caller of the light controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightError<E> {
    /// The channel sink refused a duty write or commit
    Sink(E),
}

impl<E: fmt::Debug> fmt::Display for LightError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightError::Sink(e) => write!(f, "Channel sink error: {:?}", e),
        }
    }
}

/// How an attribute event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// State changed and the endpoint's channels were committed
    Applied,
    /// Event was acknowledged without any state change
    Ignored(Rejection),
}

impl Handled {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Handled::Applied)
    }
}
