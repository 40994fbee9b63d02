//! Configuration errors raised by placement resolution and attribute composition.

use thiserror::Error;

/// An integration bug: the host handed the layout engine a combination it
/// cannot lay out.
///
/// These are never produced by message content or bounds changes, only by
/// mis-wired delegates and calculators, so the engine treats them as fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unresolved natural {placement} placement reached geometry; resolve it against the sender first")]
    UnresolvedNaturalPlacement { placement: &'static str },
    #[error("message `{message_id}` has a custom kind but no custom size calculator is registered")]
    MissingCustomCalculator { message_id: String },
    #[error("{calculator} cannot size a `{kind}` message")]
    UnhandledMessageKind {
        calculator: &'static str,
        kind: &'static str,
    },
    #[error("layout attributes are missing `{field}`")]
    IncompleteAttributes { field: &'static str },
}

impl ConfigurationError {
    /// Aborts layout with this error as the panic message.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("layout configuration error: {self}")
    }
}
