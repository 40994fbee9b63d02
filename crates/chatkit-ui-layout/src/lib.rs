//! Placement policies for Chatkit message cells
//!
//! Value types describing where an avatar, a label or an accessory view sits
//! relative to its cell or its bubble. Placements that depend on the sender
//! (`Natural`) come in an unresolved form that delegates hand out and a
//! resolved form that geometry code accepts.

mod accessory;
mod alignment;
mod error;

pub use accessory::*;
pub use alignment::*;
pub use error::*;

pub mod prelude {
    pub use crate::accessory::AccessoryPosition;
    pub use crate::alignment::{
        AvatarPosition, AvatarSide, HorizontalPosition, LabelAlignment, LabelAnchor,
        ResolvedAvatarPosition, ResolvedLabelAlignment, ResolvedLabelAnchor, VerticalPosition,
    };
    pub use crate::error::ConfigurationError;
}
