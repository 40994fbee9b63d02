//! Message layout and sizing for chat transcripts.
//!
//! Hosts implement [`MessagesDataSource`] (and optionally the layout and
//! display delegates), lend them to a [`MessagesLayout`] through
//! [`Sources`], and ask it for item sizes, attributes and frames.

mod attributes;
mod cache;
pub mod calculators;
mod config;
mod delegates;
mod frames;
mod index;
mod layout;
mod message;
mod typing;

pub use attributes::*;
pub use cache::{AttributeCache, SupplementaryKind};
pub use calculators::{
    format_duration, AudioMessageSizeCalculator, CalculatorSet, ContactMessageSizeCalculator,
    LinkPreviewMessageSizeCalculator, LocationMessageSizeCalculator, MediaMessageSizeCalculator,
    MessageSizeCalculator, SizingContext, TextMessageSizeCalculator,
};
pub use config::*;
pub use delegates::*;
pub use frames::CellFrames;
pub use index::IndexPosition;
pub use layout::MessagesLayout;
pub use message::*;
pub use typing::{SectionChange, TypingIndicatorUpdate};

pub mod prelude {
    pub use crate::attributes::{LayoutAttributes, LabelLayout};
    pub use crate::calculators::MessageSizeCalculator;
    pub use crate::config::MessagesLayoutConfig;
    pub use crate::delegates::{
        LabelSlot, MessagesDataSource, MessagesDisplayDelegate, MessagesLayoutDelegate, Sources,
    };
    pub use crate::frames::CellFrames;
    pub use crate::index::IndexPosition;
    pub use crate::layout::MessagesLayout;
    pub use crate::message::{Message, MessageKind, Sender};
}
