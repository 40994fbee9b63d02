//! Collaborator traits the layout engine reads from.
//!
//! The engine owns none of these. Hosts lend them for each query through
//! [`Sources`]; every method must be a cheap, synchronous, pure function of
//! its arguments, because answers are cached until the host invalidates them.

use chatkit_text::StyledText;
use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::{AvatarPosition, LabelAlignment};

use crate::{IndexPosition, LocationItem, MediaItem, Message, Sender};

/// The four text labels a message cell can carry, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelSlot {
    /// Above everything else, e.g. a date separator.
    CellTop,
    /// Directly above the bubble, e.g. the sender name.
    BubbleTop,
    /// Directly below the bubble, e.g. the delivery time.
    BubbleBottom,
    /// Below everything else, e.g. a read receipt.
    CellBottom,
}

impl LabelSlot {
    pub const ALL: [LabelSlot; 4] = [
        LabelSlot::CellTop,
        LabelSlot::BubbleTop,
        LabelSlot::BubbleBottom,
        LabelSlot::CellBottom,
    ];

    #[inline]
    pub fn is_top(self) -> bool {
        matches!(self, LabelSlot::CellTop | LabelSlot::BubbleTop)
    }
}

/// Supplies the messages to lay out.
///
/// Follows the lazy item provider pattern: the engine asks for what it
/// needs by index and never iterates the whole conversation unless asked
/// for the total content height.
pub trait MessagesDataSource {
    /// The user the conversation is shown to.
    fn current_sender(&self) -> &Sender;

    /// Decides incoming vs outgoing styling. Defaults to comparing sender ids.
    fn is_from_current_user(&self, message: &Message) -> bool {
        message.sender.id == self.current_sender().id
    }

    /// Number of message sections, not counting the typing indicator.
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize {
        let _ = section;
        1
    }

    /// The message at `index`. Only called with indexes inside the counts
    /// reported above.
    fn message_for_item(&self, index: IndexPosition) -> &Message;

    /// Text of one of the message's labels, `None` when the label is absent.
    fn label_text(
        &self,
        message: &Message,
        index: IndexPosition,
        slot: LabelSlot,
    ) -> Option<StyledText> {
        let _ = (message, index, slot);
        None
    }
}

/// Per-message geometry overrides.
///
/// Methods returning `Option` fall back to the engine configuration on
/// `None`. Media methods own the sizing policy for photos, videos and
/// locations: their answer becomes the bubble size as is.
pub trait MessagesLayoutDelegate {
    fn avatar_size(&self, message: &Message, index: IndexPosition) -> Option<Size> {
        let _ = (message, index);
        None
    }

    fn avatar_position(&self, message: &Message, index: IndexPosition) -> Option<AvatarPosition> {
        let _ = (message, index);
        None
    }

    fn bubble_padding(&self, message: &Message, index: IndexPosition) -> Option<EdgeInsets> {
        let _ = (message, index);
        None
    }

    fn label_alignment(
        &self,
        message: &Message,
        index: IndexPosition,
        slot: LabelSlot,
    ) -> Option<LabelAlignment> {
        let _ = (message, index, slot);
        None
    }

    fn accessory_size(&self, message: &Message, index: IndexPosition) -> Option<Size> {
        let _ = (message, index);
        None
    }

    fn header_size(&self, section: usize, item_width: f32) -> Size {
        let _ = (section, item_width);
        Size::ZERO
    }

    fn footer_size(&self, section: usize, item_width: f32) -> Size {
        let _ = (section, item_width);
        Size::ZERO
    }

    fn typing_indicator_size(&self, item_width: f32) -> Option<Size> {
        let _ = item_width;
        None
    }

    fn typing_indicator_top_inset(&self) -> Option<f32> {
        None
    }

    /// Photo bubble size. Defaults to the placeholder scaled down to fit.
    fn photo_size(
        &self,
        message: &Message,
        item: &MediaItem,
        index: IndexPosition,
        max_width: f32,
    ) -> Size {
        let _ = (message, index);
        item.placeholder_size.aspect_fit_width(max_width)
    }

    /// Video bubble size. Defaults to the placeholder scaled down to fit.
    fn video_size(
        &self,
        message: &Message,
        item: &MediaItem,
        index: IndexPosition,
        max_width: f32,
    ) -> Size {
        let _ = (message, index);
        item.placeholder_size.aspect_fit_width(max_width)
    }

    /// Location snapshot size. Defaults to the preferred size scaled down to fit.
    fn location_size(
        &self,
        message: &Message,
        item: &LocationItem,
        index: IndexPosition,
        max_width: f32,
    ) -> Size {
        let _ = (message, index);
        item.size.aspect_fit_width(max_width)
    }
}

/// Presentation choices. Only fonts reach the layout engine, since they are
/// the only display choice that changes geometry.
pub trait MessagesDisplayDelegate {
    /// Font for text-bearing bubbles (text, emoji base size, contact name).
    fn message_font(&self, message: &Message, index: IndexPosition) -> Option<Font> {
        let _ = (message, index);
        None
    }
}

/// Layout and display delegate that accepts every default.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultDelegates;

impl MessagesLayoutDelegate for DefaultDelegates {}

impl MessagesDisplayDelegate for DefaultDelegates {}

static DEFAULT_DELEGATES: DefaultDelegates = DefaultDelegates;

/// The collaborators lent to the engine for one query.
#[derive(Clone, Copy)]
pub struct Sources<'a> {
    pub data_source: &'a dyn MessagesDataSource,
    pub layout_delegate: &'a dyn MessagesLayoutDelegate,
    pub display_delegate: &'a dyn MessagesDisplayDelegate,
}

impl<'a> Sources<'a> {
    /// Data source with default layout and display delegates.
    pub fn new(data_source: &'a dyn MessagesDataSource) -> Self {
        Self {
            data_source,
            layout_delegate: &DEFAULT_DELEGATES,
            display_delegate: &DEFAULT_DELEGATES,
        }
    }

    pub fn with_layout_delegate(mut self, layout_delegate: &'a dyn MessagesLayoutDelegate) -> Self {
        self.layout_delegate = layout_delegate;
        self
    }

    pub fn with_display_delegate(
        mut self,
        display_delegate: &'a dyn MessagesDisplayDelegate,
    ) -> Self {
        self.display_delegate = display_delegate;
        self
    }
}
