//! Bubble sizing strategies, one per message kind.
//!
//! The engine resolves placement and the bubble's maximum width, then hands
//! the message to the calculator [`CalculatorSet::for_message`] picks. A
//! calculator only ever sees kinds it was registered for; anything else is a
//! wiring bug and comes back as [`ConfigurationError::UnhandledMessageKind`].

mod audio;
mod contact;
mod link_preview;
mod media;
mod text;

use chatkit_text::TextMeasurer;
use chatkit_ui_graphics::{Font, Size};
use chatkit_ui_layout::ConfigurationError;

use crate::{
    IndexPosition, LayoutAttributesBuilder, Message, MessageKind, MessagesDisplayDelegate,
    MessagesLayoutConfig, MessagesLayoutDelegate,
};

pub use audio::{format_duration, AudioMessageSizeCalculator};
pub use contact::ContactMessageSizeCalculator;
pub use link_preview::LinkPreviewMessageSizeCalculator;
pub use media::{LocationMessageSizeCalculator, MediaMessageSizeCalculator};
pub use text::TextMessageSizeCalculator;

/// Everything a calculator may read besides the message itself.
#[derive(Clone, Copy)]
pub struct SizingContext<'a> {
    pub index: IndexPosition,
    pub is_from_current_user: bool,
    /// Width of the whole cell.
    pub item_width: f32,
    /// Widest the bubble may get once avatar, padding and accessory are
    /// taken out. May be zero or negative while the host is resizing.
    pub bubble_max_width: f32,
    pub measurer: &'a dyn TextMeasurer,
    pub layout_delegate: &'a dyn MessagesLayoutDelegate,
    pub display_delegate: &'a dyn MessagesDisplayDelegate,
}

impl SizingContext<'_> {
    /// Font from the display delegate, or `fallback` when it has no opinion.
    pub fn message_font(&self, message: &Message, fallback: &Font) -> Font {
        self.display_delegate
            .message_font(message, self.index)
            .unwrap_or_else(|| fallback.clone())
    }
}

/// Sizes the bubble for one family of message kinds.
pub trait MessageSizeCalculator {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Widest the content may be laid out; passed back into
    /// [`content_size`](Self::content_size) as `max_width`.
    fn max_content_width(&self, message: &Message, ctx: &SizingContext<'_>) -> f32 {
        let _ = message;
        ctx.bubble_max_width
    }

    /// Bubble size for `message`. Must be [`Size::ZERO`] when `max_width`
    /// is not positive.
    fn content_size(
        &self,
        message: &Message,
        max_width: f32,
        ctx: &SizingContext<'_>,
    ) -> Result<Size, ConfigurationError>;

    /// Stamps kind-specific metrics onto the attributes being composed.
    fn configure(
        &self,
        message: &Message,
        ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        let _ = (message, ctx, builder);
    }
}

/// Error for a message routed to a calculator that does not size its kind.
pub(crate) fn unhandled(calculator: &'static str, message: &Message) -> ConfigurationError {
    ConfigurationError::UnhandledMessageKind {
        calculator,
        kind: message.kind.name(),
    }
}

/// The calculators the engine dispatches to.
pub struct CalculatorSet {
    text: TextMessageSizeCalculator,
    attributed_text: TextMessageSizeCalculator,
    emoji: TextMessageSizeCalculator,
    contact: ContactMessageSizeCalculator,
    link_preview: LinkPreviewMessageSizeCalculator,
    media: MediaMessageSizeCalculator,
    location: LocationMessageSizeCalculator,
    audio: AudioMessageSizeCalculator,
    custom: Option<Box<dyn MessageSizeCalculator>>,
}

impl CalculatorSet {
    pub fn from_config(config: &MessagesLayoutConfig) -> Self {
        Self {
            text: TextMessageSizeCalculator::new(config.text.clone()),
            attributed_text: TextMessageSizeCalculator::new(config.attributed_text.clone()),
            emoji: TextMessageSizeCalculator::emoji(config.emoji.clone()),
            contact: ContactMessageSizeCalculator::new(config.contact.clone()),
            link_preview: LinkPreviewMessageSizeCalculator::new(
                config.text.clone(),
                config.link_preview.clone(),
            ),
            media: MediaMessageSizeCalculator,
            location: LocationMessageSizeCalculator,
            audio: AudioMessageSizeCalculator::new(config.audio.clone()),
            custom: None,
        }
    }

    /// Registers the calculator for [`MessageKind::Custom`] messages,
    /// returning the one it replaces.
    pub fn set_custom(
        &mut self,
        calculator: Box<dyn MessageSizeCalculator>,
    ) -> Option<Box<dyn MessageSizeCalculator>> {
        self.custom.replace(calculator)
    }

    pub(crate) fn take_custom(&mut self) -> Option<Box<dyn MessageSizeCalculator>> {
        self.custom.take()
    }

    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    pub fn for_message(
        &self,
        message: &Message,
    ) -> Result<&dyn MessageSizeCalculator, ConfigurationError> {
        let calculator: &dyn MessageSizeCalculator = match &message.kind {
            MessageKind::Text(_) | MessageKind::System(_) => &self.text,
            MessageKind::AttributedText(_) => &self.attributed_text,
            MessageKind::Emoji(_) => &self.emoji,
            MessageKind::Photo(_) | MessageKind::Video(_) => &self.media,
            MessageKind::Location(_) => &self.location,
            MessageKind::Audio(_) => &self.audio,
            MessageKind::Contact(_) => &self.contact,
            MessageKind::LinkPreview(_) => &self.link_preview,
            MessageKind::Custom(_) => match &self.custom {
                Some(custom) => custom.as_ref(),
                None => {
                    return Err(ConfigurationError::MissingCustomCalculator {
                        message_id: message.message_id.clone(),
                    })
                }
            },
        };
        Ok(calculator)
    }
}

#[cfg(test)]
#[path = "../tests/calculators_tests.rs"]
mod tests;
