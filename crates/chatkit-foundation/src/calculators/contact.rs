use chatkit_text::measure_plain;
use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::ConfigurationError;

use super::{unhandled, MessageSizeCalculator, SizingContext};
use crate::{ContentMetrics, LayoutAttributesBuilder, Message, MessageKind, TextSizeConfig};

/// Sizes contact cards by their display name. The wide insets leave room for
/// the initials badge and the disclosure indicator.
#[derive(Clone, Debug)]
pub struct ContactMessageSizeCalculator {
    config: TextSizeConfig,
}

impl ContactMessageSizeCalculator {
    pub fn new(config: TextSizeConfig) -> Self {
        Self { config }
    }

    fn insets(&self, is_from_current_user: bool) -> EdgeInsets {
        *self.config.insets.get(is_from_current_user)
    }

    fn font(&self, message: &Message, ctx: &SizingContext<'_>) -> Font {
        ctx.message_font(message, &self.config.font)
    }
}

impl MessageSizeCalculator for ContactMessageSizeCalculator {
    fn name(&self) -> &'static str {
        "ContactMessageSizeCalculator"
    }

    fn max_content_width(&self, _message: &Message, ctx: &SizingContext<'_>) -> f32 {
        ctx.bubble_max_width - self.insets(ctx.is_from_current_user).horizontal_sum()
    }

    fn content_size(
        &self,
        message: &Message,
        max_width: f32,
        ctx: &SizingContext<'_>,
    ) -> Result<Size, ConfigurationError> {
        let MessageKind::Contact(contact) = &message.kind else {
            return Err(unhandled(self.name(), message));
        };
        if max_width.is_nan() || max_width <= 0.0 {
            return Ok(Size::ZERO);
        }
        let font = self.font(message, ctx);
        let measured = measure_plain(ctx.measurer, &contact.display_name, &font, max_width);
        Ok(measured.inflate(self.insets(ctx.is_from_current_user)))
    }

    fn configure(
        &self,
        message: &Message,
        ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        builder.content(ContentMetrics::Contact {
            font: self.font(message, ctx),
            insets: self.insets(ctx.is_from_current_user),
        });
    }
}
