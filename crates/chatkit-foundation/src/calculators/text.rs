use chatkit_text::{measure_text, StyledText};
use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::ConfigurationError;

use super::{unhandled, MessageSizeCalculator, SizingContext};
use crate::{ContentMetrics, LayoutAttributesBuilder, Message, MessageKind, TextSizeConfig};

/// Sizes text, attributed text, emoji and system messages: the measured text
/// plus the sender-dependent insets around it.
#[derive(Clone, Debug)]
pub struct TextMessageSizeCalculator {
    config: TextSizeConfig,
    /// Applied to fonts coming from the display delegate. Configured fonts
    /// are taken as they are.
    delegate_font_scale: f32,
}

impl TextMessageSizeCalculator {
    pub fn new(config: TextSizeConfig) -> Self {
        Self {
            config,
            delegate_font_scale: 1.0,
        }
    }

    /// Emoji variant: a display-delegate font is drawn at twice its size.
    pub fn emoji(config: TextSizeConfig) -> Self {
        Self {
            config,
            delegate_font_scale: 2.0,
        }
    }

    pub fn config(&self) -> &TextSizeConfig {
        &self.config
    }

    pub fn insets(&self, is_from_current_user: bool) -> EdgeInsets {
        *self.config.insets.get(is_from_current_user)
    }

    fn font(&self, message: &Message, ctx: &SizingContext<'_>) -> Font {
        match ctx.display_delegate.message_font(message, ctx.index) {
            Some(font) if self.delegate_font_scale != 1.0 => font.scaled(self.delegate_font_scale),
            Some(font) => font,
            None => self.config.font.clone(),
        }
    }

    fn text(
        &self,
        message: &Message,
        ctx: &SizingContext<'_>,
    ) -> Result<StyledText, ConfigurationError> {
        match &message.kind {
            MessageKind::Text(text) | MessageKind::Emoji(text) | MessageKind::System(text) => {
                Ok(StyledText::plain(text.as_str(), self.font(message, ctx)))
            }
            MessageKind::AttributedText(text) => Ok(text.clone()),
            _ => Err(unhandled(self.name(), message)),
        }
    }
}

impl MessageSizeCalculator for TextMessageSizeCalculator {
    fn name(&self) -> &'static str {
        "TextMessageSizeCalculator"
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
        let text = self.text(message, ctx)?;
        if max_width.is_nan() || max_width <= 0.0 {
            return Ok(Size::ZERO);
        }
        let measured = measure_text(ctx.measurer, &text, max_width);
        Ok(measured.inflate(self.insets(ctx.is_from_current_user)))
    }

    fn configure(
        &self,
        message: &Message,
        ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        let font = match message.kind {
            MessageKind::AttributedText(_) => self.config.font.clone(),
            _ => self.font(message, ctx),
        };
        builder.content(ContentMetrics::Text {
            font,
            insets: self.insets(ctx.is_from_current_user),
        });
    }
}
