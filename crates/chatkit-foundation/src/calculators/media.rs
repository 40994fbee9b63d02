use chatkit_ui_graphics::Size;
use chatkit_ui_layout::ConfigurationError;

use super::{unhandled, MessageSizeCalculator, SizingContext};
use crate::{ContentMetrics, LayoutAttributesBuilder, Message, MessageKind};

/// Photos and videos. The layout delegate owns the sizing policy; its answer
/// is used as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaMessageSizeCalculator;

impl MessageSizeCalculator for MediaMessageSizeCalculator {
    fn name(&self) -> &'static str {
        "MediaMessageSizeCalculator"
    }

    fn content_size(
        &self,
        message: &Message,
        max_width: f32,
        ctx: &SizingContext<'_>,
    ) -> Result<Size, ConfigurationError> {
        let item = match &message.kind {
            MessageKind::Photo(item) | MessageKind::Video(item) => item,
            _ => return Err(unhandled(self.name(), message)),
        };
        if max_width.is_nan() || max_width <= 0.0 {
            return Ok(Size::ZERO);
        }
        let delegate = ctx.layout_delegate;
        Ok(match message.kind {
            MessageKind::Video(_) => delegate.video_size(message, item, ctx.index, max_width),
            _ => delegate.photo_size(message, item, ctx.index, max_width),
        })
    }

    fn configure(
        &self,
        _message: &Message,
        _ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        builder.content(ContentMetrics::Media);
    }
}

/// Location snapshots, sized by the layout delegate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationMessageSizeCalculator;

impl MessageSizeCalculator for LocationMessageSizeCalculator {
    fn name(&self) -> &'static str {
        "LocationMessageSizeCalculator"
    }

    fn content_size(
        &self,
        message: &Message,
        max_width: f32,
        ctx: &SizingContext<'_>,
    ) -> Result<Size, ConfigurationError> {
        let MessageKind::Location(item) = &message.kind else {
            return Err(unhandled(self.name(), message));
        };
        if max_width.is_nan() || max_width <= 0.0 {
            return Ok(Size::ZERO);
        }
        Ok(ctx
            .layout_delegate
            .location_size(message, item, ctx.index, max_width))
    }

    fn configure(
        &self,
        _message: &Message,
        _ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        builder.content(ContentMetrics::Location);
    }
}
