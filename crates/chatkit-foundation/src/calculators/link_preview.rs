use chatkit_text::measure_plain;
use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::ConfigurationError;
use smallvec::SmallVec;

use super::{unhandled, MessageSizeCalculator, SizingContext};
use crate::{
    ContentMetrics, LayoutAttributesBuilder, LinkItem, LinkPreviewSizeConfig, Message,
    MessageKind, TextSizeConfig,
};

/// Message text on top, then a thumbnail with title, teaser and domain
/// stacked beside it.
///
/// The bubble is widened to a fraction of the item width so previews of
/// short messages stay readable, but never past the bubble's maximum width.
#[derive(Clone, Debug)]
pub struct LinkPreviewMessageSizeCalculator {
    text: TextSizeConfig,
    config: LinkPreviewSizeConfig,
}

impl LinkPreviewMessageSizeCalculator {
    pub fn new(text: TextSizeConfig, config: LinkPreviewSizeConfig) -> Self {
        Self { text, config }
    }

    fn insets(&self, is_from_current_user: bool) -> EdgeInsets {
        *self.text.insets.get(is_from_current_user)
    }

    fn font(&self, message: &Message, ctx: &SizingContext<'_>) -> Font {
        ctx.message_font(message, &self.text.font)
    }

    /// Heights of the non-empty sub-labels beside the thumbnail.
    fn sub_label_heights(
        &self,
        item: &LinkItem,
        width: f32,
        ctx: &SizingContext<'_>,
    ) -> SmallVec<[f32; 3]> {
        let domain = item.domain();
        let labels = [
            (item.title.as_deref().unwrap_or_default(), &self.config.title_font),
            (item.teaser.as_deref().unwrap_or_default(), &self.config.teaser_font),
            (domain.as_str(), &self.config.domain_font),
        ];
        labels
            .into_iter()
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, font)| measure_plain(ctx.measurer, text, font, width).height)
            .collect()
    }
}

impl MessageSizeCalculator for LinkPreviewMessageSizeCalculator {
    fn name(&self) -> &'static str {
        "LinkPreviewMessageSizeCalculator"
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
        let MessageKind::LinkPreview(item) = &message.kind else {
            return Err(unhandled(self.name(), message));
        };
        if max_width.is_nan() || max_width <= 0.0 {
            return Ok(Size::ZERO);
        }
        let insets = self.insets(ctx.is_from_current_user);
        let font = self.font(message, ctx);
        let text = measure_plain(ctx.measurer, &item.text, &font, max_width);

        let viewport_width =
            (ctx.item_width * self.config.viewport_fraction).min(ctx.bubble_max_width);
        let width = (text.width + insets.horizontal_sum()).max(viewport_width);

        let thumbnail = self.config.thumbnail_size;
        let margin = self.config.thumbnail_margin;
        let labels_width = (width - insets.horizontal_sum() - thumbnail - margin).max(0.0);
        let labels_height: f32 = self.sub_label_heights(item, labels_width, ctx).iter().sum();

        let text_block = if text.height > 0.0 {
            text.height + margin
        } else {
            0.0
        };
        let height = insets.vertical_sum() + text_block + thumbnail.max(labels_height);
        Ok(Size::new(width, height))
    }

    fn configure(
        &self,
        message: &Message,
        ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        let domain = match &message.kind {
            MessageKind::LinkPreview(item) => item.domain(),
            _ => String::new(),
        };
        builder.content(ContentMetrics::LinkPreview {
            text_font: self.font(message, ctx),
            insets: self.insets(ctx.is_from_current_user),
            title_font: self.config.title_font.clone(),
            teaser_font: self.config.teaser_font.clone(),
            domain_font: self.config.domain_font.clone(),
            domain,
            thumbnail_size: self.config.thumbnail_size,
            thumbnail_margin: self.config.thumbnail_margin,
        });
    }
}
