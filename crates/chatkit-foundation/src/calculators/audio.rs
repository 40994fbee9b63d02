use std::time::Duration;

use chatkit_text::{measure_text, measure_width_for_height, StyledText};
use chatkit_ui_graphics::Size;
use chatkit_ui_layout::ConfigurationError;

use super::{unhandled, MessageSizeCalculator, SizingContext};
use crate::{
    AudioItem, AudioSizeConfig, ContentMetrics, LayoutAttributesBuilder, Message, MessageKind,
};

/// Formats a clip duration as `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Fixed-shape bubble holding a play button, a progress bar and the duration
/// label, in that order. Grows past the item's preferred size only when the
/// controls would not fit.
#[derive(Clone, Debug)]
pub struct AudioMessageSizeCalculator {
    config: AudioSizeConfig,
}

impl AudioMessageSizeCalculator {
    pub fn new(config: AudioSizeConfig) -> Self {
        Self { config }
    }

    /// Duration string and the single-line size it is drawn at.
    fn duration_label(
        &self,
        item: &AudioItem,
        max_width: f32,
        ctx: &SizingContext<'_>,
    ) -> (String, Size) {
        let text = format_duration(item.duration);
        let styled = StyledText::plain(text.as_str(), self.config.duration_font.clone());
        let height = measure_text(ctx.measurer, &styled, f32::INFINITY).height;
        let width = measure_width_for_height(ctx.measurer, &styled, height, max_width);
        (text, Size::new(width, height))
    }

    /// Narrowest bubble that still shows every control.
    fn controls_width(&self, label_width: f32) -> f32 {
        let config = &self.config;
        config.horizontal_padding * 2.0
            + config.play_button_size
            + config.spacing * 2.0
            + config.min_progress_width
            + label_width
    }
}

impl MessageSizeCalculator for AudioMessageSizeCalculator {
    fn name(&self) -> &'static str {
        "AudioMessageSizeCalculator"
    }

    fn content_size(
        &self,
        message: &Message,
        max_width: f32,
        ctx: &SizingContext<'_>,
    ) -> Result<Size, ConfigurationError> {
        let MessageKind::Audio(item) = &message.kind else {
            return Err(unhandled(self.name(), message));
        };
        if max_width.is_nan() || max_width <= 0.0 {
            return Ok(Size::ZERO);
        }
        let (_, label) = self.duration_label(item, max_width, ctx);
        let width = item
            .size
            .width
            .max(self.controls_width(label.width))
            .min(max_width);
        let controls_height =
            self.config.play_button_size.max(label.height) + self.config.vertical_padding * 2.0;
        Ok(Size::new(width, item.size.height.max(controls_height)))
    }

    fn configure(
        &self,
        message: &Message,
        ctx: &SizingContext<'_>,
        builder: &mut LayoutAttributesBuilder,
    ) {
        let MessageKind::Audio(item) = &message.kind else {
            return;
        };
        let (duration_text, duration_label_size) =
            self.duration_label(item, ctx.bubble_max_width, ctx);
        builder.content(ContentMetrics::Audio {
            duration_font: self.config.duration_font.clone(),
            duration_text,
            duration_label_size,
            play_button_size: self.config.play_button_size,
            horizontal_padding: self.config.horizontal_padding,
            spacing: self.config.spacing,
        });
    }
}
