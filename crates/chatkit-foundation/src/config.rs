//! Layout configuration.
//!
//! Plain data with sensible defaults. Per-message overrides come from the
//! [`crate::MessagesLayoutDelegate`]; everything it leaves as `None` falls
//! back to these values.

use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::{AccessoryPosition, AvatarPosition, LabelAlignment, VerticalPosition};

use crate::LabelSlot;

/// A value with separate incoming and outgoing variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Directional<T> {
    pub incoming: T,
    pub outgoing: T,
}

impl<T> Directional<T> {
    pub const fn new(incoming: T, outgoing: T) -> Self {
        Self { incoming, outgoing }
    }

    /// The outgoing variant for messages from the current user.
    #[inline]
    pub fn get(&self, is_from_current_user: bool) -> &T {
        if is_from_current_user {
            &self.outgoing
        } else {
            &self.incoming
        }
    }
}

impl<T: Clone> Directional<T> {
    pub fn same(value: T) -> Self {
        Self {
            incoming: value.clone(),
            outgoing: value,
        }
    }
}

impl Directional<EdgeInsets> {
    /// Incoming insets, mirrored horizontally for outgoing messages.
    pub fn mirrored(incoming: EdgeInsets) -> Self {
        Self::new(incoming, incoming.mirrored())
    }
}

/// Font and inner insets of text-like bubbles (text, emoji, contact).
#[derive(Clone, Debug, PartialEq)]
pub struct TextSizeConfig {
    pub font: Font,
    pub insets: Directional<EdgeInsets>,
}

impl TextSizeConfig {
    pub fn text() -> Self {
        Self {
            font: Font::body(),
            insets: Directional::mirrored(EdgeInsets::tlbr(7.0, 18.0, 7.0, 14.0)),
        }
    }

    /// Emoji bubbles: the text layout with the font doubled.
    pub fn emoji() -> Self {
        let text = Self::text();
        Self {
            font: text.font.scaled(2.0),
            ..text
        }
    }

    pub fn contact() -> Self {
        Self {
            font: Font::body(),
            insets: Directional::new(
                EdgeInsets::tlbr(7.0, 46.0, 7.0, 30.0),
                EdgeInsets::tlbr(7.0, 41.0, 7.0, 35.0),
            ),
        }
    }
}

impl Default for TextSizeConfig {
    fn default() -> Self {
        Self::text()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkPreviewSizeConfig {
    pub title_font: Font,
    pub teaser_font: Font,
    pub domain_font: Font,
    /// Side of the square thumbnail.
    pub thumbnail_size: f32,
    /// Gap between the thumbnail and the sub-labels, and between the message
    /// text and the preview.
    pub thumbnail_margin: f32,
    /// Minimum bubble width as a fraction of the item width.
    pub viewport_fraction: f32,
}

impl Default for LinkPreviewSizeConfig {
    fn default() -> Self {
        Self {
            title_font: Font::bold(13.0),
            teaser_font: Font::new(12.0),
            domain_font: Font::new(12.0),
            thumbnail_size: 60.0,
            thumbnail_margin: 8.0,
            viewport_fraction: 0.75,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioSizeConfig {
    pub duration_font: Font,
    pub play_button_size: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    /// Gap between play button, progress bar and duration label.
    pub spacing: f32,
    pub min_progress_width: f32,
}

impl Default for AudioSizeConfig {
    fn default() -> Self {
        Self {
            duration_font: Font::new(14.0),
            play_button_size: 25.0,
            horizontal_padding: 8.0,
            vertical_padding: 5.0,
            spacing: 8.0,
            min_progress_width: 40.0,
        }
    }
}

/// Geometry defaults for every message cell.
#[derive(Clone, Debug, PartialEq)]
pub struct MessagesLayoutConfig {
    /// Insets around each section; the item width is the bounds width minus
    /// the horizontal section insets.
    pub section_insets: EdgeInsets,
    pub avatar_size: Directional<Size>,
    pub avatar_position: Directional<AvatarPosition>,
    /// Gap between the avatar and the cell edge it is pinned to.
    pub avatar_leading_trailing_padding: f32,
    /// Space around the bubble inside the cell.
    pub bubble_padding: Directional<EdgeInsets>,
    pub cell_top_label: Directional<LabelAlignment>,
    pub bubble_top_label: Directional<LabelAlignment>,
    pub bubble_bottom_label: Directional<LabelAlignment>,
    pub cell_bottom_label: Directional<LabelAlignment>,
    pub accessory_size: Directional<Size>,
    pub accessory_padding: Directional<EdgeInsets>,
    pub accessory_position: Directional<AccessoryPosition>,
    /// Typing indicator height when the layout delegate does not size it.
    pub typing_indicator_height: f32,
    pub typing_indicator_top_inset: f32,
    pub text: TextSizeConfig,
    pub attributed_text: TextSizeConfig,
    pub emoji: TextSizeConfig,
    pub contact: TextSizeConfig,
    pub link_preview: LinkPreviewSizeConfig,
    pub audio: AudioSizeConfig,
}

impl MessagesLayoutConfig {
    pub fn label_alignment(&self, slot: LabelSlot) -> &Directional<LabelAlignment> {
        match slot {
            LabelSlot::CellTop => &self.cell_top_label,
            LabelSlot::BubbleTop => &self.bubble_top_label,
            LabelSlot::BubbleBottom => &self.bubble_bottom_label,
            LabelSlot::CellBottom => &self.cell_bottom_label,
        }
    }

    pub fn with_section_insets(mut self, section_insets: EdgeInsets) -> Self {
        self.section_insets = section_insets;
        self
    }

    pub fn with_avatar_size(mut self, size: Size) -> Self {
        self.avatar_size = Directional::same(size);
        self
    }

    pub fn with_avatar_position(mut self, position: AvatarPosition) -> Self {
        self.avatar_position = Directional::same(position);
        self
    }

    pub fn with_bubble_padding(mut self, padding: EdgeInsets) -> Self {
        self.bubble_padding = Directional::mirrored(padding);
        self
    }

    pub fn with_text_insets(mut self, insets: EdgeInsets) -> Self {
        self.text.insets = Directional::mirrored(insets);
        self
    }

    pub fn with_text_font(mut self, font: Font) -> Self {
        self.text.font = font;
        self
    }
}

impl Default for MessagesLayoutConfig {
    fn default() -> Self {
        Self {
            section_insets: EdgeInsets::tlbr(4.0, 8.0, 4.0, 8.0),
            avatar_size: Directional::same(Size::square(30.0)),
            avatar_position: Directional::same(AvatarPosition::natural(
                VerticalPosition::BubbleBottom,
            )),
            avatar_leading_trailing_padding: 0.0,
            bubble_padding: Directional::mirrored(EdgeInsets::tlbr(0.0, 4.0, 0.0, 30.0)),
            cell_top_label: Directional::same(LabelAlignment::cell_center(EdgeInsets::ZERO)),
            bubble_top_label: Directional::new(
                LabelAlignment::bubble_leading(EdgeInsets::horizontal(10.0)),
                LabelAlignment::bubble_trailing(EdgeInsets::horizontal(10.0)),
            ),
            bubble_bottom_label: Directional::new(
                LabelAlignment::bubble_leading(EdgeInsets::horizontal(10.0)),
                LabelAlignment::bubble_trailing(EdgeInsets::horizontal(10.0)),
            ),
            cell_bottom_label: Directional::new(
                LabelAlignment::cell_leading(EdgeInsets::from_components(42.0, 0.0, 0.0, 0.0)),
                LabelAlignment::cell_trailing(EdgeInsets::from_components(0.0, 0.0, 42.0, 0.0)),
            ),
            accessory_size: Directional::same(Size::ZERO),
            accessory_padding: Directional::same(EdgeInsets::ZERO),
            accessory_position: Directional::same(AccessoryPosition::BubbleCenter),
            typing_indicator_height: 62.0,
            typing_indicator_top_inset: 15.0,
            text: TextSizeConfig::text(),
            attributed_text: TextSizeConfig::text(),
            emoji: TextSizeConfig::emoji(),
            contact: TextSizeConfig::contact(),
            link_preview: LinkPreviewSizeConfig::default(),
            audio: AudioSizeConfig::default(),
        }
    }
}
