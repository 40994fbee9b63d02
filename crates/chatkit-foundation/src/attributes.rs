//! Composed geometry of one message cell.
//!
//! [`LayoutAttributesBuilder`] collects the results of each sub-computation
//! while the engine composes an item and only yields a [`LayoutAttributes`]
//! once every required part is present. Built attributes are shared through
//! the cache behind an `Rc` and never mutated afterwards.

use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::{
    AccessoryPosition, ConfigurationError, ResolvedAvatarPosition, ResolvedLabelAlignment,
    VerticalPosition,
};

use crate::{CellFrames, IndexPosition, LabelSlot};

/// Total cell height for the given component heights.
///
/// Avatars pinned to a cell edge compete for vertical space with the labels
/// on that edge; avatars anchored to the bubble compete with the bubble.
pub fn cell_height(
    avatar_vertical: VerticalPosition,
    avatar_height: f32,
    top_labels_height: f32,
    bottom_labels_height: f32,
    bubble_height: f32,
    bubble_vertical_padding: f32,
) -> f32 {
    match avatar_vertical {
        VerticalPosition::CellTop => {
            avatar_height.max(top_labels_height)
                + bottom_labels_height
                + bubble_height
                + bubble_vertical_padding
        }
        VerticalPosition::CellBottom => {
            avatar_height.max(bottom_labels_height)
                + top_labels_height
                + bubble_height
                + bubble_vertical_padding
        }
        VerticalPosition::LabelTop
        | VerticalPosition::BubbleTop
        | VerticalPosition::BubbleCenter
        | VerticalPosition::BubbleBottom => {
            avatar_height.max(bubble_height)
                + bubble_vertical_padding
                + top_labels_height
                + bottom_labels_height
        }
    }
}

/// A measured label and where it is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    /// Measured text size, zero when the label is absent.
    pub text_size: Size,
    pub alignment: ResolvedLabelAlignment,
}

impl LabelLayout {
    pub fn new(text_size: Size, alignment: ResolvedLabelAlignment) -> Self {
        Self {
            text_size,
            alignment,
        }
    }

    /// A label slot with nothing in it.
    pub fn absent(alignment: ResolvedLabelAlignment) -> Self {
        Self::new(Size::ZERO, alignment)
    }

    pub fn is_absent(&self) -> bool {
        self.text_size.height <= 0.0
    }

    /// Vertical space the label takes in the cell: its text plus vertical
    /// insets, or nothing when absent.
    pub fn height(&self) -> f32 {
        if self.is_absent() {
            0.0
        } else {
            self.text_size.height + self.alignment.insets.vertical_sum()
        }
    }
}

/// Optional view beside the bubble, on the side away from the avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccessoryLayout {
    pub size: Size,
    pub padding: EdgeInsets,
    pub position: AccessoryPosition,
}

impl AccessoryLayout {
    /// Horizontal space taken away from the bubble.
    pub fn reserved_width(&self) -> f32 {
        self.size.width + self.padding.horizontal_sum()
    }

    /// Minimum cell height needed to show the accessory.
    pub fn reserved_height(&self) -> f32 {
        if self.size.height > 0.0 {
            self.size.height + self.padding.vertical_sum()
        } else {
            0.0
        }
    }
}

/// Kind-specific metrics a calculator hands to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContentMetrics {
    /// The calculator stamped nothing; custom calculators may leave this.
    #[default]
    Opaque,
    Text {
        font: Font,
        insets: EdgeInsets,
    },
    Contact {
        font: Font,
        insets: EdgeInsets,
    },
    LinkPreview {
        text_font: Font,
        insets: EdgeInsets,
        title_font: Font,
        teaser_font: Font,
        domain_font: Font,
        domain: String,
        thumbnail_size: f32,
        thumbnail_margin: f32,
    },
    Media,
    Location,
    Audio {
        duration_font: Font,
        duration_text: String,
        duration_label_size: Size,
        play_button_size: f32,
        horizontal_padding: f32,
        spacing: f32,
    },
}

/// Fully composed geometry for one message cell.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutAttributes {
    pub index: IndexPosition,
    pub item_width: f32,
    pub is_from_current_user: bool,
    pub avatar_size: Size,
    pub avatar_position: ResolvedAvatarPosition,
    pub avatar_leading_trailing_padding: f32,
    /// Bubble content size, padding excluded.
    pub bubble_size: Size,
    pub bubble_padding: EdgeInsets,
    pub content: ContentMetrics,
    pub cell_top_label: LabelLayout,
    pub bubble_top_label: LabelLayout,
    pub bubble_bottom_label: LabelLayout,
    pub cell_bottom_label: LabelLayout,
    pub accessory: AccessoryLayout,
    /// Derived total cell height.
    pub height: f32,
}

impl LayoutAttributes {
    pub fn size(&self) -> Size {
        Size::new(self.item_width, self.height)
    }

    pub fn label(&self, slot: LabelSlot) -> &LabelLayout {
        match slot {
            LabelSlot::CellTop => &self.cell_top_label,
            LabelSlot::BubbleTop => &self.bubble_top_label,
            LabelSlot::BubbleBottom => &self.bubble_bottom_label,
            LabelSlot::CellBottom => &self.cell_bottom_label,
        }
    }

    /// Cell top label plus bubble top label.
    pub fn top_labels_height(&self) -> f32 {
        self.cell_top_label.height() + self.bubble_top_label.height()
    }

    /// Bubble bottom label plus cell bottom label.
    pub fn bottom_labels_height(&self) -> f32 {
        self.bubble_bottom_label.height() + self.cell_bottom_label.height()
    }

    /// Horizontal room the avatar takes away from the bubble.
    pub fn avatar_reserved_width(&self) -> f32 {
        avatar_reserved_width(
            self.avatar_position,
            self.avatar_size,
            self.avatar_leading_trailing_padding,
        )
    }

    pub fn frames(&self) -> CellFrames {
        CellFrames::from_attributes(self)
    }
}

/// Width a bubble-relative avatar (plus its edge padding) takes from the
/// bubble; cell-pinned avatars take none.
pub(crate) fn avatar_reserved_width(
    position: ResolvedAvatarPosition,
    size: Size,
    edge_padding: f32,
) -> f32 {
    if position.vertical.is_bubble_relative() {
        size.width + edge_padding
    } else {
        0.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct LayoutAttributesBuilder {
    index: Option<IndexPosition>,
    item_width: Option<f32>,
    is_from_current_user: bool,
    avatar: Option<(Size, ResolvedAvatarPosition)>,
    avatar_leading_trailing_padding: f32,
    bubble_size: Option<Size>,
    bubble_padding: Option<EdgeInsets>,
    content: ContentMetrics,
    labels: [Option<LabelLayout>; 4],
    accessory: AccessoryLayout,
}

impl LayoutAttributesBuilder {
    pub fn new(index: IndexPosition, item_width: f32, is_from_current_user: bool) -> Self {
        Self {
            index: Some(index),
            item_width: Some(item_width),
            is_from_current_user,
            ..Self::default()
        }
    }

    pub fn avatar(
        &mut self,
        size: Size,
        position: ResolvedAvatarPosition,
        leading_trailing_padding: f32,
    ) -> &mut Self {
        self.avatar = Some((size, position));
        self.avatar_leading_trailing_padding = leading_trailing_padding;
        self
    }

    pub fn bubble(&mut self, size: Size, padding: EdgeInsets) -> &mut Self {
        self.bubble_size = Some(size);
        self.bubble_padding = Some(padding);
        self
    }

    pub fn content(&mut self, content: ContentMetrics) -> &mut Self {
        self.content = content;
        self
    }

    pub fn label(&mut self, slot: LabelSlot, label: LabelLayout) -> &mut Self {
        self.labels[slot_index(slot)] = Some(label);
        self
    }

    pub fn accessory(&mut self, accessory: AccessoryLayout) -> &mut Self {
        self.accessory = accessory;
        self
    }

    /// Index of the item being composed, if set.
    pub fn index(&self) -> Option<IndexPosition> {
        self.index
    }

    /// Metrics stamped so far by the calculator.
    pub fn content_metrics(&self) -> &ContentMetrics {
        &self.content
    }

    pub fn build(self) -> Result<LayoutAttributes, ConfigurationError> {
        let missing = |field| ConfigurationError::IncompleteAttributes { field };
        let index = self.index.ok_or_else(|| missing("index"))?;
        let item_width = self.item_width.ok_or_else(|| missing("item width"))?;
        let (avatar_size, avatar_position) = self.avatar.ok_or_else(|| missing("avatar"))?;
        let bubble_size = self.bubble_size.ok_or_else(|| missing("bubble size"))?;
        let bubble_padding = self.bubble_padding.ok_or_else(|| missing("bubble padding"))?;
        let [cell_top, bubble_top, bubble_bottom, cell_bottom] = self.labels;
        let cell_top_label = cell_top.ok_or_else(|| missing("cell top label"))?;
        let bubble_top_label = bubble_top.ok_or_else(|| missing("bubble top label"))?;
        let bubble_bottom_label = bubble_bottom.ok_or_else(|| missing("bubble bottom label"))?;
        let cell_bottom_label = cell_bottom.ok_or_else(|| missing("cell bottom label"))?;

        let stacked = cell_height(
            avatar_position.vertical,
            avatar_size.height,
            cell_top_label.height() + bubble_top_label.height(),
            bubble_bottom_label.height() + cell_bottom_label.height(),
            bubble_size.height,
            bubble_padding.vertical_sum(),
        );
        let height = stacked.max(self.accessory.reserved_height());

        Ok(LayoutAttributes {
            index,
            item_width,
            is_from_current_user: self.is_from_current_user,
            avatar_size,
            avatar_position,
            avatar_leading_trailing_padding: self.avatar_leading_trailing_padding,
            bubble_size,
            bubble_padding,
            content: self.content,
            cell_top_label,
            bubble_top_label,
            bubble_bottom_label,
            cell_bottom_label,
            accessory: self.accessory,
            height,
        })
    }
}

fn slot_index(slot: LabelSlot) -> usize {
    match slot {
        LabelSlot::CellTop => 0,
        LabelSlot::BubbleTop => 1,
        LabelSlot::BubbleBottom => 2,
        LabelSlot::CellBottom => 3,
    }
}

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod tests;
