//! Cell-local rectangles derived from composed attributes.
//!
//! Vertical origins follow the same three-way avatar switch as the cell
//! height, so every frame fits inside `attributes.size()`. Horizontal
//! origins depend only on which side the avatar resolved to.

use chatkit_ui_graphics::{EdgeInsets, Rect, Size};
use chatkit_ui_layout::{
    AccessoryPosition, AvatarSide, ResolvedAvatarPosition, ResolvedLabelAnchor, VerticalPosition,
};

use crate::attributes::avatar_reserved_width;
use crate::{AccessoryLayout, LabelLayout, LabelSlot, LayoutAttributes};

/// Horizontal placement shared by label measurement and frame derivation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HorizontalGeometry {
    item_width: f32,
    avatar: ResolvedAvatarPosition,
    avatar_width: f32,
    avatar_padding: f32,
    bubble_x: f32,
    bubble_width: f32,
    bubble_padding: EdgeInsets,
}

impl HorizontalGeometry {
    pub(crate) fn new(
        item_width: f32,
        avatar: ResolvedAvatarPosition,
        avatar_size: Size,
        avatar_padding: f32,
        bubble_width: f32,
        bubble_padding: EdgeInsets,
    ) -> Self {
        let room = avatar_reserved_width(avatar, avatar_size, avatar_padding);
        let bubble_x = match avatar.side {
            AvatarSide::Leading => room + bubble_padding.left,
            AvatarSide::Trailing => item_width - room - bubble_padding.right - bubble_width,
        };
        Self {
            item_width,
            avatar,
            avatar_width: avatar_size.width,
            avatar_padding,
            bubble_x,
            bubble_width,
            bubble_padding,
        }
    }

    fn of(attributes: &LayoutAttributes) -> Self {
        Self::new(
            attributes.item_width,
            attributes.avatar_position,
            attributes.avatar_size,
            attributes.avatar_leading_trailing_padding,
            attributes.bubble_size.width,
            attributes.bubble_padding,
        )
    }

    pub(crate) fn bubble_x(&self) -> f32 {
        self.bubble_x
    }

    pub(crate) fn avatar_x(&self) -> f32 {
        match self.avatar.side {
            AvatarSide::Leading => self.avatar_padding,
            AvatarSide::Trailing => self.item_width - self.avatar_padding - self.avatar_width,
        }
    }

    fn avatar_on_edge(&self, slot: LabelSlot) -> bool {
        if slot.is_top() {
            self.avatar.vertical.occupies_top_edge()
        } else {
            self.avatar.vertical.occupies_bottom_edge()
        }
    }

    fn avatar_pinned_to_edge(&self, slot: LabelSlot) -> bool {
        let pinned = if slot.is_top() {
            VerticalPosition::CellTop
        } else {
            VerticalPosition::CellBottom
        };
        self.avatar.vertical == pinned
    }

    /// Start and width of the horizontal band a label in `slot` may use.
    pub(crate) fn label_span(&self, slot: LabelSlot, anchor: ResolvedLabelAnchor) -> (f32, f32) {
        if anchor.is_cell_relative() {
            if !self.avatar_pinned_to_edge(slot) {
                return (0.0, self.item_width);
            }
            let room = self.avatar_width + self.avatar_padding;
            return match self.avatar.side {
                AvatarSide::Leading => (room, self.item_width - room),
                AvatarSide::Trailing => (0.0, self.item_width - room),
            };
        }

        let room = if self.avatar_on_edge(slot) {
            0.0
        } else {
            avatar_reserved_width(
                self.avatar,
                Size::new(self.avatar_width, 0.0),
                self.avatar_padding,
            )
        };
        let padding = self.bubble_padding;
        let span = match anchor {
            ResolvedLabelAnchor::BubbleTrailing => {
                let widen = if self.avatar.side == AvatarSide::Leading { room } else { 0.0 };
                let width = self.bubble_width + padding.left + widen;
                (self.bubble_x + self.bubble_width - width, width)
            }
            _ => {
                let widen = if self.avatar.side == AvatarSide::Trailing { room } else { 0.0 };
                (self.bubble_x, self.bubble_width + padding.right + widen)
            }
        };
        if self.avatar_pinned_to_edge(slot) {
            self.beside_pinned_avatar(span)
        } else {
            span
        }
    }

    /// Slides a bubble label span out of the column of an avatar that shares
    /// its band, keeping the span inside the cell.
    fn beside_pinned_avatar(&self, (start, width): (f32, f32)) -> (f32, f32) {
        let room = self.avatar_width + self.avatar_padding;
        match self.avatar.side {
            AvatarSide::Leading => {
                let start = start.max(room);
                let end = (start + width).min(self.item_width);
                (start, (end - start).max(0.0))
            }
            AvatarSide::Trailing => {
                let end = (start + width).min(self.item_width - room);
                let start = (end - width).max(0.0);
                (start, (end - start).max(0.0))
            }
        }
    }

    /// Widest a label's text may be laid out in `slot`.
    pub(crate) fn label_max_width(
        &self,
        slot: LabelSlot,
        anchor: ResolvedLabelAnchor,
        insets: EdgeInsets,
    ) -> f32 {
        let (_, span) = self.label_span(slot, anchor);
        (span - insets.horizontal_sum()).max(0.0)
    }
}

/// Rectangles of every part of a message cell, in cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellFrames {
    pub avatar: Rect,
    /// Bubble content, padding excluded.
    pub bubble: Rect,
    pub cell_top_label: Rect,
    pub bubble_top_label: Rect,
    pub bubble_bottom_label: Rect,
    pub cell_bottom_label: Rect,
    pub accessory: Rect,
}

impl CellFrames {
    pub fn from_attributes(attributes: &LayoutAttributes) -> Self {
        let horizontal = HorizontalGeometry::of(attributes);
        let height = attributes.height;
        let avatar = attributes.avatar_size;
        let bubble = attributes.bubble_size;
        let padding = attributes.bubble_padding;
        let top = attributes.top_labels_height();
        let bottom = attributes.bottom_labels_height();
        let cell_top = attributes.cell_top_label.height();
        let bubble_top = attributes.bubble_top_label.height();
        let vertical = attributes.avatar_position.vertical;

        let bubble_y = match vertical {
            VerticalPosition::CellTop => avatar.height.max(top) + padding.top,
            VerticalPosition::CellBottom => top + padding.top,
            VerticalPosition::LabelTop | VerticalPosition::BubbleTop => top + padding.top,
            VerticalPosition::BubbleCenter => {
                top + padding.top + ((avatar.height - bubble.height) / 2.0).max(0.0)
            }
            VerticalPosition::BubbleBottom => height - bottom - padding.bottom - bubble.height,
        };
        let avatar_y = match vertical {
            VerticalPosition::CellTop => 0.0,
            VerticalPosition::CellBottom => height - avatar.height,
            VerticalPosition::LabelTop => cell_top,
            VerticalPosition::BubbleTop => bubble_y,
            VerticalPosition::BubbleCenter => bubble_y + (bubble.height - avatar.height) / 2.0,
            VerticalPosition::BubbleBottom => bubble_y + bubble.height - avatar.height,
        };

        let bubble_top_label_y = match vertical {
            VerticalPosition::CellTop => avatar.height.max(top) - bubble_top,
            _ => cell_top,
        };
        let bubble_bottom_label_y = match vertical {
            VerticalPosition::CellBottom => bubble_y + bubble.height + padding.bottom,
            _ => height - bottom,
        };
        let cell_bottom_label_y = height - attributes.cell_bottom_label.height();

        let bubble_frame = Rect::new(horizontal.bubble_x(), bubble_y, bubble.width, bubble.height);
        let label =
            |slot: LabelSlot, y: f32| label_frame(&horizontal, slot, attributes.label(slot), y);

        Self {
            avatar: Rect::new(horizontal.avatar_x(), avatar_y, avatar.width, avatar.height),
            bubble: bubble_frame,
            cell_top_label: label(LabelSlot::CellTop, 0.0),
            bubble_top_label: label(LabelSlot::BubbleTop, bubble_top_label_y),
            bubble_bottom_label: label(LabelSlot::BubbleBottom, bubble_bottom_label_y),
            cell_bottom_label: label(LabelSlot::CellBottom, cell_bottom_label_y),
            accessory: accessory_frame(attributes, &bubble_frame, cell_top, height),
        }
    }
}

fn label_frame(
    horizontal: &HorizontalGeometry,
    slot: LabelSlot,
    label: &LabelLayout,
    y: f32,
) -> Rect {
    if label.is_absent() {
        return Rect::ZERO;
    }
    let alignment = label.alignment;
    let (start, span) = horizontal.label_span(slot, alignment.anchor);
    let size = label.text_size;
    Rect::new(
        alignment.origin_x(start, span, size.width),
        y + alignment.insets.top,
        size.width,
        size.height,
    )
}

fn accessory_frame(
    attributes: &LayoutAttributes,
    bubble: &Rect,
    cell_top: f32,
    height: f32,
) -> Rect {
    let AccessoryLayout {
        size,
        padding,
        position,
    } = attributes.accessory;
    if size.is_empty() {
        return Rect::ZERO;
    }
    let x = match attributes.avatar_position.side {
        AvatarSide::Leading => bubble.max_x() + padding.left,
        AvatarSide::Trailing => bubble.x - padding.right - size.width,
    };
    let y = match position {
        AccessoryPosition::CellTop => padding.top,
        AccessoryPosition::LabelTop => cell_top + padding.top,
        AccessoryPosition::BubbleTop => bubble.y + padding.top,
        AccessoryPosition::BubbleCenter => bubble.y + (bubble.height - size.height) / 2.0,
        AccessoryPosition::BubbleBottom => bubble.max_y() - size.height - padding.bottom,
        AccessoryPosition::CellBottom => height - size.height - padding.bottom,
    };
    Rect::new(x, y, size.width, size.height)
}

#[cfg(test)]
#[path = "tests/frames_tests.rs"]
mod tests;
