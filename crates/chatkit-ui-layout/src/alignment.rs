//! Avatar and label placement relative to a cell or its bubble

use chatkit_ui_graphics::EdgeInsets;

use crate::ConfigurationError;

/// Horizontal edge an avatar is pinned to, as handed out by delegates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalPosition {
    /// Pin to the leading edge of the cell.
    CellLeading,
    /// Pin to the trailing edge of the cell.
    CellTrailing,
    /// Trailing for messages from the current user, leading otherwise.
    Natural,
}

/// Vertical anchor of an avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalPosition {
    /// Top of the cell, next to the top labels.
    CellTop,
    /// Top of the bubble top label.
    LabelTop,
    /// Top edge of the bubble.
    BubbleTop,
    /// Vertical center of the bubble.
    BubbleCenter,
    /// Bottom edge of the bubble.
    BubbleBottom,
    /// Bottom of the cell, next to the bottom labels.
    CellBottom,
}

impl VerticalPosition {
    /// True when the avatar sits beside the bubble rather than beside the
    /// cell labels. Bubble-relative avatars take horizontal room from the bubble.
    #[inline]
    pub fn is_bubble_relative(self) -> bool {
        !matches!(self, VerticalPosition::CellTop | VerticalPosition::CellBottom)
    }

    /// True when the avatar reaches into the band occupied by the top labels
    /// or the bubble's top edge.
    #[inline]
    pub fn occupies_top_edge(self) -> bool {
        matches!(
            self,
            VerticalPosition::CellTop
                | VerticalPosition::LabelTop
                | VerticalPosition::BubbleTop
                | VerticalPosition::BubbleCenter
        )
    }

    /// True when the avatar reaches into the band occupied by the bottom
    /// labels or the bubble's bottom edge.
    #[inline]
    pub fn occupies_bottom_edge(self) -> bool {
        matches!(
            self,
            VerticalPosition::CellBottom
                | VerticalPosition::BubbleBottom
                | VerticalPosition::BubbleCenter
        )
    }
}

/// Avatar placement as supplied by configuration or the layout delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AvatarPosition {
    pub horizontal: HorizontalPosition,
    pub vertical: VerticalPosition,
}

impl AvatarPosition {
    pub const fn new(horizontal: HorizontalPosition, vertical: VerticalPosition) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Natural horizontal placement with the given vertical anchor.
    pub const fn natural(vertical: VerticalPosition) -> Self {
        Self::new(HorizontalPosition::Natural, vertical)
    }

    /// Resolves `Natural` against the sender of the message being laid out.
    pub fn resolve(self, is_from_current_user: bool) -> ResolvedAvatarPosition {
        let side = match self.horizontal {
            HorizontalPosition::CellLeading => AvatarSide::Leading,
            HorizontalPosition::CellTrailing => AvatarSide::Trailing,
            HorizontalPosition::Natural if is_from_current_user => AvatarSide::Trailing,
            HorizontalPosition::Natural => AvatarSide::Leading,
        };
        ResolvedAvatarPosition {
            side,
            vertical: self.vertical,
        }
    }
}

impl Default for AvatarPosition {
    fn default() -> Self {
        Self::natural(VerticalPosition::BubbleBottom)
    }
}

/// Horizontal edge of a resolved avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AvatarSide {
    Leading,
    Trailing,
}

impl AvatarSide {
    pub fn opposite(self) -> Self {
        match self {
            AvatarSide::Leading => AvatarSide::Trailing,
            AvatarSide::Trailing => AvatarSide::Leading,
        }
    }
}

/// Avatar placement with the horizontal edge decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedAvatarPosition {
    pub side: AvatarSide,
    pub vertical: VerticalPosition,
}

impl ResolvedAvatarPosition {
    pub const fn new(side: AvatarSide, vertical: VerticalPosition) -> Self {
        Self { side, vertical }
    }
}

impl TryFrom<AvatarPosition> for ResolvedAvatarPosition {
    type Error = ConfigurationError;

    fn try_from(position: AvatarPosition) -> Result<Self, Self::Error> {
        let side = match position.horizontal {
            HorizontalPosition::CellLeading => AvatarSide::Leading,
            HorizontalPosition::CellTrailing => AvatarSide::Trailing,
            HorizontalPosition::Natural => {
                return Err(ConfigurationError::UnresolvedNaturalPlacement { placement: "avatar" })
            }
        };
        Ok(Self::new(side, position.vertical))
    }
}

/// Horizontal anchor of a label, as handed out by delegates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelAnchor {
    CellLeading,
    CellTrailing,
    CellCenter,
    BubbleLeading,
    BubbleTrailing,
    /// Hugs the bubble edge nearest the sender's side.
    Natural,
}

/// Label alignment: an anchor plus the label's own insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAlignment {
    pub anchor: LabelAnchor,
    pub insets: EdgeInsets,
}

impl LabelAlignment {
    pub const fn new(anchor: LabelAnchor, insets: EdgeInsets) -> Self {
        Self { anchor, insets }
    }

    pub fn cell_center(insets: EdgeInsets) -> Self {
        Self::new(LabelAnchor::CellCenter, insets)
    }

    pub fn cell_leading(insets: EdgeInsets) -> Self {
        Self::new(LabelAnchor::CellLeading, insets)
    }

    pub fn cell_trailing(insets: EdgeInsets) -> Self {
        Self::new(LabelAnchor::CellTrailing, insets)
    }

    pub fn bubble_leading(insets: EdgeInsets) -> Self {
        Self::new(LabelAnchor::BubbleLeading, insets)
    }

    pub fn bubble_trailing(insets: EdgeInsets) -> Self {
        Self::new(LabelAnchor::BubbleTrailing, insets)
    }

    /// Resolves `Natural` against the sender of the message being laid out.
    pub fn resolve(self, is_from_current_user: bool) -> ResolvedLabelAlignment {
        let anchor = match self.anchor {
            LabelAnchor::CellLeading => ResolvedLabelAnchor::CellLeading,
            LabelAnchor::CellTrailing => ResolvedLabelAnchor::CellTrailing,
            LabelAnchor::CellCenter => ResolvedLabelAnchor::CellCenter,
            LabelAnchor::BubbleLeading => ResolvedLabelAnchor::BubbleLeading,
            LabelAnchor::BubbleTrailing => ResolvedLabelAnchor::BubbleTrailing,
            LabelAnchor::Natural if is_from_current_user => ResolvedLabelAnchor::BubbleTrailing,
            LabelAnchor::Natural => ResolvedLabelAnchor::BubbleLeading,
        };
        ResolvedLabelAlignment {
            anchor,
            insets: self.insets,
        }
    }
}

impl Default for LabelAlignment {
    fn default() -> Self {
        Self::cell_center(EdgeInsets::ZERO)
    }
}

/// Label anchor with `Natural` resolved away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedLabelAnchor {
    CellLeading,
    CellTrailing,
    CellCenter,
    BubbleLeading,
    BubbleTrailing,
}

impl ResolvedLabelAnchor {
    #[inline]
    pub fn is_cell_relative(self) -> bool {
        matches!(
            self,
            ResolvedLabelAnchor::CellLeading
                | ResolvedLabelAnchor::CellTrailing
                | ResolvedLabelAnchor::CellCenter
        )
    }

    #[inline]
    pub fn is_bubble_relative(self) -> bool {
        !self.is_cell_relative()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedLabelAlignment {
    pub anchor: ResolvedLabelAnchor,
    pub insets: EdgeInsets,
}

impl ResolvedLabelAlignment {
    pub const fn new(anchor: ResolvedLabelAnchor, insets: EdgeInsets) -> Self {
        Self { anchor, insets }
    }

    /// Horizontal origin of a label of `width` inside the span starting at
    /// `span_start` and `span_width` wide, honouring the label's insets.
    pub fn origin_x(&self, span_start: f32, span_width: f32, width: f32) -> f32 {
        let insets = self.insets;
        match self.anchor {
            ResolvedLabelAnchor::CellLeading | ResolvedLabelAnchor::BubbleLeading => {
                span_start + insets.left
            }
            ResolvedLabelAnchor::CellTrailing | ResolvedLabelAnchor::BubbleTrailing => {
                span_start + span_width - insets.right - width
            }
            ResolvedLabelAnchor::CellCenter => {
                let free = (span_width - insets.horizontal_sum() - width).max(0.0);
                span_start + insets.left + free / 2.0
            }
        }
    }
}

impl TryFrom<LabelAlignment> for ResolvedLabelAlignment {
    type Error = ConfigurationError;

    fn try_from(alignment: LabelAlignment) -> Result<Self, Self::Error> {
        let anchor = match alignment.anchor {
            LabelAnchor::CellLeading => ResolvedLabelAnchor::CellLeading,
            LabelAnchor::CellTrailing => ResolvedLabelAnchor::CellTrailing,
            LabelAnchor::CellCenter => ResolvedLabelAnchor::CellCenter,
            LabelAnchor::BubbleLeading => ResolvedLabelAnchor::BubbleLeading,
            LabelAnchor::BubbleTrailing => ResolvedLabelAnchor::BubbleTrailing,
            LabelAnchor::Natural => {
                return Err(ConfigurationError::UnresolvedNaturalPlacement { placement: "label" })
            }
        };
        Ok(Self::new(anchor, alignment.insets))
    }
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
