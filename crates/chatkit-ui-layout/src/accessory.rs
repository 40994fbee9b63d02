//! Accessory view placement

/// Vertical anchor of the optional accessory view.
///
/// The accessory always sits on the side of the bubble facing away from the
/// avatar; only its vertical anchor is configurable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccessoryPosition {
    CellTop,
    LabelTop,
    BubbleTop,
    #[default]
    BubbleCenter,
    BubbleBottom,
    CellBottom,
}
