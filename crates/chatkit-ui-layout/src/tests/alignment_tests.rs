use super::*;

#[test]
fn natural_avatar_trails_for_current_user() {
    let resolved = AvatarPosition::natural(VerticalPosition::BubbleBottom).resolve(true);
    assert_eq!(resolved.side, AvatarSide::Trailing);
    assert_eq!(resolved.vertical, VerticalPosition::BubbleBottom);
}

#[test]
fn natural_avatar_leads_for_other_senders() {
    let resolved = AvatarPosition::natural(VerticalPosition::CellTop).resolve(false);
    assert_eq!(resolved.side, AvatarSide::Leading);
}

#[test]
fn explicit_avatar_side_ignores_sender() {
    let position = AvatarPosition::new(HorizontalPosition::CellLeading, VerticalPosition::CellTop);
    assert_eq!(position.resolve(true).side, AvatarSide::Leading);
    assert_eq!(position.resolve(false).side, AvatarSide::Leading);
}

#[test]
fn unresolved_natural_avatar_is_a_configuration_error() {
    let result = ResolvedAvatarPosition::try_from(AvatarPosition::default());
    assert_eq!(
        result,
        Err(ConfigurationError::UnresolvedNaturalPlacement { placement: "avatar" })
    );
}

#[test]
fn explicit_avatar_converts_without_sender() {
    let position = AvatarPosition::new(HorizontalPosition::CellTrailing, VerticalPosition::CellBottom);
    let resolved = ResolvedAvatarPosition::try_from(position).unwrap();
    assert_eq!(resolved.side, AvatarSide::Trailing);
}

#[test]
fn natural_label_hugs_the_sender_side_of_the_bubble() {
    let alignment = LabelAlignment::new(LabelAnchor::Natural, EdgeInsets::horizontal(4.0));
    assert_eq!(
        alignment.resolve(true).anchor,
        ResolvedLabelAnchor::BubbleTrailing
    );
    assert_eq!(
        alignment.resolve(false).anchor,
        ResolvedLabelAnchor::BubbleLeading
    );
    assert!(ResolvedLabelAlignment::try_from(alignment).is_err());
}

#[test]
fn bubble_relative_placements() {
    assert!(!VerticalPosition::CellTop.is_bubble_relative());
    assert!(!VerticalPosition::CellBottom.is_bubble_relative());
    assert!(VerticalPosition::LabelTop.is_bubble_relative());
    assert!(VerticalPosition::BubbleCenter.is_bubble_relative());
}

#[test]
fn label_origin_respects_anchor_and_insets() {
    let insets = EdgeInsets::from_components(10.0, 0.0, 6.0, 0.0);
    let leading = ResolvedLabelAlignment::new(ResolvedLabelAnchor::CellLeading, insets);
    let trailing = ResolvedLabelAlignment::new(ResolvedLabelAnchor::BubbleTrailing, insets);
    let center = ResolvedLabelAlignment::new(ResolvedLabelAnchor::CellCenter, insets);

    assert_eq!(leading.origin_x(0.0, 200.0, 50.0), 10.0);
    assert_eq!(trailing.origin_x(20.0, 200.0, 50.0), 164.0);
    // free space = 200 - 16 - 50 = 134
    assert_eq!(center.origin_x(0.0, 200.0, 50.0), 77.0);
}
