use super::*;
use chatkit_ui_graphics::EdgeInsets;
use chatkit_ui_layout::{
    AvatarSide, ResolvedAvatarPosition, ResolvedLabelAlignment, ResolvedLabelAnchor,
    VerticalPosition,
};

use crate::{LabelLayout, LabelSlot, LayoutAttributesBuilder};

fn attributes(section: usize, bubble_height: f32) -> LayoutAttributes {
    let mut builder = LayoutAttributesBuilder::new(IndexPosition::section(section), 320.0, false);
    builder
        .avatar(
            Size::square(30.0),
            ResolvedAvatarPosition::new(AvatarSide::Leading, VerticalPosition::BubbleBottom),
            0.0,
        )
        .bubble(Size::new(100.0, bubble_height), EdgeInsets::ZERO);
    for slot in LabelSlot::ALL {
        builder.label(
            slot,
            LabelLayout::absent(ResolvedLabelAlignment::new(
                ResolvedLabelAnchor::CellCenter,
                EdgeInsets::ZERO,
            )),
        );
    }
    builder.build().expect("complete attributes")
}

#[test]
fn put_keys_by_the_attributes_index() {
    let mut cache = AttributeCache::new();
    let stored = cache.put(attributes(2, 40.0));

    let hit = cache.get(IndexPosition::section(2)).expect("cached");
    assert!(Rc::ptr_eq(&stored, &hit));
    assert!(cache.get(IndexPosition::section(0)).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn put_replaces_an_existing_entry() {
    let mut cache = AttributeCache::new();
    cache.put(attributes(0, 40.0));
    cache.put(attributes(0, 80.0));

    assert_eq!(cache.len(), 1);
    let hit = cache.get(IndexPosition::section(0)).expect("cached");
    assert_eq!(hit.height, 80.0);
}

#[test]
fn invalidate_reports_whether_anything_was_dropped() {
    let mut cache = AttributeCache::new();
    cache.put(attributes(0, 40.0));

    assert!(cache.invalidate(IndexPosition::section(0)));
    assert!(!cache.invalidate(IndexPosition::section(0)));
    assert!(cache.is_empty());
}

#[test]
fn supplementary_sizes_are_dropped_per_section() {
    let mut cache = AttributeCache::new();
    for section in 0..2 {
        cache.put_supplementary(SupplementaryKind::Header, section, Size::new(320.0, 20.0));
        cache.put_supplementary(SupplementaryKind::Footer, section, Size::new(320.0, 8.0));
    }
    cache.put(attributes(1, 40.0));

    cache.invalidate_supplementary(1);
    assert_eq!(cache.supplementary(SupplementaryKind::Header, 1), None);
    assert_eq!(cache.supplementary(SupplementaryKind::Footer, 1), None);
    assert_eq!(
        cache.supplementary(SupplementaryKind::Footer, 0),
        Some(Size::new(320.0, 8.0))
    );
    assert!(cache.contains(IndexPosition::section(1)));

    cache.invalidate_all();
    assert_eq!(cache.supplementary(SupplementaryKind::Header, 0), None);
    assert!(cache.is_empty());
}
