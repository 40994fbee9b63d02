use chatkit_foundation::prelude::*;
use chatkit_foundation::SectionChange;
use chatkit_testing::prelude::*;
use chatkit_ui_graphics::{EdgeInsets, Size};

fn conversation(count: usize) -> TestDataSource {
    let mut factory = MessageFactory::new();
    let messages: Vec<_> = (0..count)
        .map(|i| factory.text(i % 2 == 0, "Hello"))
        .collect();
    TestDataSource::with_messages(factory.me().clone(), messages)
}

fn layout() -> MessagesLayout {
    let mut layout = MessagesLayout::default();
    layout.set_config(MessagesLayoutConfig::default().with_section_insets(EdgeInsets::ZERO));
    layout.set_bounds(Size::new(320.0, 480.0));
    layout
}

#[test]
fn default_indicator_moves_the_bottom_inset_by_height_and_top_inset() {
    let source = conversation(3);
    let sources = Sources::new(&source);
    let mut layout = layout();

    let update = layout
        .set_typing_indicator_hidden(&sources, false, true)
        .expect("indicator shown");
    assert_eq!(update.section_change, SectionChange::Insert(3));
    assert_eq!(update.invalidated_section, 2);
    assert_approx_eq(update.bottom_inset_delta, 62.0 + 15.0, 0.001, "bottom inset");
    assert!(!update.is_hidden);
    assert_eq!(layout.number_of_sections(&sources), 4);
}

#[test]
fn delegate_sizes_the_indicator() {
    let source = conversation(1);
    let mut delegate = RecordingLayoutDelegate::new();
    delegate.typing_indicator_size = Some(Size::new(200.0, 40.0));
    delegate.typing_indicator_top_inset = Some(10.0);
    let sources = Sources::new(&source).with_layout_delegate(&delegate);
    let mut layout = layout();

    let shown = layout
        .set_typing_indicator_hidden(&sources, false, false)
        .expect("indicator shown");
    assert_approx_eq(shown.bottom_inset_delta, 50.0, 0.001, "shown delta");
    assert_eq!(
        layout.size_for_item(&sources, IndexPosition::section(1)),
        Size::new(200.0, 40.0)
    );

    let hidden = layout
        .set_typing_indicator_hidden(&sources, true, false)
        .expect("indicator hidden");
    assert_eq!(hidden.section_change, SectionChange::Delete(1));
    assert_approx_eq(hidden.bottom_inset_delta, -50.0, 0.001, "hidden delta");
}

#[test]
fn toggling_keeps_items_cached_but_refreshes_the_last_section_supplements() {
    let source = conversation(2);
    let delegate = RecordingLayoutDelegate::new();
    let sources = Sources::new(&source).with_layout_delegate(&delegate);
    let mut layout = layout();

    layout.content_height(&sources);
    assert_eq!(delegate.supplementary_calls(), 4);
    assert_eq!(layout.cache().len(), 2);

    layout.set_typing_indicator_hidden(&sources, false, true);
    layout.content_height(&sources);
    // header and footer of section 1 only
    assert_eq!(delegate.supplementary_calls(), 6);
    assert_eq!(layout.cache().len(), 2);
}

#[test]
fn empty_conversation_puts_the_indicator_in_section_zero() {
    let source = conversation(0);
    let sources = Sources::new(&source);
    let mut layout = layout();

    let update = layout
        .set_typing_indicator_hidden(&sources, false, false)
        .expect("indicator shown");
    assert_eq!(update.section_change, SectionChange::Insert(0));
    assert_eq!(update.invalidated_section, 0);
    assert!(layout.is_section_reserved_for_typing_indicator(&sources, 0));
    assert_approx_eq(layout.content_height(&sources), 77.0, 0.001, "content height");
}
