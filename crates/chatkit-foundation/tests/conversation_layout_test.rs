//! End-to-end layout of whole conversations through the public API.

use std::time::Duration;

use chatkit_foundation::prelude::*;
use chatkit_foundation::LinkItem;
use chatkit_testing::assertions::assert_disjoint;
use chatkit_testing::prelude::*;
use chatkit_text::{MonospacedTextMeasurer, StyledText};
use chatkit_ui_graphics::{EdgeInsets, Font, Rect, Size};
use chatkit_ui_layout::{AvatarPosition, LabelAlignment, LabelAnchor, VerticalPosition};

fn config() -> MessagesLayoutConfig {
    MessagesLayoutConfig::default()
        .with_section_insets(EdgeInsets::ZERO)
        .with_text_font(Font::new(10.0).with_line_height(12.0))
        .with_text_insets(EdgeInsets::tlbr(7.0, 14.0, 7.0, 14.0))
}

fn layout_with(measurer: impl chatkit_text::TextMeasurer + 'static) -> MessagesLayout {
    let mut layout = MessagesLayout::new(config(), Box::new(measurer));
    layout.set_bounds(Size::new(300.0, 640.0));
    layout
}

fn layout() -> MessagesLayout {
    layout_with(MonospacedTextMeasurer)
}

fn mixed_conversation() -> TestDataSource {
    let mut factory = MessageFactory::new();
    let mut messages = Vec::new();
    for from_me in [false, true] {
        messages.push(factory.text(from_me, "Hello there, how is everything going today?"));
        messages.push(factory.emoji(from_me, "👋🙂"));
        messages.push(factory.attributed(
            from_me,
            StyledText::plain("bold ", Font::bold(15.0)).with_run("plain", Font::new(15.0)),
        ));
        messages.push(factory.photo(from_me, Size::new(800.0, 600.0)));
        messages.push(factory.video(from_me, Size::new(1920.0, 1080.0)));
        messages.push(factory.location(from_me, Size::new(240.0, 240.0)));
        messages.push(factory.audio(from_me, Duration::from_secs(75)));
        messages.push(factory.contact(from_me, "Ada Lovelace"));
        messages.push(factory.link(
            from_me,
            LinkItem::new("read this", "https://example.com/article")
                .with_title("A fairly long article title that wraps")
                .with_teaser("Teaser text"),
        ));
    }
    messages.push(factory.system("Ada joined the conversation"));

    let mut source = TestDataSource::with_messages(factory.me().clone(), messages);
    for section in 0..source.len() {
        let index = IndexPosition::section(section);
        source.set_label(index, LabelSlot::CellTop, "Today");
        source.set_label(index, LabelSlot::BubbleTop, "Sender name");
        source.set_label(index, LabelSlot::BubbleBottom, "12:00");
        source.set_label(index, LabelSlot::CellBottom, "Read");
    }
    source
}

#[test]
fn hello_from_another_user() {
    let mut factory = MessageFactory::new();
    let source = TestDataSource::with_messages(factory.me().clone(), [factory.text(false, "Hello")]);
    let sources = Sources::new(&source);
    let mut layout = layout();
    let index = IndexPosition::section(0);

    let attributes = layout.attributes_for_item(&sources, index).expect("message cell");
    assert_eq!(attributes.bubble_size, Size::new(53.0, 26.0));
    assert_eq!(attributes.height, 30.0);
    assert_eq!(layout.size_for_item(&sources, index), Size::new(300.0, 30.0));
}

#[test]
fn every_kind_fits_inside_its_cell() {
    let source = mixed_conversation();
    let sources = Sources::new(&source);
    let mut layout = layout();

    for section in 0..source.len() {
        let index = IndexPosition::section(section);
        let attributes = layout.attributes_for_item(&sources, index).expect("message cell");
        let frames = attributes.frames();
        let message = format!("section {section}");

        assert_frames_within(&frames, attributes.size(), &message);
        assert_disjoint(frames.avatar, frames.bubble, &message);
        assert!(attributes.bubble_size.width > 0.0, "{message}: empty bubble");
    }
    assert_eq!(layout.cache().len(), source.len());
}

#[test]
fn cached_items_are_not_measured_again() {
    let measurer = CountingMeasurer::new();
    let source = mixed_conversation();
    let sources = Sources::new(&source);
    let mut layout = layout_with(measurer.clone());

    for section in 0..source.len() {
        layout.size_for_item(&sources, IndexPosition::section(section));
    }
    assert!(measurer.calls() > 0);

    measurer.reset();
    for section in 0..source.len() {
        layout.size_for_item(&sources, IndexPosition::section(section));
    }
    assert_eq!(measurer.calls(), 0);

    layout.invalidate_item(IndexPosition::section(0));
    layout.size_for_item(&sources, IndexPosition::section(0));
    assert!(measurer.calls() > 0);
}

#[test]
fn edited_message_keeps_its_old_size_until_invalidated() {
    let mut factory = MessageFactory::new();
    let mut source = TestDataSource::new(factory.me().clone());
    let index = source.push(factory.text(false, "Hello"));
    let mut layout = layout();

    assert_eq!(layout.size_for_item(&Sources::new(&source), index).height, 30.0);

    let long = vec!["word"; 20].join(" ");
    source.replace(index, factory.text(false, &long));
    assert_eq!(layout.size_for_item(&Sources::new(&source), index).height, 30.0);

    layout.invalidate_item(index);
    assert_eq!(layout.size_for_item(&Sources::new(&source), index).height, 50.0);
}

#[test]
fn media_sizes_come_from_the_delegate_once() {
    let mut factory = MessageFactory::new();
    let source = TestDataSource::with_messages(
        factory.me().clone(),
        [factory.photo(false, Size::new(800.0, 600.0))],
    );
    let delegate = RecordingLayoutDelegate::new().with_media_size(Size::new(123.0, 45.0));
    let sources = Sources::new(&source).with_layout_delegate(&delegate);
    let mut layout = layout();
    let index = IndexPosition::section(0);

    for _ in 0..3 {
        let attributes = layout.attributes_for_item(&sources, index).expect("message cell");
        assert_eq!(attributes.bubble_size, Size::new(123.0, 45.0));
        assert_eq!(attributes.height, 45.0);
    }
    assert_eq!(delegate.media_calls(), 1);
}

#[test]
fn natural_label_hugs_the_sender_side_of_the_bubble() {
    let mut factory = MessageFactory::new();
    let source = TestDataSource::with_messages(
        factory.me().clone(),
        [factory.text(false, "Hello"), factory.text(true, "Hello")],
    )
    .with_label(IndexPosition::section(0), LabelSlot::BubbleBottom, "12:00")
    .with_label(IndexPosition::section(1), LabelSlot::BubbleBottom, "12:00");
    let delegate = RecordingLayoutDelegate::new().with_label_alignment(
        LabelSlot::BubbleBottom,
        LabelAlignment::new(LabelAnchor::Natural, EdgeInsets::horizontal(10.0)),
    );
    let sources = Sources::new(&source).with_layout_delegate(&delegate);
    let mut layout = layout();

    let incoming = layout
        .frames_for_item(&sources, IndexPosition::section(0))
        .expect("message cell");
    assert_eq!(incoming.bubble_bottom_label, Rect::new(44.0, 30.0, 30.0, 15.0));

    let outgoing = layout
        .frames_for_item(&sources, IndexPosition::section(1))
        .expect("message cell");
    assert_eq!(outgoing.avatar.x, 270.0);
    assert_eq!(outgoing.bubble, Rect::new(213.0, 4.0, 53.0, 26.0));
    // right edge of the bubble less the label's own inset
    assert_eq!(outgoing.bubble_bottom_label, Rect::new(226.0, 30.0, 30.0, 15.0));
}

#[test]
fn bubble_labels_stay_clear_of_cell_pinned_avatars() {
    for (vertical, slot) in [
        (VerticalPosition::CellTop, LabelSlot::BubbleTop),
        (VerticalPosition::CellBottom, LabelSlot::BubbleBottom),
    ] {
        let mut factory = MessageFactory::new();
        let source = TestDataSource::with_messages(
            factory.me().clone(),
            [factory.text(false, "Hello"), factory.text(true, "Hello")],
        )
        .with_label(IndexPosition::section(0), slot, "Alice")
        .with_label(IndexPosition::section(1), slot, "Alice");
        let sources = Sources::new(&source);
        let mut layout = MessagesLayout::new(
            config()
                .with_avatar_size(Size::square(40.0))
                .with_avatar_position(AvatarPosition::natural(vertical)),
            Box::new(MonospacedTextMeasurer),
        );
        layout.set_bounds(Size::new(300.0, 640.0));

        for section in 0..2 {
            let message = format!("{vertical:?} section {section}");
            let attributes = layout
                .attributes_for_item(&sources, IndexPosition::section(section))
                .expect("message cell");
            let frames = attributes.frames();
            let label = match slot {
                LabelSlot::BubbleTop => frames.bubble_top_label,
                _ => frames.bubble_bottom_label,
            };

            assert!(label.width > 0.0, "{message}: label missing");
            assert_frames_within(&frames, attributes.size(), &message);
            assert_disjoint(frames.avatar, label, &message);
        }
    }
}

#[test]
fn display_font_resizes_text_bubbles() {
    let mut factory = MessageFactory::new();
    let source = TestDataSource::with_messages(factory.me().clone(), [factory.text(false, "Hello")]);
    let display = FixedFontDisplayDelegate(Font::new(20.0).with_line_height(24.0));
    let sources = Sources::new(&source).with_display_delegate(&display);
    let mut layout = layout();

    let attributes = layout
        .attributes_for_item(&sources, IndexPosition::section(0))
        .expect("message cell");
    assert_eq!(attributes.bubble_size, Size::new(78.0, 38.0));
    assert_eq!(attributes.height, 38.0);
}

#[test]
fn content_height_adds_headers_and_footers() {
    let mut factory = MessageFactory::new();
    let source = TestDataSource::with_messages(
        factory.me().clone(),
        [factory.text(false, "Hello"), factory.text(true, "Hi")],
    );
    let mut delegate = RecordingLayoutDelegate::new();
    delegate.header_height = 20.0;
    delegate.footer_height = 10.0;
    let sources = Sources::new(&source).with_layout_delegate(&delegate);
    let mut layout = layout();

    assert_approx_eq(layout.content_height(&sources), 120.0, 0.001, "content height");
    let calls = delegate.supplementary_calls();
    layout.content_height(&sources);
    assert_eq!(delegate.supplementary_calls(), calls);
}

#[test]
#[should_panic(expected = "no custom size calculator is registered")]
fn custom_message_without_a_calculator_panics() {
    let mut factory = MessageFactory::new();
    let source = TestDataSource::with_messages(factory.me().clone(), [factory.custom(true, "poll")]);
    layout().size_for_item(&Sources::new(&source), IndexPosition::section(0));
}
