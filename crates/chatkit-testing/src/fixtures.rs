//! In-memory collaborators for layout tests.

use std::cell::Cell;
use std::time::{Duration, SystemTime};

use chatkit_foundation::{
    AudioItem, ContactItem, CustomItem, IndexPosition, LabelSlot, LinkItem, LocationItem,
    MediaItem, Message, MessageKind, MessagesDataSource, MessagesDisplayDelegate,
    MessagesLayoutDelegate, Sender,
};
use chatkit_text::StyledText;
use chatkit_ui_graphics::{EdgeInsets, Font, Size};
use chatkit_ui_layout::{AvatarPosition, LabelAlignment};
use rustc_hash::FxHashMap;

/// Font used for labels added through [`TestDataSource::with_label`].
pub fn label_font() -> Font {
    Font::new(12.0)
}

/// Builds messages with sequential ids and timestamps from two senders.
#[derive(Debug)]
pub struct MessageFactory {
    me: Sender,
    other: Sender,
    next_id: u64,
}

impl MessageFactory {
    pub fn new() -> Self {
        Self {
            me: Sender::new("me", "Me"),
            other: Sender::new("other", "Other"),
            next_id: 0,
        }
    }

    /// The sender treated as the current user.
    pub fn me(&self) -> &Sender {
        &self.me
    }

    pub fn other(&self) -> &Sender {
        &self.other
    }

    pub fn message(&mut self, from_me: bool, kind: MessageKind) -> Message {
        self.next_id += 1;
        let sender = if from_me { &self.me } else { &self.other };
        Message::new(format!("msg-{}", self.next_id), sender.clone(), kind)
            .with_sent_at(SystemTime::UNIX_EPOCH + Duration::from_secs(self.next_id * 60))
    }

    pub fn text(&mut self, from_me: bool, text: &str) -> Message {
        self.message(from_me, MessageKind::Text(text.to_owned()))
    }

    pub fn emoji(&mut self, from_me: bool, emoji: &str) -> Message {
        self.message(from_me, MessageKind::Emoji(emoji.to_owned()))
    }

    pub fn attributed(&mut self, from_me: bool, text: StyledText) -> Message {
        self.message(from_me, MessageKind::AttributedText(text))
    }

    pub fn system(&mut self, text: &str) -> Message {
        self.message(false, MessageKind::System(text.to_owned()))
    }

    pub fn photo(&mut self, from_me: bool, placeholder: Size) -> Message {
        self.message(from_me, MessageKind::Photo(MediaItem::new(placeholder)))
    }

    pub fn video(&mut self, from_me: bool, placeholder: Size) -> Message {
        self.message(from_me, MessageKind::Video(MediaItem::new(placeholder)))
    }

    pub fn location(&mut self, from_me: bool, size: Size) -> Message {
        let item = LocationItem::new(52.52, 13.405, size);
        self.message(from_me, MessageKind::Location(item))
    }

    pub fn audio(&mut self, from_me: bool, duration: Duration) -> Message {
        self.message(from_me, MessageKind::Audio(AudioItem::new(duration)))
    }

    pub fn contact(&mut self, from_me: bool, name: &str) -> Message {
        self.message(from_me, MessageKind::Contact(ContactItem::new(name)))
    }

    pub fn link(&mut self, from_me: bool, item: LinkItem) -> Message {
        self.message(from_me, MessageKind::LinkPreview(item))
    }

    pub fn custom(&mut self, from_me: bool, tag: &str) -> Message {
        self.message(from_me, MessageKind::Custom(CustomItem::new(tag)))
    }
}

impl Default for MessageFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Data source backed by vectors of messages, one vector per section.
#[derive(Debug)]
pub struct TestDataSource {
    current: Sender,
    sections: Vec<Vec<Message>>,
    labels: FxHashMap<(IndexPosition, LabelSlot), StyledText>,
}

impl TestDataSource {
    pub fn new(current: Sender) -> Self {
        Self {
            current,
            sections: Vec::new(),
            labels: FxHashMap::default(),
        }
    }

    /// Data source with one message per section.
    pub fn with_messages(current: Sender, messages: impl IntoIterator<Item = Message>) -> Self {
        let mut source = Self::new(current);
        for message in messages {
            source.push(message);
        }
        source
    }

    /// Appends `message` in a new section.
    pub fn push(&mut self, message: Message) -> IndexPosition {
        self.sections.push(vec![message]);
        IndexPosition::section(self.sections.len() - 1)
    }

    /// Appends `message` to an existing section.
    pub fn push_to_section(&mut self, section: usize, message: Message) -> IndexPosition {
        let items = &mut self.sections[section];
        items.push(message);
        IndexPosition::new(section, items.len() - 1)
    }

    /// Replaces the message at `index`, as a host editing a message in place.
    pub fn replace(&mut self, index: IndexPosition, message: Message) {
        self.sections[index.section][index.item] = message;
    }

    pub fn set_label(&mut self, index: IndexPosition, slot: LabelSlot, text: &str) {
        self.labels
            .insert((index, slot), StyledText::plain(text, label_font()));
    }

    pub fn with_label(mut self, index: IndexPosition, slot: LabelSlot, text: &str) -> Self {
        self.set_label(index, slot, text);
        self
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessagesDataSource for TestDataSource {
    fn current_sender(&self) -> &Sender {
        &self.current
    }

    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    fn message_for_item(&self, index: IndexPosition) -> &Message {
        &self.sections[index.section][index.item]
    }

    fn label_text(
        &self,
        _message: &Message,
        index: IndexPosition,
        slot: LabelSlot,
    ) -> Option<StyledText> {
        self.labels.get(&(index, slot)).cloned()
    }
}

/// Layout delegate with settable overrides that records how often media
/// sizes and section supplements are requested.
#[derive(Debug, Default)]
pub struct RecordingLayoutDelegate {
    pub avatar_size: Option<Size>,
    pub avatar_position: Option<AvatarPosition>,
    pub bubble_padding: Option<EdgeInsets>,
    pub label_alignments: FxHashMap<LabelSlot, LabelAlignment>,
    pub accessory_size: Option<Size>,
    /// Answer for every photo, video and location size query.
    pub media_size: Option<Size>,
    pub header_height: f32,
    pub footer_height: f32,
    pub typing_indicator_size: Option<Size>,
    pub typing_indicator_top_inset: Option<f32>,
    media_calls: Cell<usize>,
    supplementary_calls: Cell<usize>,
}

impl RecordingLayoutDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_avatar(mut self, size: Size, position: AvatarPosition) -> Self {
        self.avatar_size = Some(size);
        self.avatar_position = Some(position);
        self
    }

    pub fn with_bubble_padding(mut self, padding: EdgeInsets) -> Self {
        self.bubble_padding = Some(padding);
        self
    }

    pub fn with_label_alignment(mut self, slot: LabelSlot, alignment: LabelAlignment) -> Self {
        self.label_alignments.insert(slot, alignment);
        self
    }

    pub fn with_accessory_size(mut self, size: Size) -> Self {
        self.accessory_size = Some(size);
        self
    }

    pub fn with_media_size(mut self, size: Size) -> Self {
        self.media_size = Some(size);
        self
    }

    pub fn media_calls(&self) -> usize {
        self.media_calls.get()
    }

    pub fn supplementary_calls(&self) -> usize {
        self.supplementary_calls.get()
    }

    fn record_media(&self, fallback: Size, max_width: f32) -> Size {
        self.media_calls.set(self.media_calls.get() + 1);
        self.media_size
            .unwrap_or_else(|| fallback.aspect_fit_width(max_width))
    }
}

impl MessagesLayoutDelegate for RecordingLayoutDelegate {
    fn avatar_size(&self, _message: &Message, _index: IndexPosition) -> Option<Size> {
        self.avatar_size
    }

    fn avatar_position(&self, _message: &Message, _index: IndexPosition) -> Option<AvatarPosition> {
        self.avatar_position
    }

    fn bubble_padding(&self, _message: &Message, _index: IndexPosition) -> Option<EdgeInsets> {
        self.bubble_padding
    }

    fn label_alignment(
        &self,
        _message: &Message,
        _index: IndexPosition,
        slot: LabelSlot,
    ) -> Option<LabelAlignment> {
        self.label_alignments.get(&slot).copied()
    }

    fn accessory_size(&self, _message: &Message, _index: IndexPosition) -> Option<Size> {
        self.accessory_size
    }

    fn header_size(&self, _section: usize, item_width: f32) -> Size {
        self.supplementary_calls
            .set(self.supplementary_calls.get() + 1);
        Size::new(item_width, self.header_height)
    }

    fn footer_size(&self, _section: usize, item_width: f32) -> Size {
        self.supplementary_calls
            .set(self.supplementary_calls.get() + 1);
        Size::new(item_width, self.footer_height)
    }

    fn typing_indicator_size(&self, _item_width: f32) -> Option<Size> {
        self.typing_indicator_size
    }

    fn typing_indicator_top_inset(&self) -> Option<f32> {
        self.typing_indicator_top_inset
    }

    fn photo_size(
        &self,
        _message: &Message,
        item: &MediaItem,
        _index: IndexPosition,
        max_width: f32,
    ) -> Size {
        self.record_media(item.placeholder_size, max_width)
    }

    fn video_size(
        &self,
        _message: &Message,
        item: &MediaItem,
        _index: IndexPosition,
        max_width: f32,
    ) -> Size {
        self.record_media(item.placeholder_size, max_width)
    }

    fn location_size(
        &self,
        _message: &Message,
        item: &LocationItem,
        _index: IndexPosition,
        max_width: f32,
    ) -> Size {
        self.record_media(item.size, max_width)
    }
}

/// Display delegate that hands out the same font for every message.
#[derive(Clone, Debug)]
pub struct FixedFontDisplayDelegate(pub Font);

impl MessagesDisplayDelegate for FixedFontDisplayDelegate {
    fn message_font(&self, _message: &Message, _index: IndexPosition) -> Option<Font> {
        Some(self.0.clone())
    }
}
