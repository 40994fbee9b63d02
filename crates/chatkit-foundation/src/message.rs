//! Message model consumed by the layout engine.
//!
//! The engine only ever reads messages; hosts own them and tell the engine
//! when one changes so its cached geometry can be dropped.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chatkit_text::StyledText;
use chatkit_ui_graphics::Size;

/// Author of a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sender {
    pub id: String,
    pub display_name: String,
}

impl Sender {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub message_id: String,
    pub sender: Sender,
    pub sent_at: SystemTime,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(message_id: impl Into<String>, sender: Sender, kind: MessageKind) -> Self {
        Self {
            message_id: message_id.into(),
            sender,
            sent_at: SystemTime::now(),
            kind,
        }
    }

    pub fn with_sent_at(mut self, sent_at: SystemTime) -> Self {
        self.sent_at = sent_at;
        self
    }
}

/// Content of a message. Each variant is sized by its own calculator.
#[derive(Clone, Debug)]
pub enum MessageKind {
    Text(String),
    AttributedText(StyledText),
    /// Emoji-only text, drawn larger than regular text.
    Emoji(String),
    Photo(MediaItem),
    Video(MediaItem),
    Location(LocationItem),
    Audio(AudioItem),
    Contact(ContactItem),
    LinkPreview(LinkItem),
    /// Host-defined content sized by a host-registered calculator.
    Custom(CustomItem),
    /// Placeholder or system notice, sized like plain text.
    System(String),
}

impl MessageKind {
    /// Short variant name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Text(_) => "text",
            MessageKind::AttributedText(_) => "attributed-text",
            MessageKind::Emoji(_) => "emoji",
            MessageKind::Photo(_) => "photo",
            MessageKind::Video(_) => "video",
            MessageKind::Location(_) => "location",
            MessageKind::Audio(_) => "audio",
            MessageKind::Contact(_) => "contact",
            MessageKind::LinkPreview(_) => "link-preview",
            MessageKind::Custom(_) => "custom",
            MessageKind::System(_) => "system",
        }
    }
}

/// Photo or video payload.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub url: Option<String>,
    /// Size shown before (or instead of) the real media; its aspect ratio
    /// drives the default bubble size.
    pub placeholder_size: Size,
}

impl MediaItem {
    pub fn new(placeholder_size: Size) -> Self {
        Self {
            url: None,
            placeholder_size,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationItem {
    pub latitude: f64,
    pub longitude: f64,
    /// Preferred snapshot size.
    pub size: Size,
}

impl LocationItem {
    pub fn new(latitude: f64, longitude: f64, size: Size) -> Self {
        Self {
            latitude,
            longitude,
            size,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioItem {
    pub url: Option<String>,
    pub duration: Duration,
    /// Preferred bubble size; the bubble grows if its controls do not fit.
    pub size: Size,
}

impl AudioItem {
    pub const DEFAULT_SIZE: Size = Size::new(160.0, 35.0);

    pub fn new(duration: Duration) -> Self {
        Self {
            url: None,
            duration,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactItem {
    pub display_name: String,
    pub initials: String,
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
}

impl ContactItem {
    /// Contact with initials taken from the first letter of each name part.
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let initials = display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        Self {
            display_name,
            initials,
            phone_numbers: Vec::new(),
            emails: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkItem {
    /// Message text around the link.
    pub text: String,
    pub url: String,
    pub title: Option<String>,
    pub teaser: Option<String>,
}

impl LinkItem {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_teaser(mut self, teaser: impl Into<String>) -> Self {
        self.teaser = Some(teaser.into());
        self
    }

    /// Host part of the URL, or an empty string when the URL does not parse.
    pub fn domain(&self) -> String {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
            .unwrap_or_default()
    }
}

/// Host-defined payload. The tag lets custom calculators tell their own
/// kinds apart without downcasting.
#[derive(Clone)]
pub struct CustomItem {
    pub tag: String,
    pub payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl CustomItem {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: None,
        }
    }

    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(Arc::new(payload));
        self
    }

    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref()
    }
}

impl fmt::Debug for CustomItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomItem")
            .field("tag", &self.tag)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}
