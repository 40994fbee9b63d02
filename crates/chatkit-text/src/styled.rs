//! Rich text: ordered runs of text, each with its own font.

use chatkit_ui_graphics::Font;
use smallvec::SmallVec;

/// A contiguous stretch of text in a single font.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
}

impl TextRun {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// Text made of one or more font runs.
///
/// Plain strings are a single run. Most message text never has more than
/// one, so the runs are stored inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    runs: SmallVec<[TextRun; 1]>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-run text.
    pub fn plain(text: impl Into<String>, font: Font) -> Self {
        let mut styled = Self::new();
        styled.push(text, font);
        styled
    }

    /// Appends a run. Empty runs are dropped.
    pub fn push(&mut self, text: impl Into<String>, font: Font) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.runs.push(TextRun { text, font });
    }

    pub fn with_run(mut self, text: impl Into<String>, font: Font) -> Self {
        self.push(text, font);
        self
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// True when there is no visible text at all.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// The text with styling dropped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Number of characters across all runs.
    pub fn char_count(&self) -> usize {
        self.runs.iter().map(|run| run.text.chars().count()).sum()
    }
}

impl FromIterator<TextRun> for StyledText {
    fn from_iter<I: IntoIterator<Item = TextRun>>(iter: I) -> Self {
        let mut styled = Self::new();
        for run in iter {
            styled.push(run.text, run.font);
        }
        styled
    }
}
