use chatkit_ui_graphics::Font;
use smallvec::SmallVec;

use crate::StyledText;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the widest line, trailing whitespace excluded.
    pub width: f32,
    pub height: f32,
    /// Height of the first line
    pub line_height: f32,
    /// Number of lines after wrapping
    pub line_count: usize,
}

impl TextMetrics {
    pub const EMPTY: TextMetrics = TextMetrics {
        width: 0.0,
        height: 0.0,
        line_height: 0.0,
        line_count: 0,
    };
}

/// Lays text out and reports raw, unrounded metrics.
///
/// Implementations must be pure: the same text, fonts and width always
/// produce the same metrics, and a wider `max_width` never produces more
/// lines. `max_width` may be `f32::INFINITY` for the natural, unwrapped size.
/// Rounding to whole units is layered on top by [`crate::measure_text`].
pub trait TextMeasurer {
    fn layout(&self, text: &StyledText, max_width: f32) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn layout(&self, text: &StyledText, max_width: f32) -> TextMetrics {
        (**self).layout(text, max_width)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn layout(&self, text: &StyledText, max_width: f32) -> TextMetrics {
        (**self).layout(text, max_width)
    }
}

/// Deterministic measurer that gives every character the same advance for a
/// given font size and wraps greedily at word boundaries.
///
/// Words wider than the available width are broken between characters.
/// Useful headless and in tests; real hosts plug in their platform's shaper.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    /// Advance of one character as a fraction of the point size.
    pub const CHAR_WIDTH_RATIO: f32 = 0.5;
    /// Line height as a fraction of the point size, unless the font sets one.
    pub const LINE_HEIGHT_RATIO: f32 = 1.2;

    pub fn char_width(font: &Font) -> f32 {
        font.size * Self::CHAR_WIDTH_RATIO
    }

    pub fn line_height(font: &Font) -> f32 {
        font.line_height.unwrap_or(font.size * Self::LINE_HEIGHT_RATIO)
    }
}

#[derive(Clone, Copy, Debug)]
struct Glyph {
    advance: f32,
    line_height: f32,
    is_whitespace: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct Line {
    /// Advance of everything placed so far, trailing whitespace included.
    advance: f32,
    /// Advance up to the end of the last non-whitespace glyph.
    visible_width: f32,
    height: f32,
    glyphs: usize,
}

impl Line {
    fn place(&mut self, glyph: &Glyph) {
        self.advance += glyph.advance;
        if !glyph.is_whitespace {
            self.visible_width = self.advance;
        }
        self.height = self.height.max(glyph.line_height);
        self.glyphs += 1;
    }
}

type Lines = SmallVec<[Line; 8]>;

fn finish_line(lines: &mut Lines, line: &mut Line, fallback_height: f32) {
    let mut finished = std::mem::take(line);
    if finished.glyphs == 0 {
        finished.height = fallback_height;
    }
    lines.push(finished);
}

fn wrap_paragraph(paragraph: &[Glyph], fallback_height: f32, max_width: f32, lines: &mut Lines) {
    let mut line = Line::default();
    let mut cursor = 0;

    while cursor < paragraph.len() {
        let is_whitespace = paragraph[cursor].is_whitespace;
        let end = paragraph[cursor..]
            .iter()
            .position(|glyph| glyph.is_whitespace != is_whitespace)
            .map_or(paragraph.len(), |offset| cursor + offset);
        let segment = &paragraph[cursor..end];
        cursor = end;

        if is_whitespace {
            segment.iter().for_each(|glyph| line.place(glyph));
            continue;
        }

        let word_width: f32 = segment.iter().map(|glyph| glyph.advance).sum();
        if line.glyphs > 0 && line.advance + word_width > max_width {
            finish_line(lines, &mut line, fallback_height);
        }

        if word_width > max_width {
            for glyph in segment {
                if line.glyphs > 0 && line.advance + glyph.advance > max_width {
                    finish_line(lines, &mut line, fallback_height);
                }
                line.place(glyph);
            }
        } else {
            segment.iter().for_each(|glyph| line.place(glyph));
        }
    }

    finish_line(lines, &mut line, fallback_height);
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn layout(&self, text: &StyledText, max_width: f32) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::EMPTY;
        }

        let mut lines = Lines::new();
        let mut paragraph: Vec<Glyph> = Vec::with_capacity(text.char_count());
        let mut paragraph_height = 0.0_f32;

        for run in text.runs() {
            let advance = Self::char_width(&run.font);
            let line_height = Self::line_height(&run.font);
            for ch in run.text.chars() {
                if ch == '\n' {
                    let fallback_height = line_height.max(paragraph_height);
                    wrap_paragraph(&paragraph, fallback_height, max_width, &mut lines);
                    paragraph.clear();
                    paragraph_height = 0.0;
                    continue;
                }
                paragraph_height = paragraph_height.max(line_height);
                paragraph.push(Glyph {
                    advance,
                    line_height,
                    is_whitespace: ch.is_whitespace(),
                });
            }
        }

        let trailing_height = text
            .runs()
            .last()
            .map_or(0.0, |run| Self::line_height(&run.font));
        wrap_paragraph(&paragraph, trailing_height, max_width, &mut lines);

        TextMetrics {
            width: lines
                .iter()
                .map(|line| line.visible_width)
                .fold(0.0_f32, f32::max),
            height: lines.iter().map(|line| line.height).sum(),
            line_height: lines.first().map_or(0.0, |line| line.height),
            line_count: lines.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> Font {
        // 5 units per character, 12 units per line
        Font::new(10.0).with_line_height(12.0)
    }

    fn layout(text: &str, max_width: f32) -> TextMetrics {
        MonospacedTextMeasurer.layout(&StyledText::plain(text, font()), max_width)
    }

    #[test]
    fn single_line_fits() {
        let metrics = layout("Hello", 200.0);
        assert_eq!(metrics.width, 25.0);
        assert_eq!(metrics.height, 12.0);
        assert_eq!(metrics.line_count, 1);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        // "Hello world" is 55 wide; "Hello" alone is 25
        let metrics = layout("Hello world", 40.0);
        assert_eq!(metrics.line_count, 2);
        assert_eq!(metrics.width, 25.0);
        assert_eq!(metrics.height, 24.0);
    }

    #[test]
    fn breaks_long_words_between_characters() {
        let metrics = layout("abcdefghij", 20.0);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.width, 20.0);
    }

    #[test]
    fn hard_breaks_start_new_lines() {
        let metrics = layout("a\n\nb", f32::INFINITY);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.height, 36.0);
    }

    #[test]
    fn trailing_whitespace_does_not_count_toward_width() {
        let metrics = layout("Hi   ", f32::INFINITY);
        assert_eq!(metrics.width, 10.0);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert_eq!(layout("", 100.0), TextMetrics::EMPTY);
    }

    #[test]
    fn tallest_run_sets_line_height() {
        let text = StyledText::plain("small ", font()).with_run("BIG", Font::new(20.0).with_line_height(24.0));
        let metrics = MonospacedTextMeasurer.layout(&text, f32::INFINITY);
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.height, 24.0);
        // 6 * 5 + 3 * 10
        assert_eq!(metrics.width, 60.0);
    }
}
