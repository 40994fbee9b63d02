//! Whole-unit text sizes on top of a [`TextMeasurer`].
//!
//! Heights always round up so text is never clipped. Widths round up too,
//! but never past the width the caller offered.

use chatkit_ui_graphics::{Font, Size};

use crate::{StyledText, TextMeasurer};

/// Absorbs float noise from summed advances (e.g. `40.000004`) so it does not
/// round up to an extra whole unit.
const ROUNDING_TOLERANCE: f32 = 1e-4;

#[inline]
fn round_up(value: f32) -> f32 {
    (value - ROUNDING_TOLERANCE).ceil().max(0.0)
}

/// Minimal whole-unit size that displays `text` without truncation when
/// wrapped at `max_width`.
///
/// The returned width never exceeds `max_width`. A non-positive (or NaN)
/// `max_width` yields [`Size::ZERO`]; this happens transiently while the host
/// is resizing and callers lay out with it for one pass.
pub fn measure_text(measurer: &dyn TextMeasurer, text: &StyledText, max_width: f32) -> Size {
    if max_width.is_nan() || max_width <= 0.0 {
        log::trace!("measuring text against non-positive width {max_width}");
        return Size::ZERO;
    }
    if text.is_empty() {
        return Size::ZERO;
    }
    let metrics = measurer.layout(text, max_width);
    Size::new(
        round_up(metrics.width).min(max_width),
        round_up(metrics.height),
    )
}

/// [`measure_text`] for a plain string in a single font.
pub fn measure_plain(measurer: &dyn TextMeasurer, text: &str, font: &Font, max_width: f32) -> Size {
    measure_text(measurer, &StyledText::plain(text, font.clone()), max_width)
}

/// Minimal whole-unit width at which `text` fits within `height`, never more
/// than `max_width`.
///
/// Agrees with [`measure_text`]: for any width `w`, the result for
/// `measure_text(text, w).height` is at most `w`. When the text cannot fit the
/// height even at `max_width`, `max_width` itself is returned, clamped to the
/// text's natural width.
pub fn measure_width_for_height(
    measurer: &dyn TextMeasurer,
    text: &StyledText,
    height: f32,
    max_width: f32,
) -> f32 {
    if max_width.is_nan() || max_width <= 0.0 || text.is_empty() {
        return 0.0;
    }

    let natural = measure_text(measurer, text, f32::INFINITY);
    let fits = |width: f32| measure_text(measurer, text, width).height <= height;

    let mut upper = natural.width.min(max_width.floor());
    if upper < 1.0 || !fits(upper) {
        return natural.width.min(max_width);
    }

    // Smallest whole width that still fits; `upper` always fits, `lower` never does.
    let mut lower = 0.0_f32;
    while upper - lower > 1.0 {
        let mid = ((lower + upper) / 2.0).floor();
        if fits(mid) {
            upper = mid;
        } else {
            lower = mid;
        }
    }
    upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonospacedTextMeasurer;

    fn font() -> Font {
        Font::new(10.0).with_line_height(12.0)
    }

    fn text(value: &str) -> StyledText {
        StyledText::plain(value, font())
    }

    const SENTENCE: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn height_rounds_up_to_whole_units() {
        let font = Font::new(10.0).with_line_height(12.3);
        let size = measure_plain(&MonospacedTextMeasurer, "Hello", &font, 100.0);
        assert_eq!(size.height, 13.0);
    }

    #[test]
    fn width_rounds_up_but_stays_within_max_width() {
        let font = Font::new(9.0).with_line_height(12.0);
        // 3 * 4.5 = 13.5
        let size = measure_plain(&MonospacedTextMeasurer, "abc", &font, 100.0);
        assert_eq!(size.width, 14.0);
        // one character (4.5) is wider than the box; width clamps to the box
        let narrow = measure_plain(&MonospacedTextMeasurer, "abc", &font, 4.0);
        assert_eq!(narrow.width, 4.0);
        assert_eq!(narrow.height, 36.0);
    }

    #[test]
    fn float_noise_does_not_add_a_unit() {
        assert_eq!(round_up(40.000_004), 40.0);
        assert_eq!(round_up(40.2), 41.0);
    }

    #[test]
    fn zero_and_negative_widths_measure_as_zero() {
        let measurer = MonospacedTextMeasurer;
        assert_eq!(measure_text(&measurer, &text("Hello"), 0.0), Size::ZERO);
        assert_eq!(measure_text(&measurer, &text("Hello"), -20.0), Size::ZERO);
        assert_eq!(measure_text(&measurer, &text("Hello"), f32::NAN), Size::ZERO);
    }

    #[test]
    fn wider_boxes_never_measure_taller() {
        let measurer = MonospacedTextMeasurer;
        let sentence = text(SENTENCE);
        let natural = measure_text(&measurer, &sentence, f32::INFINITY);
        let mut previous_height = f32::INFINITY;
        for width in (10..=260).step_by(7) {
            let size = measure_text(&measurer, &sentence, width as f32);
            assert!(size.height <= previous_height, "height grew at width {width}");
            assert!(size.width <= width as f32);
            assert!(size.width <= natural.width);
            previous_height = size.height;
        }
    }

    #[test]
    fn width_for_height_round_trips() {
        let measurer = MonospacedTextMeasurer;
        let sentence = text(SENTENCE);
        for max_width in [37.0, 64.0, 100.0, 151.0, 215.0, 400.0] {
            let height = measure_text(&measurer, &sentence, max_width).height;
            let width = measure_width_for_height(&measurer, &sentence, height, max_width);
            assert!(width <= max_width, "{width} > {max_width}");
            assert_eq!(measure_text(&measurer, &sentence, width).height, height);
        }
    }

    #[test]
    fn width_for_single_line_height_is_natural_width() {
        let measurer = MonospacedTextMeasurer;
        let width = measure_width_for_height(&measurer, &text("Hello world"), 12.0, 500.0);
        assert_eq!(width, 55.0);
    }

    #[test]
    fn width_for_height_gives_up_at_max_width() {
        let measurer = MonospacedTextMeasurer;
        let width = measure_width_for_height(&measurer, &text(SENTENCE), 12.0, 100.0);
        assert_eq!(width, 100.0);
    }
}
