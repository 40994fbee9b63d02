//! Styled text and deterministic text measurement for Chatkit
//!
//! [`TextMeasurer`] implementations lay text out and report raw metrics;
//! [`measure_text`] and [`measure_width_for_height`] turn those metrics into
//! whole-unit sizes with the rounding every layout computation relies on.

mod measure;
mod measurer;
mod styled;

pub use measure::*;
pub use measurer::*;
pub use styled::*;

pub mod prelude {
    pub use crate::measure::{measure_plain, measure_text, measure_width_for_height};
    pub use crate::measurer::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
    pub use crate::styled::{StyledText, TextRun};
}
