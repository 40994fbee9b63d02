use std::cell::Cell;
use std::rc::Rc;

use chatkit_text::{MonospacedTextMeasurer, StyledText, TextMeasurer, TextMetrics};

/// Monospaced measurer that counts how often it is asked to lay text out.
///
/// Clones share the counter, so a test can keep one handle after boxing the
/// other into the layout engine.
#[derive(Clone, Debug, Default)]
pub struct CountingMeasurer {
    inner: MonospacedTextMeasurer,
    calls: Rc<Cell<usize>>,
}

impl CountingMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }
}

impl TextMeasurer for CountingMeasurer {
    fn layout(&self, text: &StyledText, max_width: f32) -> TextMetrics {
        self.calls.set(self.calls.get() + 1);
        self.inner.layout(text, max_width)
    }
}
