//! Trailing "is typing" pseudo-item.
//!
//! When visible the indicator occupies one extra section after the last
//! message section. It is sized on every query and never cached.

/// Section insertion or removal the host list must animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionChange {
    Insert(usize),
    Delete(usize),
}

/// What the host has to apply after the indicator was shown or hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypingIndicatorUpdate {
    pub is_hidden: bool,
    /// Whether the host should run its batch-update animation.
    pub animated: bool,
    /// Section whose header and footer attributes were dropped: the last
    /// message section, clamped to 0.
    pub invalidated_section: usize,
    pub section_change: SectionChange,
    /// Change to apply to the list's bottom content inset: the indicator
    /// height plus its top inset, negative when hiding.
    pub bottom_inset_delta: f32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TypingIndicator {
    hidden: bool,
}

impl TypingIndicator {
    pub(crate) fn new() -> Self {
        Self { hidden: true }
    }

    pub(crate) fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Section the indicator sits in when visible.
    pub(crate) fn section(&self, data_sections: usize) -> Option<usize> {
        (!self.hidden).then_some(data_sections)
    }

    /// Flips the state, or returns `None` when it already matches `hidden`.
    pub(crate) fn set_hidden(
        &mut self,
        hidden: bool,
        animated: bool,
        data_sections: usize,
        extent: f32,
    ) -> Option<TypingIndicatorUpdate> {
        if self.hidden == hidden {
            return None;
        }
        self.hidden = hidden;
        let (section_change, bottom_inset_delta) = if hidden {
            (SectionChange::Delete(data_sections), -extent)
        } else {
            (SectionChange::Insert(data_sections), extent)
        };
        Some(TypingIndicatorUpdate {
            is_hidden: hidden,
            animated,
            invalidated_section: data_sections.saturating_sub(1),
            section_change,
            bottom_inset_delta,
        })
    }
}
