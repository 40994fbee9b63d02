//! The message layout engine.
//!
//! [`MessagesLayout`] answers size and attribute queries from the hosting
//! list. Each query resolves the message through the data source, sizes
//! the bubble with the calculator for its kind, measures the labels against
//! widths derived from their alignment, and composes the result into
//! [`LayoutAttributes`]. Results are memoized in an [`AttributeCache`] until
//! the width changes, the data reloads, or the host reports a changed item.

use std::rc::Rc;

use chatkit_text::{measure_text, MonospacedTextMeasurer, TextMeasurer};
use chatkit_ui_graphics::Size;
use chatkit_ui_layout::ConfigurationError;

use crate::attributes::avatar_reserved_width;
use crate::cache::SupplementaryKind;
use crate::frames::HorizontalGeometry;
use crate::typing::TypingIndicator;
use crate::{
    AccessoryLayout, AttributeCache, CalculatorSet, CellFrames, IndexPosition, LabelLayout,
    LabelSlot, LayoutAttributes, LayoutAttributesBuilder, MessageSizeCalculator,
    MessagesLayoutConfig, SizingContext, Sources, TypingIndicatorUpdate,
};

pub struct MessagesLayout {
    config: MessagesLayoutConfig,
    calculators: CalculatorSet,
    measurer: Box<dyn TextMeasurer>,
    cache: AttributeCache,
    bounds: Size,
    typing_indicator: TypingIndicator,
}

impl MessagesLayout {
    pub fn new(config: MessagesLayoutConfig, measurer: Box<dyn TextMeasurer>) -> Self {
        let calculators = CalculatorSet::from_config(&config);
        Self {
            config,
            calculators,
            measurer,
            cache: AttributeCache::new(),
            bounds: Size::ZERO,
            typing_indicator: TypingIndicator::new(),
        }
    }

    pub fn config(&self) -> &MessagesLayoutConfig {
        &self.config
    }

    /// Replaces the configuration. Every cached item depends on it, so the
    /// whole cache is dropped; a registered custom calculator is kept.
    pub fn set_config(&mut self, config: MessagesLayoutConfig) {
        let mut calculators = CalculatorSet::from_config(&config);
        if let Some(custom) = self.calculators.take_custom() {
            calculators.set_custom(custom);
        }
        self.config = config;
        self.calculators = calculators;
        log::debug!("layout configuration replaced; dropping cached attributes");
        self.cache.invalidate_all();
    }

    /// Registers the calculator that sizes [`crate::MessageKind::Custom`]
    /// messages.
    pub fn set_custom_calculator(&mut self, calculator: impl MessageSizeCalculator + 'static) {
        self.calculators.set_custom(Box::new(calculator));
        log::debug!("custom size calculator registered; dropping cached attributes");
        self.cache.invalidate_all();
    }

    pub fn calculators(&self) -> &CalculatorSet {
        &self.calculators
    }

    pub fn cache(&self) -> &AttributeCache {
        &self.cache
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Width of one cell: the bounds width less the horizontal section insets.
    pub fn item_width(&self) -> f32 {
        self.bounds.width - self.config.section_insets.horizontal_sum()
    }

    /// Only a width change affects geometry; height changes never do.
    pub fn should_invalidate_for_bounds_change(&self, new_bounds: Size) -> bool {
        new_bounds.width != self.bounds.width
    }

    /// Updates the list bounds. Returns whether the cache was dropped.
    pub fn set_bounds(&mut self, bounds: Size) -> bool {
        let invalidate = self.should_invalidate_for_bounds_change(bounds);
        if invalidate {
            log::debug!(
                "list width changed from {} to {}; dropping cached attributes",
                self.bounds.width,
                bounds.width
            );
            self.cache.invalidate_all();
        }
        self.bounds = bounds;
        invalidate
    }

    /// Drops everything after the host reloaded its data.
    pub fn reload_data(&mut self) {
        log::debug!("data reloaded; dropping {} cached attributes", self.cache.len());
        self.cache.invalidate_all();
    }

    /// Drops the attributes of a message whose content changed in place.
    pub fn invalidate_item(&mut self, index: IndexPosition) {
        if self.cache.invalidate(index) {
            log::debug!("invalidated cached attributes at {index}");
        }
    }

    pub fn invalidate_items(&mut self, indexes: impl IntoIterator<Item = IndexPosition>) {
        for index in indexes {
            self.invalidate_item(index);
        }
    }

    /// Message sections plus the typing indicator section when visible.
    pub fn number_of_sections(&self, sources: &Sources<'_>) -> usize {
        let sections = sources.data_source.number_of_sections();
        sections + usize::from(!self.typing_indicator.is_hidden())
    }

    pub fn number_of_items(&self, sources: &Sources<'_>, section: usize) -> usize {
        if self.is_section_reserved_for_typing_indicator(sources, section) {
            1
        } else {
            sources.data_source.number_of_items(section)
        }
    }

    pub fn is_typing_indicator_hidden(&self) -> bool {
        self.typing_indicator.is_hidden()
    }

    pub fn is_section_reserved_for_typing_indicator(
        &self,
        sources: &Sources<'_>,
        section: usize,
    ) -> bool {
        self.typing_indicator.section(sources.data_source.number_of_sections()) == Some(section)
    }

    /// Size of the typing indicator cell; never cached.
    pub fn typing_indicator_size(&self, sources: &Sources<'_>) -> Size {
        let item_width = self.item_width();
        sources
            .layout_delegate
            .typing_indicator_size(item_width)
            .unwrap_or(Size::new(item_width, self.config.typing_indicator_height))
    }

    fn typing_indicator_top_inset(&self, sources: &Sources<'_>) -> f32 {
        sources
            .layout_delegate
            .typing_indicator_top_inset()
            .unwrap_or(self.config.typing_indicator_top_inset)
    }

    /// Shows or hides the typing indicator.
    ///
    /// Only the header and footer attributes of the last message section are
    /// dropped; item attributes stay cached. The returned update tells the
    /// host which section to insert or delete and how far to move the bottom
    /// content inset. `None` when the indicator already was in that state.
    pub fn set_typing_indicator_hidden(
        &mut self,
        sources: &Sources<'_>,
        hidden: bool,
        animated: bool,
    ) -> Option<TypingIndicatorUpdate> {
        let data_sections = sources.data_source.number_of_sections();
        let extent =
            self.typing_indicator_size(sources).height + self.typing_indicator_top_inset(sources);
        let update = self
            .typing_indicator
            .set_hidden(hidden, animated, data_sections, extent)?;
        log::debug!(
            "typing indicator {}; invalidating supplementary attributes of section {}",
            if hidden { "hidden" } else { "shown" },
            update.invalidated_section
        );
        self.cache.invalidate_supplementary(update.invalidated_section);
        Some(update)
    }

    /// Size of the item at `index`, for the list's size query.
    ///
    /// # Panics
    ///
    /// On a [`ConfigurationError`], see [`Self::attributes_for_item`].
    pub fn size_for_item(&mut self, sources: &Sources<'_>, index: IndexPosition) -> Size {
        match self.attributes_for_item(sources, index) {
            Some(attributes) => attributes.size(),
            None => self.typing_indicator_size(sources),
        }
    }

    /// Composed attributes of the message at `index`, or `None` for the
    /// typing indicator.
    ///
    /// # Panics
    ///
    /// When the host wiring is broken: an unresolved placement, a custom
    /// message without a registered calculator, or a calculator handed a
    /// kind it does not size. Use [`Self::try_attributes_for_item`] to get
    /// the error instead.
    pub fn attributes_for_item(
        &mut self,
        sources: &Sources<'_>,
        index: IndexPosition,
    ) -> Option<Rc<LayoutAttributes>> {
        match self.try_attributes_for_item(sources, index) {
            Ok(attributes) => attributes,
            Err(err) => err.raise(),
        }
    }

    pub fn try_attributes_for_item(
        &mut self,
        sources: &Sources<'_>,
        index: IndexPosition,
    ) -> Result<Option<Rc<LayoutAttributes>>, ConfigurationError> {
        if self.is_section_reserved_for_typing_indicator(sources, index.section) {
            return Ok(None);
        }
        if let Some(attributes) = self.cache.get(index) {
            return Ok(Some(attributes));
        }
        let (attributes, cacheable) = self.compose(sources, index)?;
        if cacheable {
            Ok(Some(self.cache.put(attributes)))
        } else {
            Ok(Some(Rc::new(attributes)))
        }
    }

    /// Cell-local frames of the message at `index`.
    pub fn frames_for_item(
        &mut self,
        sources: &Sources<'_>,
        index: IndexPosition,
    ) -> Option<CellFrames> {
        self.attributes_for_item(sources, index)
            .map(|attributes| attributes.frames())
    }

    pub fn header_size(&mut self, sources: &Sources<'_>, section: usize) -> Size {
        self.supplementary_size(sources, SupplementaryKind::Header, section)
    }

    pub fn footer_size(&mut self, sources: &Sources<'_>, section: usize) -> Size {
        self.supplementary_size(sources, SupplementaryKind::Footer, section)
    }

    fn supplementary_size(
        &mut self,
        sources: &Sources<'_>,
        kind: SupplementaryKind,
        section: usize,
    ) -> Size {
        if self.is_section_reserved_for_typing_indicator(sources, section) {
            return Size::ZERO;
        }
        if let Some(size) = self.cache.supplementary(kind, section) {
            return size;
        }
        let item_width = self.item_width();
        let size = match kind {
            SupplementaryKind::Header => sources.layout_delegate.header_size(section, item_width),
            SupplementaryKind::Footer => sources.layout_delegate.footer_size(section, item_width),
        };
        if item_width > 0.0 {
            self.cache.put_supplementary(kind, section, size);
        }
        size
    }

    /// Vertical scroll extent: every section's insets, header, footer and
    /// items, plus the typing indicator and its top inset when visible.
    pub fn content_height(&mut self, sources: &Sources<'_>) -> f32 {
        let insets = self.config.section_insets.vertical_sum();
        let mut height = 0.0;
        for section in 0..self.number_of_sections(sources) {
            if self.is_section_reserved_for_typing_indicator(sources, section) {
                height += self.typing_indicator_top_inset(sources)
                    + self.typing_indicator_size(sources).height;
                continue;
            }
            height += insets
                + self.header_size(sources, section).height
                + self.footer_size(sources, section).height;
            for item in 0..sources.data_source.number_of_items(section) {
                height += self
                    .size_for_item(sources, IndexPosition::new(section, item))
                    .height;
            }
        }
        height
    }

    /// Composes attributes for `index` from scratch. The flag is false when
    /// the bubble had no room, in which case the result must not be cached.
    fn compose(
        &self,
        sources: &Sources<'_>,
        index: IndexPosition,
    ) -> Result<(LayoutAttributes, bool), ConfigurationError> {
        let data_source = sources.data_source;
        let delegate = sources.layout_delegate;
        let config = &self.config;

        let message = data_source.message_for_item(index);
        let from_me = data_source.is_from_current_user(message);
        let item_width = self.item_width();

        let avatar_size = delegate
            .avatar_size(message, index)
            .unwrap_or(*config.avatar_size.get(from_me));
        let avatar_position = delegate
            .avatar_position(message, index)
            .unwrap_or(*config.avatar_position.get(from_me))
            .resolve(from_me);
        let avatar_padding = config.avatar_leading_trailing_padding;
        let bubble_padding = delegate
            .bubble_padding(message, index)
            .unwrap_or(*config.bubble_padding.get(from_me));
        let accessory = AccessoryLayout {
            size: delegate
                .accessory_size(message, index)
                .unwrap_or(*config.accessory_size.get(from_me)),
            padding: *config.accessory_padding.get(from_me),
            position: *config.accessory_position.get(from_me),
        };

        let bubble_max_width = item_width
            - avatar_reserved_width(avatar_position, avatar_size, avatar_padding)
            - bubble_padding.horizontal_sum()
            - accessory.reserved_width();
        let cacheable = bubble_max_width > 0.0;
        if !cacheable {
            log::warn!(
                "no room for the bubble at {index} (item width {item_width}); not caching"
            );
        }

        let ctx = SizingContext {
            index,
            is_from_current_user: from_me,
            item_width,
            bubble_max_width,
            measurer: &*self.measurer,
            layout_delegate: delegate,
            display_delegate: sources.display_delegate,
        };
        let calculator = self.calculators.for_message(message)?;
        let max_content_width = calculator.max_content_width(message, &ctx);
        let bubble_size = calculator.content_size(message, max_content_width, &ctx)?;

        let mut builder = LayoutAttributesBuilder::new(index, item_width, from_me);
        calculator.configure(message, &ctx, &mut builder);

        let horizontal = HorizontalGeometry::new(
            item_width,
            avatar_position,
            avatar_size,
            avatar_padding,
            bubble_size.width,
            bubble_padding,
        );
        for slot in LabelSlot::ALL {
            let alignment = delegate
                .label_alignment(message, index, slot)
                .unwrap_or_else(|| *config.label_alignment(slot).get(from_me))
                .resolve(from_me);
            let text_size = match data_source.label_text(message, index, slot) {
                Some(text) if !text.is_empty() => {
                    let max_width =
                        horizontal.label_max_width(slot, alignment.anchor, alignment.insets);
                    if max_width > 0.0 {
                        measure_text(&*self.measurer, &text, max_width)
                    } else {
                        log::trace!("no room for the {slot:?} label at {index}");
                        Size::ZERO
                    }
                }
                _ => Size::ZERO,
            };
            builder.label(slot, LabelLayout::new(text_size, alignment));
        }

        builder
            .avatar(avatar_size, avatar_position, avatar_padding)
            .bubble(bubble_size, bubble_padding)
            .accessory(accessory);
        let attributes = builder.build()?;
        log::trace!("composed attributes at {index}: height {}", attributes.height);
        Ok((attributes, cacheable))
    }
}

impl Default for MessagesLayout {
    fn default() -> Self {
        Self::new(
            MessagesLayoutConfig::default(),
            Box::new(MonospacedTextMeasurer),
        )
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
