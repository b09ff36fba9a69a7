use crate::Section;

/// Read-only view of the page geometry at the time of a scroll event.
pub trait Viewport {
    /// Vertical scroll offset of the document, in pixels.
    fn scroll_offset(&self) -> f64;
    /// Inner height of the viewport, in pixels.
    fn height(&self) -> f64;
    /// Top of the section's bounding box relative to the viewport, or `None`
    /// when the element is not rendered.
    fn section_top(&self, section: Section) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Offsets strictly below this always resolve to `Section::Home`.
    pub home_cutoff: f64,
    /// Offsets strictly above this mark the header as scrolled.
    pub scrolled_threshold: f64,
    pub sections: Vec<Section>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            home_cutoff: 100.0,
            scrolled_threshold: 50.0,
            sections: Section::TRACKED.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub active: Section,
}

/// Picks the active section for the current geometry.
///
/// First match wins in `config.sections` order: a section qualifies when its
/// top lies in `[0, height / 2]`. Missing elements are skipped. When nothing
/// qualifies the previous section is kept.
pub fn resolve_active<V: Viewport + ?Sized>(
    previous: Section,
    viewport: &V,
    config: &TrackerConfig,
) -> Section {
    if viewport.scroll_offset() < config.home_cutoff {
        return Section::Home;
    }

    let limit = viewport.height() / 2.0;
    config
        .sections
        .iter()
        .copied()
        .find(|section| {
            viewport
                .section_top(*section)
                .is_some_and(|top| top >= 0.0 && top <= limit)
        })
        .unwrap_or(previous)
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    config: TrackerConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recomputes the state from `viewport`. Returns the new state when it
    /// differs from the previous one.
    pub fn update<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Option<ScrollState> {
        let next = ScrollState {
            scrolled: viewport.scroll_offset() > self.config.scrolled_threshold,
            active: resolve_active(self.state.active, viewport, &self.config),
        };
        if next == self.state {
            return None;
        }
        if next.active != self.state.active {
            tracing::debug!(from = %self.state.active, to = %next.active, "active section changed");
        }
        self.state = next;
        Some(next)
    }
}
