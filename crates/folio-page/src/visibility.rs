//! Visibility sensor for the hero region.
//!
//! The viewport is grown by the root margin on every side, so the hero counts
//! as visible a little before it actually scrolls into view.

use folio_anim::ElementId;
use folio_config::VisibilityConfig;
use tracing::debug;

use crate::layout::{Layout, Rect};

/// Reports whether an element intersects the (margin-grown) viewport.
#[derive(Clone, Debug)]
pub struct VisibilitySensor {
    element: ElementId,
    threshold: f32,
    root_margin: f32,
    last: Option<bool>,
}

impl VisibilitySensor {
    pub fn new(element: ElementId, config: &VisibilityConfig) -> Self {
        Self {
            element,
            threshold: config.threshold,
            root_margin: config.root_margin_px,
            last: None,
        }
    }

    /// Fraction of the element's area inside the grown viewport, or `None`
    /// when the element is not on the page.
    pub fn ratio(&self, layout: &dyn Layout, scroll_y: f32) -> Option<f32> {
        let rect = layout.element_rect(&self.element)?;
        let viewport = layout.viewport_size();
        let root = Rect {
            left: -self.root_margin,
            top: scroll_y - self.root_margin,
            width: viewport.x + 2.0 * self.root_margin,
            height: viewport.y + 2.0 * self.root_margin,
        };
        let area = rect.area();
        if area <= 0.0 {
            return Some(0.0);
        }
        Some(rect.intersection(&root).area() / area)
    }

    /// Observe the page at `scroll_y`. Returns the new state when it changed;
    /// the first observation always reports.
    ///
    /// An element that is not on the page is never observed.
    pub fn observe(&mut self, layout: &dyn Layout, scroll_y: f32) -> Option<bool> {
        let ratio = self.ratio(layout, scroll_y)?;
        let visible = ratio > 0.0 && ratio >= self.threshold;
        if self.last == Some(visible) {
            return None;
        }
        debug!(element = %self.element, visible, ratio, "Visibility changed");
        self.last = Some(visible);
        Some(visible)
    }

    /// Last observed state. Unobserved elements count as visible.
    pub fn is_visible(&self) -> bool {
        self.last.unwrap_or(true)
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }
}
