//! Scroll triggers: where on the page an animation starts and ends.
//!
//! An [`Anchor`] such as `"top 80%"` pairs a point on the trigger element with
//! a line in the viewport; the anchor fires at the scroll offset where the two
//! meet. A [`ScrollTrigger`] resolves a start and end anchor against the
//! current [`ScrollGeometry`] into a [`ScrollRange`] of document offsets.

use std::fmt;
use std::str::FromStr;

use crate::track::ElementId;

/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Distance from the top of the document to the element's top edge.
    pub top: f32,
    /// Element height.
    pub height: f32,
}

/// Page geometry as seen by triggers.
pub trait ScrollGeometry {
    /// Vertical extent of the element, or `None` when it is not on the page.
    fn element_span(&self, id: &ElementId) -> Option<Span>;

    /// Height of the viewport in CSS pixels.
    fn viewport_height(&self) -> f32;
}

/// A position along an element or the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// Fraction of the height: `top` = 0, `center` = 0.5, `bottom` = 1, `80%` = 0.8.
    Fraction(f32),
    /// Fixed pixel distance from the top.
    Pixels(f32),
}

impl Edge {
    /// Top edge.
    pub const TOP: Edge = Edge::Fraction(0.0);
    /// Vertical center.
    pub const CENTER: Edge = Edge::Fraction(0.5);
    /// Bottom edge.
    pub const BOTTOM: Edge = Edge::Fraction(1.0);

    fn offset_within(self, height: f32) -> f32 {
        match self {
            Edge::Fraction(f) => f * height,
            Edge::Pixels(px) => px,
        }
    }
}

/// `<element edge> <viewport edge>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Point on the trigger element.
    pub element: Edge,
    /// Line in the viewport.
    pub viewport: Edge,
}

impl Anchor {
    /// `top top`: element top reaches the viewport top.
    pub const TOP_TOP: Anchor = Anchor::new(Edge::TOP, Edge::TOP);
    /// `bottom bottom`: element bottom reaches the viewport bottom.
    pub const BOTTOM_BOTTOM: Anchor = Anchor::new(Edge::BOTTOM, Edge::BOTTOM);
    /// `bottom top`: element has scrolled entirely out of the top.
    pub const BOTTOM_TOP: Anchor = Anchor::new(Edge::BOTTOM, Edge::TOP);

    /// Pair an element edge with a viewport edge.
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// `top <fraction>`: element top reaches the given viewport line.
    pub const fn top_at(viewport_fraction: f32) -> Self {
        Self::new(Edge::TOP, Edge::Fraction(viewport_fraction))
    }

    /// Scroll offset at which this anchor is met for an element.
    pub fn scroll_offset(&self, span: Span, viewport_height: f32) -> f32 {
        span.top + self.element.offset_within(span.height)
            - self.viewport.offset_within(viewport_height)
    }
}

/// Errors from parsing an anchor string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnchorParseError {
    /// Anchors have exactly two parts.
    #[error("anchor `{0}` must have an element edge and a viewport edge")]
    WrongArity(String),

    /// A part is not a keyword, percentage, or pixel value.
    #[error("invalid edge `{0}`")]
    BadEdge(String),
}

impl FromStr for Edge {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || AnchorParseError::BadEdge(s.to_string());
        match s {
            "top" => Ok(Edge::TOP),
            "center" => Ok(Edge::CENTER),
            "bottom" => Ok(Edge::BOTTOM),
            _ => {
                if let Some(pct) = s.strip_suffix('%') {
                    pct.parse::<f32>()
                        .map(|p| Edge::Fraction(p / 100.0))
                        .map_err(|_| bad())
                } else {
                    s.strip_suffix("px")
                        .unwrap_or(s)
                        .parse::<f32>()
                        .map(Edge::Pixels)
                        .map_err(|_| bad())
                }
            }
        }
    }
}

impl FromStr for Anchor {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => {
                Ok(Anchor::new(element.parse()?, viewport.parse()?))
            }
            _ => Err(AnchorParseError::WrongArity(s.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            e if e == Edge::TOP => write!(f, "top"),
            e if e == Edge::CENTER => write!(f, "center"),
            e if e == Edge::BOTTOM => write!(f, "bottom"),
            Edge::Fraction(v) => write!(f, "{}%", v * 100.0),
            Edge::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// Where the scroll position sits relative to a resolved range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Above the start offset.
    Before,
    /// Between start and end, inclusive.
    Active,
    /// Past the end offset.
    After,
}

/// Document scroll offsets a trigger spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    /// Offset where progress is 0.
    pub start: f32,
    /// Offset where progress is 1.
    pub end: f32,
}

impl ScrollRange {
    /// Normalized progress of `scroll_y` through the range, clamped to `0.0..=1.0`.
    ///
    /// A degenerate range (end at or before start) acts as a step at `start`.
    pub fn progress(&self, scroll_y: f32) -> f32 {
        let length = self.end - self.start;
        if length <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / length).clamp(0.0, 1.0)
    }

    /// Classify `scroll_y` against the range.
    pub fn zone(&self, scroll_y: f32) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y > self.end.max(self.start) {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

/// Binds an animation to a trigger element's passage through the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    /// Element whose position drives the animation.
    pub trigger: ElementId,
    /// Where progress 0 sits.
    pub start: Anchor,
    /// Where progress 1 sits.
    pub end: Anchor,
}

impl ScrollTrigger {
    /// Trigger with the default end (`bottom top`).
    pub fn new(trigger: ElementId, start: Anchor) -> Self {
        Self {
            trigger,
            start,
            end: Anchor::BOTTOM_TOP,
        }
    }

    /// Override the end anchor.
    pub fn until(mut self, end: Anchor) -> Self {
        self.end = end;
        self
    }

    /// Resolve against the page. `None` when the trigger element is absent.
    pub fn resolve(&self, geometry: &dyn ScrollGeometry) -> Option<ScrollRange> {
        let span = geometry.element_span(&self.trigger)?;
        let viewport = geometry.viewport_height();
        Some(ScrollRange {
            start: self.start.scroll_offset(span, viewport),
            end: self.end.scroll_offset(span, viewport),
        })
    }
}
