//! Scroll-bound animation: easing curves, trigger anchors, timelines, scrub
//! smoothing, and per-view timeline ownership.
//!
//! Call [`init`] once before creating an [`Animator`]. Views never talk to the
//! animator directly; they spawn through a [`ViewScope`], which is the only
//! thing able to cancel what it spawned.

pub mod animator;
pub mod easing;
pub mod runtime;
pub mod scope;
pub mod scrub;
pub mod timeline;
pub mod toggle;
pub mod track;
pub mod trigger;

pub use animator::{Animator, ScrollFrame, TimelineId};
pub use easing::{Ease, EaseMode, EaseParseError};
pub use runtime::{AnimRuntime, init};
pub use scope::ViewScope;
pub use scrub::Scrub;
pub use timeline::{Playback, Timeline};
pub use toggle::{ToggleAction, ToggleActions, ToggleParseError};
pub use track::{ElementId, Property, PropertySink, PropertyTable, SceneNode, Target, Track};
pub use trigger::{Anchor, AnchorParseError, Edge, ScrollGeometry, ScrollRange, ScrollTrigger, Span, Zone};
