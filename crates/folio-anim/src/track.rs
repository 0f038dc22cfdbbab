//! Animated targets, properties, and the tracks that tween them.

use std::collections::HashMap;
use std::fmt;

use crate::easing::Ease;

/// Identifier of a page element (section, card, heading, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap an element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the `index`-th child of this element, e.g. `about-stats/2`.
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}/{index}", self.0))
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nodes of the hero's 3D scene that timelines can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneNode {
    /// The keyboard model group.
    Model,
    /// The perspective camera.
    Camera,
    /// The shadow-casting key spot light.
    KeyLight,
    /// The hero title text.
    HeroTitle,
}

/// Something a track writes to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// A node in the 3D scene.
    Scene(SceneNode),
    /// A page element.
    Element(ElementId),
}

impl From<SceneNode> for Target {
    fn from(node: SceneNode) -> Self {
        Target::Scene(node)
    }
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Target::Element(id)
    }
}

/// An animatable scalar on a target.
///
/// For page elements `PositionX`/`PositionY` are translations in pixels and
/// `RotationX` is in degrees; for scene nodes they are world units and radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    Scale,
    Fov,
    Intensity,
    Opacity,
}

/// Receives sampled property values.
pub trait PropertySink {
    /// Write `value` to `property` of `target`.
    fn apply(&mut self, target: &Target, property: Property, value: f32);
}

/// A single tween from one value to another inside a timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub target: Target,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub ease: Ease,
    /// Timeline time at which the tween starts.
    pub offset: f32,
    /// Tween length in timeline time units.
    pub duration: f32,
}

impl Track {
    /// A tween starting at offset 0.
    pub fn tween(
        target: impl Into<Target>,
        property: Property,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> Self {
        Self {
            target: target.into(),
            property,
            from,
            to,
            ease,
            offset: 0.0,
            duration,
        }
    }

    /// Move the tween's start on the timeline.
    pub fn at(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Timeline time at which the tween is finished.
    pub fn end(&self) -> f32 {
        self.offset + self.duration
    }

    /// Value at timeline `time`: `from` before the tween starts, `to` after it ends.
    pub fn value_at(&self, time: f32) -> f32 {
        let linear = if self.duration <= 0.0 {
            if time >= self.offset { 1.0 } else { 0.0 }
        } else {
            (time - self.offset) / self.duration
        };
        let t = self.ease.apply(linear);
        // Endpoint-exact lerp.
        self.from * (1.0 - t) + self.to * t
    }
}

/// A sink that keeps the latest value per target property.
///
/// Stands in for element styles on the page and is handy in tests.
#[derive(Debug, Default, Clone)]
pub struct PropertyTable {
    values: HashMap<(Target, Property), f32>,
    writes: u64,
}

impl PropertyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written, if any.
    pub fn get(&self, target: &Target, property: Property) -> Option<f32> {
        self.values.get(&(target.clone(), property)).copied()
    }

    /// Total number of writes received.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Number of distinct target properties written.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was ever written.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySink for PropertyTable {
    fn apply(&mut self, target: &Target, property: Property, value: f32) {
        self.values.insert((target.clone(), property), value);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_holds_from_before_offset() {
        let track = Track::tween(SceneNode::Model, Property::PositionY, -0.5, 0.5, 10.0, Ease::Linear)
            .at(2.0);
        assert_eq!(track.value_at(0.0), -0.5);
        assert_eq!(track.value_at(2.0), -0.5);
        assert_eq!(track.value_at(7.0), 0.0);
        assert_eq!(track.value_at(12.0), 0.5);
        assert_eq!(track.value_at(50.0), 0.5);
        assert_eq!(track.end(), 12.0);
    }

    #[test]
    fn test_zero_duration_track_jumps() {
        let track = Track::tween(SceneNode::Camera, Property::Fov, 35.0, 50.0, 0.0, Ease::Linear)
            .at(1.0);
        assert_eq!(track.value_at(0.99), 35.0);
        assert_eq!(track.value_at(1.0), 50.0);
    }

    #[test]
    fn test_child_ids() {
        let stats = ElementId::new("about-stats");
        assert_eq!(stats.child(2).as_str(), "about-stats/2");
    }

    #[test]
    fn test_table_keeps_latest() {
        let mut table = PropertyTable::new();
        let target = Target::Element(ElementId::new("about-heading"));
        table.apply(&target, Property::Opacity, 0.0);
        table.apply(&target, Property::Opacity, 0.4);
        assert_eq!(table.get(&target, Property::Opacity), Some(0.4));
        assert_eq!(table.get(&target, Property::PositionY), None);
        assert_eq!(table.writes(), 2);
        assert_eq!(table.len(), 1);
    }
}
