//! The animator: advances every live timeline once per frame.
//!
//! Timelines enter the animator only through a [`ViewScope`](crate::ViewScope)
//! and leave it only through the same scope, or when the scope is dropped.
//! Nothing on the animator cancels timelines outside a scope.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Weak;

use tracing::{debug, trace};

use crate::runtime::AnimRuntime;
use crate::timeline::{Playback, Timeline};
use crate::toggle::ToggleAction;
use crate::track::PropertySink;
use crate::trigger::{ScrollGeometry, Zone};

/// Identifier of a spawned timeline, unique for the animator's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimelineId(u64);

impl fmt::Display for TimelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tl#{}", self.0)
    }
}

/// Per-frame input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Document scroll offset in CSS pixels.
    pub scroll_y: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
    Paused,
}

struct Running {
    timeline: Timeline,
    owner: Weak<()>,
    time: f32,
    direction: Direction,
    /// Direction to continue in on `resume`.
    last_motion: Direction,
    zone: Zone,
    last_sampled: Option<f32>,
}

impl Running {
    fn apply(&mut self, action: ToggleAction, duration: f32) {
        match action {
            ToggleAction::Play => self.direction = Direction::Forward,
            ToggleAction::Reverse => self.direction = Direction::Backward,
            ToggleAction::Pause => self.direction = Direction::Paused,
            ToggleAction::Resume => self.direction = self.last_motion,
            ToggleAction::Restart => {
                self.time = 0.0;
                self.direction = Direction::Forward;
            }
            ToggleAction::Reset => {
                self.time = 0.0;
                self.direction = Direction::Paused;
            }
            ToggleAction::Complete => {
                self.time = duration;
                self.direction = Direction::Paused;
            }
            ToggleAction::None => {}
        }
        if self.direction != Direction::Paused {
            self.last_motion = self.direction;
        }
    }

    fn advance(&mut self, dt: f32, duration: f32) {
        match self.direction {
            Direction::Forward => self.time = (self.time + dt).min(duration),
            Direction::Backward => self.time = (self.time - dt).max(0.0),
            Direction::Paused => {}
        }
    }
}

/// Owns every live timeline and drives them from scroll and frame time.
pub struct Animator {
    runtime: &'static AnimRuntime,
    next_id: u64,
    running: BTreeMap<TimelineId, Running>,
}

impl Animator {
    /// Build an animator on an initialized runtime (see [`crate::init`]).
    pub fn new(runtime: &'static AnimRuntime) -> Self {
        Self {
            runtime,
            next_id: 0,
            running: BTreeMap::new(),
        }
    }

    /// The runtime this animator was built on.
    pub fn runtime(&self) -> &'static AnimRuntime {
        self.runtime
    }

    pub(crate) fn insert(&mut self, timeline: Timeline, owner: Weak<()>) -> TimelineId {
        let id = TimelineId(self.next_id);
        self.next_id += 1;
        let direction = match timeline.playback() {
            Playback::Timed => Direction::Forward,
            Playback::Scrub { .. } | Playback::Toggle { .. } => Direction::Paused,
        };
        debug!(%id, label = timeline.label(), tracks = timeline.tracks().len(), "Timeline spawned");
        self.running.insert(
            id,
            Running {
                timeline,
                owner,
                time: 0.0,
                direction,
                last_motion: Direction::Forward,
                zone: Zone::Before,
                last_sampled: None,
            },
        );
        id
    }

    pub(crate) fn remove(&mut self, id: TimelineId) -> bool {
        match self.running.remove(&id) {
            Some(running) => {
                debug!(%id, label = running.timeline.label(), "Timeline cancelled");
                true
            }
            None => false,
        }
    }

    /// Whether the timeline is still live.
    pub fn is_active(&self, id: TimelineId) -> bool {
        self.running.contains_key(&id)
    }

    /// Number of live timelines.
    pub fn active_count(&self) -> usize {
        self.running.len()
    }

    /// Current playhead time of a live timeline.
    pub fn playhead(&self, id: TimelineId) -> Option<f32> {
        self.running.get(&id).map(|r| r.time)
    }

    /// Playhead as a fraction of the timeline's duration.
    pub fn progress(&self, id: TimelineId) -> Option<f32> {
        self.running.get(&id).map(|r| {
            let duration = r.timeline.duration();
            if duration > 0.0 { r.time / duration } else { 1.0 }
        })
    }

    /// Advance every live timeline by one frame and write their values into `sink`.
    ///
    /// Timelines whose owning scope is gone are dropped without being sampled.
    /// Timelines whose trigger element is missing stay inert.
    pub fn tick(
        &mut self,
        frame: ScrollFrame,
        geometry: &dyn ScrollGeometry,
        sink: &mut dyn PropertySink,
    ) {
        self.running.retain(|id, running| {
            let alive = running.owner.strong_count() > 0;
            if !alive {
                debug!(%id, label = running.timeline.label(), "Dropping timeline of torn-down view");
            }
            alive
        });

        for (id, running) in self.running.iter_mut() {
            let duration = running.timeline.duration();
            let range = match running.timeline.playback().trigger() {
                Some(trigger) => match trigger.resolve(geometry) {
                    Some(range) => Some(range),
                    None => continue,
                },
                None => None,
            };

            match running.timeline.playback_mut() {
                Playback::Scrub { scrub, .. } => {
                    let raw = range.map_or(0.0, |r| r.progress(frame.scroll_y));
                    running.time = scrub.step(raw, frame.dt) * duration;
                }
                Playback::Toggle { actions, .. } => {
                    let actions = *actions;
                    if let Some(range) = range {
                        let zone = range.zone(frame.scroll_y);
                        for action in actions.transition(running.zone, zone) {
                            trace!(%id, ?action, from = ?running.zone, to = ?zone, "Toggle");
                            running.apply(action, duration);
                        }
                        running.zone = zone;
                    }
                    running.advance(frame.dt, duration);
                }
                Playback::Timed => running.advance(frame.dt, duration),
            }

            if running.last_sampled != Some(running.time) {
                running.timeline.sample(running.time, sink);
                running.last_sampled = Some(running.time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Ease;
    use crate::scope::ViewScope;
    use crate::scrub::Scrub;
    use crate::toggle::ToggleActions;
    use crate::track::{ElementId, Property, PropertyTable, SceneNode, Target, Track};
    use crate::trigger::{Anchor, ScrollTrigger, Span};

    /// Hero from 0 to 2400 and a section from 2400 to 3200; viewport 800.
    struct Page;

    impl ScrollGeometry for Page {
        fn element_span(&self, id: &ElementId) -> Option<Span> {
            match id.as_str() {
                "hero" => Some(Span { top: 0.0, height: 2400.0 }),
                "about" => Some(Span { top: 2400.0, height: 800.0 }),
                _ => None,
            }
        }

        fn viewport_height(&self) -> f32 {
            800.0
        }
    }

    fn frame(scroll_y: f32) -> ScrollFrame {
        ScrollFrame { scroll_y, dt: 1.0 / 60.0 }
    }

    fn hero_timeline(lag: f32) -> Timeline {
        Timeline::scrubbed(
            "keyboard",
            ScrollTrigger::new(ElementId::new("hero"), Anchor::TOP_TOP).until(Anchor::BOTTOM_BOTTOM),
            Scrub::new(lag),
        )
        .with(Track::tween(SceneNode::Model, Property::PositionY, -0.5, 0.5, 10.0, Ease::POWER2_IN_OUT))
        .with(Track::tween(SceneNode::Camera, Property::PositionZ, 8.0, 5.0, 10.0, Ease::SINE_IN_OUT))
    }

    fn reveal_timeline() -> Timeline {
        let heading = Target::Element(ElementId::new("about-heading"));
        Timeline::toggled(
            "about-heading",
            ScrollTrigger::new(ElementId::new("about"), Anchor::top_at(0.8)),
            ToggleActions::PLAY_REVERSE,
        )
        .with(Track::tween(heading.clone(), Property::Opacity, 0.0, 1.0, 1.0, Ease::POWER3_OUT))
        .with(Track::tween(heading, Property::PositionY, 60.0, 0.0, 1.0, Ease::POWER3_OUT))
    }

    fn model_y(table: &PropertyTable) -> f32 {
        table.get(&SceneNode::Model.into(), Property::PositionY).unwrap()
    }

    #[test]
    fn test_scrub_boundaries_hit_from_and_to() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("keyboard");
        let mut table = PropertyTable::new();
        scope.spawn(&mut animator, hero_timeline(0.0));

        animator.tick(frame(0.0), &Page, &mut table);
        assert_eq!(model_y(&table), -0.5);
        assert_eq!(table.get(&SceneNode::Camera.into(), Property::PositionZ), Some(8.0));

        animator.tick(frame(1600.0), &Page, &mut table);
        assert_eq!(model_y(&table), 0.5);
        assert_eq!(table.get(&SceneNode::Camera.into(), Property::PositionZ), Some(5.0));
    }

    #[test]
    fn test_monotonic_scroll_gives_monotonic_progress() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("keyboard");
        let mut table = PropertyTable::new();
        let id = scope.spawn(&mut animator, hero_timeline(1.5));

        let mut last = 0.0;
        for step in 0..=160 {
            animator.tick(frame(step as f32 * 10.0), &Page, &mut table);
            let p = animator.progress(id).unwrap();
            assert!(p >= last, "progress went back at step {step}");
            last = p;
        }
    }

    #[test]
    fn test_scrub_lags_behind_jump() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("keyboard");
        let mut table = PropertyTable::new();
        let id = scope.spawn(&mut animator, hero_timeline(1.5));

        animator.tick(frame(0.0), &Page, &mut table);
        animator.tick(frame(1600.0), &Page, &mut table);
        let p = animator.progress(id).unwrap();
        assert!(p > 0.0 && p < 0.1, "scrub should trail a jump, got {p}");

        for _ in 0..1200 {
            animator.tick(frame(1600.0), &Page, &mut table);
        }
        assert_eq!(animator.progress(id), Some(1.0));
        assert_eq!(model_y(&table), 0.5);
    }

    #[test]
    fn test_toggle_plays_reverses_and_does_not_replay() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("about");
        let mut table = PropertyTable::new();
        let id = scope.spawn(&mut animator, reveal_timeline());
        let opacity = |t: &PropertyTable| {
            t.get(&Target::Element(ElementId::new("about-heading")), Property::Opacity)
        };

        // Above the start line (2400 - 640 = 1760): held at the perturbed state.
        animator.tick(frame(0.0), &Page, &mut table);
        assert_eq!(opacity(&table), Some(0.0));

        // Enter: plays to completion over one second.
        for _ in 0..70 {
            animator.tick(frame(1800.0), &Page, &mut table);
        }
        assert_eq!(animator.playhead(id), Some(1.0));
        assert_eq!(opacity(&table), Some(1.0));

        // Leave past the end and come back: enter-back does nothing.
        animator.tick(frame(4000.0), &Page, &mut table);
        animator.tick(frame(2000.0), &Page, &mut table);
        assert_eq!(animator.playhead(id), Some(1.0));

        // Leave back above the start: reverses.
        for _ in 0..70 {
            animator.tick(frame(0.0), &Page, &mut table);
        }
        assert_eq!(animator.playhead(id), Some(0.0));
        assert_eq!(opacity(&table), Some(0.0));
    }

    #[test]
    fn test_missing_trigger_is_inert() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("ghost");
        let mut table = PropertyTable::new();
        let ghost = Timeline::scrubbed(
            "ghost",
            ScrollTrigger::new(ElementId::new("nowhere"), Anchor::TOP_TOP),
            Scrub::immediate(),
        )
        .with(Track::tween(SceneNode::HeroTitle, Property::PositionY, 0.7, 1.7, 0.5, Ease::Linear));
        scope.spawn(&mut animator, ghost);

        animator.tick(frame(500.0), &Page, &mut table);
        assert!(table.is_empty());
    }

    #[test]
    fn test_timed_runs_from_spawn() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("menu");
        let mut table = PropertyTable::new();
        let menu = Target::Element(ElementId::new("nav-menu"));
        let id = scope.spawn(
            &mut animator,
            Timeline::new("menu-open", Playback::Timed).with(Track::tween(
                menu.clone(),
                Property::Opacity,
                0.0,
                1.0,
                0.3,
                Ease::POWER2_OUT,
            )),
        );
        for _ in 0..30 {
            animator.tick(frame(0.0), &Page, &mut table);
        }
        assert_eq!(animator.playhead(id), Some(0.3));
        assert_eq!(table.get(&menu, Property::Opacity), Some(1.0));
    }

    #[test]
    fn test_unchanged_playhead_is_not_resampled() {
        let mut animator = Animator::new(crate::init());
        let mut scope = ViewScope::new("keyboard");
        let mut table = PropertyTable::new();
        scope.spawn(&mut animator, hero_timeline(0.0));

        animator.tick(frame(800.0), &Page, &mut table);
        let writes = table.writes();
        animator.tick(frame(800.0), &Page, &mut table);
        assert_eq!(table.writes(), writes);
    }
}
