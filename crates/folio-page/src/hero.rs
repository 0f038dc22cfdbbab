//! Hero views: the keyboard, the key light and the title each bind their own
//! scroll-scrubbed timeline to the hero runway.
//!
//! The three timelines share a trigger but nothing else. Unmounting one view
//! leaves the other two running.

use std::f32::consts::FRAC_PI_2;

use folio_anim::{
    Anchor, Animator, Ease, ElementId, Property, SceneNode, Scrub, ScrollTrigger, Timeline, Track,
    ViewScope,
};
use tracing::info;

/// Timeline length of the keyboard and light sweeps. Only the ratio to the
/// title tween matters: progress maps onto the whole timeline.
const SWEEP: f32 = 10.0;

/// Which part of the hero a view animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroViewKind {
    Keyboard,
    Lights,
    Text,
}

impl HeroViewKind {
    pub const ALL: [HeroViewKind; 3] = [HeroViewKind::Keyboard, HeroViewKind::Lights, HeroViewKind::Text];

    pub fn name(self) -> &'static str {
        match self {
            HeroViewKind::Keyboard => "keyboard",
            HeroViewKind::Lights => "lights",
            HeroViewKind::Text => "hero-text",
        }
    }

    /// The scrubbed timeline this view drives, from the opening pose to the end
    /// of the runway.
    pub fn timeline(self, hero: &ElementId, scrub_seconds: f32, default_ease: Ease) -> Timeline {
        let trigger = ScrollTrigger::new(hero.clone(), Anchor::TOP_TOP).until(Anchor::BOTTOM_BOTTOM);
        let timeline = Timeline::scrubbed(self.name(), trigger, Scrub::new(scrub_seconds));
        match self {
            HeroViewKind::Keyboard => {
                let ease = Ease::POWER2_IN_OUT;
                timeline.with_all([
                    Track::tween(SceneNode::Model, Property::RotationX, 0.1, 0.3, SWEEP, ease),
                    Track::tween(SceneNode::Model, Property::RotationY, -0.4, FRAC_PI_2, SWEEP, ease),
                    Track::tween(SceneNode::Model, Property::PositionX, 0.8, 0.3, SWEEP, ease),
                    Track::tween(SceneNode::Model, Property::PositionY, -0.5, 0.5, SWEEP, ease),
                    Track::tween(SceneNode::Camera, Property::PositionZ, 8.0, 5.0, SWEEP, Ease::SINE_IN_OUT),
                    Track::tween(SceneNode::Camera, Property::PositionY, 0.0, 0.0, SWEEP, Ease::SINE_IN_OUT),
                ])
            }
            HeroViewKind::Lights => timeline.with_all([
                Track::tween(SceneNode::KeyLight, Property::Intensity, 6.0, 12.0, SWEEP, default_ease),
                Track::tween(SceneNode::KeyLight, Property::PositionX, 5.0, -3.0, SWEEP, default_ease),
            ]),
            HeroViewKind::Text => timeline.with(Track::tween(
                SceneNode::HeroTitle,
                Property::PositionY,
                0.7,
                1.7,
                0.5,
                Ease::POWER2_IN_OUT,
            )),
        }
    }
}

/// A mounted hero view and the timelines it owns.
pub struct HeroView {
    kind: HeroViewKind,
    scope: ViewScope,
}

impl HeroView {
    /// Mount the view: spawn its timeline into a fresh scope.
    pub fn mount(kind: HeroViewKind, animator: &mut Animator, hero: &ElementId, scrub_seconds: f32) -> Self {
        let mut scope = ViewScope::new(kind.name());
        let default_ease = animator.runtime().default_ease();
        let id = scope.spawn(animator, kind.timeline(hero, scrub_seconds, default_ease));
        info!(view = kind.name(), %id, "Hero view mounted");
        Self { kind, scope }
    }

    pub fn kind(&self) -> HeroViewKind {
        self.kind
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Cancel exactly this view's timelines.
    pub fn unmount(mut self, animator: &mut Animator) -> usize {
        let cancelled = self.scope.release(animator);
        info!(view = self.kind.name(), cancelled, "Hero view unmounted");
        cancelled
    }
}
