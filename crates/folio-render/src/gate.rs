//! Render loop gate: stops per-frame drawing while the hero is off screen.
//!
//! Two states and one edge. Hidden means frame loop [`Frameloop::Never`] and no
//! draws at all, including after resizes. Becoming visible switches back to
//! [`Frameloop::Always`] and asks the surface for exactly one immediate redraw
//! so the first visible frame is never stale.

use crate::capability::RenderSettings;
use crate::scene::Scene;

/// How often the surface redraws on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frameloop {
    /// Redraw on every display refresh.
    Always,
    /// Redraw only when explicitly asked.
    Never,
}

/// The drawing backend the hero renders through.
pub trait RenderSurface {
    /// Apply tier-dependent settings (pixel ratio, antialiasing, power preference).
    fn configure(&mut self, settings: &RenderSettings);
    fn set_frameloop(&mut self, frameloop: Frameloop);
    /// Ask for one draw as soon as possible, regardless of the frame loop.
    fn request_redraw(&mut self);
    fn draw(&mut self, scene: &Scene);
}

/// Switches the surface's frame loop on hero visibility edges.
#[derive(Debug)]
pub struct RenderLoopGate {
    visible: bool,
    frameloop: Frameloop,
    redraw_requests: u64,
    frames_drawn: u64,
    frames_skipped: u64,
}

impl RenderLoopGate {
    /// Put `surface` into the frame loop matching the initial visibility.
    pub fn attach(visible: bool, surface: &mut dyn RenderSurface) -> Self {
        let frameloop = Self::frameloop_for(visible);
        surface.set_frameloop(frameloop);
        log::debug!("Render loop gate attached: {frameloop:?}");
        Self {
            visible,
            frameloop,
            redraw_requests: 0,
            frames_drawn: 0,
            frames_skipped: 0,
        }
    }

    fn frameloop_for(visible: bool) -> Frameloop {
        if visible { Frameloop::Always } else { Frameloop::Never }
    }

    /// Feed a visibility observation. Returns `true` if the state changed.
    pub fn set_visible(&mut self, visible: bool, surface: &mut dyn RenderSurface) -> bool {
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        self.frameloop = Self::frameloop_for(visible);
        surface.set_frameloop(self.frameloop);
        if visible {
            surface.request_redraw();
            self.redraw_requests += 1;
        }
        log::debug!("Hero visibility {visible}: frame loop {:?}", self.frameloop);
        true
    }

    /// One display refresh. Draws when the loop is running; returns whether it drew.
    pub fn frame(&mut self, scene: &Scene, surface: &mut dyn RenderSurface) -> bool {
        match self.frameloop {
            Frameloop::Always => {
                surface.draw(scene);
                self.frames_drawn += 1;
                true
            }
            Frameloop::Never => {
                self.frames_skipped += 1;
                false
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frameloop(&self) -> Frameloop {
        self.frameloop
    }

    /// Redraws requested on hidden-to-visible edges.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}
