//! Scripted scroll session: the input a visitor would produce, replayed
//! against a mounted page.

use std::collections::VecDeque;

use folio_page::{Layout, Page};
use folio_render::{FrameSnapshot, RecordingSurface, RenderSurface};
use glam::Vec2;
use tracing::{debug, info};

use crate::clock::FrameClock;

/// Simulated presentation rate. The page itself steps at the clock's fixed rate.
pub const DISPLAY_HZ: f64 = 144.0;

/// Hard stop for a session that cannot finish (e.g. a zero scroll speed).
pub const MAX_SESSION_SECONDS: f64 = 120.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Hold until the loading overlay lifts.
    WaitForLoad,
    /// Hold still for this many seconds.
    Wait(f64),
    /// Scroll toward a document offset at the session speed.
    ScrollTo(f32),
    /// Move the pointer, in normalized device coordinates.
    Pointer(Vec2),
    ToggleMenu,
    /// Click a header link and follow its smooth scroll.
    Click(&'static str),
}

pub struct ScrollSession {
    steps: VecDeque<Step>,
    speed: f32,
    waited: f64,
}

impl ScrollSession {
    pub fn new(steps: impl IntoIterator<Item = Step>, speed: f32) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            speed: speed.max(0.0),
            waited: 0.0,
        }
    }

    /// Down through every section, back to the top, then open the menu and
    /// follow the Projects link.
    pub fn scripted(max_scroll: f32, speed: f32) -> Self {
        Self::new(
            [
                Step::WaitForLoad,
                Step::Pointer(Vec2::new(0.5, 0.2)),
                Step::ScrollTo(max_scroll),
                Step::Wait(0.5),
                Step::ScrollTo(0.0),
                Step::Wait(1.0),
                Step::ToggleMenu,
                Step::Wait(0.5),
                Step::Click("#projects"),
                Step::Wait(1.0),
            ],
            speed,
        )
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply the current step's input for one fixed step of `dt` seconds,
    /// then advance the page.
    pub fn step(&mut self, page: &mut Page, surface: &mut dyn RenderSurface, dt: f32) {
        if let Some(step) = self.steps.front().cloned() {
            let done = match step {
                Step::WaitForLoad => !page.loading().is_visible(),
                Step::Wait(seconds) => {
                    self.waited += f64::from(dt);
                    self.waited >= seconds
                }
                Step::ScrollTo(target) => {
                    let from = page.scroll_y();
                    let reach = self.speed * dt;
                    let next = if (target - from).abs() <= reach {
                        target
                    } else {
                        from + reach.copysign(target - from)
                    };
                    page.scroll_to(next, surface);
                    // A target beyond the page clamps; stop once we stall.
                    page.scroll_y() == target || page.scroll_y() == from
                }
                Step::Pointer(pointer) => {
                    page.set_pointer(pointer);
                    true
                }
                Step::ToggleMenu => {
                    page.toggle_menu();
                    true
                }
                Step::Click(href) => {
                    self.steps.pop_front();
                    if let Some(request) = page.click_link(href) {
                        self.steps.push_front(Step::ScrollTo(request.offset));
                    }
                    false
                }
            };

            if done {
                debug!(?step, scroll_y = page.scroll_y(), "Session step finished");
                self.steps.pop_front();
                self.waited = 0.0;
            }
        }

        page.frame(dt, surface);
    }
}

/// What a session did to the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionReport {
    pub steps: u64,
    pub frames_drawn: u64,
    pub frames_skipped: u64,
    pub redraw_requests: u64,
    pub final_scroll_y: f32,
    pub last_frame: Option<FrameSnapshot>,
}

/// Drive `session` to completion against `page`.
pub fn run(page: &mut Page, surface: &mut RecordingSurface, mut session: ScrollSession) -> SessionReport {
    let mut clock = FrameClock::new();
    info!(max_scroll = page.layout().max_scroll(), "Scroll session started");

    while !session.is_finished() && clock.elapsed() < MAX_SESSION_SECONDS {
        clock.advance(1.0 / DISPLAY_HZ, |dt| session.step(page, surface, dt as f32));
    }

    let report = SessionReport {
        steps: clock.step_count(),
        frames_drawn: page.gate().frames_drawn(),
        frames_skipped: page.gate().frames_skipped(),
        redraw_requests: page.gate().redraw_requests(),
        final_scroll_y: page.scroll_y(),
        last_frame: surface.last_frame.clone(),
    };
    info!(
        steps = report.steps,
        drawn = report.frames_drawn,
        skipped = report.frames_skipped,
        redraws = report.redraw_requests,
        finished = session.is_finished(),
        "Scroll session finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::Config;
    use folio_page::App;
    use folio_render::FixedProbe;

    fn mounted() -> (App, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let app = App::mount(&Config::default(), &FixedProbe::supported("test"), &mut surface);
        (app, surface)
    }

    #[test]
    fn test_scripted_session_pauses_offscreen_and_ends_on_projects() {
        let (mut app, mut surface) = mounted();
        let page = app.page_mut().expect("page should mount");
        let session = ScrollSession::scripted(page.layout().max_scroll(), 2400.0);
        let report = run(page, &mut surface, session);

        // 1280x720: a 2160 px hero, then About, so Projects starts at 2880.
        assert_eq!(report.final_scroll_y, 2880.0);
        assert!(report.frames_drawn > 0);
        assert!(report.frames_skipped > 0, "hero leaves the viewport");
        assert_eq!(report.redraw_requests, 1, "back into view once");
        assert_eq!(u64::from(surface.draws), report.frames_drawn);
        assert!(!page.nav().is_menu_open());
    }

    #[test]
    fn test_scroll_to_beyond_page_stops_at_bottom() {
        let (mut app, mut surface) = mounted();
        let page = app.page_mut().expect("page should mount");
        let max = page.layout().max_scroll();
        let session = ScrollSession::new([Step::ScrollTo(max + 10_000.0)], 6000.0);
        run(page, &mut surface, session);
        assert_eq!(page.scroll_y(), max);
    }

    #[test]
    fn test_zero_speed_session_is_bounded() {
        let (mut app, mut surface) = mounted();
        let page = app.page_mut().expect("page should mount");
        let session = ScrollSession::new([Step::Wait(MAX_SESSION_SECONDS * 2.0)], 0.0);
        let report = run(page, &mut surface, session);
        let limit = (MAX_SESSION_SECONDS / crate::clock::FIXED_DT).ceil() as u64 + 1;
        assert!(report.steps <= limit);
    }

    #[test]
    fn test_wait_for_load_holds_until_overlay_lifts() {
        let (mut app, mut surface) = mounted();
        let page = app.page_mut().expect("page should mount");
        let mut session = ScrollSession::new([Step::WaitForLoad, Step::ScrollTo(500.0)], 1200.0);
        session.step(page, &mut surface, 1.0 / 60.0);
        assert_eq!(page.scroll_y(), 0.0);
        run(page, &mut surface, session);
        assert!(!page.loading().is_visible());
        assert_eq!(page.scroll_y(), 500.0);
    }
}
