//! Mounting the page: probe, assemble, bind timelines, and drive frames.
//!
//! Mount order follows the data flow. The capability probe runs first and
//! nothing else is created when it fails. Then comes the scene, then the
//! timelines that drive it, and finally the gate that decides whether it is
//! drawn.

use std::time::Duration;

use folio_anim::{
    Animator, ElementId, Property, PropertySink, PropertyTable, ScrollFrame, Target,
};
use folio_config::Config;
use folio_render::{
    AdapterSummary, DeviceProfile, GraphicsProbe, ParallaxRig, RenderLoopGate, RenderSettings,
    RenderSurface, Scene,
};
use glam::Vec2;
use tracing::{info, warn};

use crate::content::{PageContent, ids};
use crate::error::MountError;
use crate::hero::{HeroView, HeroViewKind};
use crate::layout::{Layout, PageLayout};
use crate::loading::LoadingScreen;
use crate::navigation::{Navigation, ScrollRequest};
use crate::reveal::{SectionKind, SectionReveal};
use crate::visibility::VisibilitySensor;

/// Routes sampled values: scene nodes to the scene, page elements to styles.
struct PageSink<'a> {
    scene: &'a mut Scene,
    styles: &'a mut PropertyTable,
}

impl PropertySink for PageSink<'_> {
    fn apply(&mut self, target: &Target, property: Property, value: f32) {
        match target {
            Target::Scene(_) => self.scene.apply(target, property, value),
            Target::Element(_) => self.styles.apply(target, property, value),
        }
    }
}

/// Static page shown instead of the hero when no GL context is available.
#[derive(Debug)]
pub struct Fallback {
    pub reason: MountError,
}

impl Fallback {
    pub const HEADING: &'static str = "WebGL Not Supported";
    pub const MESSAGE: &'static str =
        "Your browser doesn't support WebGL. Please try a modern browser.";
}

/// The mounted application.
pub enum App {
    Running(Box<Page>),
    Fallback(Fallback),
}

impl App {
    /// Mount the page, or fall back to the static notice when the probe fails.
    pub fn mount(config: &Config, probe: &dyn GraphicsProbe, surface: &mut dyn RenderSurface) -> Self {
        match Page::mount(config, probe, surface) {
            Ok(page) => App::Running(Box::new(page)),
            Err(reason) => {
                warn!(%reason, "Rendering static fallback");
                App::Fallback(Fallback { reason })
            }
        }
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            App::Running(page) => Some(&**page),
            App::Fallback(_) => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut Page> {
        match self {
            App::Running(page) => Some(&mut **page),
            App::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, App::Fallback(_))
    }

    /// Whether the loading overlay is up. The fallback never shows it.
    pub fn is_loading(&self) -> bool {
        self.page().is_some_and(|page| page.loading.is_visible())
    }

    /// Tear everything down. Returns how many timelines were cancelled.
    pub fn unmount(self) -> usize {
        match self {
            App::Running(page) => page.unmount(),
            App::Fallback(_) => 0,
        }
    }
}

/// The live page: hero scene, timelines, reveals and header.
pub struct Page {
    layout: PageLayout,
    animator: Animator,
    styles: PropertyTable,
    settings: RenderSettings,
    adapter: AdapterSummary,
    scene: Scene,
    gate: RenderLoopGate,
    sensor: VisibilitySensor,
    hero_views: Vec<HeroView>,
    sections: Vec<SectionReveal>,
    nav: Navigation,
    loading: LoadingScreen,
    rig: ParallaxRig,
    pointer: Vec2,
    scroll_y: f32,
}

impl Page {
    pub fn mount(
        config: &Config,
        probe: &dyn GraphicsProbe,
        surface: &mut dyn RenderSurface,
    ) -> Result<Self, MountError> {
        let adapter = probe.probe()?;
        let runtime = folio_anim::init();

        let settings = RenderSettings::detect(&DeviceProfile::from(&config.viewport), &config.capability);
        surface.configure(&settings);

        let width = config.viewport.width as f32;
        let height = config.viewport.height as f32;
        let mut scene = Scene::assemble(&settings, &config.hero);
        scene.camera.set_aspect_ratio(width, height);

        let content = PageContent::default();
        let layout = PageLayout::new(&config.layout, &content, width, height);
        let mut animator = Animator::new(runtime);

        let hero = ElementId::new(ids::HERO);
        let hero_views = HeroViewKind::ALL
            .iter()
            .map(|kind| HeroView::mount(*kind, &mut animator, &hero, config.scroll.scrub_seconds))
            .collect();
        let sections = SectionKind::ALL
            .iter()
            .map(|kind| SectionReveal::mount(*kind, &mut animator, &content))
            .collect();

        let mut sensor = VisibilitySensor::new(hero, &config.visibility);
        let visible = sensor.observe(&layout, 0.0).unwrap_or_else(|| sensor.is_visible());
        let gate = RenderLoopGate::attach(visible, surface);

        info!(
            adapter = %adapter.name,
            tier = ?settings.tier,
            timelines = animator.active_count(),
            "Page mounted"
        );

        Ok(Self {
            layout,
            animator,
            styles: PropertyTable::new(),
            settings,
            adapter,
            scene,
            gate,
            sensor,
            hero_views,
            sections,
            nav: Navigation::mount(&config.navigation),
            loading: LoadingScreen::new(Duration::from_millis(config.loading.duration_ms)),
            rig: ParallaxRig::default(),
            pointer: Vec2::ZERO,
            scroll_y: 0.0,
        })
    }

    /// Move the document to `scroll_y` (clamped to the page) and update the
    /// header and hero visibility.
    pub fn scroll_to(&mut self, scroll_y: f32, surface: &mut dyn RenderSurface) {
        self.scroll_y = scroll_y.clamp(0.0, self.layout.max_scroll());
        self.nav.on_scroll(self.scroll_y);
        self.observe_visibility(surface);
    }

    /// Lay out for a new viewport. The capability tier is kept.
    pub fn resize(&mut self, width: f32, height: f32, surface: &mut dyn RenderSurface) {
        self.layout.resize(width, height);
        self.scene.camera.set_aspect_ratio(width, height);
        self.scroll_y = self.scroll_y.min(self.layout.max_scroll());
        self.observe_visibility(surface);
    }

    fn observe_visibility(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(visible) = self.sensor.observe(&self.layout, self.scroll_y) {
            self.gate.set_visible(visible, surface);
        }
    }

    /// Pointer position in normalized device coordinates.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// One display refresh of `dt` seconds. Returns whether the scene was drawn.
    pub fn frame(&mut self, dt: f32, surface: &mut dyn RenderSurface) -> bool {
        self.loading.advance(Duration::from_secs_f32(dt.max(0.0)));

        let mut sink = PageSink {
            scene: &mut self.scene,
            styles: &mut self.styles,
        };
        self.animator.tick(
            ScrollFrame {
                scroll_y: self.scroll_y,
                dt,
            },
            &self.layout,
            &mut sink,
        );
        self.rig.update(&mut self.scene.camera, self.pointer, self.gate.is_visible());
        self.gate.frame(&self.scene, surface)
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu(&mut self.animator, &self.styles);
    }

    /// Follow a header link; the caller performs the returned scroll.
    pub fn click_link(&mut self, href: &str) -> Option<ScrollRequest> {
        self.nav.click(href, &mut self.animator, &self.styles, &self.layout)
    }

    /// Unmount one hero view, leaving everything else running.
    pub fn unmount_hero_view(&mut self, kind: HeroViewKind) -> usize {
        match self.hero_views.iter().position(|view| view.kind() == kind) {
            Some(pos) => self.hero_views.remove(pos).unmount(&mut self.animator),
            None => 0,
        }
    }

    /// Release every view's timelines.
    pub fn unmount(mut self) -> usize {
        let mut cancelled = 0;
        for view in self.hero_views.drain(..) {
            cancelled += view.unmount(&mut self.animator);
        }
        for section in self.sections.drain(..) {
            cancelled += section.unmount(&mut self.animator);
        }
        cancelled += self.nav.unmount(&mut self.animator);
        info!(cancelled, "Page unmounted");
        cancelled
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current element styles written by reveals and the menu.
    pub fn styles(&self) -> &PropertyTable {
        &self.styles
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn adapter(&self) -> &AdapterSummary {
        &self.adapter
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn gate(&self) -> &RenderLoopGate {
        &self.gate
    }

    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    pub fn hero_views(&self) -> &[HeroView] {
        &self.hero_views
    }

    pub fn loading(&self) -> &LoadingScreen {
        &self.loading
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn is_hero_visible(&self) -> bool {
        self.gate.is_visible()
    }
}
