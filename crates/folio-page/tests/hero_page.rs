//! End-to-end behavior of a mounted page driven through a recording surface.
//!
//! Default viewport is 1280x720: the hero runway is 2160 px tall, its scrubbed
//! range ends at 1440, and the About section starts at 2160.

use std::f32::consts::FRAC_PI_2;

use folio_anim::{ElementId, Property, Target};
use folio_config::Config;
use folio_page::{App, HeroViewKind, Page, ids};
use folio_render::{CapabilityTier, FixedProbe, Frameloop, RecordingSurface};

const DT: f32 = 1.0 / 60.0;
const RUNWAY_END: f32 = 1440.0;

fn config(width: u32, scrub_seconds: f32) -> Config {
    let mut config = Config::default();
    config.viewport.width = width;
    config.scroll.scrub_seconds = scrub_seconds;
    config
}

fn mount(config: &Config) -> (App, RecordingSurface) {
    let mut surface = RecordingSurface::new();
    let app = App::mount(config, &FixedProbe::supported("test adapter"), &mut surface);
    (app, surface)
}

fn page(app: &mut App) -> &mut Page {
    app.page_mut().expect("hero should mount")
}

fn run(page: &mut Page, surface: &mut RecordingSurface, frames: usize) -> usize {
    (0..frames).filter(|_| page.frame(DT, surface)).count()
}

fn style(page: &Page, id: &str, property: Property) -> Option<f32> {
    page.styles().get(&Target::Element(ElementId::new(id)), property)
}

#[test]
fn test_narrow_viewport_mounts_low_power() {
    let (mut app, surface) = mount(&config(390, 0.0));
    let page = page(&mut app);
    assert_eq!(page.settings().tier, CapabilityTier::MobileLowPower);
    assert!(!page.scene().shadows);
    assert_eq!(surface.settings.as_ref().map(|s| s.antialias), Some(false));
}

#[test]
fn test_wide_desktop_viewport_mounts_high_performance() {
    let (mut app, surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);
    assert_eq!(page.settings().tier, CapabilityTier::DesktopHighPerformance);
    assert!(page.scene().lights.key.casts_shadow());
    assert_eq!(surface.settings.as_ref().map(|s| s.pixel_ratio), Some(1.0));
}

#[test]
fn test_probe_failure_renders_fallback_only() {
    let mut surface = RecordingSurface::new();
    let app = App::mount(&config(1280, 0.0), &FixedProbe::unsupported(), &mut surface);

    assert!(app.is_fallback());
    assert!(app.page().is_none());
    assert!(!app.is_loading());
    assert!(surface.settings.is_none());
    assert_eq!(surface.frameloop, None);
    assert_eq!(surface.draws, 0);
    assert_eq!(app.unmount(), 0);
}

#[test]
fn test_gate_pauses_offscreen_and_redraws_once_on_return() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);
    assert_eq!(surface.frameloop, Some(Frameloop::Always));
    assert_eq!(run(page, &mut surface, 5), 5);

    page.scroll_to(3000.0, &mut surface);
    assert!(!page.is_hero_visible());
    assert_eq!(surface.frameloop, Some(Frameloop::Never));
    assert_eq!(run(page, &mut surface, 30), 0);
    assert_eq!(surface.draws, 5);
    assert_eq!(surface.redraw_requests, 0);

    page.scroll_to(3100.0, &mut surface);
    assert_eq!(run(page, &mut surface, 5), 0);

    page.scroll_to(1000.0, &mut surface);
    assert!(page.is_hero_visible());
    assert_eq!(surface.redraw_requests, 1);
    assert_eq!(surface.frameloop, Some(Frameloop::Always));
    assert_eq!(run(page, &mut surface, 5), 5);
    assert_eq!(surface.redraw_requests, 1);
}

#[test]
fn test_runway_boundaries_hit_opening_and_final_pose() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);

    run(page, &mut surface, 1);
    let scene = page.scene();
    assert_eq!(scene.model.transform.rotation.y, -0.4);
    assert_eq!(scene.camera.position.z, 8.0);
    assert_eq!(scene.lights.key.intensity, 6.0);
    assert_eq!(scene.text.title.position.y, 0.7);

    page.scroll_to(RUNWAY_END, &mut surface);
    run(page, &mut surface, 1);
    let scene = page.scene();
    assert_eq!(scene.model.transform.rotation.y, FRAC_PI_2);
    assert_eq!(scene.model.transform.position.y, 0.5);
    assert_eq!(scene.camera.position.z, 5.0);
    assert_eq!(scene.lights.key.intensity, 12.0);
    assert_eq!(scene.lights.key.position.x, -3.0);
    assert_eq!(scene.text.title.position.y, 1.7);
}

#[test]
fn test_runway_progress_is_monotonic() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);

    let mut last_rotation = f32::MIN;
    let mut last_depth = f32::MAX;
    for step in 0..=24 {
        page.scroll_to(step as f32 * 60.0, &mut surface);
        run(page, &mut surface, 1);
        let scene = page.scene();
        assert!(scene.model.transform.rotation.y >= last_rotation);
        assert!(scene.camera.position.z <= last_depth);
        last_rotation = scene.model.transform.rotation.y;
        last_depth = scene.camera.position.z;
    }
}

#[test]
fn test_scrub_trails_scroll_then_converges() {
    let (mut app, mut surface) = mount(&config(1280, 1.5));
    let page = page(&mut app);
    run(page, &mut surface, 1);

    page.scroll_to(RUNWAY_END, &mut surface);
    run(page, &mut surface, 6);
    let trailing = page.scene().model.transform.rotation.y;
    assert!(trailing > -0.4 && trailing < FRAC_PI_2);

    run(page, &mut surface, 600);
    assert_eq!(page.scene().model.transform.rotation.y, FRAC_PI_2);
}

#[test]
fn test_unmounted_view_stops_while_sibling_continues() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);
    run(page, &mut surface, 1);

    assert_eq!(page.unmount_hero_view(HeroViewKind::Keyboard), 1);
    assert_eq!(page.unmount_hero_view(HeroViewKind::Keyboard), 0);
    assert_eq!(page.hero_views().len(), 2);

    page.scroll_to(RUNWAY_END, &mut surface);
    run(page, &mut surface, 3);
    let scene = page.scene();
    assert_eq!(scene.model.transform.rotation.y, -0.4, "keyboard no longer driven");
    assert_eq!(scene.camera.position.z, 8.0);
    assert_eq!(scene.lights.key.intensity, 12.0, "lights still driven");
    assert_eq!(scene.text.title.position.y, 1.7);
}

#[test]
fn test_header_hides_down_and_shows_up() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);

    page.scroll_to(80.0, &mut surface);
    assert!(page.nav().is_visible());
    assert!(page.nav().is_scrolled());

    page.scroll_to(150.0, &mut surface);
    assert!(!page.nav().is_visible());

    page.scroll_to(140.0, &mut surface);
    assert!(page.nav().is_visible());
    assert_eq!(page.nav().class_list(), "nav nav--visible nav--scrolled");

    page.scroll_to(0.0, &mut surface);
    assert_eq!(page.nav().class_list(), "nav nav--visible");
}

#[test]
fn test_reveal_plays_reverses_and_holds_on_enter_back() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);

    // Heading trigger: about top at 80% of the viewport, scroll 1584.
    page.scroll_to(1500.0, &mut surface);
    run(page, &mut surface, 1);
    assert_eq!(style(page, ids::ABOUT_HEADING, Property::Opacity), Some(0.0));
    assert_eq!(style(page, ids::ABOUT_HEADING, Property::PositionY), Some(60.0));

    page.scroll_to(1700.0, &mut surface);
    run(page, &mut surface, 120);
    assert_eq!(style(page, ids::ABOUT_HEADING, Property::Opacity), Some(1.0));
    assert_eq!(style(page, ids::ABOUT_HEADING, Property::PositionY), Some(0.0));

    // Past the end and back in: no action either way.
    page.scroll_to(3000.0, &mut surface);
    run(page, &mut surface, 5);
    page.scroll_to(1700.0, &mut surface);
    run(page, &mut surface, 5);
    assert_eq!(style(page, ids::ABOUT_HEADING, Property::Opacity), Some(1.0));

    page.scroll_to(1500.0, &mut surface);
    run(page, &mut surface, 120);
    assert_eq!(style(page, ids::ABOUT_HEADING, Property::Opacity), Some(0.0));
}

#[test]
fn test_menu_and_link_click() {
    let (mut app, mut surface) = mount(&config(390, 0.0));
    let page = page(&mut app);

    page.toggle_menu();
    run(page, &mut surface, 30);
    assert!(page.nav().is_menu_open());
    assert_eq!(style(page, ids::NAV_MENU, Property::Opacity), Some(1.0));

    let request = page.click_link("#about").unwrap();
    assert!(!page.nav().is_menu_open());
    assert_eq!(request.target, ElementId::new(ids::ABOUT));
    run(page, &mut surface, 30);
    assert_eq!(style(page, ids::NAV_MENU, Property::Opacity), Some(0.0));

    page.scroll_to(request.offset, &mut surface);
    assert_eq!(page.scroll_y(), request.offset);
}

#[test]
fn test_loading_screen_lifts_after_delay() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    assert!(app.is_loading());
    run(page(&mut app), &mut surface, 60);
    assert!(app.is_loading());
    run(page(&mut app), &mut surface, 120);
    assert!(!app.is_loading());
}

#[test]
fn test_unmount_releases_every_timeline() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);
    run(page, &mut surface, 1);
    let live = page.animator().active_count();
    // Three hero views plus the section reveals.
    assert_eq!(live, 3 + 3 + 3 + 7 + 3);
    assert_eq!(app.unmount(), live);
}

#[test]
fn test_pointer_parallax_only_while_visible() {
    let (mut app, mut surface) = mount(&config(1280, 0.0));
    let page = page(&mut app);
    page.set_pointer(glam::Vec2::new(1.0, 0.0));
    run(page, &mut surface, 1);
    assert!(page.scene().camera.position.x > 0.0);

    page.scroll_to(3000.0, &mut surface);
    let x = page.scene().camera.position.x;
    run(page, &mut surface, 10);
    assert_eq!(page.scene().camera.position.x, x);
    assert_eq!(page.scene().camera.target, glam::Vec3::ZERO);
}
