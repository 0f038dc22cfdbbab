//! Fixed header: hides while scrolling down, gains a background once the page
//! has moved, and owns the mobile menu panel.

use folio_anim::{
    Animator, Ease, ElementId, Playback, Property, PropertyTable, Target, Timeline, Track, ViewScope,
};
use folio_config::NavigationConfig;
use tracing::{debug, info};

use crate::content::ids;
use crate::layout::Layout;

/// A header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Menu panel resting states.
const MENU_OPEN: (f32, f32) = (1.0, 0.0);
const MENU_CLOSED: (f32, f32) = (0.0, -20.0);

/// Smooth-scroll the document to an element.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    pub target: ElementId,
    /// Document offset to scroll to.
    pub offset: f32,
    pub smooth: bool,
}

pub struct Navigation {
    visible: bool,
    scrolled: bool,
    menu_open: bool,
    last_scroll_y: f32,
    hide_after: f32,
    scrolled_after: f32,
    menu: ElementId,
    scope: ViewScope,
}

impl Navigation {
    pub fn mount(config: &NavigationConfig) -> Self {
        Self {
            visible: true,
            scrolled: false,
            menu_open: false,
            last_scroll_y: 0.0,
            hide_after: config.hide_after_px,
            scrolled_after: config.scrolled_after_px,
            menu: ElementId::new(ids::NAV_MENU),
            scope: ViewScope::new("navigation"),
        }
    }

    /// Update header state for a new scroll offset. Returns `true` if either
    /// flag changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let visible = !(scroll_y > self.last_scroll_y && scroll_y > self.hide_after);
        let scrolled = scroll_y > self.scrolled_after;
        self.last_scroll_y = scroll_y;

        let changed = visible != self.visible || scrolled != self.scrolled;
        self.visible = visible;
        self.scrolled = scrolled;
        if changed {
            debug!(visible, scrolled, scroll_y, "Header state changed");
        }
        changed
    }

    pub fn toggle_menu(&mut self, animator: &mut Animator, styles: &PropertyTable) {
        self.set_menu_open(!self.menu_open, animator, styles);
    }

    /// Open or close the mobile menu, tweening from wherever the panel is now.
    pub fn set_menu_open(&mut self, open: bool, animator: &mut Animator, styles: &PropertyTable) {
        if open == self.menu_open {
            return;
        }
        self.menu_open = open;

        let target = Target::Element(self.menu.clone());
        let (rest_opacity, rest_y) = if open { MENU_CLOSED } else { MENU_OPEN };
        let opacity = styles.get(&target, Property::Opacity).unwrap_or(rest_opacity);
        let y = styles.get(&target, Property::PositionY).unwrap_or(rest_y);

        let (to_opacity, to_y, duration, ease, label) = if open {
            (MENU_OPEN.0, MENU_OPEN.1, 0.3, Ease::POWER2_OUT, "menu open")
        } else {
            (MENU_CLOSED.0, MENU_CLOSED.1, 0.2, Ease::POWER2_IN, "menu close")
        };
        let tween = Timeline::new(label, Playback::Timed).with_all([
            Track::tween(self.menu.clone(), Property::Opacity, opacity, to_opacity, duration, ease),
            Track::tween(self.menu.clone(), Property::PositionY, y, to_y, duration, ease),
        ]);
        self.scope.spawn(animator, tween);
        debug!(open, "Menu toggled");
    }

    /// Follow a header link: close the menu and ask for a smooth scroll to its
    /// section. Unknown links and missing sections only close the menu.
    pub fn click(
        &mut self,
        href: &str,
        animator: &mut Animator,
        styles: &PropertyTable,
        layout: &dyn Layout,
    ) -> Option<ScrollRequest> {
        self.set_menu_open(false, animator, styles);

        let link = NAV_LINKS.iter().find(|link| link.href == href)?;
        let target = ElementId::new(link.href.trim_start_matches('#'));
        let rect = layout.element_rect(&target)?;
        let offset = rect.top.min(layout.max_scroll()).max(0.0);
        info!(link = link.label, offset, "Scrolling to section");
        Some(ScrollRequest {
            target,
            offset,
            smooth: true,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Header class list.
    pub fn class_list(&self) -> String {
        let mut classes = vec!["nav", if self.visible { "nav--visible" } else { "nav--hidden" }];
        if self.scrolled {
            classes.push("nav--scrolled");
        }
        classes.join(" ")
    }

    pub fn unmount(mut self, animator: &mut Animator) -> usize {
        self.scope.release(animator)
    }
}
