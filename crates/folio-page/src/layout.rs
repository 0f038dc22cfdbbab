//! Page geometry: where every element the orchestration touches sits in the
//! document, for a given viewport.

use std::collections::BTreeMap;

use folio_anim::{ElementId, ScrollGeometry, Span};
use folio_config::LayoutConfig;
use glam::Vec2;

use crate::content::{PageContent, ids};

/// Axis-aligned box in document coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, zero-sized when they do not meet.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            left,
            top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }
}

/// Element rectangles plus the viewport they were laid out for.
pub trait Layout: ScrollGeometry {
    fn element_rect(&self, id: &ElementId) -> Option<Rect>;

    /// Viewport width and height.
    fn viewport_size(&self) -> Vec2;

    fn document_height(&self) -> f32;

    /// Largest reachable scroll offset.
    fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_size().y).max(0.0)
    }
}

/// The portfolio page: hero runway followed by the four content sections.
#[derive(Clone, Debug)]
pub struct PageLayout {
    config: LayoutConfig,
    content: PageContent,
    viewport: Vec2,
    elements: BTreeMap<ElementId, Rect>,
    document_height: f32,
}

impl PageLayout {
    pub fn new(config: &LayoutConfig, content: &PageContent, width: f32, height: f32) -> Self {
        let mut layout = Self {
            config: config.clone(),
            content: content.clone(),
            viewport: Vec2::new(width, height),
            elements: BTreeMap::new(),
            document_height: 0.0,
        };
        layout.rebuild();
        layout
    }

    /// Lay the page out again for a new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.rebuild();
    }

    /// Place or move an element.
    pub fn insert(&mut self, id: ElementId, rect: Rect) {
        self.elements.insert(id, rect);
    }

    /// Take an element off the page.
    pub fn remove(&mut self, id: &ElementId) -> Option<Rect> {
        self.elements.remove(id)
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    fn rebuild(&mut self) {
        self.elements.clear();
        let vh = self.viewport.y / 100.0;
        let width = self.viewport.x;
        let inset = width * 0.1;
        let column = width - 2.0 * inset;

        let hero_height = self.config.hero_height_vh * vh;
        self.insert(ElementId::new(ids::HERO), Rect { left: 0.0, top: 0.0, width, height: hero_height });

        let section = self.config.section_height_vh * vh;
        let mut cursor = hero_height;
        let content = self.content.clone();

        // About
        let top = self.section(ids::ABOUT, cursor, section);
        self.block(ids::ABOUT_HEADING, top + 0.1 * section, 0.1 * section);
        self.block(ids::ABOUT_TEXT, top + 0.25 * section, 0.25 * section);
        let stats = self.block(ids::ABOUT_STATS, top + 0.6 * section, 0.2 * section);
        self.row(&ElementId::new(ids::ABOUT_STATS), stats, content.stats);
        cursor += section;

        // Projects: one card per row.
        let height = section.max(0.25 * section + content.projects as f32 * 0.35 * section);
        let top = self.section(ids::PROJECTS, cursor, height);
        self.block(ids::PROJECTS_HEADING, top + 0.1 * section, 0.1 * section);
        let cards = ElementId::new(ids::PROJECT_CARDS);
        for i in 0..content.projects {
            let card_top = top + 0.25 * section + i as f32 * 0.35 * section;
            self.insert(cards.child(i), Rect { left: inset, top: card_top, width: column, height: 0.3 * section });
        }
        cursor += height;

        // Skills: categories stacked, pills in a row inside each.
        let height = section.max(0.25 * section + content.skill_categories() as f32 * 0.25 * section);
        let top = self.section(ids::SKILLS, cursor, height);
        self.block(ids::SKILLS_HEADING, top + 0.1 * section, 0.1 * section);
        let categories = ElementId::new(ids::SKILL_CATEGORIES);
        for (i, &pills) in content.skill_pills.iter().enumerate() {
            let category = categories.child(i);
            let cat_top = top + 0.25 * section + i as f32 * 0.25 * section;
            self.insert(category.clone(), Rect { left: inset, top: cat_top, width: column, height: 0.2 * section });
            let pill_row = Rect { left: inset, top: cat_top + 0.1 * section, width: column, height: 0.05 * section };
            self.row(&category, pill_row, pills);
        }
        cursor += height;

        // Contact
        let top = self.section(ids::CONTACT, cursor, section);
        self.block(ids::CONTACT_HEADING, top + 0.1 * section, 0.15 * section);
        self.block(ids::CONTACT_CONTENT, top + 0.3 * section, 0.3 * section);
        let links = self.block(ids::CONTACT_LINKS, top + 0.7 * section, 0.1 * section);
        self.row(&ElementId::new(ids::CONTACT_LINKS), links, content.social_links);
        cursor += section;

        self.document_height = cursor;
    }

    fn section(&mut self, id: &str, top: f32, height: f32) -> f32 {
        let width = self.viewport.x;
        self.insert(ElementId::new(id), Rect { left: 0.0, top, width, height });
        top
    }

    fn block(&mut self, id: &str, top: f32, height: f32) -> Rect {
        let inset = self.viewport.x * 0.1;
        let rect = Rect { left: inset, top, width: self.viewport.x - 2.0 * inset, height };
        self.insert(ElementId::new(id), rect);
        rect
    }

    /// Split `within` into `count` equal columns named `parent/0..count`.
    fn row(&mut self, parent: &ElementId, within: Rect, count: usize) {
        if count == 0 {
            return;
        }
        let width = within.width / count as f32;
        for i in 0..count {
            self.insert(
                parent.child(i),
                Rect { left: within.left + i as f32 * width, top: within.top, width, height: within.height },
            );
        }
    }
}

impl ScrollGeometry for PageLayout {
    fn element_span(&self, id: &ElementId) -> Option<Span> {
        self.elements.get(id).map(|rect| Span {
            top: rect.top,
            height: rect.height,
        })
    }

    fn viewport_height(&self) -> f32 {
        self.viewport.y
    }
}

impl Layout for PageLayout {
    fn element_rect(&self, id: &ElementId) -> Option<Rect> {
        self.elements.get(id).copied()
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn document_height(&self) -> f32 {
        self.document_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::new(&LayoutConfig::default(), &PageContent::default(), 1280.0, 800.0)
    }

    #[test]
    fn test_hero_is_three_viewports_tall() {
        let layout = layout();
        let hero = layout.element_rect(&ElementId::new(ids::HERO)).unwrap();
        assert_eq!(hero.top, 0.0);
        assert_eq!(hero.height, 2400.0);
        let about = layout.element_rect(&ElementId::new(ids::ABOUT)).unwrap();
        assert_eq!(about.top, 2400.0);
    }

    #[test]
    fn test_sections_are_in_order() {
        let layout = layout();
        let tops: Vec<f32> = [ids::ABOUT, ids::PROJECTS, ids::SKILLS, ids::CONTACT]
            .iter()
            .map(|id| layout.element_rect(&ElementId::new(*id)).unwrap().top)
            .collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        let contact = layout.element_rect(&ElementId::new(ids::CONTACT)).unwrap();
        assert_eq!(layout.document_height(), contact.bottom());
        assert_eq!(layout.max_scroll(), layout.document_height() - 800.0);
    }

    #[test]
    fn test_list_children_exist() {
        let layout = layout();
        let stats = ElementId::new(ids::ABOUT_STATS);
        assert!(layout.element_rect(&stats.child(2)).is_some());
        assert!(layout.element_rect(&stats.child(3)).is_none());
        let pills = ElementId::new(ids::SKILL_CATEGORIES).child(0);
        assert!(layout.element_rect(&pills.child(10)).is_some());
        assert!(layout.element_rect(&ElementId::new(ids::PROJECT_CARDS).child(1)).is_some());
    }

    #[test]
    fn test_resize_scales_with_viewport() {
        let mut layout = layout();
        layout.resize(390.0, 844.0);
        assert_eq!(layout.viewport_height(), 844.0);
        let hero = layout.element_span(&ElementId::new(ids::HERO)).unwrap();
        assert!((hero.height - 3.0 * 844.0).abs() < 1e-2);
    }

    #[test]
    fn test_removed_element_has_no_span() {
        let mut layout = layout();
        let hero = ElementId::new(ids::HERO);
        assert!(layout.remove(&hero).is_some());
        assert!(layout.element_span(&hero).is_none());
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect { left: 0.0, top: 0.0, width: 10.0, height: 10.0 };
        let b = Rect { left: 5.0, top: 8.0, width: 10.0, height: 10.0 };
        assert_eq!(a.intersection(&b).area(), 10.0);
        let c = Rect { left: 20.0, top: 0.0, width: 1.0, height: 1.0 };
        assert_eq!(a.intersection(&c).area(), 0.0);
    }
}
