//! Section reveals: content starts perturbed and animates to rest when its
//! trigger crosses a viewport line, reversing again when scrolled back above.
//!
//! Each section is one view with one [`ViewScope`]. Delays and staggers are
//! placed on the timeline itself, so a reverse replays them backwards.

use folio_anim::{
    Anchor, Animator, Ease, ElementId, Property, ScrollTrigger, Timeline, ToggleActions, Track,
    ViewScope,
};
use tracing::info;

use crate::content::{PageContent, ids};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::About => ids::ABOUT,
            SectionKind::Projects => ids::PROJECTS,
            SectionKind::Skills => ids::SKILLS,
            SectionKind::Contact => ids::CONTACT,
        }
    }

    /// Every reveal timeline of the section.
    pub fn timelines(self, content: &PageContent) -> Vec<Timeline> {
        let section = ElementId::new(self.name());
        match self {
            SectionKind::About => {
                let stats = ElementId::new(ids::ABOUT_STATS);
                vec![
                    Reveal::new(ElementId::new(ids::ABOUT_HEADING))
                        .from(Property::PositionY, 60.0)
                        .build(ScrollTrigger::new(section.clone(), Anchor::top_at(0.8)).until(Anchor::top_at(0.5))),
                    Reveal::new(ElementId::new(ids::ABOUT_TEXT))
                        .from(Property::PositionY, 40.0)
                        .delay(0.2)
                        .build(ScrollTrigger::new(section, Anchor::top_at(0.7)).until(Anchor::top_at(0.4))),
                    Reveal::group((0..content.stats).map(|i| stats.child(i)))
                        .from(Property::PositionY, 30.0)
                        .duration(0.8)
                        .stagger(0.15)
                        .build(ScrollTrigger::new(stats, Anchor::top_at(0.8))),
                ]
            }
            SectionKind::Projects => {
                let cards = ElementId::new(ids::PROJECT_CARDS);
                let mut timelines = vec![heading(ids::PROJECTS_HEADING, &section)];
                timelines.extend((0..content.projects).map(|i| {
                    let card = cards.child(i);
                    Reveal::new(card.clone())
                        .from(Property::PositionY, 80.0)
                        .from(Property::RotationX, 10.0)
                        .delay(0.15 * i as f32)
                        .build(ScrollTrigger::new(card, Anchor::top_at(0.85)))
                }));
                timelines
            }
            SectionKind::Skills => {
                let categories = ElementId::new(ids::SKILL_CATEGORIES);
                let mut timelines = vec![heading(ids::SKILLS_HEADING, &section)];
                for (i, &pills) in content.skill_pills.iter().enumerate() {
                    let category = categories.child(i);
                    let shift = if i % 2 == 0 { -50.0 } else { 50.0 };
                    timelines.push(
                        Reveal::new(category.clone())
                            .from(Property::PositionX, shift)
                            .delay(0.1 * i as f32)
                            .build(ScrollTrigger::new(category.clone(), Anchor::top_at(0.85))),
                    );
                    timelines.push(
                        Reveal::group((0..pills).map(|j| category.child(j)))
                            .from(Property::Scale, 0.8)
                            .duration(0.5)
                            .stagger(0.05)
                            .delay(0.3 + 0.1 * i as f32)
                            .ease(Ease::back_out(1.5))
                            .build(ScrollTrigger::new(category, Anchor::top_at(0.85))),
                    );
                }
                timelines
            }
            SectionKind::Contact => {
                let links = ElementId::new(ids::CONTACT_LINKS);
                vec![
                    Reveal::new(ElementId::new(ids::CONTACT_HEADING))
                        .from(Property::PositionY, 80.0)
                        .duration(1.2)
                        .build(ScrollTrigger::new(section.clone(), Anchor::top_at(0.7))),
                    Reveal::new(ElementId::new(ids::CONTACT_CONTENT))
                        .from(Property::PositionY, 40.0)
                        .delay(0.2)
                        .build(ScrollTrigger::new(section, Anchor::top_at(0.6))),
                    Reveal::group((0..content.social_links).map(|i| links.child(i)))
                        .from(Property::PositionY, 20.0)
                        .duration(0.6)
                        .stagger(0.1)
                        .delay(0.4)
                        .build(ScrollTrigger::new(links, Anchor::top_at(0.8))),
                ]
            }
        }
    }
}

fn heading(id: &str, section: &ElementId) -> Timeline {
    Reveal::new(ElementId::new(id))
        .from(Property::PositionY, 60.0)
        .build(ScrollTrigger::new(section.clone(), Anchor::top_at(0.8)))
}

/// Value a property comes to rest at.
fn rest(property: Property) -> f32 {
    match property {
        Property::Opacity | Property::Scale => 1.0,
        _ => 0.0,
    }
}

/// Builder for one `fromTo` reveal over one or more elements.
///
/// Every reveal fades in from opacity 0; other perturbations are added with
/// [`Reveal::from`].
struct Reveal {
    targets: Vec<ElementId>,
    from: Vec<(Property, f32)>,
    duration: f32,
    delay: f32,
    stagger: f32,
    ease: Ease,
}

impl Reveal {
    fn new(target: ElementId) -> Self {
        Self::group([target])
    }

    fn group(targets: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            from: vec![(Property::Opacity, 0.0)],
            duration: 1.0,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::POWER3_OUT,
        }
    }

    fn from(mut self, property: Property, value: f32) -> Self {
        self.from.push((property, value));
        self
    }

    fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    fn build(self, trigger: ScrollTrigger) -> Timeline {
        let label = match self.targets.first() {
            Some(first) => format!("reveal {first}"),
            None => "reveal".to_string(),
        };
        let mut tracks = Vec::with_capacity(self.targets.len() * self.from.len());
        for (i, target) in self.targets.iter().enumerate() {
            let offset = self.delay + self.stagger * i as f32;
            for &(property, from) in &self.from {
                tracks.push(
                    Track::tween(target.clone(), property, from, rest(property), self.duration, self.ease)
                        .at(offset),
                );
            }
        }
        Timeline::toggled(label, trigger, ToggleActions::PLAY_REVERSE).with_all(tracks)
    }
}

/// A mounted section and the reveal timelines it owns.
pub struct SectionReveal {
    kind: SectionKind,
    scope: ViewScope,
}

impl SectionReveal {
    pub fn mount(kind: SectionKind, animator: &mut Animator, content: &PageContent) -> Self {
        let mut scope = ViewScope::new(kind.name());
        for timeline in kind.timelines(content) {
            scope.spawn(animator, timeline);
        }
        info!(section = kind.name(), timelines = scope.len(), "Section reveals mounted");
        Self { kind, scope }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Cancel exactly this section's reveals.
    pub fn unmount(mut self, animator: &mut Animator) -> usize {
        self.scope.release(animator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_anim::{Edge, Playback, Target};

    fn trigger_of(timeline: &Timeline) -> &ScrollTrigger {
        timeline.playback().trigger().unwrap()
    }

    fn track<'a>(timeline: &'a Timeline, target: &str, property: Property) -> &'a Track {
        timeline
            .tracks()
            .iter()
            .find(|t| t.target == Target::Element(ElementId::new(target)) && t.property == property)
            .unwrap()
    }

    #[test]
    fn test_about_heading_and_text() {
        let timelines = SectionKind::About.timelines(&PageContent::default());
        assert_eq!(timelines.len(), 3);

        let heading = &timelines[0];
        let y = track(heading, ids::ABOUT_HEADING, Property::PositionY);
        assert_eq!((y.from, y.to, y.duration, y.offset), (60.0, 0.0, 1.0, 0.0));
        assert_eq!(y.ease, Ease::POWER3_OUT);
        let trigger = trigger_of(heading);
        assert_eq!(trigger.start, Anchor::top_at(0.8));
        assert_eq!(trigger.end, Anchor::top_at(0.5));

        let text = track(&timelines[1], ids::ABOUT_TEXT, Property::Opacity);
        assert_eq!((text.from, text.to, text.offset), (0.0, 1.0, 0.2));
        assert_eq!(trigger_of(&timelines[1]).start.viewport, Edge::Fraction(0.7));
    }

    #[test]
    fn test_stats_stagger() {
        let timelines = SectionKind::About.timelines(&PageContent::default());
        let stats = &timelines[2];
        let offsets: Vec<f32> = stats
            .tracks()
            .iter()
            .filter(|t| t.property == Property::Opacity)
            .map(|t| t.offset)
            .collect();
        assert_eq!(offsets, vec![0.0, 0.15, 0.3]);
        assert_eq!(trigger_of(stats).end, Anchor::BOTTOM_TOP);
        assert!(matches!(stats.playback(), Playback::Toggle { actions, .. } if *actions == ToggleActions::PLAY_REVERSE));
    }

    #[test]
    fn test_project_cards_tilt_and_delay() {
        let timelines = SectionKind::Projects.timelines(&PageContent::default());
        assert_eq!(timelines.len(), 3);
        let second = &timelines[2];
        let tilt = track(second, "project-cards/1", Property::RotationX);
        assert_eq!((tilt.from, tilt.to, tilt.offset), (10.0, 0.0, 0.15));
        assert_eq!(trigger_of(second).trigger, ElementId::new("project-cards/1"));
        assert_eq!(trigger_of(second).start, Anchor::top_at(0.85));
    }

    #[test]
    fn test_skill_categories_alternate_sides() {
        let timelines = SectionKind::Skills.timelines(&PageContent::default());
        // Heading plus category and pills per category.
        assert_eq!(timelines.len(), 1 + 2 * 3);
        let first = track(&timelines[1], "skill-categories/0", Property::PositionX);
        let second = track(&timelines[3], "skill-categories/1", Property::PositionX);
        assert_eq!(first.from, -50.0);
        assert_eq!(second.from, 50.0);
        assert_eq!(second.offset, 0.1);
    }

    #[test]
    fn test_skill_pills_pop_in() {
        let timelines = SectionKind::Skills.timelines(&PageContent::default());
        let pills = &timelines[4];
        let scales: Vec<&Track> = pills.tracks().iter().filter(|t| t.property == Property::Scale).collect();
        assert_eq!(scales.len(), 6);
        assert_eq!((scales[0].from, scales[0].to, scales[0].duration), (0.8, 1.0, 0.5));
        assert!((scales[0].offset - 0.4).abs() < 1e-6);
        assert!((scales[2].offset - 0.5).abs() < 1e-6);
        assert_eq!(scales[0].ease, Ease::back_out(1.5));
    }

    #[test]
    fn test_contact_reveals() {
        let timelines = SectionKind::Contact.timelines(&PageContent::default());
        let heading = track(&timelines[0], ids::CONTACT_HEADING, Property::PositionY);
        assert_eq!((heading.from, heading.duration), (80.0, 1.2));
        assert_eq!(trigger_of(&timelines[1]).start, Anchor::top_at(0.6));
        let links: Vec<f32> = timelines[2]
            .tracks()
            .iter()
            .filter(|t| t.property == Property::PositionY)
            .map(|t| t.offset)
            .collect();
        assert_eq!(links.len(), 3);
        assert!((links[2] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_mount_and_unmount_section() {
        let mut animator = Animator::new(folio_anim::init());
        let about = SectionReveal::mount(SectionKind::About, &mut animator, &PageContent::default());
        let contact = SectionReveal::mount(SectionKind::Contact, &mut animator, &PageContent::default());
        assert_eq!(animator.active_count(), 6);
        assert_eq!(about.kind(), SectionKind::About);
        assert_eq!(about.unmount(&mut animator), 3);
        assert_eq!(animator.active_count(), 3);
        assert!(contact.scope().ids().all(|id| animator.is_active(id)));
    }
}
