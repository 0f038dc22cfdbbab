//! Timelines: tracks sharing one playhead, plus the mode that moves it.

use std::collections::BTreeSet;

use crate::scrub::Scrub;
use crate::toggle::ToggleActions;
use crate::track::{PropertySink, Target, Track};
use crate::trigger::ScrollTrigger;

/// What moves a timeline's playhead.
#[derive(Clone, Debug, PartialEq)]
pub enum Playback {
    /// Playhead position is the trigger's scroll progress, smoothed by `scrub`.
    Scrub {
        trigger: ScrollTrigger,
        scrub: Scrub,
    },
    /// Playhead runs in wall-clock time; trigger transitions issue toggle actions.
    Toggle {
        trigger: ScrollTrigger,
        actions: ToggleActions,
    },
    /// Playhead runs forward in wall-clock time from the moment it is spawned.
    Timed,
}

impl Playback {
    /// The trigger this playback observes, if any.
    pub fn trigger(&self) -> Option<&ScrollTrigger> {
        match self {
            Playback::Scrub { trigger, .. } | Playback::Toggle { trigger, .. } => Some(trigger),
            Playback::Timed => None,
        }
    }
}

/// A named set of tracks driven by one playhead.
///
/// All tracks are sampled from the same playhead time in a given frame, so the
/// properties a timeline drives are always mutually consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    label: String,
    tracks: Vec<Track>,
    playback: Playback,
}

impl Timeline {
    /// Empty timeline with the given playback.
    pub fn new(label: impl Into<String>, playback: Playback) -> Self {
        Self {
            label: label.into(),
            tracks: Vec::new(),
            playback,
        }
    }

    /// Scroll-scrubbed timeline.
    pub fn scrubbed(label: impl Into<String>, trigger: ScrollTrigger, scrub: Scrub) -> Self {
        Self::new(label, Playback::Scrub { trigger, scrub })
    }

    /// Toggle-driven timeline.
    pub fn toggled(label: impl Into<String>, trigger: ScrollTrigger, actions: ToggleActions) -> Self {
        Self::new(label, Playback::Toggle { trigger, actions })
    }

    /// Append a track.
    pub fn with(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Append several tracks.
    pub fn with_all(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub(crate) fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// Time at which the last track finishes.
    pub fn duration(&self) -> f32 {
        self.tracks.iter().map(Track::end).fold(0.0, f32::max)
    }

    /// Every target this timeline writes to.
    pub fn targets(&self) -> BTreeSet<Target> {
        self.tracks.iter().map(|t| t.target.clone()).collect()
    }

    /// Write every track's value at `time` into `sink`.
    pub fn sample(&self, time: f32, sink: &mut dyn PropertySink) {
        for track in &self.tracks {
            sink.apply(&track.target, track.property, track.value_at(time));
        }
    }
}
