//! Toggle actions: what a time-based animation does when its trigger is
//! entered or left in either direction (`"play none none reverse"`).

use std::str::FromStr;

use crate::trigger::Zone;

/// Playback command issued on a trigger transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Run forward from the current time.
    Play,
    /// Stop where it is.
    Pause,
    /// Continue in the last direction.
    Resume,
    /// Run backward from the current time.
    Reverse,
    /// Jump to the start and run forward.
    Restart,
    /// Jump to the start and stop.
    Reset,
    /// Jump to the end and stop.
    Complete,
    /// Do nothing.
    None,
}

/// Actions for the four trigger transitions, in `enter leave enterBack leaveBack` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    /// Scrolling down past the start.
    pub on_enter: ToggleAction,
    /// Scrolling down past the end.
    pub on_leave: ToggleAction,
    /// Scrolling up past the end.
    pub on_enter_back: ToggleAction,
    /// Scrolling up past the start.
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `play none none reverse`: reveal on entry, hide again above the start.
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// Actions fired, in order, when the scroll position moves from one zone to another.
    ///
    /// Jumping across the whole range fires both transitions it skipped over.
    pub fn transition(&self, from: Zone, to: Zone) -> Vec<ToggleAction> {
        use Zone::*;
        match (from, to) {
            (Before, Active) => vec![self.on_enter],
            (Before, After) => vec![self.on_enter, self.on_leave],
            (Active, After) => vec![self.on_leave],
            (After, Active) => vec![self.on_enter_back],
            (After, Before) => vec![self.on_enter_back, self.on_leave_back],
            (Active, Before) => vec![self.on_leave_back],
            _ => Vec::new(),
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        // play none none none
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

/// Errors from parsing a toggle action list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToggleParseError {
    /// The list must name four actions.
    #[error("expected four toggle actions, got {0}")]
    WrongCount(usize),

    /// An entry is not a known action.
    #[error("unknown toggle action `{0}`")]
    UnknownAction(String),
}

impl FromStr for ToggleAction {
    type Err = ToggleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(ToggleParseError::UnknownAction(other.to_string())),
        })
    }
}

impl FromStr for ToggleActions {
    type Err = ToggleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        match parts.as_slice() {
            &[on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            other => Err(ToggleParseError::WrongCount(other.len())),
        }
    }
}
