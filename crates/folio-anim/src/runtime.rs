//! Process-wide animation runtime.
//!
//! [`init`] must run before the first [`Animator`](crate::Animator) is built;
//! the animator takes the returned `&'static AnimRuntime` so the ordering is
//! enforced by the type system. Calling [`init`] again returns the same runtime.

use std::sync::OnceLock;

use tracing::info;

use crate::easing::{Ease, EaseParseError};

/// Defaults shared by every timeline in the process.
#[derive(Debug)]
pub struct AnimRuntime {
    default_ease: Ease,
    default_duration: f32,
}

static RUNTIME: OnceLock<AnimRuntime> = OnceLock::new();

/// Initialize the animation runtime once for the process.
pub fn init() -> &'static AnimRuntime {
    RUNTIME.get_or_init(|| {
        let runtime = AnimRuntime {
            default_ease: Ease::POWER1_OUT,
            default_duration: 0.5,
        };
        info!(
            default_ease = %runtime.default_ease,
            default_duration = runtime.default_duration,
            "Animation runtime initialized"
        );
        runtime
    })
}

impl AnimRuntime {
    /// Ease used by tweens that do not name one.
    pub fn default_ease(&self) -> Ease {
        self.default_ease
    }

    /// Duration used by tweens that do not give one.
    pub fn default_duration(&self) -> f32 {
        self.default_duration
    }

    /// Resolve an optional ease name, falling back to the default.
    pub fn ease(&self, name: Option<&str>) -> Result<Ease, EaseParseError> {
        match name {
            Some(name) => name.parse(),
            None => Ok(self.default_ease),
        }
    }
}
