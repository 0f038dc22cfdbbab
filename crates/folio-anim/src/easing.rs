//! Easing curves, named the way the page's animation descriptors name them
//! (`power2.inOut`, `sine.inOut`, `back.out(1.5)`).

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Which end of the curve the acceleration sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseMode {
    /// Slow start, fast end.
    In,
    /// Fast start, slow end.
    Out,
    /// Slow start, fast middle, slow end.
    InOut,
}

/// An easing curve mapping linear progress to eased progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Polynomial ease. `power1` is quadratic, so `exponent = n + 1`.
    Power { exponent: i32, mode: EaseMode },
    /// Quarter-sine ease.
    Sine(EaseMode),
    /// Overshooting ease.
    Back { overshoot: f32, mode: EaseMode },
}

/// Overshoot used by `back.*` when no parameter is given.
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;

impl Ease {
    /// `power1.out`, the default for tracks that name no ease.
    pub const POWER1_OUT: Ease = Ease::Power {
        exponent: 2,
        mode: EaseMode::Out,
    };
    /// `power2.in`.
    pub const POWER2_IN: Ease = Ease::Power {
        exponent: 3,
        mode: EaseMode::In,
    };
    /// `power2.out`.
    pub const POWER2_OUT: Ease = Ease::Power {
        exponent: 3,
        mode: EaseMode::Out,
    };
    /// `power2.inOut`.
    pub const POWER2_IN_OUT: Ease = Ease::Power {
        exponent: 3,
        mode: EaseMode::InOut,
    };
    /// `power3.out`.
    pub const POWER3_OUT: Ease = Ease::Power {
        exponent: 4,
        mode: EaseMode::Out,
    };
    /// `sine.inOut`.
    pub const SINE_IN_OUT: Ease = Ease::Sine(EaseMode::InOut);

    /// `back.out(overshoot)`.
    pub const fn back_out(overshoot: f32) -> Ease {
        Ease::Back {
            overshoot,
            mode: EaseMode::Out,
        }
    }

    /// Map a linear progress value (clamped to `0.0..=1.0`) to an eased value.
    ///
    /// Every curve returns exactly 0 at 0 and 1 at 1.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Ease::Linear => t,
            Ease::Power { mode, .. } | Ease::Sine(mode) | Ease::Back { mode, .. } => match mode {
                EaseMode::In => self.ease_in(t),
                EaseMode::Out => 1.0 - self.ease_in(1.0 - t),
                EaseMode::InOut => {
                    if t < 0.5 {
                        self.ease_in(2.0 * t) / 2.0
                    } else {
                        1.0 - self.ease_in(2.0 * (1.0 - t)) / 2.0
                    }
                }
            },
        }
    }

    /// The `In` form of the curve family; the other modes are derived from it.
    fn ease_in(&self, t: f32) -> f32 {
        match *self {
            Ease::Linear => t,
            Ease::Power { exponent, .. } => t.powi(exponent),
            Ease::Sine(_) => 1.0 - (t * PI / 2.0).cos(),
            Ease::Back { overshoot, .. } => t * t * ((overshoot + 1.0) * t - overshoot),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::POWER1_OUT
    }
}

/// Errors from parsing an ease name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EaseParseError {
    /// The family (`power2`, `sine`, ...) is not known.
    #[error("unknown ease family `{0}`")]
    UnknownFamily(String),

    /// The mode suffix is not `in`, `out`, or `inOut`.
    #[error("unknown ease mode `{0}`")]
    UnknownMode(String),

    /// The parenthesized parameter is not a number.
    #[error("invalid ease parameter `{0}`")]
    BadParameter(String),
}

fn parse_mode(mode: &str) -> Result<EaseMode, EaseParseError> {
    match mode.to_ascii_lowercase().as_str() {
        "in" => Ok(EaseMode::In),
        "out" => Ok(EaseMode::Out),
        "inout" => Ok(EaseMode::InOut),
        _ => Err(EaseParseError::UnknownMode(mode.to_string())),
    }
}

impl FromStr for Ease {
    type Err = EaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, param) = match s.split_once('(') {
            Some((head, rest)) => {
                let raw = rest.trim_end_matches(')').trim();
                let value = raw
                    .parse::<f32>()
                    .map_err(|_| EaseParseError::BadParameter(raw.to_string()))?;
                (head, Some(value))
            }
            None => (s, None),
        };

        let (family, mode) = match head.split_once('.') {
            Some((family, mode)) => (family, parse_mode(mode)?),
            // A bare family name means `.out`.
            None => (head, EaseMode::Out),
        };

        let exponent = match family.to_ascii_lowercase().as_str() {
            "none" | "linear" | "power0" => return Ok(Ease::Linear),
            "sine" => return Ok(Ease::Sine(mode)),
            "back" => {
                return Ok(Ease::Back {
                    overshoot: param.unwrap_or(DEFAULT_OVERSHOOT),
                    mode,
                });
            }
            "power1" | "quad" => 2,
            "power2" | "cubic" => 3,
            "power3" | "quart" => 4,
            "power4" | "quint" | "strong" => 5,
            other => return Err(EaseParseError::UnknownFamily(other.to_string())),
        };
        Ok(Ease::Power { exponent, mode })
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = |m: EaseMode| match m {
            EaseMode::In => "in",
            EaseMode::Out => "out",
            EaseMode::InOut => "inOut",
        };
        match *self {
            Ease::Linear => write!(f, "none"),
            Ease::Power { exponent, mode: m } => write!(f, "power{}.{}", exponent - 1, mode(m)),
            Ease::Sine(m) => write!(f, "sine.{}", mode(m)),
            Ease::Back { overshoot, mode: m } => write!(f, "back.{}({overshoot})", mode(m)),
        }
    }
}
