//! Serve sub-state
//!
//! The ball is frozen while a side is serving. Each serve gets a fresh cycle id;
//! the opponent's delayed launch is a [`ServeTimer`] owned by the `Serving`
//! variant, so leaving that state releases the timer with it.

use crate::{Params, Side};

/// One-shot launch deadline for an opponent serve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServeTimer {
    pub deadline_ms: f64,
}

impl ServeTimer {
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms >= self.deadline_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServeState {
    /// Rally in progress, ball simulator active
    InPlay,
    /// Ball parked, waiting for `side` to launch
    Serving {
        side: Side,
        aim_offset: f32,
        cycle: u64,
        timer: Option<ServeTimer>,
    },
}

/// Owns the serve state and hands out serve cycle ids
#[derive(Debug, Clone)]
pub struct ServeCoordinator {
    state: ServeState,
    cycles: u64,
}

impl ServeCoordinator {
    pub fn new() -> Self {
        Self {
            state: ServeState::InPlay,
            cycles: 0,
        }
    }

    pub fn state(&self) -> &ServeState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ServeState::Serving { .. })
    }

    pub fn serving_side(&self) -> Option<Side> {
        match self.state {
            ServeState::Serving { side, .. } => Some(side),
            ServeState::InPlay => None,
        }
    }

    pub fn aim_offset(&self) -> Option<f32> {
        match self.state {
            ServeState::Serving { aim_offset, .. } => Some(aim_offset),
            ServeState::InPlay => None,
        }
    }

    pub fn cycle(&self) -> Option<u64> {
        match self.state {
            ServeState::Serving { cycle, .. } => Some(cycle),
            ServeState::InPlay => None,
        }
    }

    /// Start a new serve cycle, replacing (and so cancelling) any previous one
    pub fn enter(&mut self, side: Side, timer: Option<ServeTimer>) -> u64 {
        self.cycles += 1;
        self.state = ServeState::Serving {
            side,
            aim_offset: Params::AIM_CENTER,
            cycle: self.cycles,
            timer,
        };
        self.cycles
    }

    /// Nudge the aim of `side`'s pending serve. Returns false when `side` is not serving.
    pub fn adjust_aim(&mut self, side: Side, delta: f32) -> bool {
        match &mut self.state {
            ServeState::Serving {
                side: serving,
                aim_offset,
                ..
            } if *serving == side => {
                *aim_offset = (*aim_offset + delta).clamp(0.0, 1.0);
                true
            }
            _ => false,
        }
    }

    /// Leave `Serving` for `side`, yielding the aim offset at launch
    pub fn take_launch(&mut self, side: Side) -> Option<f32> {
        match self.state {
            ServeState::Serving {
                side: serving,
                aim_offset,
                ..
            } if serving == side => {
                self.state = ServeState::InPlay;
                Some(aim_offset)
            }
            _ => None,
        }
    }

    /// Side whose timer has expired at `now_ms`
    pub fn due(&self, now_ms: f64) -> Option<Side> {
        match self.state {
            ServeState::Serving {
                side,
                timer: Some(timer),
                ..
            } if timer.is_due(now_ms) => Some(side),
            _ => None,
        }
    }

    /// Side whose timer belongs to serve cycle `cycle`, if still armed and due at `now_ms`
    pub fn armed(&self, cycle: u64, now_ms: f64) -> Option<Side> {
        match self.state {
            ServeState::Serving {
                side,
                cycle: current,
                timer: Some(timer),
                ..
            } if current == cycle && timer.is_due(now_ms) => Some(side),
            _ => None,
        }
    }
}

impl Default for ServeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical launch factor in [-1, 1] for an aim offset in [0, 1].
///
/// Flat around the center of the paddle and steep towards its ends.
pub fn aim_curve(aim_offset: f32) -> f32 {
    let delta = (2.0 * (aim_offset.clamp(0.0, 1.0) - Params::AIM_CENTER)).clamp(-1.0, 1.0);
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * delta.abs().powf(Params::AIM_CURVE_EXPONENT)
}
