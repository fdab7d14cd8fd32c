use super::constants::{POP_END_SCALE, POP_PEAK_OFFSET, POP_PEAK_SCALE};
use std::cell::RefCell;

/// One step of the pop animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopKeyframe {
    pub scale: f32,
    pub opacity: f32,
    /// Explicit progress in `[0, 1]`; `None` lets the animation space it evenly.
    pub offset: Option<f32>,
}

impl PopKeyframe {
    /// Scale composited after the bubble's current float translation.
    pub fn transform(&self, base: &str) -> String {
        let base = base.trim();
        if base.is_empty() {
            format!("scale({})", self.scale)
        } else {
            format!("{} scale({})", base, self.scale)
        }
    }
}

/// Swell, then collapse and fade out.
pub const POP_KEYFRAMES: [PopKeyframe; 3] = [
    PopKeyframe {
        scale: 1.0,
        opacity: 1.0,
        offset: None,
    },
    PopKeyframe {
        scale: POP_PEAK_SCALE,
        opacity: 1.0,
        offset: Some(POP_PEAK_OFFSET),
    },
    PopKeyframe {
        scale: POP_END_SCALE,
        opacity: 0.0,
        offset: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PopPhase {
    #[default]
    Idle,
    /// Keyframe animation running; pointer input disabled.
    Popping,
    /// Animation finished and callback fired; waiting to fade back in.
    Hidden,
}

/// Identifies one pop. Only the most recently issued ticket may advance the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopTicket(u64);

/// Inline style the bubble should carry for the current phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopStyle {
    pub opacity: f32,
    pub pointer_events: bool,
}

/// Pop-and-respawn cycle of a single bubble.
///
/// Starting a pop invalidates every earlier ticket, so a finish or restore
/// belonging to an interrupted pop is ignored instead of racing the new one.
#[derive(Debug, Default)]
pub struct PopCycle {
    generation: u64,
    phase: PopPhase,
}

impl PopCycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> PopPhase {
        self.phase
    }

    #[inline]
    pub fn is_current(&self, ticket: PopTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn begin(&mut self) -> PopTicket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = PopPhase::Popping;
        PopTicket(self.generation)
    }

    /// Animation completed. Returns `true` when the ticket is still current.
    pub fn finish(&mut self, ticket: PopTicket) -> bool {
        if !self.is_current(ticket) || self.phase != PopPhase::Popping {
            return false;
        }
        self.phase = PopPhase::Hidden;
        true
    }

    /// `finish` on a shared cycle, then `on_complete` with the borrow released,
    /// so the callback may pop the same bubble again.
    pub fn finish_shared(
        cycle: &RefCell<PopCycle>,
        ticket: PopTicket,
        on_complete: impl FnOnce(),
    ) -> bool {
        let finished = cycle.borrow_mut().finish(ticket);
        if finished {
            on_complete();
        }
        finished
    }

    /// Respawn delay elapsed; bubble fades back in and accepts input again.
    pub fn restore(&mut self, ticket: PopTicket) -> bool {
        if !self.is_current(ticket) || self.phase != PopPhase::Hidden {
            return false;
        }
        self.phase = PopPhase::Idle;
        true
    }

    /// Force the cycle back to rest, invalidating any outstanding ticket.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = PopPhase::Idle;
    }

    pub fn style(&self) -> PopStyle {
        match self.phase {
            PopPhase::Idle => PopStyle {
                opacity: 1.0,
                pointer_events: true,
            },
            PopPhase::Popping => PopStyle {
                opacity: 1.0,
                pointer_events: false,
            },
            PopPhase::Hidden => PopStyle {
                opacity: 0.0,
                pointer_events: false,
            },
        }
    }
}
