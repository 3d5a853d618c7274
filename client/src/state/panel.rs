//! Run state for a single feature panel.
//!
//! DESIGN
//! ======
//! A panel moves `Idle -> Busy -> Ready` and back to `Busy` on each new run.
//! Every accepted trigger bumps a generation counter and hands out a
//! [`Ticket`]. Progress and completion writes must present the ticket of the
//! run they belong to; writes from a superseded or cancelled run are dropped,
//! so a late timer can never clobber newer state.

use features::{FeatureInput, InputError};

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Where a panel is in its run lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// A simulated run is pending.
    Busy,
    /// A result is on display.
    Ready,
}

/// Identifies the run a progress or completion write belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Why [`PanelState::begin`] refused to start a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TriggerRejected {
    #[error(transparent)]
    Invalid(#[from] InputError),
    #[error("a run is already in progress")]
    Busy,
}

/// Phase, latest result, and progress of one panel.
#[derive(Clone, Debug)]
pub struct PanelState<R> {
    phase: PanelPhase,
    result: Option<R>,
    progress: u8,
    generation: u64,
}

impl<R> Default for PanelState<R> {
    fn default() -> Self {
        Self { phase: PanelPhase::Idle, result: None, progress: 0, generation: 0 }
    }
}

impl<R> PanelState<R> {
    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == PanelPhase::Busy
    }

    /// Latest completed result. Kept while a re-run is pending.
    #[must_use]
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Percent of the simulated delay elapsed for the pending run.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Start a run for `input`.
    ///
    /// # Errors
    ///
    /// Rejects invalid input and triggers while a run is pending. A rejected
    /// trigger leaves the state untouched.
    pub fn begin<I>(&mut self, input: &I) -> Result<Ticket, TriggerRejected>
    where
        I: FeatureInput<Output = R>,
    {
        input.validate()?;
        if self.is_busy() {
            return Err(TriggerRejected::Busy);
        }
        self.generation += 1;
        self.phase = PanelPhase::Busy;
        self.progress = 0;
        Ok(Ticket(self.generation))
    }

    /// Record progress for the pending run. Returns `false` for stale tickets.
    pub fn report_progress(&mut self, ticket: Ticket, percent: u8) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.progress = percent.min(100).max(self.progress);
        true
    }

    /// Store the result of the pending run. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: Ticket, result: R) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = PanelPhase::Ready;
        self.progress = 100;
        self.result = Some(result);
        true
    }

    /// Abandon the pending run, if any. Outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.is_busy() {
            self.phase = if self.result.is_some() { PanelPhase::Ready } else { PanelPhase::Idle };
            self.progress = 0;
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.is_busy() && ticket.0 == self.generation
    }
}
