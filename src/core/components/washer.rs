use super::traits::Cycle;
use crate::core::errors::SimError;
use crate::core::types::Tick;

/// The single washing machine.
///
/// `time_until_done` is zero exactly when the washer is idle; otherwise it is
/// the number of ticks left before the current car comes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Washer {
    wash_time: Tick,
    time_until_done: Tick,
}

impl Washer {
    /// Create an idle washer that takes `wash_time` ticks per car
    pub fn new(wash_time: Tick) -> Result<Self, SimError> {
        if wash_time == 0 {
            return Err(SimError::invalid("wash_time", "must be at least one tick"));
        }
        Ok(Self {
            wash_time,
            time_until_done: 0,
        })
    }

    pub fn wash_time(&self) -> Tick {
        self.wash_time
    }

    pub fn time_until_done(&self) -> Tick {
        self.time_until_done
    }

    pub fn is_busy(&self) -> bool {
        self.time_until_done != 0
    }

    /// Start washing the next car. Ignored while a wash is in progress, so a
    /// running countdown is never reset or extended.
    pub fn start_washing(&mut self) {
        if !self.is_busy() {
            self.time_until_done = self.wash_time;
        }
    }

    /// Let one second pass. Saturates at zero.
    pub fn one_second(&mut self) {
        self.time_until_done = self.time_until_done.saturating_sub(1);
    }
}

impl Cycle for Washer {
    type Output = ();

    /// Yields `Some(())` on the tick a wash finishes.
    fn cycle(&mut self) -> Option<Self::Output> {
        let was_busy = self.is_busy();
        self.one_second();
        (was_busy && !self.is_busy()).then_some(())
    }
}
