//! Fixed-rate timers driven by host-supplied elapsed time
//!
//! The host calls [`Clock::advance`] with however much wall time passed; the
//! clock replays the simulation and movement timers in due-time order, the
//! way a single-threaded event loop would fire two intervals. A disarmed
//! timer never fires.

/// Which timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Movement,
    Simulation,
}

/// A periodic timer on the clock's own timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    period: f64,
    next_due: f64,
    armed: bool,
}

impl Timer {
    pub fn new(period: f32) -> Self {
        Self {
            period: f64::from(period),
            next_due: f64::from(period),
            armed: true,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    fn arm_at(&mut self, now: f64) {
        self.armed = true;
        self.next_due = now + self.period;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn due_by(&self, until: f64) -> Option<f64> {
        (self.armed && self.next_due <= until).then_some(self.next_due)
    }
}

/// Simulation and movement timers sharing one timeline
#[derive(Debug, Clone)]
pub struct Clock {
    now: f64,
    pub movement: Timer,
    pub simulation: Timer,
    max_fires: u32,
}

impl Clock {
    pub fn new(sim_period: f32, move_period: f32, max_substeps: u32) -> Self {
        Self {
            now: 0.0,
            movement: Timer::new(move_period),
            simulation: Timer::new(sim_period),
            max_fires: max_substeps.max(1),
        }
    }

    /// Seconds of timeline elapsed
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn is_armed(&self) -> bool {
        self.simulation.is_armed() || self.movement.is_armed()
    }

    /// Start both timers one period from now
    pub fn arm(&mut self) {
        let now = self.now;
        self.simulation.arm_at(now);
        self.movement.arm_at(now);
    }

    /// Cancel both timers; nothing fires until [`Clock::arm`]
    pub fn disarm(&mut self) {
        self.simulation.disarm();
        self.movement.disarm();
    }

    /// Advance the timeline by `dt` seconds, calling `fire` for every due
    /// timer in order. Movement fires first on ties. `fire` may disarm the
    /// clock (returning false stops both timers immediately).
    ///
    /// Each timer fires at most `max_substeps` times per call; any further
    /// backlog is dropped so a stalled host cannot trigger a spiral of death.
    pub fn advance(&mut self, dt: f32, mut fire: impl FnMut(TimerKind) -> bool) -> u32 {
        if !(dt.is_finite() && dt > 0.0) {
            return 0;
        }
        let until = self.now + f64::from(dt);
        let mut sim_fires = 0;
        let mut move_fires = 0;

        loop {
            let next = match (self.movement.due_by(until), self.simulation.due_by(until)) {
                (Some(m), Some(s)) if m <= s => Some((TimerKind::Movement, m)),
                (_, Some(s)) => Some((TimerKind::Simulation, s)),
                (Some(m), None) => Some((TimerKind::Movement, m)),
                (None, None) => None,
            };
            let Some((kind, at)) = next else { break };

            self.now = at;
            let (timer, fires) = match kind {
                TimerKind::Movement => (&mut self.movement, &mut move_fires),
                TimerKind::Simulation => (&mut self.simulation, &mut sim_fires),
            };
            timer.next_due += timer.period;
            *fires += 1;
            if *fires >= self.max_fires {
                // Skip the backlog: resume one period after the window
                if timer.next_due <= until {
                    log::debug!("{kind:?} timer fell behind; dropping backlog");
                    timer.next_due = until + timer.period;
                }
            }

            if !fire(kind) {
                self.disarm();
                break;
            }
        }

        self.now = until;
        sim_fires + move_fires
    }
}
