/// Fixed-period tick source for the game loop. The frontend holds one only
/// while a round is live, so leaving the playing state drops the schedule
/// and no stale callback can keep mutating the game.
pub struct Ticker {
    period: f64,
    last: f64,
}

impl Ticker {
    pub fn new(period: f64, now: f64) -> Self {
        Self { period, last: now }
    }

    /// True once a full period has elapsed since the last firing, re-arming
    /// for the next one. Fires at most once per call: a long frame yields a
    /// single late tick rather than a burst of catch-up ticks.
    pub fn due(&mut self, now: f64) -> bool {
        if now - self.last >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }
}
