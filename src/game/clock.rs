use chrono::{DateTime, Utc};
#[cfg(test)]
use chrono::Duration;
#[cfg(test)]
use parking_lot::RwLock;
#[cfg(test)]
use std::sync::Arc;

/// Source of wall-clock timestamps for quiz sessions.
///
/// `Fixed` clocks only exist in test builds. They are shared handles: advancing
/// any clone moves every clone.
#[derive(Clone, Debug)]
pub enum Clock {
    System,
    #[cfg(test)]
    Fixed(Arc<RwLock<DateTime<Utc>>>),
}

impl Default for Clock {
    fn default() -> Self {
        Clock::System
    }
}

impl Clock {
    #[cfg(test)]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Clock::Fixed(Arc::new(RwLock::new(at)))
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            #[cfg(test)]
            Clock::Fixed(at) => *at.read(),
        }
    }

    /// Has no effect on the system clock.
    #[cfg(test)]
    pub fn advance(&self, delta: Duration) {
        if let Clock::Fixed(at) = self {
            let mut at = at.write();
            *at = *at + delta;
        }
    }
}

#[cfg(test)]
pub fn fixed_clock() -> Clock {
    use chrono::TimeZone;
    Clock::fixed(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
}
