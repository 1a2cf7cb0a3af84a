use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ElapsedTime(Duration);

impl ElapsedTime {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        // A clock going backwards reads as no time spent
        let duration = end.signed_duration_since(start).to_std().unwrap_or_default();
        ElapsedTime(duration)
    }

    #[cfg(test)]
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn hours(&self) -> u64 {
        self.0.as_secs() / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.0.as_secs() % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.0.as_secs() % 60
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours() > 0 {
            write!(f, "{} Hours, ", self.hours())?;
        }
        write!(
            f,
            "{} Minutes and {} Seconds",
            self.minutes(),
            self.seconds()
        )
    }
}
