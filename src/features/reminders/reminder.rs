use chrono::{DateTime, Local};
use std::time::Duration;
use uuid::Uuid;

pub type ReminderId = Uuid;

/// Unit accepted by the `remind` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
}

impl TimeUnit {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "h" => Some(TimeUnit::Hours),
            "m" => Some(TimeUnit::Minutes),
            _ => None,
        }
    }

    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Hours => 3600.0,
            TimeUnit::Minutes => 60.0,
        }
    }

    /// Delay for `amount` of this unit, or `None` if it cannot be represented
    pub fn delay(self, amount: f64) -> Option<Duration> {
        Duration::try_from_secs_f64(amount * self.seconds()).ok()
    }
}

/// A pending notification owned by one chat participant
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ReminderId,
    pub owner: String,
    pub fire_at: DateTime<Local>,
    pub message: String,
}

impl Reminder {
    pub fn new(
        owner: impl Into<String>,
        fire_at: DateTime<Local>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            fire_at,
            message: message.into(),
        }
    }
}
