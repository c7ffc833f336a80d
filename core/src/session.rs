//! # Training Sessions
//!
//! A session is a scheduled training event. Sessions are created through a
//! [`SessionRegistry`], which keeps session identifiers unique the same way
//! [`crate::zone::ZoneFactory`] does for zones.

use chrono::NaiveDateTime;
use gymnet_common::error::{FitnessError, FitnessResult};
use tracing::debug;

use crate::registry::IdentifierRegistry;

/// Input and display format of a session's date-time.
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    id: String,
    scheduled_at: NaiveDateTime,
    participants: u32,
}

impl TrainingSession {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    pub fn set_scheduled_at(&mut self, scheduled_at: NaiveDateTime) {
        self.scheduled_at = scheduled_at;
    }

    pub fn participants(&self) -> u32 {
        self.participants
    }

    pub fn set_participants(&mut self, participants: u32) {
        self.participants = participants;
    }

    pub fn get_session_info(&self) -> String {
        format!(
            "Session {}, scheduled at {}, participants: {}",
            self.id,
            self.scheduled_at.format(SCHEDULE_FORMAT),
            self.participants
        )
    }
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    registry: IdentifierRegistry,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from a `YYYY-MM-DD HH:MM` date-time.
    ///
    /// The id is only claimed when the date-time parses.
    pub fn schedule(&mut self, id: &str, date_time: &str, participants: u32) -> FitnessResult<TrainingSession> {
        if self.registry.is_claimed(id) {
            return Err(FitnessError::DuplicateSessionId(id.to_string()));
        }

        let scheduled_at = NaiveDateTime::parse_from_str(date_time.trim(), SCHEDULE_FORMAT).map_err(|source| {
            FitnessError::InvalidSchedule {
                session: id.to_string(),
                input: date_time.to_string(),
                source,
            }
        })?;

        self.registry.claim(id);
        debug!("Scheduled session {id} at {scheduled_at}");

        Ok(TrainingSession {
            id: id.to_string(),
            scheduled_at,
            participants,
        })
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }
}
