//! Errors raised by the fitness domain.

use thiserror::Error;

use crate::fitness::{trainer::Specialization, zone::ZoneType};

#[derive(Debug, Error)]
pub enum FitnessError {
    /// The identifier was already claimed by another zone, possibly of a different type.
    #[error("zone with identifier {0} already exists")]
    DuplicateZoneId(String),

    #[error("training session with identifier {0} already exists")]
    DuplicateSessionId(String),

    #[error("zone with identifier {0} already exists in this fitness center")]
    ZoneAlreadyInCenter(String),

    #[error("zone with identifier {0} was not found in this fitness center")]
    ZoneNotInCenter(String),

    /// Another part of the program holds a mutable borrow of a zone the center had to inspect.
    #[error("a zone of fitness center {0} is being modified elsewhere")]
    ZoneBusy(String),

    #[error("zone {0} is being cleaned")]
    ZoneUnavailable(String),

    #[error("zone with identifier {0} was not found in any fitness center of the network")]
    ZoneNotInNetwork(String),

    #[error("trainer {trainer} does not specialize in {required} ({zone_type} requires it)")]
    SpecializationMismatch {
        trainer: String,
        required: Specialization,
        zone_type: ZoneType,
    },

    #[error("fitness center {0} is not part of the network")]
    CenterNotInNetwork(String),

    #[error("capacity of zone {0} must be greater than zero")]
    InvalidCapacity(String),

    #[error("{field} of zone {zone} must be a positive number, got {value}")]
    InvalidMeasurement {
        zone: String,
        field: &'static str,
        value: f64,
    },

    #[error("invalid date-time '{input}' for session {session}, expected YYYY-MM-DD HH:MM")]
    InvalidSchedule {
        session: String,
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type FitnessResult<T> = Result<T, FitnessError>;
