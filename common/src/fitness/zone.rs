use std::fmt;

use super::trainer::Specialization;

/// What a zone is built for.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum ZoneType {
    Gym,
    Yoga,
    Pool,
}

/// Whether a zone can currently host people.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ZoneStatus {
    #[default]
    Open,
    Cleaning,
}

/// Zone type to the specialization a trainer needs to work there.
///
/// Rows are ordered by `ZoneType` discriminant.
const REQUIRED_SPECIALIZATION: [(ZoneType, Specialization); 3] = [
    (ZoneType::Gym, Specialization::Powerlifting),
    (ZoneType::Yoga, Specialization::Yoga),
    (ZoneType::Pool, Specialization::Swimming),
];

impl ZoneType {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneType::Gym => "Gym",
            ZoneType::Yoga => "Yoga studio",
            ZoneType::Pool => "Swimming pool",
        }
    }

    /// Specialization a trainer must hold to be assigned to a zone of this type.
    pub fn required_specialization(&self) -> Specialization {
        REQUIRED_SPECIALIZATION[*self as usize].1
    }

    pub fn accepts(&self, specialization: Specialization) -> bool {
        self.required_specialization() == specialization
    }
}

impl ZoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Open => "open",
            ZoneStatus::Cleaning => "cleaning",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ZoneStatus::Open)
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
