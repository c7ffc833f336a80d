use gymnet_common::error::{FitnessError, FitnessResult};
use gymnet_common::fitness::trainer::Specialization;
use gymnet_common::fitness::zone::ZoneStatus;

use crate::zone::Zone;

#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    full_name: String,
    specialization: Specialization,
    experience_years: u32,
}

impl Trainer {
    pub fn new(full_name: &str, specialization: Specialization, experience_years: u32) -> Self {
        Self {
            full_name: full_name.to_string(),
            specialization,
            experience_years,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: &str) {
        self.full_name = full_name.to_string();
    }

    pub fn specialization(&self) -> Specialization {
        self.specialization
    }

    pub fn set_specialization(&mut self, specialization: Specialization) {
        self.specialization = specialization;
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    pub fn set_experience_years(&mut self, experience_years: u32) {
        self.experience_years = experience_years;
    }

    /// Starts a shift in `zone`.
    ///
    /// Fails with [`FitnessError::ZoneUnavailable`] while the zone is being cleaned.
    /// Neither the trainer nor the zone is modified.
    pub fn work_in_zone(&self, zone: &dyn Zone) -> FitnessResult<String> {
        if zone.status() == ZoneStatus::Cleaning {
            return Err(FitnessError::ZoneUnavailable(zone.id().to_string()));
        }
        Ok(format!(
            "Trainer {} started a shift in zone {}",
            self.full_name,
            zone.id()
        ))
    }
}
