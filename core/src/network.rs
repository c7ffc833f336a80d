//! # Fitness Network
//!
//! The top-level aggregate: a list of centers plus the current training session
//! of every zone that has one.
//!
//! ## Rules
//! * A zone under cleaning cannot receive a session.
//! * A zone holds at most one session; a new assignment replaces the previous one.
//! * A trainer can only be placed in a zone that belongs to one of the network's
//!   centers, and only if their specialization is the one the zone type requires.
//!   Belonging means the center holds that very zone, not just one with its id.

use std::collections::BTreeMap;

use gymnet_common::error::{FitnessError, FitnessResult};
use gymnet_common::fitness::zone::ZoneStatus;
use tracing::debug;

use crate::center::FitnessCenter;
use crate::session::TrainingSession;
use crate::trainer::Trainer;
use crate::zone::Zone;

#[derive(Debug, Default)]
pub struct FitnessNetwork {
    centers: Vec<FitnessCenter>,
    /// Zone id to its current session.
    zone_sessions: BTreeMap<String, TrainingSession>,
}

impl FitnessNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_centers(centers: Vec<FitnessCenter>) -> Self {
        Self {
            centers,
            zone_sessions: BTreeMap::new(),
        }
    }

    pub fn centers(&self) -> &[FitnessCenter] {
        &self.centers
    }

    pub fn center(&self, name: &str) -> Option<&FitnessCenter> {
        self.centers.iter().find(|c| c.name() == name)
    }

    pub fn center_mut(&mut self, name: &str) -> Option<&mut FitnessCenter> {
        self.centers.iter_mut().find(|c| c.name() == name)
    }

    /// Appends `center`. Names are not required to be unique.
    pub fn add_center(&mut self, center: FitnessCenter) {
        debug!("Center {} joined the network", center.name());
        self.centers.push(center);
    }

    /// Removes the first center called `name` and returns it.
    pub fn remove_center(&mut self, name: &str) -> FitnessResult<FitnessCenter> {
        let Some(idx) = self.centers.iter().position(|c| c.name() == name) else {
            return Err(FitnessError::CenterNotInNetwork(name.to_string()));
        };
        debug!("Center {name} left the network");
        Ok(self.centers.remove(idx))
    }

    /// Makes `session` the current session of `zone`, replacing any earlier one.
    pub fn assign_session_to_zone(&mut self, session: TrainingSession, zone: &dyn Zone) -> FitnessResult<String> {
        if zone.status() == ZoneStatus::Cleaning {
            debug!("Session {} rejected: zone {} is being cleaned", session.id(), zone.id());
            return Err(FitnessError::ZoneUnavailable(zone.id().to_string()));
        }

        let message = format!("Session {} assigned to zone {}", session.id(), zone.id());
        if let Some(previous) = self.zone_sessions.insert(zone.id().to_string(), session) {
            debug!("Session {} of zone {} was replaced", previous.id(), zone.id());
        }
        Ok(message)
    }

    pub fn get_session_for_zone(&self, zone: &dyn Zone) -> Option<&TrainingSession> {
        self.zone_sessions.get(zone.id())
    }

    /// Current assignments ordered by zone id.
    pub fn zone_sessions(&self) -> impl Iterator<Item = (&str, &TrainingSession)> {
        self.zone_sessions.iter().map(|(zone_id, session)| (zone_id.as_str(), session))
    }

    /// Starts a shift for `trainer` in `zone` after checking that the zone belongs
    /// to the network and that the trainer is qualified for its type.
    ///
    /// On success the message is the one [`Trainer::work_in_zone`] produces.
    pub fn assign_trainer(&self, trainer: &Trainer, zone: &dyn Zone) -> FitnessResult<String> {
        if !self.centers.iter().any(|center| center.contains_zone(zone)) {
            return Err(FitnessError::ZoneNotInNetwork(zone.id().to_string()));
        }

        let zone_type = zone.zone_type();
        if !zone_type.accepts(trainer.specialization()) {
            debug!(
                "Trainer {} ({}) cannot be placed in {} zone {}",
                trainer.full_name(),
                trainer.specialization(),
                zone_type,
                zone.id()
            );
            return Err(FitnessError::SpecializationMismatch {
                trainer: trainer.full_name().to_string(),
                required: zone_type.required_specialization(),
                zone_type,
            });
        }

        trainer.work_in_zone(zone)
    }
}
