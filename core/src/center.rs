//! # Fitness Center
//!
//! A center owns shared references to its zones and the trainers it employs.
//! Zone identifiers are unique within a center. Adding and removing match zones
//! by id, while [`FitnessCenter::contains_zone`] asks whether this exact zone
//! (the same shared allocation) belongs to the center.
//!
//! Membership checks and removal never borrow the zone they are given, so callers
//! may pass `&*zone.borrow_mut()` for a zone the center holds. A borrow that
//! cannot be taken surfaces as [`FitnessError::ZoneBusy`], never as a panic.

use std::rc::Rc;

use gymnet_common::error::{FitnessError, FitnessResult};
use tracing::debug;

use crate::trainer::Trainer;
use crate::zone::{SharedZone, Zone};

/// Whether `held` is the allocation `zone` points into. Never borrows `held`.
fn is_same_zone(held: &SharedZone, zone: &dyn Zone) -> bool {
    std::ptr::addr_eq(held.as_ptr().cast_const(), zone)
}

#[derive(Debug)]
pub struct FitnessCenter {
    name: String,
    zones: Vec<SharedZone>,
    trainers: Vec<Trainer>,
}

impl FitnessCenter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            zones: Vec::new(),
            trainers: Vec::new(),
        }
    }

    /// Builds a center from existing zones, rejecting duplicate ids the same way [`Self::add_zone`] does.
    pub fn with_staff(name: &str, zones: Vec<SharedZone>, trainers: Vec<Trainer>) -> FitnessResult<Self> {
        let mut center = Self::new(name);
        for zone in zones {
            center.add_zone(zone)?;
        }
        for trainer in trainers {
            center.hire_trainer(trainer);
        }
        Ok(center)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zones(&self) -> &[SharedZone] {
        &self.zones
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    /// Whether `zone` itself was added to this center.
    ///
    /// Another zone that merely carries the same id is not a member.
    pub fn contains_zone(&self, zone: &dyn Zone) -> bool {
        self.zones.iter().any(|held| is_same_zone(held, zone))
    }

    /// Appends `zone`, unless a zone with the same id is already part of this center.
    pub fn add_zone(&mut self, zone: SharedZone) -> FitnessResult<()> {
        let zone_id = {
            let candidate = zone.try_borrow().map_err(|_| FitnessError::ZoneBusy(self.name.clone()))?;
            if self.position(&*candidate)?.is_some() {
                return Err(FitnessError::ZoneAlreadyInCenter(candidate.id().to_string()));
            }
            candidate.id().to_string()
        };
        debug!("Zone {zone_id} added to center {}", self.name);
        self.zones.push(zone);
        Ok(())
    }

    /// Removes the zone carrying the id of `zone` and hands its shared reference back.
    ///
    /// The collection is left untouched when no such zone exists.
    pub fn remove_zone(&mut self, zone: &dyn Zone) -> FitnessResult<SharedZone> {
        let Some(idx) = self.position(zone)? else {
            return Err(FitnessError::ZoneNotInCenter(zone.id().to_string()));
        };
        debug!("Zone {} removed from center {}", zone.id(), self.name);
        Ok(self.zones.remove(idx))
    }

    /// Zones currently open, in insertion order.
    pub fn get_available_zones(&self) -> Vec<SharedZone> {
        self.zones
            .iter()
            .filter(|zone| zone.borrow().is_open())
            .map(Rc::clone)
            .collect()
    }

    pub fn hire_trainer(&mut self, trainer: Trainer) {
        debug!("Trainer {} hired by center {}", trainer.full_name(), self.name);
        self.trainers.push(trainer);
    }

    /// Index of `zone`, or of a held zone with the same id.
    ///
    /// Fails with [`FitnessError::ZoneBusy`] if a different held zone is mutably
    /// borrowed and its id therefore cannot be read.
    fn position(&self, zone: &dyn Zone) -> FitnessResult<Option<usize>> {
        for (idx, held) in self.zones.iter().enumerate() {
            if is_same_zone(held, zone) {
                return Ok(Some(idx));
            }
            let held = held.try_borrow().map_err(|_| FitnessError::ZoneBusy(self.name.clone()))?;
            if held.id() == zone.id() {
                return Ok(Some(idx));
            }
        }
        Ok(None)
    }
}
