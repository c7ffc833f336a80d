//! # Zone Model
//!
//! A zone is a physical area of a center with an identity, a capacity and an
//! open/cleaning status.
//!
//! ## Variants
//! * [`gym::GymZone`]: machines and ventilation.
//! * [`yoga::YogaZone`]: floor area and mat material.
//! * [`pool::PoolZone`]: pool length and depth.
//!
//! Every variant embeds a [`ZoneSite`] carrying the shared identity and status,
//! so the status lifecycle ([`Cleanable`]) is written once for all of them.
//!
//! Zones are only built through a [`ZoneFactory`], which owns the registry that
//! keeps identifiers unique for as long as the factory lives.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gymnet_common::error::{FitnessError, FitnessResult};
use gymnet_common::fitness::zone::{ZoneStatus, ZoneType};
use tracing::debug;

use crate::registry::IdentifierRegistry;

pub mod gym;
pub mod pool;
pub mod yoga;

pub use gym::GymZone;
pub use pool::PoolZone;
pub use yoga::YogaZone;

/// Single-threaded shared handle, so a center and its caller see the same zone.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared handle to any zone variant.
pub type SharedZone = Shared<dyn Zone>;

/// Identity and status block shared by every zone variant.
#[derive(Debug, PartialEq)]
pub struct ZoneSite {
    id: String,
    zone_type: ZoneType,
    capacity: u32,
    status: ZoneStatus,
}

impl ZoneSite {
    fn new(id: &str, zone_type: ZoneType, capacity: u32, status: ZoneStatus) -> FitnessResult<Self> {
        Ok(Self {
            id: id.to_string(),
            zone_type,
            capacity: validate_capacity(id, capacity)?,
            status,
        })
    }
}

impl fmt::Display for ZoneSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, type: {}, capacity: {}, status: {}",
            self.id, self.zone_type, self.capacity, self.status
        )
    }
}

pub trait Zone: fmt::Debug {
    fn site(&self) -> &ZoneSite;
    fn site_mut(&mut self) -> &mut ZoneSite;

    /// Variant-specific attributes as `(label, value)` pairs, in display order.
    fn facilities(&self) -> Vec<(&'static str, String)>;

    fn id(&self) -> &str {
        &self.site().id
    }

    fn zone_type(&self) -> ZoneType {
        self.site().zone_type
    }

    fn capacity(&self) -> u32 {
        self.site().capacity
    }

    fn status(&self) -> ZoneStatus {
        self.site().status
    }

    fn is_open(&self) -> bool {
        self.status().is_open()
    }

    /// Rejects a zero capacity and leaves the previous value in place.
    fn set_capacity(&mut self, capacity: u32) -> FitnessResult<()> {
        let capacity = validate_capacity(self.id(), capacity)?;
        self.site_mut().capacity = capacity;
        Ok(())
    }

    fn set_status(&mut self, status: ZoneStatus) {
        self.site_mut().status = status;
    }
}

/// Capability of anything with an open/cleaning lifecycle.
///
/// Both transitions are unconditional and idempotent.
pub trait Cleanable {
    /// Closes the zone for cleaning.
    fn prepare_zone(&mut self);
    /// Reopens the zone.
    fn clean_zone(&mut self);
}

impl<Z: Zone + ?Sized> Cleanable for Z {
    fn prepare_zone(&mut self) {
        self.set_status(ZoneStatus::Cleaning);
    }

    fn clean_zone(&mut self) {
        self.set_status(ZoneStatus::Open);
    }
}

/// Builds zones and guarantees their identifiers are never reused.
///
/// The identifier check spans all variants: a yoga zone cannot take the id of a
/// gym zone built earlier, even if that gym zone is long gone.
#[derive(Debug, Default)]
pub struct ZoneFactory {
    registry: IdentifierRegistry,
}

impl ZoneFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gym(
        &mut self,
        id: &str,
        capacity: u32,
        status: ZoneStatus,
        machines: u32,
        ventilation: bool,
    ) -> FitnessResult<Shared<GymZone>> {
        self.ensure_unclaimed(id)?;
        let site = ZoneSite::new(id, ZoneType::Gym, capacity, status)?;
        self.register(GymZone::new(site, machines, ventilation))
    }

    pub fn yoga(
        &mut self,
        id: &str,
        capacity: u32,
        status: ZoneStatus,
        floor_area: f64,
        mat_material: &str,
    ) -> FitnessResult<Shared<YogaZone>> {
        self.ensure_unclaimed(id)?;
        let site = ZoneSite::new(id, ZoneType::Yoga, capacity, status)?;
        self.register(YogaZone::new(site, floor_area, mat_material)?)
    }

    pub fn pool(
        &mut self,
        id: &str,
        capacity: u32,
        status: ZoneStatus,
        length: f64,
        depth: f64,
    ) -> FitnessResult<Shared<PoolZone>> {
        self.ensure_unclaimed(id)?;
        let site = ZoneSite::new(id, ZoneType::Pool, capacity, status)?;
        self.register(PoolZone::new(site, length, depth)?)
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    fn ensure_unclaimed(&self, id: &str) -> FitnessResult<()> {
        if self.registry.is_claimed(id) {
            return Err(FitnessError::DuplicateZoneId(id.to_string()));
        }
        Ok(())
    }

    // The id is only claimed once the zone passed validation.
    fn register<Z: Zone>(&mut self, zone: Z) -> FitnessResult<Shared<Z>> {
        if !self.registry.claim(zone.id()) {
            return Err(FitnessError::DuplicateZoneId(zone.id().to_string()));
        }
        debug!("Built {} zone {}", zone.zone_type(), zone.id());
        Ok(Rc::new(RefCell::new(zone)))
    }
}

fn validate_capacity(zone: &str, capacity: u32) -> FitnessResult<u32> {
    if capacity == 0 {
        return Err(FitnessError::InvalidCapacity(zone.to_string()));
    }
    Ok(capacity)
}

/// Accepts finite, strictly positive measurements (metres, square metres).
pub(crate) fn validate_measurement(zone: &str, field: &'static str, value: f64) -> FitnessResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FitnessError::InvalidMeasurement {
            zone: zone.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
