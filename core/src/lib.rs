//! # gymnet core
//!
//! In-memory model of a fitness-center network and the rules that govern it.
//!
//! ## Layout
//! * **[`registry`]**: identifier registries that never recycle a claimed id.
//! * **[`zone`]**: the [`zone::Zone`] abstraction, its gym/yoga/pool variants and the factory building them.
//! * **[`trainer`]**: trainers and the status-gated shift check.
//! * **[`center`]**: a single center owning zones and trainers.
//! * **[`session`]**: training sessions and their scheduling registry.
//! * **[`network`]**: the aggregate of centers, session assignments and trainer placement.
//!
//! Everything here is single-threaded. Zones are handed out as [`zone::Shared`] references
//! so that the caller, a center and the network all observe the same status.

pub mod center;
pub mod network;
pub mod registry;
pub mod session;
pub mod trainer;
pub mod zone;
