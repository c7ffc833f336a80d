//! # Fitness Vocabulary
//!
//! Fixed enumerations shared by the domain and the terminal layer.
//!
//! * [`zone::ZoneType`]: what a zone is built for.
//! * [`zone::ZoneStatus`]: whether a zone can be used right now.
//! * [`trainer::Specialization`]: what a trainer is qualified to coach.

pub mod trainer;
pub mod zone;
