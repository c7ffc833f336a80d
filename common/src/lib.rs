//! Shared vocabulary of the `gymnet` workspace.
//!
//! * **[`fitness`]**: zone types, zone statuses and trainer specializations.
//! * **[`error`]**: the [`error::FitnessError`] returned by every domain operation.
//! * **[`policies`]**: the house rules posted in every center.
//! * **[`config`]**: run configuration built by the CLI.

pub mod config;
pub mod error;
pub mod fitness;
pub mod policies;
