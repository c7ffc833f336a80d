//! Scenarios spanning zones, centers, sessions and the network.

mod identifiers;
mod scenarios;
mod util;
