//! Session setup: configure and build a fleet.
//!
//! A session is one fleet plus the dispatch algorithm used to query it. It can
//! be held as plain values or as resources in a caller-owned `World`; building
//! a new session replaces the old one rather than merging into it.

mod build;
mod params;

pub use build::{
    build_fleet, build_fleet_with_rng, build_session, create_dispatch_algorithm, fleet_rng,
};
pub use params::FleetParams;
