pub mod fleets;
pub mod world;
