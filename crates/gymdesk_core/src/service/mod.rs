//! Use-case layer driven by the web screens.

pub mod desk;

pub use desk::{ActionOutcome, DeskCounts, GymDesk};
