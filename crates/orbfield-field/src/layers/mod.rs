//! Per-frame point placement for the two particle layers.

pub mod dust;
pub mod orb;
