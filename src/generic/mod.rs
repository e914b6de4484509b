//! Generic structures, not specific to the grid world.

pub mod minimal_pcg;
