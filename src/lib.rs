//! Launch AlphaFold inside a Singularity container.
//!
//! Host paths are turned into bind mounts under a fixed root inside the
//! container, and the entry point's flags are rewritten to the
//! container-visible paths.

pub mod config;
pub mod container;
pub mod databases;
pub mod mount;
pub mod plan;
