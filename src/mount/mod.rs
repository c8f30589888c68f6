//! Bind-mount planning: host path in, container-visible path out.
//!
//! Everything here is pure. Paths are made absolute lexically against a
//! caller-supplied working directory and the filesystem is never consulted.

mod path;
mod types;

pub use path::absolutize;
pub use types::{AccessMode, MountSpec};
