pub mod commands;
mod types;

pub use commands::{OUTPUT_MOUNT, check_unique_basenames, fasta_mount_name};
pub use types::{InvocationPlan, Model, PlanInput, Preset};
