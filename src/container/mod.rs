// Container runtime invocation: blocking spawn, exit status propagation.

pub mod run;
pub mod types;

pub use run::run;
pub use types::{ContainerCommand, ContainerResult};
