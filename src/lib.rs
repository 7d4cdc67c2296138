pub mod descriptor;
pub mod registry;

pub use descriptor::*;
pub use registry::*;
