pub mod errors;
pub mod rotation;
pub mod skill;
pub mod validation;

pub use errors::*;
pub use rotation::*;
pub use skill::*;
pub use validation::*;
