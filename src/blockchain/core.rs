// core.rs splits responsibilities into submodules for easier maintenance.
pub mod canonical;
pub mod chain;
pub mod shared;
pub mod validation;

pub use canonical::*;
pub use chain::*;
pub use shared::*;
pub use validation::*;
