//! Run use case: parameter validation, bounded dispatch, and report assembly.
mod dispatch;
mod ports;
mod run;


pub use dispatch::{DispatchOutput, dispatch};
pub use ports::RunRepository;
pub use run::{RunCommand, RunPhase, execute};
