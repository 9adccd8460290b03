//! Simulation core: tuning constants, the adventure state machine, and the
//! session object that ties character, adventure, and log together.

pub mod adventure;
pub mod constants;
pub mod session;
