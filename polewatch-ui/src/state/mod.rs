//! State Management
//!
//! Global toast state, the local-storage session and the export form rules.

pub mod export;
pub mod global;
pub mod session;

pub use export::Dataset;
pub use global::{provide_global_state, GlobalState};
