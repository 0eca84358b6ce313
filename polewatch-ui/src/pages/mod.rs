//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod export;
pub mod signin;

pub use dashboard::Dashboard;
pub use export::DataExport;
pub use signin::SignIn;
