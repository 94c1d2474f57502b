pub mod client_service;
pub mod dashboard_service;
pub mod dispatch_service;
pub mod sim_service;

pub use client_service::*;
pub use dashboard_service::*;
pub use dispatch_service::*;
pub use sim_service::*;
