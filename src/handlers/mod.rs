pub mod client;
pub mod dashboard;
pub mod device;
pub mod sim_card;

pub use client::client_config;
pub use dashboard::dashboard_config;
pub use device::dispatch_config;
pub use sim_card::sim_config;
