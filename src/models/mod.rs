pub mod client;
pub mod common;
pub mod dashboard;
pub mod device;
pub mod pagination;
pub mod sim_card;

pub use client::*;
pub use common::*;
pub use dashboard::*;
pub use device::*;
pub use pagination::*;
pub use sim_card::*;
