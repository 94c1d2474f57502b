pub mod clients;
pub mod devices;
pub mod sim_cards;

pub use clients as client_entity;
pub use devices as device_entity;
pub use sim_cards as sim_card_entity;

pub use devices::Connectivity;
pub use sim_cards::{SimProvider, SimStatus};
