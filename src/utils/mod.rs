pub mod renewal;
pub mod serial;
pub mod sim;

pub use renewal::{
    EXPIRING_SOON_WINDOW_DAYS, LifecycleStatus, add_calendar_months, classify_status,
    classify_status_str, compute_renewal_date, parse_flexible_date,
};
pub use serial::{normalize_serial, validate_serial_number};
pub use sim::{normalize_sim_number, validate_sim_number};
