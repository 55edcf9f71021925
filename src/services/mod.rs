pub mod appointments;
pub mod availability;
pub mod export;
pub mod settings;
