pub mod appointments;
pub mod export;
pub mod health;
pub mod settings;
pub mod slots;
