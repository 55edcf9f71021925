pub mod appointment;
pub mod settings;

pub use appointment::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};
pub use settings::{BusinessHours, BusinessSettings, OffDays};
