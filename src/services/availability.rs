use chrono::{Local, NaiveDate};

use crate::models::{Appointment, AppointmentStatus, BusinessHours, OffDays};

pub fn available_slots(
    date: NaiveDate,
    hours: &BusinessHours,
    off_days: &OffDays,
    appointments: &[Appointment],
) -> Vec<String> {
    available_slots_as_of(Local::now().date_naive(), date, hours, off_days, appointments)
}

fn available_slots_as_of(
    today: NaiveDate,
    date: NaiveDate,
    hours: &BusinessHours,
    off_days: &OffDays,
    appointments: &[Appointment],
) -> Vec<String> {
    // Same-day booking is closed; bookable days start tomorrow.
    if date <= today {
        return Vec::new();
    }
    if off_days.contains_date(date) {
        return Vec::new();
    }
    let (start, end) = match (hours.start_hour(), hours.end_hour()) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };
    let break_hours = hours.break_hours();

    let mut slots = Vec::new();
    for hour in start..end {
        if let Some((break_start, break_end)) = break_hours {
            if hour >= break_start && hour < break_end {
                continue;
            }
        }
        let slot = format!("{hour:02}:00");
        let taken = appointments.iter().any(|appointment| {
            appointment.date == date
                && appointment.time == slot
                && appointment.status != AppointmentStatus::Cancelled
        });
        if !taken {
            slots.push(slot);
        }
    }
    slots
}
