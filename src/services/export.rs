use crate::models::Appointment;

const CSV_HEADER: &str = "Name,Email,Phone,Date,Time,Service,Status";

// Plain comma-joined CSV, one appointment per line. Field values are written
// as-is; quoting is left to whatever opens the file.
pub fn appointments_csv(appointments: &[Appointment]) -> String {
    let rows: Vec<String> = appointments
        .iter()
        .map(|appointment| {
            format!(
                "{},{},{},{},{},{},{}",
                appointment.customer_name,
                appointment.customer_email,
                appointment.customer_phone,
                appointment.date.format("%Y-%m-%d"),
                appointment.time,
                appointment.service,
                appointment.status.as_str()
            )
        })
        .collect();
    format!("{CSV_HEADER}\n{}", rows.join("\n"))
}
