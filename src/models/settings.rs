use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessHours {
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
}

impl Default for BusinessHours {
    fn default() -> Self {
        BusinessHours {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
            break_start: Some("12:00".to_string()),
            break_end: Some("13:00".to_string()),
        }
    }
}

impl BusinessHours {
    pub fn start_hour(&self) -> Option<u32> {
        hour_component(&self.start)
    }

    pub fn end_hour(&self) -> Option<u32> {
        hour_component(&self.end)
    }

    // The break window applies only when both bounds carry a parseable hour.
    pub fn break_hours(&self) -> Option<(u32, u32)> {
        let start = hour_component(self.break_start.as_deref()?)?;
        let end = hour_component(self.break_end.as_deref()?)?;
        Some((start, end))
    }
}

// Hour-resolution: "09:30" contributes hour 9, the minutes are dropped.
fn hour_component(time: &str) -> Option<u32> {
    time.split(':').next()?.parse().ok()
}

// Weekday indices follow the 0=Sunday .. 6=Saturday convention and are
// stored as strings, matching the persisted column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct OffDays(pub Vec<String>);

impl OffDays {
    pub fn weekends() -> Self {
        OffDays(vec!["0".to_string(), "6".to_string()])
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        let index = date.weekday().num_days_from_sunday().to_string();
        self.0.iter().any(|day| *day == index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessSettings {
    pub business_hours: BusinessHours,
    pub off_days: OffDays,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        BusinessSettings {
            business_hours: BusinessHours::default(),
            off_days: OffDays::weekends(),
        }
    }
}
