use chrono::{DateTime, Datelike, Local, TimeZone};

/// Modification time of an entry, displayed in the local time zone.
pub struct ModifiedDate {
    pub seconds_since_epoch: i64,
}

impl ModifiedDate {
    pub fn new(seconds_since_epoch: i64) -> ModifiedDate {
        ModifiedDate {
            seconds_since_epoch,
        }
    }
}

impl std::fmt::Display for ModifiedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match Local.timestamp_opt(self.seconds_since_epoch, 0).earliest() {
            Some(datetime) => write!(f, "{}", format_date(&datetime)),
            None => write!(f, "-"),
        }
    }
}

/// `06th Oct 2026 14h05m`
pub fn format_date<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let day = datetime.day();
    format!(
        "{:02}{} {}",
        day,
        ordinal_suffix(day),
        datetime.format("%b %Y %Hh%Mm")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
