use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::FormErrors;

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i32,
    pub venue_id: i32,
    /// Start time in UTC.
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// Validates field formats. Whether the artist and venue exist is checked by the
    /// show service, which reports missing references as field errors too.
    pub fn validate(&self) -> Result<ShowInput, FormErrors> {
        let mut errors = FormErrors::default();

        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = match parse_start_time(&self.start_time) {
            Some(start_time) => Some(start_time),
            None if self.start_time.trim().is_empty() => {
                errors.push("start_time", "This field is required.");
                None
            }
            None => {
                errors.push("start_time", "Not a valid datetime value.");
                None
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowInput {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, "This field is required.");
        return None;
    }

    match value.parse::<i32>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(field, "Not a valid choice.");
            None
        }
    }
}

/// Parses a submitted start time, converting offset-qualified values to UTC.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_utc());
    }

    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
