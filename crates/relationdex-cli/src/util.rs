use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use relationdex_core::time::{format_timestamp_date, now_utc, parse_timestamp};
use relationdex_core::Contact;
use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

pub const STDIN_MARKER: &str = "-";

/// Reads one contact document from a file, or from stdin for `-`.
pub fn read_contact(input: &str) -> Result<Contact> {
    let raw = if input == STDIN_MARKER {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .with_context(|| "read contact from stdin")?;
        buffer
    } else {
        let path = Path::new(input);
        match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(not_found(format!("contact file {}", path.display())));
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read contact file {}", path.display()))
            }
        }
    };

    if raw.trim().is_empty() {
        return Err(invalid_input("contact document is empty"));
    }
    serde_json::from_str(&raw).map_err(|err| invalid_input(format!("contact document: {err}")))
}

pub fn timestamp_or_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(value) => Ok(parse_timestamp(value)?),
        None => Ok(now_utc()),
    }
}

pub fn format_last(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => format_timestamp_date(dt),
        None => "never".to_string(),
    }
}
