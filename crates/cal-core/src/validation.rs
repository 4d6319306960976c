use crate::error::{EventError, UserError};
use crate::types::{PersonInput, RegisterUserInput};
use chrono::{NaiveDateTime, Timelike};

const TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses the `datetime-local` style value events are entered with.
pub fn parse_event_time(value: &str) -> Result<NaiveDateTime, EventError> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| EventError::InvalidTime {
            value: value.to_string(),
        })
}

/// Drops seconds and sub-second digits; event times are kept to the minute.
pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|time| time.with_nanosecond(0))
        .unwrap_or(time)
}

pub fn validate_person(input: &PersonInput) -> Result<(), String> {
    require_text("name", &input.name, 40)?;
    require_text("last_name", &input.last_name, 40)?;
    validate_email(&input.email)?;
    require_text("phone", &input.phone, 20)?;
    if !input
        .phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(format!("phone contains invalid characters: {}", input.phone));
    }
    Ok(())
}

pub fn validate_subject_name(name: &str) -> Result<(), String> {
    require_text("subject", name, 40)
}

pub fn validate_registration(input: &RegisterUserInput) -> Result<(), UserError> {
    require_text("username", &input.username, 20)
        .and_then(|()| validate_email(&input.email))
        .map_err(|message| UserError::InvalidInput { message })?;
    if input.password.chars().count() < 8 {
        return Err(UserError::InvalidInput {
            message: "password must be at least 8 characters".to_string(),
        });
    }
    Ok(())
}

fn require_text(field: &str, value: &str, max: usize) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if trimmed.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), String> {
    require_text("email", value, 120)?;
    let Some((local, domain)) = value.trim().split_once('@') else {
        return Err(format!("invalid email: {value}"));
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(format!("invalid email: {value}"));
    }
    Ok(())
}
