// src/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a worker count in the inclusive range [0, 512]; `0` means one per CPU.
///
/// # Errors
/// Returns an error if the input is not a number or exceeds 512.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, Some(512))
}

/// Parse a file extension given without its leading dot.
///
/// # Errors
/// Returns an error for an empty value or one containing a path separator.
pub fn parse_extension(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("extension must not be empty".to_string());
    }
    if s.contains(['/', std::path::MAIN_SEPARATOR]) {
        return Err(format!("extension '{s}' must not contain a path separator"));
    }
    Ok(s.to_string())
}

/// Parse a non-empty marker substring.
///
/// # Errors
/// Returns an error if the value is empty.
pub fn parse_marker(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("marker must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
