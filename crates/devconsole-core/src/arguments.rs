//! Argument parsing shared by the time and strike commands
//!
//! Both families take a mode word (`add`, `subtract`, `set` and synonyms)
//! followed by either duration tokens (`1m 30s`) or a single integer count.

use crate::error::CommandError;
use regex::Regex;
use std::sync::LazyLock;

/// Duration suffixes and their length in seconds
const DURATION_UNITS: [(&str, f64); 7] = [
    ("ms", 0.001),
    ("s", 1.0),
    ("m", 60.0),
    ("h", 3_600.0),
    ("d", 86_400.0),
    ("w", 604_800.0),
    ("y", 31_536_000.0),
];

static DURATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))(ms|s|m|h|d|w|y)$").expect("valid duration regex")
});

/// How a value is adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustMode {
    Add,
    Subtract,
    Set,
}

impl AdjustMode {
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "add" | "increase" | "change" => Some(Self::Add),
            "subtract" | "decrease" | "remove" => Some(Self::Subtract),
            "set" => Some(Self::Set),
            _ => None,
        }
    }

    pub fn is_relative(self) -> bool {
        self != Self::Set
    }
}

/// Split a remainder into its mode word and the rest of the tokens
pub fn split_mode(remainder: &str) -> Result<(AdjustMode, Vec<&str>), CommandError> {
    let mut tokens = remainder.split_whitespace();
    let mode = tokens
        .next()
        .and_then(AdjustMode::parse)
        .ok_or(CommandError::Usage)?;
    Ok((mode, tokens.collect()))
}

/// Sum duration tokens to seconds, rounded to two decimals
///
/// One bad token invalidates the whole list.
pub fn parse_duration(tokens: &[&str]) -> Result<f64, CommandError> {
    if tokens.is_empty() {
        return Err(CommandError::Usage);
    }

    let mut total = 0.0;
    for token in tokens {
        total += parse_duration_token(token).ok_or_else(|| {
            CommandError::Validation("Can't change time: entered time is not valid.".to_string())
        })?;
    }
    Ok(round_2(total))
}

fn parse_duration_token(token: &str) -> Option<f64> {
    let token = token.to_lowercase();
    let captures = DURATION_TOKEN.captures(&token)?;
    let length: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str();
    DURATION_UNITS
        .iter()
        .find(|(suffix, _)| *suffix == unit)
        .map(|(_, multiplier)| length * multiplier)
}

/// Round half away from zero to two decimals
pub fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse the integer count of a strike command
pub fn parse_count(tokens: &[&str]) -> Result<i64, CommandError> {
    let token = tokens.first().ok_or(CommandError::Usage)?;
    token.parse::<i64>().map_err(|_| {
        CommandError::Validation(format!("Can't change strikes: \"{}\" is not a whole number.", token))
    })
}

/// New timer value, or `None` when the adjustment is a no-op
pub fn adjust_time(mode: AdjustMode, current: f64, amount: f64) -> Option<f64> {
    if mode.is_relative() && amount.abs() == 0.0 {
        return None;
    }
    let target = match mode {
        AdjustMode::Add => current + amount,
        AdjustMode::Subtract => current - amount,
        AdjustMode::Set => amount,
    };
    Some(round_2(target.max(0.0)))
}

/// New count, or `None` when the adjustment is a no-op
///
/// `set` floors at zero; a decrease is capped at the current value.
pub fn adjust_count(mode: AdjustMode, current: u32, amount: i64) -> Option<u32> {
    if mode.is_relative() && amount == 0 {
        return None;
    }
    let target = match mode {
        AdjustMode::Add => i64::from(current).saturating_add(amount),
        AdjustMode::Subtract => i64::from(current).saturating_sub(amount),
        AdjustMode::Set => amount,
    };
    Some(target.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Human readable duration, e.g. `1h 2m 3.5s`
pub fn format_time(seconds: f64) -> String {
    let total = round_2(seconds.abs());
    let hours = (total / 3_600.0).floor();
    let minutes = ((total - hours * 3_600.0) / 60.0).floor();
    let secs = round_2(total - hours * 3_600.0 - minutes * 60.0);

    let mut parts = Vec::new();
    if hours > 0.0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0.0 {
        parts.push(format!("{}m", minutes));
    }
    if secs > 0.0 || parts.is_empty() {
        let formatted = format!("{:.2}", secs);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        parts.push(format!("{}s", trimmed));
    }
    parts.join(" ")
}

/// `1 strike` / `3 strikes`
pub fn plural_strikes(count: u64) -> String {
    if count == 1 {
        "1 strike".to_string()
    } else {
        format!("{} strikes", count)
    }
}
