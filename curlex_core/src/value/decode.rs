use std::time::Duration;
use thiserror::Error;

use crate::value::model::*;

const NANOS_DIGITS: usize = 9;
const KIBI: u64 = 1024;

/// A raw value does not have the shape its option requires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not an integer.
    #[error("'{0}' is not an integer.")]
    Integer(String),
    /// Not a number of seconds.
    #[error("'{0}' is not a number of seconds (ex: '2.5').")]
    Duration(String),
    /// A number of seconds written with a decimal comma.
    #[error("'{0}' uses a decimal comma; use '.' instead.")]
    DecimalComma(String),
    /// Not a size.
    #[error("'{0}' is not a size (ex: '512', '1k', '10M').")]
    ByteSize(String),
    /// A size too large to represent.
    #[error("'{0}' is too large.")]
    ByteSizeOverflow(String),
    /// Not a host with an optional port.
    #[error("'{0}' is not a host[:port].")]
    HostPort(String),
    /// Not a port number.
    #[error("'{0}' is not a valid port.")]
    Port(String),
    /// Not a range.
    #[error("'{0}' is not a range (ex: '0-499', '-500', '9500-').")]
    Range(String),
    /// A range ending before it starts.
    #[error("'{0}' ends before it starts.")]
    InvertedRange(String),
    /// Not a rate.
    #[error("'{0}' is not a rate (ex: '3/h', '2/s').")]
    Rate(String),
    /// A file marker without a file name.
    #[error("'{0}' does not name a file.")]
    MissingFile(String),
    /// A list with too few or too many fields.
    #[error("'{value}' has {found} field(s), expected {expected}.")]
    FieldCount {
        /// The raw value.
        value: String,
        /// How many fields it holds.
        found: usize,
        /// How many are allowed.
        expected: String,
    },
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn unsigned(text: &str) -> Option<u64> {
    if is_digits(text) {
        text.parse().ok()
    } else {
        None
    }
}

pub(crate) fn text(raw: &str) -> Result<TypedValue, DecodeError> {
    Ok(TypedValue::Text(raw.to_string()))
}

pub(crate) fn integer(raw: &str) -> Result<TypedValue, DecodeError> {
    let digits = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);

    if !is_digits(digits) {
        return Err(DecodeError::Integer(raw.to_string()));
    }

    raw.parse()
        .map(TypedValue::Integer)
        .map_err(|_| DecodeError::Integer(raw.to_string()))
}

pub(crate) fn duration(raw: &str) -> Result<TypedValue, DecodeError> {
    if raw.contains(',') {
        return Err(DecodeError::DecimalComma(raw.to_string()));
    }

    let invalid = || DecodeError::Duration(raw.to_string());
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }

    let seconds = if whole.is_empty() {
        0
    } else {
        unsigned(whole).ok_or_else(invalid)?
    };

    let nanos = if fraction.is_empty() {
        0
    } else if is_digits(fraction) {
        let mut padded: String = fraction.chars().take(NANOS_DIGITS).collect();
        while padded.len() < NANOS_DIGITS {
            padded.push('0');
        }

        padded.parse().map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };

    Ok(TypedValue::Duration(Duration::new(seconds, nanos)))
}

pub(crate) fn byte_size(raw: &str) -> Result<TypedValue, DecodeError> {
    let (mantissa, multiplier) = match raw.chars().last() {
        Some('k' | 'K') => (&raw[..raw.len() - 1], KIBI),
        Some('m' | 'M') => (&raw[..raw.len() - 1], KIBI * KIBI),
        Some('g' | 'G') => (&raw[..raw.len() - 1], KIBI * KIBI * KIBI),
        _ => (raw, 1),
    };

    if !is_digits(mantissa) {
        return Err(DecodeError::ByteSize(raw.to_string()));
    }

    mantissa
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
        .map(TypedValue::ByteSize)
        .ok_or_else(|| DecodeError::ByteSizeOverflow(raw.to_string()))
}

pub(crate) fn host_port(raw: &str) -> Result<TypedValue, DecodeError> {
    let invalid = || DecodeError::HostPort(raw.to_string());

    let (host, port) = match raw.strip_prefix('[') {
        Some(bracketed) => {
            let (host, rest) = bracketed.split_once(']').ok_or_else(invalid)?;

            if rest.is_empty() {
                (host, None)
            } else {
                (host, Some(rest.strip_prefix(':').ok_or_else(invalid)?))
            }
        }
        None => match raw.rsplit_once(':') {
            // An unbracketed IPv6 literal cannot be told apart from its port.
            Some((host, _)) if host.contains(':') => return Err(invalid()),
            Some((host, port)) => (host, Some(port)),
            None => (raw, None),
        },
    };

    if host.is_empty() {
        return Err(invalid());
    }

    let port = match port {
        None | Some("") => None,
        Some(port) => Some(
            unsigned(port)
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| DecodeError::Port(raw.to_string()))?,
        ),
    };

    Ok(TypedValue::HostPort(HostPort {
        host: host.to_string(),
        port,
    }))
}

pub(crate) fn range(raw: &str) -> Result<TypedValue, DecodeError> {
    let invalid = || DecodeError::Range(raw.to_string());
    let (start, end) = raw.split_once('-').ok_or_else(invalid)?;

    let bound = |text: &str| -> Result<Option<u64>, DecodeError> {
        if text.is_empty() {
            Ok(None)
        } else {
            unsigned(text).map(Some).ok_or_else(invalid)
        }
    };

    match (bound(start)?, bound(end)?) {
        (None, None) => Err(invalid()),
        (Some(start), Some(end)) if start > end => {
            Err(DecodeError::InvertedRange(raw.to_string()))
        }
        (start, end) => Ok(TypedValue::Range(Range { start, end })),
    }
}

pub(crate) fn rate(raw: &str) -> Result<TypedValue, DecodeError> {
    let invalid = || DecodeError::Rate(raw.to_string());

    let (count, unit) = match raw.split_once('/') {
        Some((count, unit)) => {
            let unit = match unit {
                "s" => TimeUnit::Second,
                "m" => TimeUnit::Minute,
                "h" => TimeUnit::Hour,
                "d" => TimeUnit::Day,
                _ => return Err(invalid()),
            };
            (count, unit)
        }
        None => (raw, TimeUnit::Hour),
    };

    let count = unsigned(count).ok_or_else(invalid)?;
    Ok(TypedValue::Rate(Rate { count, unit }))
}

pub(crate) fn key_value(raw: &str) -> Result<TypedValue, DecodeError> {
    let missing_file = || DecodeError::MissingFile(raw.to_string());
    let at = raw.find('@');

    let key_value = match raw.find('=') {
        Some(equals) if at.map_or(true, |at| equals < at) => {
            let name = &raw[..equals];
            let content = &raw[equals + 1..];
            let file = content
                .strip_prefix('@')
                .or_else(|| content.strip_prefix('<'));

            let (content, source) = match file {
                Some("") => return Err(missing_file()),
                Some(file) => (file, ContentSource::File),
                None => (content, ContentSource::Inline),
            };

            KeyValue {
                name: (!name.is_empty()).then(|| name.to_string()),
                content: content.to_string(),
                source,
            }
        }
        _ => match at {
            Some(at) => {
                let (name, file) = (&raw[..at], &raw[at + 1..]);

                if file.is_empty() {
                    return Err(missing_file());
                }

                KeyValue {
                    name: (!name.is_empty()).then(|| name.to_string()),
                    content: file.to_string(),
                    source: ContentSource::File,
                }
            }
            None => KeyValue {
                name: None,
                content: raw.to_string(),
                source: ContentSource::Inline,
            },
        },
    };

    Ok(TypedValue::KeyValue(key_value))
}

/// Split on `:`, except inside `[..]` (IPv6 literals).
fn colon_fields(raw: &str) -> Vec<&str> {
    let mut fields = Vec::default();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in raw.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                fields.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    fields.push(&raw[start..]);
    fields
}

fn expected_count(min: usize, max: Option<usize>) -> String {
    match max {
        Some(max) if max == min => format!("{min}"),
        Some(max) => format!("{min} to {max}"),
        None => format!("at least {min}"),
    }
}

pub(crate) fn colon_list(
    raw: &str,
    min: usize,
    max: Option<usize>,
) -> Result<TypedValue, DecodeError> {
    let fields = colon_fields(raw);
    let found = fields.len();

    if found < min || max.map_or(false, |max| found > max) {
        return Err(DecodeError::FieldCount {
            value: raw.to_string(),
            found,
            expected: expected_count(min, max),
        });
    }

    Ok(TypedValue::List(
        fields
            .into_iter()
            .map(|field| TypedValue::Text(field.to_string()))
            .collect(),
    ))
}

pub(crate) fn comma_list(raw: &str) -> Result<TypedValue, DecodeError> {
    Ok(TypedValue::List(
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| TypedValue::Text(item.to_string()))
            .collect(),
    ))
}
