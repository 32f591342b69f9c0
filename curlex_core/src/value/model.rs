use std::time::Duration;

use crate::model::OptionId;

/// The typed value of a parsed option.
///
/// The variant produced for an option is fixed by its identity (see [`ValueShape`](crate::ValueShape)), never by the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    /// A bare flag; no payload.
    Flag,
    /// Plain text.
    Text(String),
    /// A signed integer.
    Integer(i64),
    /// A (possibly fractional) number of seconds.
    Duration(Duration),
    /// A number of bytes.
    ByteSize(u64),
    /// A host with an optional port.
    HostPort(HostPort),
    /// A name/content pair.
    KeyValue(KeyValue),
    /// A numeric range with optionally absent bounds.
    Range(Range),
    /// A count per time unit.
    Rate(Rate),
    /// Several separated fields.
    List(Vec<TypedValue>),
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedValue::Flag => Ok(()),
            TypedValue::Text(text) => write!(f, "{text}"),
            TypedValue::Integer(value) => write!(f, "{value}"),
            TypedValue::Duration(duration) => write!(f, "{}s", duration.as_secs_f64()),
            TypedValue::ByteSize(bytes) => write!(f, "{bytes}B"),
            TypedValue::HostPort(host_port) => write!(f, "{host_port}"),
            TypedValue::KeyValue(key_value) => write!(f, "{key_value}"),
            TypedValue::Range(range) => write!(f, "{range}"),
            TypedValue::Rate(rate) => write!(f, "{rate}"),
            TypedValue::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                Ok(())
            }
        }
    }
}

/// A host and optional port; an absent port means "use the default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    /// The host name or address (IPv6 literals without their brackets).
    pub host: String,
    /// The port, if specified.
    pub port: Option<u16>,
}

impl std::fmt::Display for HostPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bracket = self.host.contains(':');

        match (bracket, self.port) {
            (true, Some(port)) => write!(f, "[{}]:{port}", self.host),
            (true, None) => write!(f, "[{}]", self.host),
            (false, Some(port)) => write!(f, "{}:{port}", self.host),
            (false, None) => write!(f, "{}", self.host),
        }
    }
}

/// Where the content of a [`KeyValue`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// The content is the literal text.
    Inline,
    /// The content names a file to read.
    File,
}

/// A `name=content` pair, following curl's `--form` and `--data-urlencode` conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// The name, if one was given.
    pub name: Option<String>,
    /// The content, or the file name when the source is [`ContentSource::File`].
    pub content: String,
    /// Where the content comes from.
    pub source: ContentSource,
}

impl std::fmt::Display for KeyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.name, self.source) {
            (Some(name), ContentSource::Inline) => write!(f, "{name}={}", self.content),
            (Some(name), ContentSource::File) => write!(f, "{name}=@{}", self.content),
            (None, ContentSource::Inline) => write!(f, "{}", self.content),
            (None, ContentSource::File) => write!(f, "@{}", self.content),
        }
    }
}

/// A numeric range; at least one bound is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The first included value; absent means "the last `end` values".
    pub start: Option<u64>,
    /// The last included value; absent means "from `start` onward".
    pub end: Option<u64>,
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }

        write!(f, "-")?;

        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }

        Ok(())
    }
}

/// The unit of a [`Rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Per second (`s`).
    Second,
    /// Per minute (`m`).
    Minute,
    /// Per hour (`h`).
    Hour,
    /// Per day (`d`).
    Day,
}

impl TimeUnit {
    /// The length of this unit.
    pub fn duration(&self) -> Duration {
        match self {
            TimeUnit::Second => Duration::from_secs(1),
            TimeUnit::Minute => Duration::from_secs(60),
            TimeUnit::Hour => Duration::from_secs(60 * 60),
            TimeUnit::Day => Duration::from_secs(24 * 60 * 60),
        }
    }

    fn symbol(&self) -> char {
        match self {
            TimeUnit::Second => 's',
            TimeUnit::Minute => 'm',
            TimeUnit::Hour => 'h',
            TimeUnit::Day => 'd',
        }
    }
}

/// A count per time unit, ex: `3/h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate {
    /// How many.
    pub count: u64,
    /// Per what.
    pub unit: TimeUnit,
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.count, self.unit.symbol())
    }
}

/// One occurrence of an option on the command line.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    id: OptionId,
    value: TypedValue,
    alias: String,
    raw: Option<String>,
}

impl ParsedOption {
    pub(crate) fn new(
        id: OptionId,
        value: TypedValue,
        alias: impl Into<String>,
        raw: Option<String>,
    ) -> Self {
        Self {
            id,
            value,
            alias: alias.into(),
            raw,
        }
    }

    /// The canonical identity of the option.
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    /// The typed value.
    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    /// The alias spelling used on the command line.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The value text as written (after unquoting), if the option took one.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}
