use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::OptionCatalog;
use crate::model::OptionId;
use crate::parser::ConfigError;
use crate::value::decode::{self, DecodeError};
use crate::value::model::{ParsedOption, TypedValue};

/// The shape an option's argument decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueShape {
    /// Kept as written.
    #[default]
    Text,
    /// A signed integer.
    Integer,
    /// Fractional seconds.
    Duration,
    /// Bytes with an optional `k`/`M`/`G` suffix.
    ByteSize,
    /// `host[:port]`.
    HostPort,
    /// `name=content`, possibly file-sourced.
    KeyValue,
    /// `start-end`, `-end` or `start-`.
    Range,
    /// `N[/unit]`.
    Rate,
    /// `:` separated fields (brackets protect IPv6 literals).
    ColonList {
        /// The fewest fields accepted.
        min: usize,
        /// The most fields accepted, if bounded.
        max: Option<usize>,
    },
    /// `,` separated items; empty items are dropped.
    CommaList,
}

impl ValueShape {
    /// Decode a raw value into this shape.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::{TypedValue, ValueShape};
    ///
    /// assert_eq!(ValueShape::ByteSize.decode("10M").unwrap(), TypedValue::ByteSize(10_485_760));
    /// assert!(ValueShape::Integer.decode("ten").is_err());
    /// ```
    pub fn decode(&self, raw: &str) -> Result<TypedValue, DecodeError> {
        match self {
            ValueShape::Text => decode::text(raw),
            ValueShape::Integer => decode::integer(raw),
            ValueShape::Duration => decode::duration(raw),
            ValueShape::ByteSize => decode::byte_size(raw),
            ValueShape::HostPort => decode::host_port(raw),
            ValueShape::KeyValue => decode::key_value(raw),
            ValueShape::Range => decode::range(raw),
            ValueShape::Rate => decode::rate(raw),
            ValueShape::ColonList { min, max } => decode::colon_list(raw, *min, *max),
            ValueShape::CommaList => decode::comma_list(raw),
        }
    }
}

/// The registry of value shapes, keyed by canonical identity.
///
/// Identities without a registration decode as [`ValueShape::Text`].
#[derive(Debug, Default)]
pub struct ValueDecoders {
    shapes: HashMap<OptionId, ValueShape>,
}

impl ValueDecoders {
    /// Build the registry, rejecting duplicate or unsatisfiable registrations.
    pub fn new(
        registrations: impl IntoIterator<Item = (OptionId, ValueShape)>,
    ) -> Result<Self, ConfigError> {
        let mut shapes = HashMap::default();

        for (id, shape) in registrations.into_iter() {
            if let ValueShape::ColonList { min, max } = shape {
                if min == 0 || max.map_or(false, |max| max < min) {
                    return Err(ConfigError(format!(
                        "Option '{id}' cannot accept between {min} and {max:?} fields."
                    )));
                }
            }

            if shapes.insert(id.clone(), shape).is_some() {
                return Err(ConfigError(format!(
                    "Cannot register the value shape of '{id}' twice."
                )));
            }
        }

        Ok(Self { shapes })
    }

    /// The shape registered for an option.
    pub fn shape(&self, id: &OptionId) -> ValueShape {
        self.shapes.get(id).copied().unwrap_or_default()
    }

    /// Every registration, in no particular order.
    pub fn registrations(&self) -> impl Iterator<Item = (&OptionId, &ValueShape)> {
        self.shapes.iter()
    }

    /// The number of registrations.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// An option occurrence could not be turned into a [`ParsedOption`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// The identity is not in the catalog.
    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),
    /// The option takes an argument, but none was given.
    #[error("Option '{0}' requires an argument.")]
    MissingArgument(String),
    /// The argument does not decode into the option's shape.
    #[error("Invalid argument for option '{alias}': {reason}")]
    InvalidArgument {
        /// The alias spelling used.
        alias: String,
        /// Why decoding failed.
        reason: DecodeError,
    },
}

/// Makes typed options from an identity and its raw argument.
pub struct OptionFactory<'c> {
    catalog: &'c dyn OptionCatalog,
    decoders: &'c ValueDecoders,
}

impl<'c> OptionFactory<'c> {
    /// Create a factory over the catalog and value shape registry.
    pub fn new(catalog: &'c dyn OptionCatalog, decoders: &'c ValueDecoders) -> Self {
        Self { catalog, decoders }
    }

    /// Make the typed option for one occurrence.
    ///
    /// A bare flag ignores `raw` (the assembler never consumes a value for it).
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::*;
    ///
    /// let catalog = StaticCatalog::new([
    ///     OptionDefinition::new("retry", ["--retry"]).argument("num"),
    /// ])
    /// .unwrap();
    /// let decoders = ValueDecoders::new([(OptionId::from("retry"), ValueShape::Integer)]).unwrap();
    /// let factory = OptionFactory::new(&catalog, &decoders);
    ///
    /// let option = factory.make_option(&OptionId::from("retry"), "--retry", Some("3")).unwrap();
    /// assert_eq!(option.value(), &TypedValue::Integer(3));
    /// assert_eq!(
    ///     factory.make_option(&OptionId::from("retry"), "--retry", None),
    ///     Err(FactoryError::MissingArgument("--retry".to_string())),
    /// );
    /// assert_eq!(
    ///     factory.make_option(&OptionId::from("retries"), "--retries", Some("3")),
    ///     Err(FactoryError::UnknownOption("--retries".to_string())),
    /// );
    /// ```
    pub fn make_option(
        &self,
        id: &OptionId,
        alias: &str,
        raw: Option<&str>,
    ) -> Result<ParsedOption, FactoryError> {
        let definition = self
            .catalog
            .lookup(id)
            .ok_or_else(|| FactoryError::UnknownOption(alias.to_string()))?;

        if !definition.takes_argument() {
            return Ok(ParsedOption::new(id.clone(), TypedValue::Flag, alias, None));
        }

        let raw = raw.ok_or_else(|| FactoryError::MissingArgument(alias.to_string()))?;
        let value = self
            .decoders
            .shape(id)
            .decode(raw)
            .map_err(|reason| FactoryError::InvalidArgument {
                alias: alias.to_string(),
                reason,
            })?;

        Ok(ParsedOption::new(
            id.clone(),
            value,
            alias,
            Some(raw.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{assert_contains, catalog, decoders};
    use crate::value::model::*;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    #[case("verbose", ValueShape::Text)]
    #[case("header", ValueShape::Text)]
    #[case("max-time", ValueShape::Duration)]
    #[case("connect-to", ValueShape::ColonList { min: 4, max: Some(4) })]
    fn value_decoders_shape(#[case] id: &'static str, #[case] expected: ValueShape) {
        assert_eq!(decoders().shape(&OptionId::from(id)), expected);
    }

    #[test]
    fn value_decoders_registrations() {
        let decoders = decoders();

        assert_eq!(decoders.registrations().count(), decoders.len());
        assert!(!decoders.is_empty());
        assert!(ValueDecoders::default().is_empty());
    }

    #[test]
    fn value_decoders_duplicate() {
        let error = ValueDecoders::new([
            (OptionId::from("retry"), ValueShape::Integer),
            (OptionId::from("retry"), ValueShape::Text),
        ])
        .unwrap_err();

        assert_contains!(error.to_string(), "'retry' twice");
    }

    #[rstest]
    #[case(0, None)]
    #[case(0, Some(2))]
    #[case(3, Some(2))]
    fn value_decoders_unsatisfiable(#[case] min: usize, #[case] max: Option<usize>) {
        let error = ValueDecoders::new([(
            OptionId::from("resolve"),
            ValueShape::ColonList { min, max },
        )])
        .unwrap_err();

        assert_contains!(error.to_string(), "'resolve' cannot accept");
    }

    #[rstest]
    #[case(ValueShape::Text, "2.5", TypedValue::Text("2.5".to_string()))]
    #[case(ValueShape::Integer, "-2", TypedValue::Integer(-2))]
    #[case(ValueShape::Duration, "2.5", TypedValue::Duration(Duration::from_millis(2500)))]
    #[case(ValueShape::ByteSize, "1k", TypedValue::ByteSize(1024))]
    #[case(ValueShape::Range, "-500", TypedValue::Range(Range { start: None, end: Some(500) }))]
    #[case(ValueShape::Rate, "2/s", TypedValue::Rate(Rate { count: 2, unit: TimeUnit::Second }))]
    #[case(ValueShape::CommaList, "a,b", TypedValue::List(vec![TypedValue::Text("a".to_string()), TypedValue::Text("b".to_string())]))]
    fn value_shape_decode(
        #[case] shape: ValueShape,
        #[case] raw: &str,
        #[case] expected: TypedValue,
    ) {
        assert_eq!(shape.decode(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("verbose", "-v")]
    #[case("location", "--location")]
    fn make_option_flag(#[case] id: &'static str, #[case] alias: &str) {
        let catalog = catalog();
        let decoders = decoders();
        let factory = OptionFactory::new(&catalog, &decoders);

        // A trailing value is not consumed by a flag.
        for raw in [None, Some("https://example.com")] {
            let option = factory.make_option(&OptionId::from(id), alias, raw).unwrap();

            assert_eq!(option.value(), &TypedValue::Flag);
            assert_eq!(option.alias(), alias);
            assert_eq!(option.raw(), None);
        }
    }

    #[rstest]
    #[case("header", "-H", "X-A: 1", TypedValue::Text("X-A: 1".to_string()))]
    #[case("max-time", "--max-time", "2.5", TypedValue::Duration(Duration::from_millis(2500)))]
    #[case("retry", "--retry", "3", TypedValue::Integer(3))]
    #[case("limit-rate", "--limit-rate", "10M", TypedValue::ByteSize(10_485_760))]
    #[case("socks5", "--socks5", "localhost:1080", TypedValue::HostPort(HostPort { host: "localhost".to_string(), port: Some(1080) }))]
    #[case("form", "-F", "file=@a.txt", TypedValue::KeyValue(KeyValue { name: Some("file".to_string()), content: "a.txt".to_string(), source: ContentSource::File }))]
    #[case("range", "-r", "0-499", TypedValue::Range(Range { start: Some(0), end: Some(499) }))]
    #[case("rate", "--rate", "3/h", TypedValue::Rate(Rate { count: 3, unit: TimeUnit::Hour }))]
    fn make_option_argument(
        #[case] id: &'static str,
        #[case] alias: &str,
        #[case] raw: &str,
        #[case] expected: TypedValue,
    ) {
        let catalog = catalog();
        let decoders = decoders();
        let factory = OptionFactory::new(&catalog, &decoders);

        let option = factory
            .make_option(&OptionId::from(id), alias, Some(raw))
            .unwrap();

        assert_eq!(option.id(), &OptionId::from(id));
        assert_eq!(option.value(), &expected);
        assert_eq!(option.alias(), alias);
        assert_eq!(option.raw(), Some(raw));
    }

    #[rstest]
    #[case("header", "-H")]
    #[case("max-time", "--max-time")]
    fn make_option_missing_argument(#[case] id: &'static str, #[case] alias: &str) {
        let catalog = catalog();
        let decoders = decoders();
        let factory = OptionFactory::new(&catalog, &decoders);

        let error = factory
            .make_option(&OptionId::from(id), alias, None)
            .unwrap_err();

        assert_eq!(error, FactoryError::MissingArgument(alias.to_string()));
    }

    #[rstest]
    #[case("not-an-option", "--not-an-option", None)]
    #[case("not-an-option", "-Z", Some("x"))]
    fn make_option_unknown(#[case] id: &'static str, #[case] alias: &str, #[case] raw: Option<&str>) {
        let catalog = catalog();
        let decoders = decoders();
        let factory = OptionFactory::new(&catalog, &decoders);

        let error = factory.make_option(&OptionId::from(id), alias, raw).unwrap_err();

        assert_eq!(error, FactoryError::UnknownOption(alias.to_string()));
    }

    #[rstest]
    #[case("max-time", "-m", "2,5")]
    #[case("retry", "--retry", "three")]
    #[case("range", "-r", "500-0")]
    #[case("connect-to", "--connect-to", "a:1:b")]
    fn make_option_invalid_argument(#[case] id: &'static str, #[case] alias: &str, #[case] raw: &str) {
        let catalog = catalog();
        let decoders = decoders();
        let factory = OptionFactory::new(&catalog, &decoders);

        let error = factory
            .make_option(&OptionId::from(id), alias, Some(raw))
            .unwrap_err();

        assert_matches!(error, FactoryError::InvalidArgument { alias: a, .. } if a == alias);
    }
}
