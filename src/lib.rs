//! `curlex` is a parser for curl command lines.
//!
//! A curl command line, as copied from a browser's developer tools or an API's documentation, is a compact description of one or more HTTP requests.
//! `curlex` turns such a line into a typed, queryable structure, without executing anything.
//! Specifically, `curlex` attempts to prioritize the following design concerns:
//! * *Faithful tokenization*:
//! Single quotes, double quotes, backslash escapes, ANSI-C `$'..'` quotes, and line continuations are honoured the way a shell would hand them to curl.
//! Nothing else of the shell is: no variable expansion, globbing, or substitution.
//! * *Alias awareness*:
//! Every spelling of an option (ex: `-H` and `--header`) resolves to one canonical identity.
//! * *Typed values*:
//! Option arguments decode into their shape (ex: `--max-time 2.5` is a duration, `--limit-rate 10M` is a byte size).
//! Invalid arguments are parse errors, not strings to be validated later.
//! * *Repeat semantics*:
//! Options keep every occurrence as parsed.
//! Queries reduce them by the option's repeat policy: flags are set or not, most options are last-one-wins, and a few (ex: `-H`) accumulate.
//! * *Multiple invocations*:
//! `--next` splits one command line into independent invocations.
//!
//! # Usage
//! The curl tables are built once per process, on first use.
//! ```
//! use curlex::{ids, parse_command, TypedValue};
//! use std::time::Duration;
//!
//! let invocation = parse_command(
//!     "curl -sS -H 'Accept: application/json' -H 'X-Trace: 1' --max-time 10 --max-time 2.5 https://example.com",
//! )
//! .unwrap();
//!
//! assert_eq!(invocation.target(), Some("https://example.com"));
//! assert_eq!(invocation.options_for(&ids::HEADER).unwrap().unwrap().len(), 2);
//! assert_eq!(
//!     invocation.value_of(&ids::MAX_TIME).unwrap(),
//!     Some(&TypedValue::Duration(Duration::from_millis(2500)))
//! );
//! ```
//!
//! A parsed invocation prints back into a command line, or into an explanation of its options.
//! ```
//! use curlex::{curl_catalog, parse_command, Explainer};
//!
//! let invocation = parse_command("curl https://example.com \\\n  -v -H 'Accept: */*'").unwrap();
//!
//! assert_eq!(
//!     invocation.to_command_line("curl"),
//!     "curl -v -H 'Accept: */*' https://example.com"
//! );
//! assert_eq!(
//!     Explainer::new(60).explain(&invocation, curl_catalog()),
//!     "-v                    Make the operation more talkative\n\
//!      -H Accept: */*        Pass custom header(s) to server\n\
//!      https://example.com   Target address."
//! );
//! ```
//!
//! Errors point at the offending token via [`ErrorContext`]:
//! ```console
//! Parse error: option '-H' requires an argument.
//! curl -H
//!      ^
//! ```
//!
//! # Custom tables
//! The parser itself knows nothing of curl.
//! Configure it with any [`OptionCatalog`], [`RepeatPolicies`], and [`ValueDecoders`] via a [`CommandLineParser`].
//! The tables are borrowed, never copied, so one set of tables may back many parsers.
//!
//! ```
//! use curlex::*;
//!
//! let catalog = StaticCatalog::new([
//!     OptionDefinition::new("verbose", ["-v", "--verbose"]),
//!     OptionDefinition::new("tries", ["-t", "--tries"]).argument("number"),
//!     OptionDefinition::new("next", ["--next"]),
//! ])
//! .unwrap();
//! let policies = RepeatPolicies::new([
//!     (OptionId::from("verbose"), RepeatPolicy::Unique),
//!     (OptionId::from("tries"), RepeatPolicy::LastOnly),
//!     (OptionId::from("next"), RepeatPolicy::Unique),
//! ])
//! .unwrap();
//! let decoders = ValueDecoders::new([(OptionId::from("tries"), ValueShape::Integer)]).unwrap();
//!
//! let parser = CommandLineParser::new(&catalog, &policies, &decoders)
//!     .program("wget")
//!     .build()
//!     .unwrap();
//!
//! let invocation = parser.parse("wget -vt3 https://example.com").unwrap();
//! assert_eq!(
//!     invocation.value_of(&OptionId::from("tries")).unwrap(),
//!     Some(&TypedValue::Integer(3))
//! );
//! ```
//!
//! # Cli Semantics
//! `curlex` parses the tokens according to the following set of rules.
//!
//! * The first token is the program name, and is skipped.
//! * A token starting with `-` (other than `-` alone) is an option.
//! Any other token is the target; when there are several, the last one wins.
//! * An option taking an argument consumes the following token verbatim, even when it starts with `-`.
//! For example, `-d -x` sends the data `-x`.
//! The separator is the only exception: `-d --next` is a missing argument.
//! * The argument may also be given inline after `=`.
//! For example, `--max-time=5` is equivalent to `--max-time 5`.
//! Only the first `=` separates, so `--data=a=b` sends `a=b`.
//! * Multiple short options may be combined into a single token.
//! For example, `-sSL` is equivalent to `-s -S -L`.
//! The first short option taking an argument ends the bundle; the rest of the token is its argument.
//! For example, `-sXPOST` is equivalent to `-s -X POST`.
//! * `--next` (or `-:`) ends the current invocation.
//! In [`parse_command`], parsing stops there; in [`parse_commands`], a fresh invocation begins.
//! Options are *not* carried over into the next invocation.
//! * A later bare `curl` token also ends the current invocation, so two pasted commands parse as two invocations.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while tokenizing and assembling.
use std::sync::OnceLock;

pub use curlex_catalog::ids;
pub use curlex_core::*;

struct CurlTables {
    catalog: StaticCatalog,
    policies: RepeatPolicies,
    decoders: ValueDecoders,
}

fn curl_tables() -> &'static CurlTables {
    static TABLES: OnceLock<CurlTables> = OnceLock::new();
    TABLES.get_or_init(|| CurlTables {
        catalog: curlex_catalog::catalog().expect("internal error - curl catalog must be valid"),
        policies: curlex_catalog::policies()
            .expect("internal error - curl repeat policies must be valid"),
        decoders: curlex_catalog::decoders()
            .expect("internal error - curl value shapes must be valid"),
    })
}

/// The catalog of curl options.
pub fn curl_catalog() -> &'static StaticCatalog {
    &curl_tables().catalog
}

/// The parser configured for curl.
///
/// ### Example
/// ```
/// let parser = curlex::curl_parser();
///
/// assert_eq!(parser.program(), "curl");
/// assert!(parser.parse("curl -I https://example.com").is_ok());
/// ```
pub fn curl_parser() -> &'static GeneralParser<'static> {
    static PARSER: OnceLock<GeneralParser<'static>> = OnceLock::new();
    PARSER.get_or_init(|| {
        let tables = curl_tables();
        CommandLineParser::new(&tables.catalog, &tables.policies, &tables.decoders)
            .build()
            .expect("internal error - curl tables must configure a parser")
    })
}

/// Parse a curl command line holding one invocation.
/// See [`GeneralParser::parse`].
pub fn parse_command(raw: &str) -> Result<CommandInvocation<'static>, ParseError> {
    curl_parser().parse(raw)
}

/// Parse a curl command line holding one or more invocations.
/// See [`GeneralParser::parse_all`].
///
/// ### Example
/// ```
/// let set = curlex::parse_commands("curl https://a.example --next -I https://b.example").unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert!(set.get(0).unwrap().options().is_empty());
/// assert_eq!(set.get(1).unwrap().target(), Some("https://b.example"));
/// ```
pub fn parse_commands(raw: &str) -> Result<CommandSet<'static>, ParseError> {
    curl_parser().parse_all(raw)
}
