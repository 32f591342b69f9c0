use terminal_size::{terminal_size, Width};

use crate::catalog::OptionCatalog;
use crate::constant::*;
use crate::parser::base::ParseError;
use crate::parser::invocation::{CommandInvocation, CommandSet};

const PADDING_WIDTH: usize = 3;
// Enough for 2 short words with a space between them.
const MINIMUM_COLUMN_WIDTH: usize = 10;
const TARGET_DOCUMENTATION: &str = "Target address.";

impl<'c> CommandInvocation<'c> {
    fn words(&self) -> Vec<String> {
        let mut words = Vec::default();

        for option in self.options() {
            match option.raw() {
                // A separate word spelled like a flag would not read back as the value, ex: `--data --next`.
                Some(raw) if raw.starts_with('-') => {
                    words.push(quote(&format!("{}={raw}", option.alias())));
                }
                Some(raw) => {
                    words.push(quote(option.alias()));
                    words.push(quote(raw));
                }
                None => words.push(quote(option.alias())),
            }
        }

        if let Some(target) = self.target() {
            words.push(quote(target));
        }

        words
    }

    /// Render this invocation back into a command line.
    ///
    /// Each option is written with the alias and value spelling it was parsed from, so re-parsing the output yields an equal invocation.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::*;
    ///
    /// let catalog = StaticCatalog::new([
    ///     OptionDefinition::new("header", ["-H", "--header"]).argument("header"),
    ///     OptionDefinition::new("next", ["-:", "--next"]),
    /// ])
    /// .unwrap();
    /// let policies = RepeatPolicies::new([
    ///     (OptionId::from("header"), RepeatPolicy::Multiple),
    ///     (OptionId::from("next"), RepeatPolicy::Unique),
    /// ])
    /// .unwrap();
    /// let decoders = ValueDecoders::default();
    /// let parser = CommandLineParser::new(&catalog, &policies, &decoders).build().unwrap();
    ///
    /// let invocation = parser.parse("curl https://x \\\n  --header=\"X-A: 1\"").unwrap();
    /// assert_eq!(invocation.to_command_line("curl"), "curl --header 'X-A: 1' https://x");
    /// ```
    pub fn to_command_line(&self, program: &str) -> String {
        let mut words = vec![quote(program)];
        words.extend(self.words());
        words.join(" ")
    }
}

impl<'c> CommandSet<'c> {
    /// Render every invocation back into one command line, separated by `--next`.
    pub fn to_command_line(&self, program: &str) -> String {
        let mut words = vec![quote(program)];

        for (i, invocation) in self.iter().enumerate() {
            if i > 0 {
                words.push(SEPARATOR_ALIAS.to_string());
            }

            words.extend(invocation.words());
        }

        words.join(" ")
    }
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_./:@=,+%~^#?&!*[]{}".contains(c)
}

// Quote a word so the tokenizer reads it back unchanged.
fn quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_plain) {
        word.to_string()
    } else if word.contains(|c: char| matches!(c, DOUBLE_QUOTE | '\n' | '\r')) {
        // A lone '"' would open a nested quote, and newlines are dropped inside plain quotes.
        let mut quoted = format!("{DOLLAR}{SINGLE_QUOTE}");

        for c in word.chars() {
            match c {
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                BACKSLASH | SINGLE_QUOTE | DOUBLE_QUOTE => {
                    quoted.push(BACKSLASH);
                    quoted.push(c);
                }
                _ => quoted.push(c),
            }
        }

        quoted.push(SINGLE_QUOTE);
        quoted
    } else {
        format!("'{}'", word.replace(SINGLE_QUOTE, "'\\''"))
    }
}

/// Renders the options of an invocation next to their documentation, in aligned columns.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::*;
///
/// let catalog = StaticCatalog::new([
///     OptionDefinition::new("verbose", ["-v", "--verbose"]).help("Make the operation more talkative"),
///     OptionDefinition::new("next", ["-:", "--next"]),
/// ])
/// .unwrap();
/// let policies = RepeatPolicies::new([
///     (OptionId::from("verbose"), RepeatPolicy::Unique),
///     (OptionId::from("next"), RepeatPolicy::Unique),
/// ])
/// .unwrap();
/// let decoders = ValueDecoders::default();
/// let parser = CommandLineParser::new(&catalog, &policies, &decoders).build().unwrap();
///
/// let invocation = parser.parse("curl -v https://x").unwrap();
/// let explanation = Explainer::new(80).explain(&invocation, &catalog);
/// assert_eq!(explanation, "-v          Make the operation more talkative\nhttps://x   Target address.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explainer {
    width: usize,
}

impl Explainer {
    /// Explain to the given line width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Explain to the width of the terminal, or 80 columns when there is no terminal.
    pub fn terminal() -> Self {
        match terminal_size() {
            Some((Width(width), _)) => Self::new(width as usize),
            None => Self::new(DEFAULT_TERMINAL_WIDTH),
        }
    }

    /// The line width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render one row per option occurrence (alias, value, and the first line of its documentation), then the target.
    pub fn explain(&self, invocation: &CommandInvocation<'_>, catalog: &dyn OptionCatalog) -> String {
        let mut rows: Vec<(String, String)> = invocation
            .options()
            .iter()
            .map(|option| {
                let left = match option.raw() {
                    Some(raw) => format!("{} {raw}", option.alias()),
                    None => option.alias().to_string(),
                };
                let right = catalog
                    .definition(option.id())
                    .documentation()
                    .and_then(|documentation| documentation.lines().next())
                    .unwrap_or_default()
                    .to_string();
                (left, right)
            })
            .collect();

        if let Some(target) = invocation.target() {
            rows.push((target.to_string(), TARGET_DOCUMENTATION.to_string()));
        }

        let widest = rows
            .iter()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or_default();
        let left_width = std::cmp::min(widest, self.width / 2).max(MINIMUM_COLUMN_WIDTH.min(widest));
        let right_width = std::cmp::max(
            self.width.saturating_sub(left_width + PADDING_WIDTH),
            MINIMUM_COLUMN_WIDTH,
        );
        let padding = " ".repeat(PADDING_WIDTH);
        let mut lines = Vec::default();

        for (left, right) in rows {
            let left_lines = chunk(&left, left_width.max(1));
            let right_lines = chunk(&right, right_width);

            for i in 0..std::cmp::max(1, std::cmp::max(left_lines.len(), right_lines.len())) {
                let line = format!(
                    "{:left_width$}{padding}{}",
                    left_lines.get(i).map(String::as_str).unwrap_or_default(),
                    right_lines.get(i).map(String::as_str).unwrap_or_default(),
                );
                lines.push(line.trim_end().to_string());
            }
        }

        lines.join("\n")
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width.saturating_sub(1).max(1);
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// Shows where in a raw command line an error occurred.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::ErrorContext;
///
/// let context = ErrorContext::new("curl -v 'oops", 8);
/// assert_eq!(context.to_string(), "curl -v 'oops\n        ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    line: String,
    column: usize,
}

impl ErrorContext {
    /// Point at the byte `offset` of `raw`.
    /// Line breaks are flattened to spaces, so the caret always sits under the single rendered line.
    pub fn new(raw: &str, offset: usize) -> Self {
        let mut offset = std::cmp::min(offset, raw.len());
        while !raw.is_char_boundary(offset) {
            offset -= 1;
        }

        Self {
            line: raw
                .chars()
                .map(|c| if c.is_whitespace() { ' ' } else { c })
                .collect(),
            column: raw[..offset].chars().count(),
        }
    }

    /// The context of a parse error, if it points at a position in `raw`.
    pub fn from_error(raw: &str, error: &ParseError) -> Option<Self> {
        error.offset().map(|offset| Self::new(raw, offset))
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{:width$}^", self.line, "", width = self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionId;
    use crate::parser::middleware::GeneralParser;
    use crate::test::{catalog, decoders, policies};
    use crate::tokens::tokenize;
    use rstest::rstest;

    #[rstest]
    #[case("abc", "abc")]
    #[case("https://example.com/a?b=c&d=e", "https://example.com/a?b=c&d=e")]
    #[case("-H", "-H")]
    #[case("", "''")]
    #[case("a b", "'a b'")]
    #[case("it's", "'it'\\''s'")]
    #[case("{\"a\": 1}", "$'{\\\"a\\\": 1}'")]
    #[case("a\nb", "$'a\\nb'")]
    #[case("C:\\", "'C:\\'")]
    #[case("$HOME", "'$HOME'")]
    fn quote_word(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(quote(word), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("a b")]
    #[case("it's")]
    #[case("{\"a\": \"it's\"}")]
    #[case("\"")]
    #[case("a\r\nb\\n")]
    #[case("C:\\dir\\")]
    #[case("$'x'")]
    fn quote_tokenizes_back(#[case] word: &str) {
        let tokens = tokenize(&quote(word)).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].unquoted(), word);
    }

    #[rstest]
    #[case("curl -v -H 'X-A: 1' https://x", "curl -v -H 'X-A: 1' https://x")]
    #[case("curl https://x -sL", "curl -s -L https://x")]
    #[case("curl -XPOST --data=a=b", "curl -X POST --data a=b")]
    #[case("curl", "curl")]
    #[case("curl -d-: https://x", "curl -d=-: https://x")]
    #[case("curl --data=--next https://x", "curl --data=--next https://x")]
    #[case("curl -r -500 -d '-x y'", "curl -r=-500 '-d=-x y'")]
    fn to_command_line(#[case] raw: &str, #[case] expected: &str) {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser =
            GeneralParser::new(&catalog, &policies, &decoders, "curl", OptionId::from("next"));

        let invocation = parser.parse(raw).unwrap();

        assert_eq!(invocation.to_command_line("curl"), expected);
    }

    #[rstest]
    #[case("curl -v -H 'X-A: 1' -H \"X-B: 2\" --max-time 2.5 https://x")]
    #[case("curl -sL -XPOST -d '{\"a\": \"b\"}' https://x")]
    #[case("curl --data $'line\\nbreak' -r -500 --rate 3/h https://x")]
    #[case("curl -F file=@a.txt --connect-to a:443:[::1]:8443 --socks5 [::1]:1080")]
    #[case("curl -d '' -d curl -d -v")]
    #[case("curl -d-: https://x")]
    #[case("curl --data=--next https://x")]
    #[case("curl -d --data=-: -H=-v -d=-")]
    fn to_command_line_round_trip(#[case] raw: &str) {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser =
            GeneralParser::new(&catalog, &policies, &decoders, "curl", OptionId::from("next"));

        let invocation = parser.parse(raw).unwrap();
        let printed = invocation.to_command_line("curl");

        assert_eq!(parser.parse(&printed).unwrap(), invocation, "{printed}");
    }

    #[test]
    fn command_set_to_command_line() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser =
            GeneralParser::new(&catalog, &policies, &decoders, "curl", OptionId::from("next"));

        let set = parser
            .parse_all("curl -v https://a -: -s https://b curl -L https://c")
            .unwrap();
        let printed = set.to_command_line("curl");

        assert_eq!(
            printed,
            "curl -v https://a --next -s https://b --next -L https://c"
        );
        assert_eq!(parser.parse_all(&printed).unwrap(), set);
    }

    #[test]
    fn explain() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser =
            GeneralParser::new(&catalog, &policies, &decoders, "curl", OptionId::from("next"));
        let invocation = parser.parse("curl -v -H 'X-A: 1' https://x").unwrap();

        let explanation = Explainer::new(40).explain(&invocation, &catalog);

        assert_eq!(
            explanation,
            r#"-v          Make the operation more
            talkative
-H X-A: 1   Pass custom header(s) to
            server
https://x   Target address."#
        );
    }

    #[test]
    fn explain_empty() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser =
            GeneralParser::new(&catalog, &policies, &decoders, "curl", OptionId::from("next"));
        let invocation = parser.parse("curl").unwrap();

        assert_eq!(Explainer::new(40).explain(&invocation, &catalog), "");
    }

    #[test]
    fn explain_terminal() {
        // Under test there is usually no terminal; either way the width is usable.
        assert!(Explainer::terminal().width() > 0);
    }

    #[rstest]
    #[case("a b c", 5, vec!["a b c"])]
    #[case("a b c", 3, vec!["a b", "c"])]
    #[case("abcdefgh", 4, vec!["abc-", "def-", "gh"])]
    #[case("ab  cd", 10, vec!["ab cd"])]
    #[case("", 10, vec![])]
    #[case("ääää ü", 3, vec!["ää-", "ää", "ü"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[rstest]
    #[case("curl -v 'oops", 8, "curl -v 'oops\n        ^")]
    #[case("curl -H", 5, "curl -H\n     ^")]
    #[case("curl\n-Z", 5, "curl -Z\n     ^")]
    #[case("curl", 100, "curl\n    ^")]
    #[case("cürl -Z", 6, "cürl -Z\n     ^")]
    #[case("cürl -Z", 2, "cürl -Z\n ^")]
    fn error_context(#[case] raw: &str, #[case] offset: usize, #[case] expected: &str) {
        assert_eq!(ErrorContext::new(raw, offset).to_string(), expected);
    }

    #[test]
    fn error_context_from_error() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser =
            GeneralParser::new(&catalog, &policies, &decoders, "curl", OptionId::from("next"));
        let raw = "curl -v --nope https://x";

        let error = parser.parse(raw).unwrap_err();
        let context = ErrorContext::from_error(raw, &error).unwrap();

        assert_eq!(context.to_string(), "curl -v --nope https://x\n        ^");
        assert_eq!(
            ErrorContext::from_error(raw, &ParseError::UndeclaredPolicy(OptionId::from("x"))),
            None
        );
    }
}
