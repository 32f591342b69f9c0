use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::*;

/// One word of a command line.
///
/// The token text is kept exactly as written, quote characters included.
/// Use [`Token::unquoted`] for the word a shell would see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    offset: usize,
}

impl Token {
    pub(crate) fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// The token text, as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The byte offset of this token in the raw command line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The word after removing quoting and escapes.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::tokenize;
    ///
    /// let tokens = tokenize(r#"curl -H "X-A: 1" --data-raw '{"a": 1}'"#).unwrap();
    /// assert_eq!(tokens[2].as_str(), r#""X-A: 1""#);
    /// assert_eq!(tokens[2].unquoted(), "X-A: 1");
    /// assert_eq!(tokens[4].unquoted(), r#"{"a": 1}"#);
    /// ```
    pub fn unquoted(&self) -> String {
        unquote(&self.text)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The raw command line could not be split into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quote was still open at the end of the input.
    #[error("Unbalanced quote {open} opened at offset {offset}.")]
    UnbalancedQuote {
        /// The quote character left open.
        open: char,
        /// The byte offset where it was opened.
        offset: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
    // Bash `$'..'` quoting, as emitted by browsers' "copy as cURL".
    Ansi,
}

impl Quote {
    fn closed_by(&self) -> char {
        match self {
            Quote::Single | Quote::Ansi => SINGLE_QUOTE,
            Quote::Double => DOUBLE_QUOTE,
        }
    }
}

#[derive(Debug, Default)]
struct Tokenizer {
    quotes: Vec<(Quote, usize)>,
    buffer: String,
    start: Option<usize>,
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn push(&mut self, offset: usize, c: char) {
        self.start.get_or_insert(offset);
        self.buffer.push(c);
    }

    fn quote(&mut self, offset: usize, c: char) {
        match self.quotes.last() {
            Some((top, _)) if top.closed_by() == c => {
                self.quotes.pop();
            }
            _ => {
                let quote = if c == DOUBLE_QUOTE {
                    Quote::Double
                } else if self.quotes.is_empty()
                    && self.buffer.ends_with(DOLLAR)
                    && !self.is_escaped_dollar()
                {
                    Quote::Ansi
                } else {
                    Quote::Single
                };
                self.quotes.push((quote, offset));
            }
        }

        self.push(offset, c);
    }

    fn is_escaped_dollar(&self) -> bool {
        let preceding = &self.buffer[..self.buffer.len() - DOLLAR.len_utf8()];
        preceding
            .chars()
            .rev()
            .take_while(|c| *c == BACKSLASH)
            .count()
            % 2
            == 1
    }

    fn is_quoted(&self) -> bool {
        !self.quotes.is_empty()
    }

    fn escapes(&self) -> bool {
        !matches!(self.quotes.last(), Some((Quote::Single, _)))
    }

    fn emit(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let start = self.start.take();
        let trimmed = buffer.trim();

        if let (false, Some(offset)) = (trimmed.is_empty(), start) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Emitting token '{trimmed}' at offset {offset}.");
            }

            self.tokens.push(Token::new(trimmed, offset));
        }
    }

    fn finish(mut self) -> Result<Vec<Token>, TokenizeError> {
        if let Some((quote, offset)) = self.quotes.first() {
            return Err(TokenizeError::UnbalancedQuote {
                open: quote.closed_by(),
                offset: *offset,
            });
        }

        self.emit();
        Ok(self.tokens)
    }
}

/// Split a raw command line into word tokens.
///
/// Quote characters (`'` and `"`) nest as a stack: a quote opens when no quote is open or the innermost open quote differs, and closes when it matches the innermost one.
/// Whitespace splits tokens only while no quote is open.
/// Newlines never become part of a token, and a backslash-newline pair (line continuation) is dropped entirely.
/// A backslash outside single quotes escapes the next character, which then neither quotes nor splits.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::tokenize;
///
/// let tokens = tokenize("curl -H 'X-A: 1' \\\n  https://example.com").unwrap();
/// let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(words, vec!["curl", "-H", "'X-A: 1'", "https://example.com"]);
/// ```
pub fn tokenize(raw: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = Tokenizer::default();
    let mut chars = raw.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            BACKSLASH if tokenizer.escapes() => match chars.peek() {
                Some(&(_, '\n')) => {
                    chars.next();
                }
                Some(&(_, '\r')) => {
                    chars.next();
                    if let Some(&(_, '\n')) = chars.peek() {
                        chars.next();
                    }
                }
                Some(&(escaped_offset, escaped)) => {
                    chars.next();
                    tokenizer.push(offset, c);
                    tokenizer.push(escaped_offset, escaped);
                }
                None => tokenizer.push(offset, c),
            },
            SINGLE_QUOTE | DOUBLE_QUOTE => tokenizer.quote(offset, c),
            '\n' | '\r' => {
                if !tokenizer.is_quoted() {
                    tokenizer.emit();
                }
            }
            c if c.is_whitespace() => {
                if tokenizer.is_quoted() {
                    tokenizer.push(offset, c);
                } else {
                    tokenizer.emit();
                }
            }
            _ => tokenizer.push(offset, c),
        }
    }

    tokenizer.finish()
}

/// Remove quoting the way a shell would: the outermost quote decides how the quoted run is read.
pub(crate) fn unquote(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open: Option<Quote> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (open, c) {
            (None, DOLLAR) if chars.peek() == Some(&SINGLE_QUOTE) => {
                chars.next();
                open = Some(Quote::Ansi);
            }
            (None, SINGLE_QUOTE) => open = Some(Quote::Single),
            (None, DOUBLE_QUOTE) => open = Some(Quote::Double),
            (None, BACKSLASH) => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push(c),
            },
            (None, _) => out.push(c),
            (Some(quote), c) if c == quote.closed_by() => open = None,
            (Some(Quote::Single), _) => out.push(c),
            (Some(Quote::Double), BACKSLASH) => match chars.peek() {
                Some(&escaped) if matches!(escaped, DOUBLE_QUOTE | BACKSLASH | DOLLAR | '`') => {
                    chars.next();
                    out.push(escaped);
                }
                _ => out.push(c),
            },
            (Some(Quote::Double), _) => out.push(c),
            (Some(Quote::Ansi), BACKSLASH) => ansi_escape(&mut chars, &mut out),
            (Some(Quote::Ansi), _) => out.push(c),
        }
    }

    out
}

fn ansi_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    match chars.next() {
        Some('n') => out.push('\n'),
        Some('t') => out.push('\t'),
        Some('r') => out.push('\r'),
        Some('e') | Some('E') => out.push('\u{1b}'),
        Some('x') => {
            let mut digits = String::default();
            while let Some(&d) = chars.peek() {
                if digits.len() < 2 && d.is_ascii_hexdigit() {
                    digits.push(d);
                    chars.next();
                } else {
                    break;
                }
            }

            match u8::from_str_radix(&digits, 16) {
                Ok(byte) if byte.is_ascii() => out.push(char::from(byte)),
                _ => {
                    out.push(BACKSLASH);
                    out.push('x');
                    out.push_str(&digits);
                }
            }
        }
        Some(escaped @ (SINGLE_QUOTE | DOUBLE_QUOTE | BACKSLASH | '?')) => out.push(escaped),
        Some(other) => {
            out.push(BACKSLASH);
            out.push(other);
        }
        None => out.push(BACKSLASH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn words(raw: &str) -> Vec<String> {
        tokenize(raw)
            .unwrap()
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\n\n")]
    #[case(" \t \r\n ")]
    fn tokenize_empty(#[case] raw: &str) {
        let tokens = tokenize(raw).unwrap();
        let expected: &[Token] = empty::slice();

        assert_eq!(tokens.as_slice(), expected);
    }

    #[rstest]
    #[case("curl", vec!["curl"])]
    #[case("curl https://example.com", vec!["curl", "https://example.com"])]
    #[case("  curl   -v\thttps://example.com  ", vec!["curl", "-v", "https://example.com"])]
    #[case("curl\n-v\nhttps://example.com", vec!["curl", "-v", "https://example.com"])]
    #[case("curl -H 'X-A: 1'", vec!["curl", "-H", "'X-A: 1'"])]
    #[case("curl -H \"X-A: 1\"", vec!["curl", "-H", "\"X-A: 1\""])]
    #[case("curl -H'X-A: 1'", vec!["curl", "-H'X-A: 1'"])]
    #[case("curl --data '{\"a\": [1, 2]}'", vec!["curl", "--data", "'{\"a\": [1, 2]}'"])]
    #[case("curl 'a''b'", vec!["curl", "'a''b'"])]
    #[case("curl \"a b\"c", vec!["curl", "\"a b\"c"])]
    fn tokenize_words(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(words(raw), expected);
    }

    #[rstest]
    #[case("curl \\\n -v", vec!["curl", "-v"])]
    #[case("curl \\\r\n -v", vec!["curl", "-v"])]
    #[case("curl -v \\\n", vec!["curl", "-v"])]
    #[case("curl a\\ b", vec!["curl", "a\\ b"])]
    #[case("curl \\'a", vec!["curl", "\\'a"])]
    #[case("curl \"a\\\"b\"", vec!["curl", "\"a\\\"b\""])]
    #[case("curl 'C:\\'", vec!["curl", "'C:\\'"])]
    #[case("curl a\\", vec!["curl", "a\\"])]
    fn tokenize_escapes(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(words(raw), expected);
    }

    #[test]
    fn tokenize_newline_inside_quote() {
        assert_eq!(words("curl -d 'a\nb'"), vec!["curl", "-d", "'ab'"]);
    }

    #[test]
    fn tokenize_ansi_quote() {
        assert_eq!(
            words("curl --data-raw $'it\\'s\\n' -v"),
            vec!["curl", "--data-raw", "$'it\\'s\\n'", "-v"]
        );
        assert_eq!(words("curl \\$'a b'"), vec!["curl", "\\$'a b'"]);
    }

    #[test]
    fn tokenize_offsets() {
        let tokens = tokenize("curl  -H 'a b'\nhttps://x").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(Token::offset).collect();

        assert_eq!(offsets, vec![0, 6, 9, 15]);
    }

    #[rstest]
    #[case("curl 'unterminated", '\'', 5)]
    #[case("curl \"unterminated", '"', 5)]
    #[case("curl -d '\"a' b", '\'', 8)]
    #[case("curl -d \"it's\"", '"', 8)]
    #[case("curl \"a\\\"", '"', 5)]
    fn tokenize_unbalanced(#[case] raw: &str, #[case] open: char, #[case] offset: usize) {
        let error = tokenize(raw).unwrap_err();

        assert_eq!(error, TokenizeError::UnbalancedQuote { open, offset });
    }

    #[test]
    fn tokenize_balanced_rejoin() {
        let fragments = [
            "curl",
            "-H",
            "--data=a=b",
            "https://example.com/?q=1",
            "'X-A: 1'",
            "\"a b\"",
            "$'c\\td'",
            "''",
        ];
        let spaces = [" ", "  ", "\n", " \\\n  "];
        let mut rng = thread_rng();

        for _ in 0..50 {
            let n: usize = rng.gen_range(1..8);
            let raw = (0..n)
                .map(|_| {
                    let parts: usize = rng.gen_range(1..4);
                    (0..parts)
                        .map(|_| fragments[rng.gen_range(0..fragments.len())])
                        .collect::<String>()
                })
                .collect::<Vec<String>>()
                .join(spaces[rng.gen_range(0..spaces.len())]);

            let once = words(&raw).join(" ");
            let twice = words(&once).join(" ");

            assert_eq!(once, twice, "{raw}");
            assert_eq!(words(&once), words(&raw), "{raw}");
            assert_eq!(words(&raw).len(), n, "{raw}");
        }
    }

    #[rstest]
    #[case("abc", "abc")]
    #[case("'a b'", "a b")]
    #[case("\"a b\"", "a b")]
    #[case("'a''b'", "ab")]
    #[case("-H'X-A: 1'", "-HX-A: 1")]
    #[case("--header=\"X-A: 1\"", "--header=X-A: 1")]
    #[case("'{\"a\": \"b\"}'", "{\"a\": \"b\"}")]
    #[case("\"it's\"", "it's")]
    #[case("\"a\\\"b\\\\c\\d\"", "a\"b\\c\\d")]
    #[case("'C:\\'", "C:\\")]
    #[case("a\\ b", "a b")]
    #[case("a\\", "a\\")]
    #[case("$'a\\nb'", "a\nb")]
    #[case("$'it\\'s'", "it's")]
    #[case("$'\\x41\\t\\q'", "A\t\\q")]
    #[case("\"$x\"", "$x")]
    fn unquote_words(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(unquote(text), expected);
    }

    #[test]
    fn token_accessors() {
        let token = Token::new("'a b'", 7);

        assert_eq!(token.as_str(), "'a b'");
        assert_eq!(token.to_string(), "'a b'");
        assert_eq!(token.offset(), 7);
        assert_eq!(token.unquoted(), "a b");
    }
}
