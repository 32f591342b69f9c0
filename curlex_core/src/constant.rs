pub(crate) const PROGRAM_NAME: &str = "curl";
pub(crate) const SEPARATOR_ALIAS: &str = "--next";

pub(crate) const SINGLE_QUOTE: char = '\'';
pub(crate) const DOUBLE_QUOTE: char = '"';
pub(crate) const BACKSLASH: char = '\\';
pub(crate) const DOLLAR: char = '$';

// Terminal width to fall back to when it cannot be detected.
pub(crate) const DEFAULT_TERMINAL_WIDTH: usize = 80;
