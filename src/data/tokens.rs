use std::str::FromStr;

use crate::data::Error;

/// A whitespace separated token and the 1-based line it was found on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token<'a> {
    pub line: usize,
    pub text: &'a str,
}

pub(crate) fn tokens(content: &str) -> impl Iterator<Item = Token<'_>> {
    content.lines().enumerate().flat_map(|(i, line)| {
        line.split_whitespace()
            .map(move |text| Token { line: i + 1, text })
    })
}

/// Non-blank lines, trimmed, with their 1-based line numbers.
pub(crate) fn names(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

pub(crate) fn parse_token<T>(file: &str, token: &Token, field: &str) -> Result<T, Error>
where
    T: FromStr,
{
    token
        .text
        .parse::<T>()
        .map_err(|_| Error::malformed(file, token.line, format!("could not parse {field} '{}'", token.text)))
}
