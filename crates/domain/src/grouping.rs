use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Suffix appended to a group key in place of the elided variable segment.
pub const WILDCARD: &str = "*";

/// Ordered list of delimiters tried, in order, when deriving a group key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delimiters(Vec<String>);

impl Delimiters {
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(delimiters.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromStr for Delimiters {
    type Err = String;

    /// Parses a comma separated list such as `:,#`.
    ///
    /// A comma cannot itself be expressed here; build [`Delimiters::new`]
    /// directly for that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split(',').filter(|d| !d.is_empty())))
    }
}

impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Derives the family a raw key belongs to.
///
/// The first delimiter that occurs in the key wins: everything up to its
/// last occurrence is kept and the trailing segment is replaced by `*`, so
/// `user:1001:profile` becomes `user:1001:*` under `:`. A key that no
/// delimiter splits is its own group.
#[derive(Debug, Clone, Default)]
pub struct KeyGrouper {
    delimiters: Delimiters,
}

impl KeyGrouper {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn group_of(&self, key: &str) -> String {
        group_of(key, self.delimiters.iter())
    }
}

/// Free-standing form of [`KeyGrouper::group_of`].
pub fn group_of<'d, I>(key: &str, delimiters: I) -> String
where
    I: IntoIterator<Item = &'d str>,
{
    for delimiter in delimiters {
        // The empty delimiter matches every key.
        if delimiter.is_empty() {
            return WILDCARD.to_string();
        }
        // `match_indices` walks left to right without overlap, the same
        // boundaries a plain split would produce.
        if let Some((last, _)) = key.match_indices(delimiter).last() {
            return format!("{}{delimiter}{WILDCARD}", &key[..last]);
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouper(delimiters: &[&str]) -> KeyGrouper {
        KeyGrouper::new(Delimiters::new(delimiters.iter().copied()))
    }

    #[test]
    fn strips_last_segment() {
        assert_eq!(grouper(&[":"]).group_of("user:1001:profile"), "user:1001:*");
    }

    #[test]
    fn unsplit_key_is_its_own_group() {
        assert_eq!(grouper(&[":"]).group_of("singleton"), "singleton");
    }

    #[test]
    fn first_matching_delimiter_wins_over_later_ones() {
        let g = grouper(&["#", ":"]);
        assert_eq!(g.group_of("a:b#c:d"), "a:b#*");
        assert_eq!(g.group_of("a:b:c"), "a:b:*");
    }

    #[test]
    fn falls_through_when_no_delimiter_matches() {
        assert_eq!(grouper(&["#", "|"]).group_of("plain:key"), "plain:key");
    }

    #[test]
    fn empty_delimiter_list_keeps_every_key() {
        assert_eq!(grouper(&[]).group_of("a:b"), "a:b");
    }

    #[test]
    fn empty_delimiter_collapses_to_wildcard() {
        let g = grouper(&["", ":"]);
        assert_eq!(g.group_of("a:b"), "*");
        assert_eq!(g.group_of(""), "*");
    }

    #[test]
    fn multi_char_delimiters_use_non_overlapping_matches() {
        assert_eq!(grouper(&["::"]).group_of("ns::type::42"), "ns::type::*");
        assert_eq!(grouper(&["aa"]).group_of("aaa"), "aa*");
    }

    #[test]
    fn trailing_delimiter_yields_empty_last_segment() {
        assert_eq!(grouper(&[":"]).group_of("queue:"), "queue:*");
        assert_eq!(grouper(&[":"]).group_of(":lead"), ":*");
    }

    #[test]
    fn parses_comma_separated_delimiters() {
        let parsed: Delimiters = ":,#,,_".parse().unwrap();
        assert_eq!(parsed.as_slice(), &[":".to_string(), "#".to_string(), "_".to_string()]);
    }
}
