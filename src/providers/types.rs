use crate::error::{RelxError, Result};
use serde::Serialize;
use std::fmt;

/// Filenames that are never reported as build artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionRules {
    pub invalid_prefixes: Vec<String>,
    pub invalid_extensions: Vec<String>,
}

impl ExclusionRules {
    pub fn new<P, E>(invalid_prefixes: P, invalid_extensions: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            invalid_prefixes: invalid_prefixes.into_iter().map(Into::into).collect(),
            invalid_extensions: invalid_extensions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub group_name: Option<String>,
    pub email: Option<String>,
    pub maintainers: Vec<String>,
    /// Present only when the full member listing was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
}

impl GroupRecord {
    /// True when the document carried nothing that identifies a group.
    pub fn is_empty(&self) -> bool {
        self.group_name.is_none()
            && self.email.is_none()
            && self.maintainers.is_empty()
            && self.users.as_ref().is_none_or(Vec::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub login: String,
    pub email: String,
    pub realname: String,
    pub state: String,
}

/// Field a person search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Login,
    Email,
    Realname,
}

impl SearchMode {
    /// Resolve mutually exclusive selector flags; exactly one must be set.
    pub fn from_flags(login: bool, email: bool, realname: bool) -> Result<Self> {
        match (login, email, realname) {
            (true, false, false) => Ok(SearchMode::Login),
            (false, true, false) => Ok(SearchMode::Email),
            (false, false, true) => Ok(SearchMode::Realname),
            (false, false, false) => Err(RelxError::InvalidQuery(
                "no user search mode selected (login, email or name)".to_string(),
            )),
            _ => Err(RelxError::InvalidQuery(
                "user search modes are mutually exclusive".to_string(),
            )),
        }
    }

    /// XPath-style predicate understood by `/search/person`.
    pub fn match_expression(&self, text: &str) -> String {
        match self {
            SearchMode::Login => format!("@login=\"{}\"", text),
            SearchMode::Email => format!("@email=\"{}\"", text),
            SearchMode::Realname => format!("contains(@realname,\"{}\")", text),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Login => "login",
            SearchMode::Email => "email",
            SearchMode::Realname => "realname",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_mode_is_accepted() {
        assert_eq!(
            SearchMode::from_flags(true, false, false).unwrap(),
            SearchMode::Login
        );
        assert_eq!(
            SearchMode::from_flags(false, true, false).unwrap(),
            SearchMode::Email
        );
        assert_eq!(
            SearchMode::from_flags(false, false, true).unwrap(),
            SearchMode::Realname
        );
    }

    #[test]
    fn zero_or_many_modes_are_invalid() {
        for flags in [
            (false, false, false),
            (true, true, false),
            (true, false, true),
            (true, true, true),
        ] {
            let err = SearchMode::from_flags(flags.0, flags.1, flags.2).unwrap_err();
            assert!(matches!(err, RelxError::InvalidQuery(_)), "{flags:?}");
        }
    }

    #[test]
    fn match_expressions() {
        assert_eq!(SearchMode::Login.match_expression("jdoe"), "@login=\"jdoe\"");
        assert_eq!(
            SearchMode::Email.match_expression("jdoe@example.com"),
            "@email=\"jdoe@example.com\""
        );
        assert_eq!(
            SearchMode::Realname.match_expression("Jane"),
            "contains(@realname,\"Jane\")"
        );
    }

    #[test]
    fn group_without_content_is_empty() {
        assert!(GroupRecord::default().is_empty());
        let group = GroupRecord {
            users: Some(vec![]),
            ..Default::default()
        };
        assert!(group.is_empty());
        let group = GroupRecord {
            maintainers: vec!["a".to_string()],
            ..Default::default()
        };
        assert!(!group.is_empty());
    }
}
