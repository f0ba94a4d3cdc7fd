// Outcome of matching a URL against a template

use serde::Serialize;

use crate::error::UnwrapError;

use super::params::Params;
use super::query::Query;

/// Parameters and query extracted from a matching URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// One entry per declared parameter, in declaration order
    pub params: Params,
    /// `None` when the URL carried no search component at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    NoMatch,
    Match(Match),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match(_))
    }

    pub fn as_match(&self) -> Option<&Match> {
        match self {
            MatchResult::Match(m) => Some(m),
            MatchResult::NoMatch => None,
        }
    }

    pub fn into_match(self) -> Option<Match> {
        match self {
            MatchResult::Match(m) => Some(m),
            MatchResult::NoMatch => None,
        }
    }

    /// Take the match, failing with [`UnwrapError`] on [`MatchResult::NoMatch`]
    pub fn unwrap_match(self) -> Result<Match, UnwrapError> {
        self.into_match().ok_or(UnwrapError)
    }
}
