//! Compile URL path templates such as `/users/:id/:tab?` into a matcher and
//! formatter pair.
//!
//! A [`UrlPath`] can test whether a URL belongs to its template and extract
//! the parameters and query string, build a URL from parameter values, or
//! rewrite an existing URL with some values replaced.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use domain::{Location, Match, MatchResult, Params, Query, UrlPath, UrlPathOptions};
pub use error::{Error, UnwrapError};
