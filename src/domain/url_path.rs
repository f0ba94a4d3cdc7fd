// URL path template: match, format and replace

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::location::Location;
use super::match_result::{Match, MatchResult};
use super::params::Params;
use super::query::Query;
use super::template::{CompiledTemplate, ParamKey};

/// Options applied when compiling a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPathOptions {
    /// Match literal segments case-sensitively (default: insensitive)
    #[serde(default)]
    pub case_sensitive: bool,
}

/// A compiled URL template.
///
/// Built once per template string and immutable afterwards; it can be shared
/// between threads and reused for any number of calls.
///
/// ```
/// use urlpath::{Params, UrlPath};
///
/// let path = UrlPath::new("/users/:id/:tab?").unwrap();
/// let url = path.format(&Params::new().with("id", 42), None).unwrap();
/// assert_eq!(url, "/users/42");
///
/// let matched = path.match_url("/users/42/posts?page=2", true).unwrap_match().unwrap();
/// assert_eq!(matched.params.get("tab"), Some("posts"));
/// assert_eq!(matched.query.unwrap().get("page"), Some("2"));
/// ```
#[derive(Debug, Clone)]
pub struct UrlPath {
    compiled: CompiledTemplate,
}

impl UrlPath {
    pub fn new(template: &str) -> Result<Self> {
        Self::with_options(template, UrlPathOptions::default())
    }

    pub fn with_options(template: &str, options: UrlPathOptions) -> Result<Self> {
        let compiled = CompiledTemplate::compile(template, options.case_sensitive)?;
        Ok(Self { compiled })
    }

    /// The normalized template string
    pub fn template(&self) -> &str {
        self.compiled.source()
    }

    /// Declared parameters in declaration order
    pub fn keys(&self) -> &[ParamKey] {
        self.compiled.keys()
    }

    /// Check whether `url` matches the template and extract its parameters and query.
    ///
    /// With `exact` the whole pathname must match; otherwise only its leading
    /// segments, so ancestor routes match their descendants.
    pub fn match_url(&self, url: impl Into<Location>, exact: bool) -> MatchResult {
        let location = url.into();
        let keys = self.compiled.keys();

        let captures = match self.compiled.pattern(exact).exec(&location.pathname) {
            Some(captures) if captures.len() == keys.len() => captures,
            _ => {
                tracing::trace!(
                    template = self.template(),
                    pathname = %location.pathname,
                    exact,
                    "URL does not match template"
                );
                return MatchResult::NoMatch;
            }
        };

        let mut params = Params::new();
        for (key, value) in keys.iter().zip(captures) {
            let value = match value {
                Some(raw) => match decode(&raw) {
                    Some(decoded) => Some(decoded),
                    None => {
                        tracing::trace!(
                            template = self.template(),
                            param = %key.name,
                            segment = %raw,
                            "segment is not percent-encoded UTF-8"
                        );
                        return MatchResult::NoMatch;
                    }
                },
                None => None,
            };
            params.set(key.name.clone(), value);
        }

        let query = location.search().map(Query::parse);

        MatchResult::Match(Match { params, query })
    }

    /// Build a concrete URL from parameter values and an optional query.
    ///
    /// No `?` is appended when the query is absent or serializes to nothing.
    pub fn format(&self, params: &Params, query: Option<&Query>) -> Result<String> {
        let mut url = self.compiled.substitutor().substitute(params)?;

        if let Some(query) = query {
            let search = query.serialize();
            if !search.is_empty() {
                url.push('?');
                url.push_str(&search);
            }
        }

        tracing::trace!(template = self.template(), url = %url, "formatted URL");
        Ok(url)
    }

    /// Rebuild `url` with some parameters and query values overridden.
    ///
    /// The URL is always matched exactly. `Ok(None)` means it does not belong
    /// to this template; keys missing from the overrides keep their matched values.
    pub fn replace(
        &self,
        url: impl Into<Location>,
        params: Option<&Params>,
        query: Option<&Query>,
    ) -> Result<Option<String>> {
        let Some(matched) = self.match_url(url, true).into_match() else {
            return Ok(None);
        };

        let mut merged_params = matched.params;
        if let Some(overrides) = params {
            merged_params.merge(overrides);
        }

        let mut merged_query = matched.query.unwrap_or_default();
        if let Some(overrides) = query {
            merged_query.merge(overrides);
        }

        self.format(&merged_params, Some(&merged_query)).map(Some)
    }
}

/// Percent-decode a captured segment.
///
/// `None` for a malformed escape or bytes that are not UTF-8, since such a
/// value could not be encoded back to the same segment.
fn decode(segment: &str) -> Option<String> {
    let bytes = segment.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'%'
            || (bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }

    urlencoding::decode(segment).ok().map(|decoded| decoded.into_owned())
}
