// Splits raw URLs and structured locations into pathname and search

use url::Url;

/// A URL reduced to the parts a template cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    /// Raw search string without the leading `?`
    pub search: Option<String>,
}

impl Location {
    /// Structured location with no search component
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: None,
        }
    }

    /// Attach a search string; one leading `?` is stripped
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = Some(match search.strip_prefix('?') {
            Some(stripped) => stripped.to_string(),
            None => search,
        });
        self
    }

    /// Parse an absolute or relative URL string.
    ///
    /// Only inputs with a scheme and authority go through [`Url`]; anything
    /// else is split on `#` and `?` with the path left untouched, so `//x/y`
    /// keeps its first segment and dot segments are not resolved.
    /// The fragment is ignored.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if !url.cannot_be_a_base() => {
                let pathname = match url.path() {
                    "" => "/".to_string(),
                    path => path.to_string(),
                };
                Self {
                    pathname,
                    search: url.query().map(str::to_string),
                }
            }
            _ => Self::split_relative(raw),
        }
    }

    fn split_relative(raw: &str) -> Self {
        let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
        let (path, search) = match without_fragment.split_once('?') {
            Some((path, search)) => (path, Some(search.to_string())),
            None => (without_fragment, None),
        };

        let pathname = if path.is_empty() { "/" } else { path };
        tracing::trace!(url = raw, pathname, "split relative URL");

        Self {
            pathname: pathname.to_string(),
            search,
        }
    }

    /// Search string if one is present and not blank
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Location::parse(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Location::parse(&raw)
    }
}

impl From<&String> for Location {
    fn from(raw: &String) -> Self {
        Location::parse(raw)
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}
