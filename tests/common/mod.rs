// Common test utilities shared across test files

use urlpath::{Location, Query};

/// One input variant for a path that is expected to match
pub struct PathCase {
    pub location: Location,
    pub exact: bool,
    pub expected_query: Option<Query>,
    pub description: String,
}

/// Query used by every "with query string" case
#[allow(dead_code)]
pub fn sample_query() -> Query {
    Query::new().with("a", 1).with("b", 2)
}

/// Expand a matching path into the full input matrix: string and structured
/// inputs, exact and prefix mode, with and without trailing slash and query.
#[allow(dead_code)]
pub fn path_cases(path: &str) -> Vec<PathCase> {
    let search = sample_query().serialize();
    let mut cases = Vec::new();

    for (exact, base) in [(true, path.to_string()), (false, format!("{}/sda/asda/sda", path))] {
        for slash in ["", "/"] {
            let pathname = format!("{}{}", base, slash);
            let mode = if exact { "exact" } else { "partial" };

            cases.push(PathCase {
                location: Location::parse(&pathname),
                exact,
                expected_query: None,
                description: format!("string, {} match, '{}'", mode, pathname),
            });
            cases.push(PathCase {
                location: Location::parse(&format!("{}?{}", pathname, search)),
                exact,
                expected_query: Some(sample_query()),
                description: format!("string with query, {} match, '{}'", mode, pathname),
            });
            cases.push(PathCase {
                location: Location::new(pathname.as_str()),
                exact,
                expected_query: None,
                description: format!("descriptor, {} match, '{}'", mode, pathname),
            });
            cases.push(PathCase {
                location: Location::new(pathname.as_str()).with_search(search.as_str()),
                exact,
                expected_query: Some(sample_query()),
                description: format!("descriptor with query, {} match, '{}'", mode, pathname),
            });
        }
    }

    cases
}
