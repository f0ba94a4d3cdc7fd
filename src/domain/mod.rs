// Domain model for URL path templates

pub mod location;
pub mod match_result;
pub mod params;
pub mod query;
pub mod template;
pub mod url_path;

pub use location::Location;
pub use match_result::{Match, MatchResult};
pub use params::Params;
pub use query::Query;
pub use url_path::{UrlPath, UrlPathOptions};
