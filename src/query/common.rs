//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization for
/// the operation's query parameters.
///
/// Booleans are rendered in their textual `true`/`false` form, matching the
/// encoding the Toggl API expects.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query for operations that take no parameters (current entry, delete, stop).
#[derive(Clone, Copy, Default)]
pub struct NoQuery;

impl Query for NoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}
