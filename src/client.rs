//! Entry point aggregating the resource clients under one credential.

use url::Url;

use crate::{
    project_users::ProjectUsers,
    time_entries::TimeEntries,
    transport::{Transport, API_HOST},
};

/// Toggl API client.
///
/// Constructed once from an API token; every request authenticates with the
/// token as the basic-auth username and the provider's fixed `api_token`
/// password. The client holds no other state and may be shared across tasks.
///
/// ```no_run
/// # async fn run() -> Result<(), toggl_api::Error> {
/// use toggl_api::{Client, ListTimeEntriesQuery};
///
/// let client = Client::new("your-api-token");
/// let entries = client
///     .time_entries()
///     .list(&ListTimeEntriesQuery::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Creates a new client pointing at the production Toggl API.
    pub fn new(token: &str) -> Self {
        let base_url = Url::parse(API_HOST).expect("static base URL is valid");
        Self {
            transport: Transport::new(token, base_url),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock.
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not a valid URL.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        let base_url = Url::parse(base_url).expect("invalid base URL");
        Self {
            transport: Transport::new(token, base_url),
        }
    }

    /// The time-entries resource client.
    pub fn time_entries(&self) -> TimeEntries<'_> {
        TimeEntries {
            transport: &self.transport,
        }
    }

    /// The project-users resource client.
    pub fn project_users(&self) -> ProjectUsers<'_> {
        ProjectUsers {
            transport: &self.transport,
        }
    }
}
