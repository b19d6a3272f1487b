//! Query builders for the time-entries endpoints.

use url::Url;

use super::common::Query;

/// Query parameters for listing time entries.
#[derive(Clone, Default)]
pub struct ListTimeEntriesQuery {
    /// Should the response contain data for meta entities.
    pub meta: bool,
    /// Include sharing details in the response.
    pub include_sharing: bool,
    /// Only entries modified since this UNIX timestamp, including deleted ones.
    pub since: Option<i64>,
    /// Only entries with start time before this date (`YYYY-MM-DD` or RFC 3339).
    pub before: Option<String>,
    /// Only entries with start time from this date. To be used with `end_date`.
    pub start_date: Option<String>,
    /// Only entries with start time until this date. To be used with `start_date`.
    pub end_date: Option<String>,
}

impl Query for ListTimeEntriesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("meta", &self.meta.to_string());
        url.query_pairs_mut()
            .append_pair("include_sharing", &self.include_sharing.to_string());
        if let Some(since) = self.since {
            url.query_pairs_mut()
                .append_pair("since", &since.to_string());
        }
        if let Some(before) = &self.before {
            url.query_pairs_mut().append_pair("before", before.as_str());
        }
        if let Some(start_date) = &self.start_date {
            url.query_pairs_mut()
                .append_pair("start_date", start_date.as_str());
        }
        if let Some(end_date) = &self.end_date {
            url.query_pairs_mut()
                .append_pair("end_date", end_date.as_str());
        }
        url
    }
}

impl ListTimeEntriesQuery {
    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
    pub fn with_include_sharing(mut self, include_sharing: bool) -> Self {
        self.include_sharing = include_sharing;
        self
    }
    pub fn with_since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
    pub fn with_before(mut self, before: &str) -> Self {
        self.before = Some(before.to_string());
        self
    }
    pub fn with_start_date(mut self, start_date: &str) -> Self {
        self.start_date = Some(start_date.to_string());
        self
    }
    pub fn with_end_date(mut self, end_date: &str) -> Self {
        self.end_date = Some(end_date.to_string());
        self
    }
}

/// Query parameters for fetching or replacing a single time entry.
#[derive(Clone, Copy, Default)]
pub struct TimeEntryQuery {
    /// Should the response contain data for meta entities.
    pub meta: bool,
    /// Include sharing details in the response.
    pub include_sharing: bool,
}

impl Query for TimeEntryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("meta", &self.meta.to_string());
        url.query_pairs_mut()
            .append_pair("include_sharing", &self.include_sharing.to_string());
        url
    }
}

impl TimeEntryQuery {
    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
    pub fn with_include_sharing(mut self, include_sharing: bool) -> Self {
        self.include_sharing = include_sharing;
        self
    }
}

/// Query parameters for creating or bulk-editing time entries.
#[derive(Clone, Copy, Default)]
pub struct MetaQuery {
    /// Should the response contain data for meta entities.
    pub meta: bool,
}

impl Query for MetaQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("meta", &self.meta.to_string());
        url
    }
}

impl MetaQuery {
    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}
