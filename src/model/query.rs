//! Request construction for the catalog search endpoint

use super::error::QueryError;
use super::types::Category;

/// A fully built search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    /// Percent-encoded query text
    pub term: String,
    pub entity: &'static str,
    pub limit: u32,
}

impl RequestDescriptor {
    pub fn url(&self) -> String {
        let mut url = format!("{}?term={}&limit={}", self.endpoint, self.term, self.limit);
        if !self.entity.is_empty() {
            url.push_str("&entity=");
            url.push_str(self.entity);
        }
        url
    }
}

#[derive(Clone, Debug)]
pub struct QueryBuilder {
    endpoint: String,
    limit: u32,
}

impl QueryBuilder {
    pub fn new(endpoint: impl Into<String>, limit: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            limit,
        }
    }

    /// Build the request for `query_text` restricted to `category`.
    ///
    /// The text is encoded as typed; only the emptiness check trims it.
    /// Everything outside the unreserved set is escaped, so a space becomes
    /// `%20` while `+`, `&` and `=` get their own escapes.
    pub fn build(&self, query_text: &str, category: Category) -> Result<RequestDescriptor, QueryError> {
        if query_text.trim().is_empty() {
            return Err(QueryError::InvalidQuery);
        }

        Ok(RequestDescriptor {
            endpoint: self.endpoint.clone(),
            term: urlencoding::encode(query_text).into_owned(),
            entity: category.entity_token(),
            limit: self.limit,
        })
    }
}
