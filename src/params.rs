//! Optional filters for the endpoints that take more than their headline arguments.

use strum_macros::IntoStaticStr;

use crate::Query;

/// Kind of email address to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EmailType {
    Personal,
    Generic,
}

impl EmailType {
    /// Gets the string representation sent to the API.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Filters for the company discovery endpoint.
///
/// Every field is optional; unset fields are not sent.
///
/// # Examples
///
/// ```
/// use hunter_client::DiscoverParams;
///
/// let params = DiscoverParams::new()
///     .query("fintech in Germany")
///     .size_from(10)
///     .limit(2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverParams {
    query: Option<String>,
    domain: Option<String>,
    company: Option<String>,
    industry: Option<String>,
    country: Option<String>,
    city: Option<String>,
    size_from: Option<u32>,
    size_to: Option<u32>,
    type_: Option<EmailType>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl DiscoverParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the natural language search query.
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    pub fn industry(mut self, industry: &str) -> Self {
        self.industry = Some(industry.to_string());
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Sets the lower bound of the company headcount.
    pub fn size_from(mut self, size_from: u32) -> Self {
        self.size_from = Some(size_from);
        self
    }

    /// Sets the upper bound of the company headcount.
    pub fn size_to(mut self, size_to: u32) -> Self {
        self.size_to = Some(size_to);
        self
    }

    pub fn type_(mut self, type_: EmailType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn limit_if_some(mut self, limit: Option<u32>) -> Self {
        if let Some(limit) = limit {
            self.limit = Some(limit);
        }
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds the set filters to the given query.
    pub(crate) fn apply(&self, query: Query) -> Query {
        query
            .add_if_some("query", self.query.as_deref())
            .add_if_some("domain", self.domain.as_deref())
            .add_if_some("company", self.company.as_deref())
            .add_if_some("industry", self.industry.as_deref())
            .add_if_some("country", self.country.as_deref())
            .add_if_some("city", self.city.as_deref())
            .add_if_some("size_from", self.size_from)
            .add_if_some("size_to", self.size_to)
            .add_if_some("type", self.type_.map(|t| t.as_str()))
            .add_if_some("limit", self.limit)
            .add_if_some("offset", self.offset)
    }
}

/// Filters for the domain search endpoint.
///
/// Hunter accepts either a `domain` or a `company`; neither is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSearchParams {
    domain: Option<String>,
    company: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    type_: Option<EmailType>,
}

impl DomainSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn limit_if_some(mut self, limit: Option<u32>) -> Self {
        if let Some(limit) = limit {
            self.limit = Some(limit);
        }
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn type_(mut self, type_: EmailType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub(crate) fn apply(&self, query: Query) -> Query {
        query
            .add_if_some("domain", self.domain.as_deref())
            .add_if_some("company", self.company.as_deref())
            .add_if_some("limit", self.limit)
            .add_if_some("offset", self.offset)
            .add_if_some("type", self.type_.map(|t| t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value as JsonValue;

    use super::*;

    #[test]
    fn email_type_strings() {
        assert_eq!(EmailType::Personal.as_str(), "personal");
        assert_eq!(EmailType::Generic.as_str(), "generic");
    }

    #[test]
    fn discover_only_sends_set_filters() {
        let query = DiscoverParams::new()
            .query("fintech in Germany")
            .size_to(50)
            .type_(EmailType::Generic)
            .apply(Query::new("k"));

        assert_eq!(query.len(), 4);
        assert_eq!(
            query.get("query"),
            Some(&JsonValue::from("fintech in Germany"))
        );
        assert_eq!(query.get("size_to"), Some(&JsonValue::from(50)));
        assert_eq!(query.get("type"), Some(&JsonValue::from("generic")));
        assert!(query.get("limit").is_none());
    }

    #[test]
    fn domain_search_keeps_api_key() {
        let query = DomainSearchParams::new()
            .company("Stripe")
            .limit_if_some(None)
            .offset(20)
            .apply(Query::new("k"));

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("api_key"), Some(&JsonValue::from("k")));
        assert_eq!(query.get("company"), Some(&JsonValue::from("Stripe")));
        assert_eq!(query.get("offset"), Some(&JsonValue::from(20)));
    }
}
