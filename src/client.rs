use std::time::Duration;

use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{debug, warn};
use url::Url;

use crate::{
    ApiError, ClientBuilderError, ClientError, DiscoverParams, DomainSearchParams, Query,
};

const DEFAULT_ENDPOINT: &str = "https://api.hunter.io/v2/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_LIMIT: u32 = 10;
const DEFAULT_OFFSET: u32 = 0;

/// Parsed JSON body of a Hunter API response.
pub type Response = JsonMap<String, JsonValue>;

/// Makes sure the endpoint's path ends with a slash, so that joining keeps
/// the last path segment.
fn normalize_endpoint(endpoint: &Url) -> Url {
    let mut endpoint = endpoint.clone();
    if !endpoint.path().ends_with('/') {
        let path = format!("{}/", endpoint.path());
        endpoint.set_path(&path);
    }
    endpoint
}

/// Rejects arguments that are empty or only whitespace.
fn require_non_empty(name: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidArgument(format!(
            "{name} must be a non-empty string"
        )));
    }
    Ok(())
}

/// Rejects a zero page size.
fn require_positive_limit(limit: u32) -> Result<(), ClientError> {
    if limit == 0 {
        return Err(ClientError::InvalidArgument(
            "limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the API key to the one given.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Sets the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the default endpoint of
    /// `https://api.hunter.io/v2/` is used. The default timeout is 15 seconds.
    ///
    /// # Errors
    /// - `MissingField` if the API key isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    /// - `Reqwest` if the HTTP client can't be initialised.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let api_key = self
            .api_key
            .ok_or_else(|| ClientBuilderError::MissingField("api_key".to_string()))?;
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        Ok(Client::new(&endpoint, &api_key, timeout)?)
    }
}

/// API client.
pub struct Client {
    endpoint: Url,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client.
    pub fn new(endpoint: &Url, api_key: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            endpoint: normalize_endpoint(endpoint),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Creates a [Url] from the endpoint and the given path.
    fn build_url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.endpoint.join(path)
    }

    /// Returns a query for sending to the Hunter API.
    ///
    /// This query already includes the API key.
    fn query(&self) -> Query {
        Query::new(&self.api_key)
    }

    /// Sends a GET request to the given path with the given query.
    fn send_request(&self, path: &str, query: Query) -> Result<Response, ClientError> {
        let url = self.build_url(path)?;

        debug!(endpoint = path, "sending Hunter API request");
        let resp = self.client.get(url).query(&query.pairs()).send()?;
        let status = resp.status();
        debug!(endpoint = path, %status, "received Hunter API response");

        if !status.is_success() {
            let err = ApiError::from_response(resp);
            warn!(
                endpoint = path,
                %status,
                message = err.message(),
                "Hunter API returned an error"
            );
            return Err(ClientError::Hunter(err));
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Searches for companies matching a natural language query.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hunter_client::Client;
    ///
    /// let client = Client::builder().api_key("<APIKEY>").build().unwrap();
    /// let companies = client.discover("fintech in Germany", Some(2)).unwrap();
    /// println!("{}", serde_json::Value::Object(companies));
    /// ```
    pub fn discover(&self, query: &str, limit: Option<u32>) -> Result<Response, ClientError> {
        let params = DiscoverParams::new().query(query).limit_if_some(limit);

        self.discover_with(&params)
    }

    /// Searches for companies using any combination of the discovery filters.
    pub fn discover_with(&self, params: &DiscoverParams) -> Result<Response, ClientError> {
        let query = params.apply(self.query());

        self.send_request("discover", query)
    }

    /// Returns the email addresses known for the given domain.
    pub fn domain_search(&self, domain: &str, limit: Option<u32>) -> Result<Response, ClientError> {
        let params = DomainSearchParams::new().domain(domain).limit_if_some(limit);

        self.domain_search_with(&params)
    }

    /// Searches a domain or company using any combination of the domain search filters.
    pub fn domain_search_with(&self, params: &DomainSearchParams) -> Result<Response, ClientError> {
        let query = params.apply(self.query());

        self.send_request("domain-search", query)
    }

    /// Finds the most likely email address of a person at the given domain.
    ///
    /// The response carries the address along with Hunter's confidence score.
    pub fn email_finder(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Response, ClientError> {
        let query = self
            .query()
            .add("domain", domain)
            .add("first_name", first_name)
            .add("last_name", last_name);

        self.send_request("email-finder", query)
    }

    /// Searches for companies by a plain text query, one page at a time.
    ///
    /// `limit` defaults to 10 and `offset` to 0. Unlike [Client::discover], the
    /// arguments are checked before anything is sent.
    ///
    /// # Errors
    /// - `InvalidArgument` if `query` is blank or `limit` is zero.
    pub fn search_companies(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Response, ClientError> {
        require_non_empty("query", query)?;
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        require_positive_limit(limit)?;

        let params = DiscoverParams::new()
            .query(query)
            .limit(limit)
            .offset(offset.unwrap_or(DEFAULT_OFFSET));

        self.discover_with(&params)
    }

    /// Returns a page of the email addresses known for the given domain.
    ///
    /// `limit` defaults to 10 and `offset` to 0.
    ///
    /// # Errors
    /// - `InvalidArgument` if `domain` is blank or `limit` is zero.
    pub fn emails_for_domain(
        &self,
        domain: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Response, ClientError> {
        require_non_empty("domain", domain)?;
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        require_positive_limit(limit)?;

        let params = DomainSearchParams::new()
            .domain(domain)
            .limit(limit)
            .offset(offset.unwrap_or(DEFAULT_OFFSET));

        self.domain_search_with(&params)
    }

    /// Same as [Client::email_finder], but rejects blank arguments locally.
    pub fn guess_email(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Response, ClientError> {
        require_non_empty("domain", domain)?;
        require_non_empty("first_name", first_name)?;
        require_non_empty("last_name", last_name)?;

        self.email_finder(domain, first_name, last_name)
    }
}
