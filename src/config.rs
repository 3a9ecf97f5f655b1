use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use url::Url;

use crate::consts::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HH_USER_AGENT_HEADER};
use crate::error::ConfigError;

/// Connection settings for one hh.ru account. Immutable once built.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    token: String,
    user_agent: String,
}

impl ClientConfig {
    /// Config against the public API with the default user agent.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL misconfiguration"),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(base_url).map_err(|source| ConfigError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// hh.ru asks for `AppName/version (contact@email)`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Headers sent with every request: bearer token and both user-agent headers.
    pub fn headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        let mut bearer = HeaderValue::from_str(&concat_str!("Bearer ", self.token))
            .map_err(|source| ConfigError::HeaderValue {
                name: "Authorization",
                source,
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let agent = HeaderValue::from_str(&self.user_agent).map_err(|source| {
            ConfigError::HeaderValue {
                name: HH_USER_AGENT_HEADER,
                source,
            }
        })?;
        headers.insert(HeaderName::from_static(HH_USER_AGENT_HEADER), agent.clone());
        headers.insert(USER_AGENT, agent);

        Ok(headers)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_bearer_token_and_agents() {
        let config = ClientConfig::new("secret").with_user_agent("LISA HR/1.0 (admin@lisacorp.com)");
        let headers = config.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers["HH-User-Agent"], "LISA HR/1.0 (admin@lisacorp.com)");
        assert_eq!(headers[USER_AGENT], "LISA HR/1.0 (admin@lisacorp.com)");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let config = ClientConfig::new("bad\ntoken");
        assert!(matches!(
            config.headers(),
            Err(ConfigError::HeaderValue { name: "Authorization", .. })
        ));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = ClientConfig::new("secret");
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn base_url_must_parse() {
        assert!(ClientConfig::new("t").with_base_url("not a url").is_err());
        let config = ClientConfig::new("t").with_base_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8080/");
    }
}
