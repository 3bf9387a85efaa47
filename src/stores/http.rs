use std::{collections::HashMap, num::NonZeroUsize, sync::Arc, time::Duration};

use derive_more::{Display, From};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::{
    address::{traits::AddressableRead, Addressable, Endpoint},
    config::Endpoints,
    store::{Store, StoreResult},
    util::ratelimiter::Ratelimiter,
};

#[derive(From, Display, Debug, Error)]
pub enum HttpStoreError {
    Custom(String),
    HttpError(reqwest::Error),
    JsonError(serde_json::Error),

    #[from(ignore)]
    #[display(fmt = "unexpected status {}", _0)]
    Status(StatusCode),
}

impl<'a> From<&'a str> for HttpStoreError {
    fn from(value: &'a str) -> Self {
        HttpStoreError::Custom(value.to_owned())
    }
}

/// Reads JSON documents with `GET {base_url}/{endpoint}`.
///
/// A `404` reads as "nothing there" (`Ok(None)`), any other non-success
/// status is an error.
#[derive(Clone)]
pub struct HttpJsonStore {
    base_url: Arc<str>,
    http_client: reqwest::Client,
    ratelimiter: Option<Arc<Ratelimiter>>,
}

impl HttpJsonStore {
    pub fn new(base_url: &str) -> Result<Self, HttpStoreError> {
        let headers = (&HashMap::from([(
            "Accept".to_owned(),
            "application/json".to_owned(),
        )]))
            .try_into()
            .map_err(|_| "invalid default headers")?;

        Ok(HttpJsonStore {
            base_url: base_url.trim_end_matches('/').into(),
            http_client: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
            ratelimiter: None,
        })
    }

    pub fn from_endpoints(endpoints: &Endpoints) -> Result<Self, HttpStoreError> {
        let store = HttpJsonStore::new(&endpoints.base_url)?;

        Ok(match endpoints.requests_per_second {
            Some(count) => store.with_ratelimit(Duration::from_secs(1), count),
            None => store,
        })
    }

    /// Pace requests to at most `count` per `duration`, shared by all clones.
    pub fn with_ratelimit(mut self, duration: Duration, count: NonZeroUsize) -> Self {
        self.ratelimiter = Some(Arc::new(Ratelimiter::new(duration, count)));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        if endpoint.is_root() {
            self.base_url.to_string()
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    async fn request(&self, endpoint: &Endpoint) -> Result<Option<String>, HttpStoreError> {
        if let Some(ratelimiter) = &self.ratelimiter {
            ratelimiter.ask().await;
        }

        let url = self.url_for(endpoint);
        tracing::debug!(%url, "GET");

        let resp = self.http_client.get(&url).send().await?;

        match resp.status() {
            status if status == StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(HttpStoreError::Status(status)),
            _ => Ok(Some(resp.text().await?)),
        }
    }
}

impl std::fmt::Debug for HttpJsonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpJsonStore")
            .field("base_url", &self.base_url)
            .field("ratelimited", &self.ratelimiter.is_some())
            .finish()
    }
}

impl Store for HttpJsonStore {
    type Error = HttpStoreError;
}

impl Addressable<Endpoint> for HttpJsonStore {
    type DefaultValue = Value;
}

impl<V: DeserializeOwned> AddressableRead<V, Endpoint> for HttpJsonStore {
    async fn read(&self, addr: &Endpoint) -> StoreResult<Option<V>, Self> {
        let Some(body) = self.request(addr).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[cfg(test)]
mod test_http {
    use serde_json::{json, Value};
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::store::StoreEx;

    #[tokio::test]
    async fn test_reads_json() -> Result<(), anyhow::Error> {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/products"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}])))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpJsonStore::new(&format!("{}/", server.uri()))?;
        let v = store.sub(Endpoint::from("products")).getv().await?;

        assert_eq!(v, Some(json!([{"id": "1"}])));

        Ok(())
    }

    #[tokio::test]
    async fn test_not_found_is_none() -> Result<(), anyhow::Error> {
        let server = MockServer::start().await;
        let store = HttpJsonStore::new(&server.uri())?;

        let v = store.sub(Endpoint::from("nope")).get::<Value>().await?;

        assert_eq!(v, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_failures() -> Result<(), anyhow::Error> {
        let server = MockServer::start().await;

        Mock::given(path("/cart"))
            .respond_with(ResponseTemplate::new(200).set_body_string("load cart"))
            .mount(&server)
            .await;
        Mock::given(path("/down"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let store = HttpJsonStore::new(&server.uri())?;

        let err = store
            .sub(Endpoint::from("cart"))
            .get::<Value>()
            .await
            .unwrap_err();
        assert!(matches!(err, HttpStoreError::JsonError(_)));

        let err = store
            .sub(Endpoint::from("down"))
            .get::<Value>()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HttpStoreError::Status(s) if s == StatusCode::SERVICE_UNAVAILABLE
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_transport_error() -> Result<(), anyhow::Error> {
        let err = HttpJsonStore::new("http://127.0.0.1:1")?
            .sub(Endpoint::from("products"))
            .get::<Value>()
            .await
            .unwrap_err();

        assert!(matches!(err, HttpStoreError::HttpError(_)));

        Ok(())
    }

    #[test]
    fn test_url_for() -> Result<(), HttpStoreError> {
        let store = HttpJsonStore::new("https://example.test/api/")?;

        assert_eq!(store.base_url(), "https://example.test/api");
        assert_eq!(
            store.url_for(&Endpoint::from("products")),
            "https://example.test/api/products"
        );
        assert_eq!(store.url_for(&Endpoint::root()), "https://example.test/api");

        Ok(())
    }
}
