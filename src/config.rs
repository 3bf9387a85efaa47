//! Where checkout data comes from.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::address::Endpoint;

pub const DEFAULT_BASE_URL: &str = "https://supersimplebackend.dev";

pub const BASE_URL_VAR: &str = "CHECKOUT_BASE_URL";
pub const CATALOG_PATH_VAR: &str = "CHECKOUT_CATALOG_PATH";
pub const CART_PATH_VAR: &str = "CHECKOUT_CART_PATH";
pub const RATE_LIMIT_VAR: &str = "CHECKOUT_RATE_LIMIT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub base_url: String,
    pub catalog: String,
    pub cart: String,
    /// Pace the HTTP store to this many requests per second.
    pub requests_per_second: Option<NonZeroUsize>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            base_url: DEFAULT_BASE_URL.to_owned(),
            catalog: "products".to_owned(),
            cart: "cart".to_owned(),
            requests_per_second: None,
        }
    }
}

impl Endpoints {
    /// Defaults, overridden by `CHECKOUT_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut e = Endpoints::default();

        if let Some(v) = lookup(BASE_URL_VAR) {
            e.base_url = v;
        }
        if let Some(v) = lookup(CATALOG_PATH_VAR) {
            e.catalog = v;
        }
        if let Some(v) = lookup(CART_PATH_VAR) {
            e.cart = v;
        }
        if let Some(v) = lookup(RATE_LIMIT_VAR) {
            let count = v
                .parse::<NonZeroUsize>()
                .map_err(|err| anyhow::anyhow!("{RATE_LIMIT_VAR}={v:?}: {err}"))?;
            e.requests_per_second = Some(count);
        }

        Ok(e)
    }

    pub fn catalog_endpoint(&self) -> Endpoint {
        Endpoint::parse(&self.catalog)
    }

    pub fn cart_endpoint(&self) -> Endpoint {
        Endpoint::parse(&self.cart)
    }
}
