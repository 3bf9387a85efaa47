use std::{collections::HashMap, sync::Arc, time::Duration};

use derive_more::{Display, From};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::{
    address::{traits::AddressableRead, Addressable, Endpoint},
    store::{Store, StoreResult},
};

#[derive(From, Display, Debug, Error)]
pub enum MemoryStoreError {
    #[from(ignore)]
    Unavailable(String),
    Json(serde_json::Error),
}

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Fail(String),
}

/// What happened on a read, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Started(Endpoint),
    Finished(Endpoint),
}

/// Scripted in-process store: every endpoint answers with a fixed JSON
/// value or a fixed failure, optionally after a delay.
///
/// Every read is journaled, which makes it handy for checking in what order
/// loads actually ran.
///
/// ```
/// use checkout_loader::address::Endpoint;
/// use checkout_loader::store::StoreEx;
/// use checkout_loader::stores::memory::MemoryJsonStore;
/// use serde_json::json;
///
/// # tokio_test::block_on(async {
/// let store = MemoryJsonStore::new().with_json("answer", json!(42));
///
/// let v = store.sub(Endpoint::from("answer")).get::<u32>().await?;
///
/// assert_eq!(v, Some(42));
/// # Ok::<(), checkout_loader::stores::memory::MemoryStoreError>(())
/// # }).unwrap()
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryJsonStore {
    routes: Arc<HashMap<Endpoint, Reply>>,
    delays: Arc<HashMap<Endpoint, Duration>>,
    journal: Arc<Mutex<Vec<Access>>>,
}

impl MemoryJsonStore {
    pub fn new() -> Self {
        Default::default()
    }

    fn route(mut self, endpoint: Endpoint, reply: Reply) -> Self {
        Arc::make_mut(&mut self.routes).insert(endpoint, reply);
        self
    }

    pub fn with_json(self, endpoint: impl Into<Endpoint>, value: Value) -> Self {
        self.route(endpoint.into(), Reply::Json(value))
    }

    pub fn with_failure(self, endpoint: impl Into<Endpoint>, message: &str) -> Self {
        self.route(endpoint.into(), Reply::Fail(message.to_owned()))
    }

    /// Reads of `endpoint` only answer after `delay`, whatever the answer is
    /// and whenever it gets scripted.
    pub fn with_delay(mut self, endpoint: impl Into<Endpoint>, delay: Duration) -> Self {
        Arc::make_mut(&mut self.delays).insert(endpoint.into(), delay);
        self
    }

    pub async fn journal(&self) -> Vec<Access> {
        self.journal.lock().await.clone()
    }

    /// How many reads of `endpoint` have started.
    pub async fn hits(&self, endpoint: impl Into<Endpoint>) -> usize {
        let endpoint: Endpoint = endpoint.into();

        self.journal
            .lock()
            .await
            .iter()
            .filter(|a| matches!(a, Access::Started(e) if *e == endpoint))
            .count()
    }
}

impl Store for MemoryJsonStore {
    type Error = MemoryStoreError;
}

impl Addressable<Endpoint> for MemoryJsonStore {
    type DefaultValue = Value;
}

impl<V: DeserializeOwned> AddressableRead<V, Endpoint> for MemoryJsonStore {
    async fn read(&self, addr: &Endpoint) -> StoreResult<Option<V>, Self> {
        self.journal.lock().await.push(Access::Started(addr.clone()));

        if let Some(delay) = self.delays.get(addr) {
            tokio::time::sleep(*delay).await;
        }

        self.journal.lock().await.push(Access::Finished(addr.clone()));

        match self.routes.get(addr) {
            None => Ok(None),
            Some(Reply::Json(v)) => Ok(Some(serde_json::from_value(v.clone())?)),
            Some(Reply::Fail(msg)) => Err(MemoryStoreError::Unavailable(msg.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::*;
    use crate::store::StoreEx;

    #[tokio::test]
    async fn test_replies() -> Result<(), anyhow::Error> {
        let store = MemoryJsonStore::new()
            .with_json("ok", json!({"a": 1}))
            .with_json("words", json!(["x", "y"]))
            .with_failure("broken", "connection reset");

        assert_eq!(store.sub(Endpoint::from("ok")).getv().await?, Some(json!({"a": 1})));
        assert_eq!(
            store.sub(Endpoint::from("words")).get::<Vec<String>>().await?,
            Some(vec!["x".to_owned(), "y".to_owned()])
        );
        assert_eq!(store.sub(Endpoint::from("nothing")).getv().await?, None);

        let err = store
            .sub(Endpoint::from("broken"))
            .get::<Value>()
            .await
            .unwrap_err();
        assert!(matches!(err, MemoryStoreError::Unavailable(_)));
        assert_eq!(err.to_string(), "connection reset");

        let err = store
            .sub(Endpoint::from("words"))
            .get::<Vec<u32>>()
            .await
            .unwrap_err();
        assert!(matches!(err, MemoryStoreError::Json(_)));

        assert_eq!(store.hits("words").await, 2);
        assert_eq!(store.journal().await.len(), 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_clones_share_journal() {
        let store = MemoryJsonStore::new().with_json("a", json!(1));
        let other = store.clone();

        let _ = other.sub(Endpoint::from("a")).get::<u8>().await;

        assert_eq!(
            store.journal().await,
            vec![
                Access::Started(Endpoint::from("a")),
                Access::Finished(Endpoint::from("a"))
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_in_any_order() -> Result<(), anyhow::Error> {
        let store = MemoryJsonStore::new()
            .with_delay("slow", Duration::from_secs(3))
            .with_json("slow", json!(1))
            .with_delay("missing", Duration::from_secs(2))
            .with_json("fast", json!(2));

        let start = tokio::time::Instant::now();
        assert_eq!(store.sub(Endpoint::from("fast")).get::<u8>().await?, Some(2));
        assert_eq!(tokio::time::Instant::now() - start, Duration::ZERO);

        assert_eq!(store.sub(Endpoint::from("slow")).get::<u8>().await?, Some(1));
        assert!(tokio::time::Instant::now() - start >= Duration::from_secs(3));

        assert_eq!(store.sub(Endpoint::from("missing")).get::<u8>().await?, None);
        assert!(tokio::time::Instant::now() - start >= Duration::from_secs(5));

        Ok(())
    }
}
