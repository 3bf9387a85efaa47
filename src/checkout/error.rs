use thiserror::Error;

use crate::address::Endpoint;

/// Why a checkout resource could not be loaded.
///
/// Transport and decoding failures come from the store as `Store`; callers
/// only ever get to see [`LoadError::USER_MESSAGE`].
#[derive(Debug, Error)]
pub enum LoadError<E> {
    #[error("store error: {0}")]
    Store(E),

    #[error("nothing is served at `{0}`")]
    UnsupportedEndpoint(Endpoint),
}

impl<E> LoadError<E> {
    pub const USER_MESSAGE: &'static str = "Unexpected error. Please try again later.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

impl<E> From<E> for LoadError<E> {
    fn from(value: E) -> Self {
        LoadError::Store(value)
    }
}
