use crate::{
    address::{Address, Addressable},
    location::Location,
};

/// Main store driver
///
/// This and the related traits are what you need to implement
/// if you want to serve checkout data from somewhere new.
pub trait Store: Clone {
    type Error: std::fmt::Debug + std::fmt::Display + Send + Sync + 'static;
}

pub trait StoreEx: Store {
    /// Pair an address with this store.
    fn sub<Addr: Address>(&self, addr: Addr) -> Location<Addr, Self>
    where
        Self: Addressable<Addr>,
    {
        Location::new(addr, self.clone())
    }
}

impl<S: Store> StoreEx for S {}

pub type StoreResult<V, S> = Result<V, <S as Store>::Error>;
