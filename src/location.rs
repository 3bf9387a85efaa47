use crate::{
    address::{traits::AddressableRead, Address, Addressable, SubAddress},
    store::{Store, StoreResult},
};

/// A pair of a store and an address. You can pass this object around,
/// use it to navigate the store, and read values.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Location<Addr: Address, S: Store + Addressable<Addr>> {
    pub store: S,
    pub address: Addr,
}

impl<V, Addr: Address, S: Store + Addressable<Addr, DefaultValue = V>> Location<Addr, S> {
    /// Get a Value of the default type for this address.
    pub async fn getv(&self) -> StoreResult<Option<V>, S>
    where
        S: AddressableRead<V, Addr>,
    {
        self.get().await
    }
}

impl<Addr: Address, S: Store + Addressable<Addr>> Location<Addr, S> {
    /// Type-safe navigation. Every store defines its own address types.
    ///
    /// ```
    /// # use checkout_loader::address::Endpoint;
    /// # use checkout_loader::store::StoreEx;
    /// # use checkout_loader::stores::memory::MemoryJsonStore;
    /// let location = MemoryJsonStore::new().sub(Endpoint::root()).sub("v1").sub("products");
    ///
    /// assert_eq!(location.address.to_string(), "v1/products");
    /// ```
    pub fn sub<AR: Address, A2>(self, address: A2) -> Location<AR, S>
    where
        Addr: SubAddress<A2, Output = AR>,
        S: Addressable<AR>,
    {
        Location::new(self.address.sub(address), self.store)
    }

    /// Get a Value of a particular type from the store, if the store supports that.
    ///
    /// Often it's easier to use `location.getv()`, as it will return the default type
    /// for this kind of location.
    ///
    /// `None` means that the value doesn't exist.
    pub async fn get<Value>(&self) -> StoreResult<Option<Value>, S>
    where
        S: AddressableRead<Value, Addr>,
    {
        self.store.read(&self.address).await
    }

    /// Typically it's better to use `store.sub(address)`
    pub fn new(address: Addr, store: S) -> Self {
        Location { store, address }
    }
}
