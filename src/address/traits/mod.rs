use crate::store::StoreResult;

pub use super::{Address, Addressable, SubAddress};

pub trait AddressableRead<Value, A: Address>: Addressable<A> {
    /// `Ok(None)` means the store has nothing at this address.
    async fn read(&self, addr: &A) -> StoreResult<Option<Value>, Self>;
}
