use std::fmt::Debug;

pub mod endpoint;
pub mod traits;

pub use endpoint::Endpoint;

/// Must be a syntactically valid address: successfully parsed, but not yet validated.
///
/// You will want to implement [`SubAddress<NextPart>`](SubAddress) for this if your store
/// supports several layers of indirection, as `location.sub(addr_part: NextPart)` will add them.
pub trait Address: Eq + Clone + Debug + 'static {
    /// This should be an addressable, unique id in the container (not the whole path)
    fn own_name(&self) -> String;

    /// The whole path
    fn as_parts(&self) -> Vec<String>;
}

pub trait Addressable<A: Address>: crate::store::Store {
    /// What `location.getv()` reads when you don't ask for anything more specific.
    type DefaultValue;
}

pub trait SubAddress<Sub>: Address {
    type Output: Address;

    fn sub(self, sub: Sub) -> Self::Output;
}
