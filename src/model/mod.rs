//! Records decoded from the storefront backend.

pub mod cart;
pub mod catalog;
pub mod money;
pub mod product;

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use product::{Clothing, Item, Product, ProductDetails, Rating};
