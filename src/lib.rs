#![allow(async_fn_in_trait)]

//! # checkout-loader
//!
//! `checkout-loader` loads what a storefront checkout page needs (the product
//! catalog and the user's saved cart) from an arbitrary store, joins the two
//! loads and hands the result to a renderer.
//!
//! # Quick example
//!
//! ```
//! use checkout_loader::checkout::{CheckoutLoader, CheckoutState, LoadPolicy};
//! use checkout_loader::config::Endpoints;
//! use checkout_loader::stores::memory::MemoryJsonStore;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let store = MemoryJsonStore::new()
//!     .with_json("products", json!([{"id": "1", "priceCents": 1999, "rating": {"stars": 4}}]))
//!     .with_json("cart", json!([{"productId": "1", "quantity": 3}]));
//!
//! let loader = CheckoutLoader::from_endpoints(store, &Endpoints::default());
//!
//! let mut total = None;
//! let page = loader
//!     .load_page(LoadPolicy::ParallelJoin, &mut |s: &CheckoutState| {
//!         total = s.items_total_cents()
//!     })
//!     .await;
//!
//! assert!(page.rendered);
//! assert_eq!(total, Some(5997));
//! # })
//! ```
//!
//! # Main concepts
//!
//! ## Address
//!
//! A store is defined around the concept of [`address::Address`]. Address uniquely identifies
//! a piece of content; here that's mostly [`address::Endpoint`], a path relative to the store.
//!
//! If a store understands an address, it implements [traits][`address::traits`] like
//! [`address::traits::AddressableRead`]. `AddressableRead<SomeType, SomeAddr>` means that
//! `SomeAddr` can be used to read a value of `SomeType`.
//!
//! ## Location
//!
//! [`location::Location`] is simply a pair of an address and a store. This is the value you'd
//! most typically pass around, and it's what [`checkout::CheckoutLoader`] holds for the
//! catalog and the cart.
//!
//! ## Load policies
//!
//! [`checkout::LoadPolicy`] decides whether the catalog and cart are loaded one after the
//! other or concurrently, and whether a failure still renders the page.
//!
//! # Supported stores
//!
//! - [`stores::memory::MemoryJsonStore`]: scripted replies, for tests and offline use
//! - `stores::http::HttpJsonStore`: JSON over HTTP (feature `http`, on by default)
pub mod store;

pub mod address;
pub mod checkout;
pub mod config;
pub mod location;
pub mod model;
pub mod stores;
pub mod telemetry;
pub mod util;
