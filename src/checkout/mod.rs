//! Loading the checkout page: products and cart, joined, then rendered.

use futures::future;

use crate::{
    address::{traits::AddressableRead, Addressable, Endpoint},
    config::Endpoints,
    location::Location,
    model::{Cart, CartItem, Catalog, ProductDetails},
    store::{Store, StoreEx},
};

pub mod error;
pub mod render;
pub mod state;

pub use error::LoadError;
pub use render::{LogRenderer, Renderer};
pub use state::CheckoutState;

/// How the two loads are sequenced and what happens when one fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadPolicy {
    /// Products first, the cart only once products are in. Render on success.
    Nested,
    /// Both at once; the first failure fails the whole load and the other
    /// load is dropped. Render on success.
    #[default]
    ParallelJoin,
    /// Products, then cart. A failure in either is logged once as
    /// [`LoadError::USER_MESSAGE`], and rendering happens anyway with
    /// whatever was loaded.
    AwaitWithRecovery,
}

/// What a page load ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLoad {
    pub rendered: bool,
    /// The user-facing message, if anything failed.
    pub failure: Option<String>,
}

impl PageLoad {
    /// Rendered and nothing failed.
    pub fn is_ok(&self) -> bool {
        self.rendered && self.failure.is_none()
    }
}

pub type LoadResult<T, S> = Result<T, LoadError<<S as Store>::Error>>;

#[derive(Clone, Debug)]
pub struct CheckoutLoader<S: Store + Addressable<Endpoint>> {
    pub catalog: Location<Endpoint, S>,
    pub cart: Location<Endpoint, S>,
}

impl<S> CheckoutLoader<S>
where
    S: Store
        + Addressable<Endpoint>
        + AddressableRead<Vec<ProductDetails>, Endpoint>
        + AddressableRead<Vec<CartItem>, Endpoint>,
{
    pub fn new(store: S, catalog: Endpoint, cart: Endpoint) -> Self {
        CheckoutLoader {
            catalog: store.sub(catalog),
            cart: store.sub(cart),
        }
    }

    pub fn from_endpoints(store: S, endpoints: &Endpoints) -> Self {
        Self::new(store, endpoints.catalog_endpoint(), endpoints.cart_endpoint())
    }

    /// Fetch the catalog and turn every record into a [`Product`](crate::model::Product).
    pub async fn load_products(&self) -> LoadResult<Catalog, S> {
        tracing::debug!(endpoint = %self.catalog.address, "loading products");

        let details = self
            .catalog
            .get::<Vec<ProductDetails>>()
            .await?
            .ok_or_else(|| LoadError::UnsupportedEndpoint(self.catalog.address.clone()))?;

        let catalog = Catalog::from_details(details);
        tracing::info!(products = catalog.len(), "loaded products");

        Ok(catalog)
    }

    pub async fn load_cart(&self) -> LoadResult<Cart, S> {
        tracing::debug!(endpoint = %self.cart.address, "loading cart");

        let items = self
            .cart
            .get::<Vec<CartItem>>()
            .await?
            .ok_or_else(|| LoadError::UnsupportedEndpoint(self.cart.address.clone()))?;

        let cart = Cart::new(items);
        tracing::info!(entries = cart.items.len(), "loaded cart");

        Ok(cart)
    }

    /// Load both resources. Only succeeds if both loads do.
    pub async fn load(&self, policy: LoadPolicy) -> LoadResult<CheckoutState, S> {
        match policy {
            LoadPolicy::ParallelJoin => {
                let (catalog, cart) =
                    future::try_join(self.load_products(), self.load_cart()).await?;

                Ok(CheckoutState::new(catalog, cart))
            }
            LoadPolicy::Nested | LoadPolicy::AwaitWithRecovery => {
                let catalog = self.load_products().await?;
                let cart = self.load_cart().await?;

                Ok(CheckoutState::new(catalog, cart))
            }
        }
    }

    /// Load according to `policy` and hand the state to `renderer`.
    ///
    /// Never fails: problems are logged and reported in [`PageLoad::failure`].
    pub async fn load_page<R: Renderer + ?Sized>(
        &self,
        policy: LoadPolicy,
        renderer: &mut R,
    ) -> PageLoad {
        match policy {
            LoadPolicy::Nested | LoadPolicy::ParallelJoin => match self.load(policy).await {
                Ok(state) => {
                    renderer.render(&state);

                    PageLoad {
                        rendered: true,
                        failure: None,
                    }
                }
                Err(err) => PageLoad {
                    rendered: false,
                    failure: Some(report(policy, &err)),
                },
            },
            LoadPolicy::AwaitWithRecovery => {
                let mut state = CheckoutState::default();

                let loaded: LoadResult<(), S> = async {
                    state.catalog = self.load_products().await?;
                    state.cart = self.load_cart().await?;
                    Ok(())
                }
                .await;

                let failure = loaded.err().map(|err| report(policy, &err));

                renderer.render(&state);

                PageLoad {
                    rendered: true,
                    failure,
                }
            }
        }
    }
}

fn report<E: std::fmt::Display>(policy: LoadPolicy, err: &LoadError<E>) -> String {
    tracing::error!(?policy, error = %err, "{}", err.user_message());

    err.user_message().to_owned()
}
