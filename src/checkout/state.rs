use crate::model::{Cart, CartItem, Catalog, Product};

/// Everything a renderer needs, owned by whoever loaded it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutState {
    pub catalog: Catalog,
    pub cart: Cart,
}

impl CheckoutState {
    pub fn new(catalog: Catalog, cart: Cart) -> Self {
        CheckoutState { catalog, cart }
    }

    /// Cart entries with the product they refer to, if the catalog has it.
    pub fn order_lines(&self) -> impl Iterator<Item = (&CartItem, Option<&Product>)> + '_ {
        self.cart
            .items
            .iter()
            .map(|item| (item, self.catalog.get_product(&item.product_id)))
    }

    /// Sum of price × quantity over the lines whose product is known.
    ///
    /// `None` if the total does not fit in an `i64`.
    pub fn items_total_cents(&self) -> Option<i64> {
        self.order_lines()
            .filter_map(|(item, product)| Some((product?.price_cents(), item.quantity)))
            .try_fold(0i64, |total, (price, quantity)| {
                total.checked_add(price.checked_mul(i64::from(quantity))?)
            })
    }
}
