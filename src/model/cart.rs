use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

fn default_delivery_option() -> String {
    "1".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_delivery_option")]
    pub delivery_option_id: String,
}

/// The user's saved cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Total number of units across all entries.
    pub fn quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
