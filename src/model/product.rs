use serde::{Deserialize, Serialize};

use super::money::format_currency;

/// A catalog record exactly as the backend sends it.
///
/// `type` discriminates the kind of product; see [`Product::from_details`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub name: String,
    pub rating: Rating,
    pub price_cents: i64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_chart_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub stars: f64,
    #[serde(default)]
    pub count: u64,
}

/// Fields every product has.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: String,
    pub image: String,
    pub name: String,
    pub rating: Rating,
    pub price_cents: i64,
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Clothing {
    pub item: Item,
    pub size_chart_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Product {
    Generic(Item),
    Clothing(Clothing),
}

pub const CLOTHING: &str = "clothing";

impl Product {
    /// The only way records become products: `type: "clothing"` makes a
    /// [`Clothing`], anything else (including no tag) a generic item.
    pub fn from_details(details: ProductDetails) -> Self {
        let item = Item {
            id: details.id,
            image: details.image,
            name: details.name,
            rating: details.rating,
            price_cents: details.price_cents,
            keywords: details.keywords,
        };

        match details.kind.as_deref() {
            Some(CLOTHING) => Product::Clothing(Clothing {
                item,
                size_chart_link: details.size_chart_link,
            }),
            _ => Product::Generic(item),
        }
    }

    pub fn item(&self) -> &Item {
        match self {
            Product::Generic(item) => item,
            Product::Clothing(c) => &c.item,
        }
    }

    pub fn id(&self) -> &str {
        &self.item().id
    }

    pub fn name(&self) -> &str {
        &self.item().name
    }

    pub fn price_cents(&self) -> i64 {
        self.item().price_cents
    }

    /// Only clothing has one.
    pub fn size_chart_link(&self) -> Option<&str> {
        match self {
            Product::Generic(_) => None,
            Product::Clothing(c) => c.size_chart_link.as_deref(),
        }
    }

    /// Rating image path; half stars map to the `-45`, `-35`, ... variants.
    pub fn stars_url(&self) -> String {
        let tenths = (self.item().rating.stars * 10.0).round() as i64;

        format!("images/ratings/rating-{tenths}.png")
    }

    pub fn price(&self) -> String {
        format!("${}", format_currency(self.price_cents()))
    }

    pub fn extra_info_html(&self) -> String {
        match self.size_chart_link() {
            Some(link) => format!(r#"<a href="{link}" target="_blank">Size Chart</a>"#),
            None => String::new(),
        }
    }
}

impl From<ProductDetails> for Product {
    fn from(value: ProductDetails) -> Self {
        Product::from_details(value)
    }
}
