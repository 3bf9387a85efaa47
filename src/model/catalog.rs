use super::product::{Product, ProductDetails};

/// Loaded products, in backend order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn from_details(details: Vec<ProductDetails>) -> Self {
        Catalog::new(details.into_iter().map(Product::from_details).collect())
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_details(
            serde_json::from_value(json!([
                {"id": "a", "priceCents": 100, "rating": {"stars": 4}},
                {"id": "b", "priceCents": 200, "rating": {"stars": 3}, "type": "clothing"}
            ]))
            .unwrap(),
        );

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_product("b").map(|p| p.price_cents()), Some(200));
        assert!(catalog.get_product("c").is_none());
        assert_eq!(
            catalog.iter().map(|p| p.id()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert!(Catalog::default().is_empty());
    }
}
