use std::fmt::Display;

use super::{Address, SubAddress};

/// Path of a resource relative to a store's base, e.g. `products` or `v1/cart`.
///
/// `Endpoint::root()` is the empty path; `sub` appends segments.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Endpoint(Vec<String>);

impl Endpoint {
    pub fn root() -> Self {
        Endpoint(vec![])
    }

    /// Split a `/`-separated path into segments, ignoring empty ones.
    pub fn parse(path: &str) -> Self {
        Endpoint(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_owned())
                .collect(),
        )
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        Endpoint::parse(value)
    }
}

impl From<String> for Endpoint {
    fn from(value: String) -> Self {
        Endpoint::parse(&value)
    }
}

impl Address for Endpoint {
    fn own_name(&self) -> String {
        self.0.last().cloned().unwrap_or_default()
    }

    fn as_parts(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl SubAddress<&str> for Endpoint {
    type Output = Endpoint;

    fn sub(mut self, sub: &str) -> Self::Output {
        self.0.extend(Endpoint::parse(sub).0);
        self
    }
}

impl SubAddress<Endpoint> for Endpoint {
    type Output = Endpoint;

    fn sub(mut self, sub: Endpoint) -> Self::Output {
        self.0.extend(sub.0);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_and_sub() {
        let e = Endpoint::root().sub("v1").sub("/products/");

        assert_eq!(e.to_string(), "v1/products");
        assert_eq!(e.own_name(), "products");
        assert_eq!(e.as_parts(), vec!["v1".to_owned(), "products".to_owned()]);
        assert_eq!(e, Endpoint::from("v1//products"));

        assert!(Endpoint::parse("/").is_root());
        assert_eq!(Endpoint::root().own_name(), "");
    }
}
