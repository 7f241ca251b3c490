//! # Velour Catalog
//!
//! Embedded product catalog for the Velour storefront.
//!
//! The catalog ships inside the binary as JSON and parses once at startup.
//! Lookups after that are synchronous; a slug that resolves to nothing is an
//! ordinary [`None`], which the storefront answers by showing the full
//! collection rather than an error page.

use serde::Deserialize;
use thiserror::Error;

/// Catalog data compiled into the binary.
const CATALOG_JSON: &str = include_str!("../assets/products.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One piece in the collection.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    pub slug: String,
    pub name: String,
    /// The line the piece belongs to (Evening, Tailoring, ...).
    pub line: String,
    pub price_cents: u64,
    pub description: String,
    /// Fabric and construction notes shown on the detail page.
    pub details: Vec<String>,
    /// Hex swatches for the detail page palette strip.
    pub palette: Vec<String>,
}

impl Product {
    /// Price formatted for display.
    pub fn display_price(&self) -> String {
        format_price(self.price_cents)
    }
}

/// Formats a cent amount as a whole-euro price tag, grouped by thousands.
pub fn format_price(cents: u64) -> String {
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("€{grouped}")
}

/// The product catalog. Listing order is the embedded order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parses the embedded catalog.
    pub fn load() -> Result<Self, CatalogError> {
        Self::parse(CATALOG_JSON)
    }

    /// Parses catalog JSON. Exposed so tests can feed fixture data.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let products = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    /// An empty catalog, the fallback when the embedded data will not parse.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Synchronous slug lookup.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_slugs_are_unique() {
        let catalog = Catalog::load().unwrap();
        let mut slugs: Vec<_> = catalog.products().iter().map(|p| p.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn test_lookup_by_slug() {
        let catalog = Catalog::load().unwrap();
        let product = catalog.product_by_slug("midnight-rose").unwrap();
        assert_eq!(product.name, "Midnight Rose");
        assert!(!product.palette.is_empty());
    }

    #[test]
    fn test_unknown_slug_is_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.product_by_slug("winter-static").is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Catalog::parse("{not json").is_err());
        assert!(Catalog::parse(r#"[{"slug": "x"}]"#).is_err());
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(248000), "€2,480");
        assert_eq!(format_price(64000), "€640");
        assert_eq!(format_price(0), "€0");
        assert_eq!(format_price(123456789), "€1,234,567");
    }
}
