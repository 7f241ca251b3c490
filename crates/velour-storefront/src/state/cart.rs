//! Cart contents for the session.

use velour_catalog::{Product, format_price};

/// One cart line. Adding the same piece again merges into the quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub slug: String,
    pub name: String,
    pub line: String,
    pub price_cents: u64,
    pub quantity: u32,
}

impl CartLine {
    /// Line total formatted for display.
    pub fn display_total(&self) -> String {
        format_price(self.price_cents * u64::from(self.quantity))
    }
}

/// The cart. Session-local; nothing persists across launches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product, merging with an existing line.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.slug == product.slug) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                slug: product.slug.clone(),
                name: product.name.clone(),
                line: product.line.clone(),
                price_cents: product.price_cents,
                quantity: 1,
            });
        }
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, slug: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(slug);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.slug == slug) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, slug: &str) {
        self.lines.retain(|l| l.slug != slug);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines, shown on the navbar cart link.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| l.price_cents * u64::from(l.quantity))
            .sum()
    }

    /// Subtotal formatted for display.
    pub fn display_subtotal(&self) -> String {
        format_price(self.subtotal_cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(slug: &str, cents: u64) -> Product {
        Product {
            slug: slug.to_string(),
            name: slug.to_string(),
            line: "Evening".to_string(),
            price_cents: cents,
            description: String::new(),
            details: vec![],
            palette: vec![],
        }
    }

    #[test]
    fn test_adding_twice_merges_quantity() {
        let mut cart = CartState::new();
        let piece = product("velvet-ember", 132000);
        cart.add(&piece);
        cart.add(&piece);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal_cents(), 264000);
    }

    #[test]
    fn test_zero_quantity_removes_the_line() {
        let mut cart = CartState::new();
        cart.add(&product("noir-atlas", 185000));
        cart.set_quantity("noir-atlas", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_ignores_unknown_slugs() {
        let mut cart = CartState::new();
        cart.add(&product("noir-atlas", 185000));
        cart.set_quantity("pale-harbor", 3);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_subtotal_spans_lines() {
        let mut cart = CartState::new();
        cart.add(&product("noir-atlas", 185000));
        cart.add(&product("pale-harbor", 72000));
        cart.set_quantity("pale-harbor", 2);
        assert_eq!(cart.subtotal_cents(), 185000 + 144000);
        assert_eq!(cart.display_subtotal(), "€3,290");
    }
}
