//! Account session: profile and order history.

use chrono::{DateTime, Local};

use super::cart::CartLine;

/// A signed-in profile. Sign-in is session-local; there is no backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub email: String,
    pub display_name: String,
}

/// An order placed during this session.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    pub placed_at: DateTime<Local>,
    pub lines: Vec<CartLine>,
    pub total_cents: u64,
}

impl Order {
    /// Placement date formatted for the orders page.
    pub fn display_date(&self) -> String {
        self.placed_at.format("%-d %B %Y").to_string()
    }
}

/// Profile plus the orders placed while signed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    profile: Option<Profile>,
    orders: Vec<Order>,
    next_order_seq: u32,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in with an email address. The display name is the local part.
    pub fn sign_in(&mut self, email: &str) {
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        self.profile = Some(Profile {
            email: email.to_string(),
            display_name,
        });
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Records an order and returns its id.
    pub fn place_order(&mut self, lines: Vec<CartLine>, total_cents: u64) -> String {
        self.next_order_seq += 1;
        let id = format!("VLR-{:04}", self.next_order_seq);
        self.orders.push(Order {
            id: id.clone(),
            placed_at: Local::now(),
            lines,
            total_cents,
        });
        id
    }

    /// Orders, newest first.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().rev()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// The most recently placed order, if any.
    pub fn latest_order(&self) -> Option<&Order> {
        self.orders.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_derives_display_name() {
        let mut auth = AuthState::new();
        auth.sign_in("lena@atelier.example");
        let profile = auth.profile().unwrap();
        assert_eq!(profile.display_name, "lena");
        assert!(auth.is_signed_in());

        auth.sign_out();
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let mut auth = AuthState::new();
        auth.sign_in("lena@atelier.example");
        let first = auth.place_order(vec![], 0);
        let second = auth.place_order(vec![], 0);
        assert_eq!(first, "VLR-0001");
        assert_eq!(second, "VLR-0002");
    }

    #[test]
    fn test_orders_listed_newest_first() {
        let mut auth = AuthState::new();
        auth.place_order(vec![], 100);
        auth.place_order(vec![], 200);
        let ids: Vec<_> = auth.orders().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec!["VLR-0002", "VLR-0001"]);
        assert_eq!(auth.latest_order().unwrap().id, "VLR-0002");
    }
}
