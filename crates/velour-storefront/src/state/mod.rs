//! Session state beyond navigation: cart contents and the account.

mod auth;
mod cart;

pub use auth::*;
pub use cart::*;
