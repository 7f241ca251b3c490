//! UI components for the storefront.

mod about;
mod account;
mod app;
mod cart_page;
mod checkout;
mod collection;
mod home;
mod loader;
mod navbar;
mod product;
mod wordmark;

pub use about::*;
pub use account::*;
pub use app::*;
pub use cart_page::*;
pub use checkout::*;
pub use collection::*;
pub use home::*;
pub use loader::*;
pub use navbar::*;
pub use product::*;
pub use wordmark::*;
