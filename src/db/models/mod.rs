//! Database Models

// Catalog
pub mod menu_item;

// Cart
pub mod cart;

// Orders
pub mod order;

// Re-exports
pub use cart::{Cart, CartDetail, CartItemCreate, CartItemUpdate, CartLine, CartLineDetail, CartSummary};
pub use menu_item::{MenuItem, MenuItemCreate};
pub use order::{Order, OrderConfirmation, OrderStatus};
