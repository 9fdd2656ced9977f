//! Contact page controller: page state, backend bridge, and terminal surface.

pub mod backend_bridge;
pub mod controller;
pub mod page;
pub mod ui;

pub use backend_bridge::{launch, BackendBridge};
pub use page::ContactPage;
