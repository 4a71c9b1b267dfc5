pub mod chain;
pub mod entities;
pub mod error;
pub mod events;
pub mod store;
