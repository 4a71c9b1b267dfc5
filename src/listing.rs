pub mod entities;
pub mod service;
