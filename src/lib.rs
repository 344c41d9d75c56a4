pub mod action;
pub mod error;
pub mod item;
pub mod reader;
pub mod session;
pub mod store;
pub mod view;
