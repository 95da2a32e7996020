//! Store API
//!
//! HTTP client for the document-store operations the widget issues.

pub mod client;

pub use client::{add_expense, delete_expense, get_api_base, EXPENSES_COLLECTION, ORDER_BY_FIELD};
