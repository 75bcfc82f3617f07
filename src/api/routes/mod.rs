//! API Routes
//!
//! Route handlers organized by functionality.

pub mod guests;
pub mod health;
pub mod pages;
