//! Per-action client methods organized by category.
//!
//! Each module adds methods to `TumblrClient` for a group of related
//! actions, assembling that action's parameters and returning the captured
//! `ApiResponse`.

pub mod account;
pub mod dashboard;
pub mod likes;
pub mod posting;
pub mod reading;
