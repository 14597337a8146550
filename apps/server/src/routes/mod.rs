//! HTTP route handlers

pub mod items;
pub mod ratings;
pub mod sessions;
