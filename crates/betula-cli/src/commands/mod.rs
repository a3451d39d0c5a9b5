//! Command handlers

pub mod post;
