//! API Controller modules
//!
//! Consolidated controllers organized by domain.

pub mod admin;
pub mod chart;
pub mod misc;
