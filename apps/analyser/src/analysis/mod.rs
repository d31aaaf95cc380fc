//! The text-analysis and scoring pipeline.
//!
//! Leaf components ([`keywords`], [`sections`], [`skills`]) are pure and
//! total; [`keyword_match`] and [`scoring`] combine them and are independent
//! of each other, so callers may run both concurrently.

pub mod keyword_match;
pub mod keywords;
pub mod scoring;
pub mod sections;
pub mod skills;
