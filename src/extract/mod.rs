//! Structural discovery and question/answer extraction.
//!
//! `locator` finds candidate item units under multiple page layouts;
//! `pair` turns a unit into a validated question/answer pair or rejects
//! it without aborting the run.

pub mod locator;
pub mod pair;

pub use locator::{ItemUnit, LocatorStrategy, locate_items};
pub use pair::{QaPair, RejectReason, extract_pair};
