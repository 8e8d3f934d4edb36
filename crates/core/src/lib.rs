//! Kedai Core - Pure domain types and pricing.
//!
//! This crate provides the types and computations shared by the Kedai web
//! application:
//!
//! - [`types`] - Newtype IDs, money helpers, and the canonical role enum
//! - [`pricing`] - Order and reservation pricing (pure functions, no I/O)
//!
//! # Architecture
//!
//! The core crate contains no I/O, no database access, and no HTTP. Every
//! operation here is a total function over validated input; the web layer
//! validates payloads before anything reaches this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::*;
pub use types::*;
