//! Kedai Site library.
//!
//! This crate provides the web application as a library, allowing it to be
//! tested in-process and reused by the integration-tests crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
