//! Incentive dashboard for staff billing records.
//!
//! This crate aggregates monthly billing, cost and profit entries per sales
//! representative, computes the profit-based incentive, and serves the
//! resulting dashboard views over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
