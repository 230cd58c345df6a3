//! NSW fuel station price server.
//!
//! Answers: "which nearby stations sell this fuel cheapest right now?"
//! Queries the NSW FuelCheck API, normalizes station names and addresses
//! for display, and filters, sorts and limits the results.

pub mod domain;
pub mod fuelcheck;
pub mod query;
pub mod web;
