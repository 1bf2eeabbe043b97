//! Local activity log for the lifelink blood-donation app.
//!
//! A bounded, filterable record of completed user actions (appointments
//! booked, campaigns created or joined, donations, profile edits), persisted
//! through a pluggable key-value store. Reads fail soft to an empty list and
//! writes fail soft to a no-op so callers never block on log failures.

pub mod factory;
pub mod filter;
pub mod log;
pub mod migrate;
pub mod store;
pub mod types;
