//! Core traits for the Sightfix toolkit.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! navigation code build on:
//!
//! - [`Objective`] — a deterministic scalar function of `N` solver variables
//! - [`Observer`] — receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::Objective;
pub use observer::Observer;
