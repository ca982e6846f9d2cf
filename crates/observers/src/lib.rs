//! Reusable observers for the Sightfix solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solver event and action types.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanReject`])
//! - [`budget`] — [`EvalBudget`], which stops a solver after a fixed number of
//!   evaluations
//! - [`threshold`] — [`GoodEnough`], which stops a solver once an objective
//!   falls below a tolerance
//!
//! [`Observer`]: sightfix_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanReject`]: traits::CanReject

pub mod budget;
pub mod threshold;
pub mod traits;

pub use budget::EvalBudget;
pub use threshold::GoodEnough;
