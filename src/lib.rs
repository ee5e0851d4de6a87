//! Working-time and holiday accounting for part-time student contracts.
//!
//! This crate computes how many hours a student employee is expected to have
//! worked, how many holiday days remain, and what carries over when one
//! semester's contracts end and the next semester's begin. Contracts may
//! overlap, change their weekly rate mid-term, and end simultaneously; all
//! calculations take an explicit reference date instead of reading a clock,
//! so a semester rollover can re-evaluate the same metrics pinned to a past
//! date.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
