//! # survey-core
//!
//! Core types, validation rules, and error types for the BI survey backend.
//!
//! This crate provides the foundational types shared across all survey crates:
//! - Entity structs for reports and survey responses
//! - Rating and comment validation with the limits the form enforces
//! - `Listing<T>`, the explicit result type for degradable catalog reads
//! - JSON payloads returned by the HTTP surface
//! - The fixed civil-time clock used to stamp submissions

pub mod clock;
pub mod entities;
pub mod errors;
pub mod listing;
pub mod responses;
pub mod validation;
