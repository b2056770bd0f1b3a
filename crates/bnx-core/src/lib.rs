//! # bnx-core
//!
//! Core types, display lookups, and error types for BioNext.
//!
//! This crate provides the foundational types shared across all BioNext crates:
//! - Entity structs for the domain (sessions, research projects, analyses, charts, reports)
//! - Category/status enums with their French labels and badge colours
//! - The screen navigation state machine
//! - fr-FR number and date formatting helpers
//! - Cross-cutting error types

pub mod color;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod navigation;
