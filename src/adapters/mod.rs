//! Infrastructure adapters. Implement ports.
//!
//! LLM providers and the terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
