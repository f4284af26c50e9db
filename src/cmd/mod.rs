// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   hld, config
//! ```

pub mod config;
pub mod hld;
