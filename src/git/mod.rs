// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Git operations module.
//!
//! ```text
//!         Public API
//!   query.rs  cmd.rs  publish.rs
//!        \      |      /
//!         v     v     v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!     GitQuery    ShellBackend
//!    (gix, read)  (CLI, write)
//!         |          |
//!         v          v
//!    GixBackend   git binary
//!    .is_repo     .checkout -b
//!    .branch      .add/commit
//!                 .push -u
//! ```
//!
//! **`GixBackend`** — pure Rust, no subprocess, read-only.
//! **`ShellBackend`** — git CLI through `tokio::process` for everything
//! that writes; one publish chain is the only network-bound operation.

pub mod backend;
pub mod cmd;
pub mod publish;
pub mod query;

#[cfg(test)]
mod tests;
