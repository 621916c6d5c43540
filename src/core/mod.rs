//! # Core Application Logic
//!
//! This module contains atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (records)    │
//!                    │  • App + Route (state)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │ directory  │
//!             │  Adapter   │          │ (HTTP I/O) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the write-once country store and its load phases
//! - [`filter`]: region and search filtering for the list view
//! - [`state`]: the `App` struct and the `Route` enum
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: TOML configuration and its resolution hierarchy
//! - [`format`]: locale-grouped number formatting
//! - [`theme`]: the light/dark palettes

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod format;
pub mod state;
pub mod theme;
