//! # VoxelPlay Types
//!
//! Core types, models, and error definitions for the VoxelPlay bot.
//!
//! - **`error`** - Typed errors for token loading and configuration
//! - **`models`** - Endpoints, call specs, outcomes, account results, config
//!
//! ## Architecture Role
//!
//! ```text
//!          voxelplay-types (this crate)
//!                  │
//!        ┌─────────┴─────────┐
//!        ▼                   ▼
//! voxelplay-client ───▶ voxelplay-bot
//! ```

pub mod error;
pub mod models;

pub use error::{ConfigError, LoaderError};
