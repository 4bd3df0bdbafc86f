#![doc = include_str!("../README.md")]

mod api;
mod client;
mod error;
mod types;

pub use api::VoxelApi;
pub use client::VoxelClient;
pub use error::ClientError;
pub use types::*;
