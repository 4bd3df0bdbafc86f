//! Domain models for the VoxelPlay bot.

mod config;
mod endpoint;
mod mission;
mod outcome;

pub use config::{BotConfig, RetryPolicy, DEFAULT_BASE_URL};
pub use endpoint::{format_endpoint_name, ActionRequest, Endpoint, EndpointCall};
pub use mission::{MissionRotation, DEFAULT_MISSION_IDS};
pub use outcome::{AccountResult, FailureReason, Outcome};
