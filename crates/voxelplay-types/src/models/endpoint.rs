//! Game API endpoints and the request bodies sent to them.

use serde::{Deserialize, Serialize};

/// One of the six game API actions performed for every account.
///
/// Declaration order is the execution and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Claims daily progress (carries a progress value)
    Progress,
    /// Triggers a random in-game build
    BuildRandom,
    /// Fetches user state
    User,
    /// Fetches the blockchain pillar layout
    BlockchainLayoutPillar,
    /// Verifies a mission (carries a mission id)
    MissionVerify,
    /// Claims inventory rewards
    InventoryClaim,
}

impl Endpoint {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Progress,
        Self::BuildRandom,
        Self::User,
        Self::BlockchainLayoutPillar,
        Self::MissionVerify,
        Self::InventoryClaim,
    ];

    /// Endpoints dispatched concurrently once progress and build-random are done.
    pub const CONCURRENT: [Self; 4] =
        [Self::User, Self::BlockchainLayoutPillar, Self::MissionVerify, Self::InventoryClaim];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Progress => "/voxel/progress",
            Self::BuildRandom => "/voxel/build-random",
            Self::User => "/voxel/user",
            Self::BlockchainLayoutPillar => "/voxel/blockchain/layout/pillar",
            Self::MissionVerify => "/voxel/mission-verify",
            Self::InventoryClaim => "/voxel/inventory/claim",
        }
    }

    /// Index of this endpoint inside [`Endpoint::ALL`].
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Column label used in the summary table.
    pub fn label(self) -> String {
        match self {
            Self::Progress => "Progress".to_string(),
            Self::BuildRandom => "Build Random".to_string(),
            other => format_endpoint_name(other.path()),
        }
    }
}

/// Turns an endpoint path into a title-cased label.
///
/// `/voxel/mission-verify` becomes `Voxel Mission Verify`.
pub fn format_endpoint_name(path: &str) -> String {
    path.split(['/', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                },
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A single call to make: endpoint plus its optional body fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointCall {
    pub endpoint: Endpoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<String>,
}

impl EndpointCall {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, progress: None, mission_id: None }
    }

    pub fn with_progress(mut self, progress: u32) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_mission(mut self, mission_id: impl Into<String>) -> Self {
        self.mission_id = Some(mission_id.into());
        self
    }

    pub fn path(&self) -> &'static str {
        self.endpoint.path()
    }

    /// Builds the JSON body for `token`.
    pub fn body<'a>(&'a self, token: &'a str) -> ActionRequest<'a> {
        ActionRequest {
            init_data: token,
            progress: self.progress,
            mission_id: self.mission_id.as_deref(),
        }
    }
}

/// JSON body posted to every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ActionRequest<'a> {
    /// Account session token.
    #[serde(rename = "initData")]
    pub init_data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(rename = "missionID", skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<&'a str>,
}
