//! Per-account task runner.
//!
//! Progress and build-random run one after the other; the remaining four
//! calls run concurrently on a bounded task group and are joined before the
//! account's row is returned. Failed calls are recorded, never propagated.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use voxelplay_client::VoxelApi;
use voxelplay_types::models::{AccountResult, Endpoint, EndpointCall, FailureReason, Outcome};

use crate::context::BotContext;

pub async fn run_account(ctx: &BotContext, index: usize, token: &str) -> AccountResult {
    let mut result = AccountResult::pending(index);
    let mission_id = ctx.config.mission_ids.select(index);

    let progress = EndpointCall::new(Endpoint::Progress).with_progress(ctx.config.progress_value);
    let outcome = call_endpoint(ctx.api.as_ref(), index, &progress, token).await;
    result.record(Endpoint::Progress, outcome);

    let build = EndpointCall::new(Endpoint::BuildRandom);
    let outcome = call_endpoint(ctx.api.as_ref(), index, &build, token).await;
    result.record(Endpoint::BuildRandom, outcome);

    let calls = concurrent_calls(mission_id);
    join_bounded(&ctx.api, ctx.config.workers, index, token, calls, &mut result).await;

    tracing::info!(
        "[Runner] Account {} done: {}/{} succeeded",
        index,
        result.success_count(),
        Endpoint::COUNT
    );
    result
}

fn concurrent_calls(mission_id: Option<&str>) -> Vec<EndpointCall> {
    Endpoint::CONCURRENT
        .iter()
        .map(|&endpoint| {
            let call = EndpointCall::new(endpoint);
            match (endpoint, mission_id) {
                (Endpoint::MissionVerify, Some(id)) => call.with_mission(id),
                _ => call,
            }
        })
        .collect()
}

async fn call_endpoint(
    api: &dyn VoxelApi,
    index: usize,
    call: &EndpointCall,
    token: &str,
) -> Outcome {
    match api.call(call, token).await {
        Ok(_) => {
            tracing::debug!("[Runner] Account {} {} ok", index, call.path());
            Outcome::Success
        },
        Err(err) => {
            tracing::warn!("[Runner] Account {} {} failed: {}", index, call.path(), err);
            Outcome::Failure(err.failure_reason())
        },
    }
}

/// Spawns every call with at most `workers` in flight and waits for all of them.
///
/// `workers` is clamped to `1..=calls.len()`.
///
/// A worker that panics leaves its field as [`FailureReason::Aborted`].
async fn join_bounded(
    api: &Arc<dyn VoxelApi>,
    workers: usize,
    index: usize,
    token: &str,
    calls: Vec<EndpointCall>,
    result: &mut AccountResult,
) {
    let limit = Arc::new(Semaphore::new(workers.clamp(1, calls.len().max(1))));
    let mut tasks = JoinSet::new();

    for call in calls {
        let api = Arc::clone(api);
        let limit = Arc::clone(&limit);
        let token = token.to_string();
        tasks.spawn(async move {
            let outcome = match limit.acquire_owned().await {
                Ok(_permit) => call_endpoint(api.as_ref(), index, &call, &token).await,
                Err(_) => Outcome::Failure(FailureReason::Aborted),
            };
            (call.endpoint, outcome)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((endpoint, outcome)) => result.record(endpoint, outcome),
            Err(e) => tracing::error!("[Runner] Account {} worker aborted: {}", index, e),
        }
    }
}
