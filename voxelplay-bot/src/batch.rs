//! One batch: load tokens, run every account in order, print the summary.

use chrono::Local;
use colored::Colorize;

use crate::context::BotContext;
use crate::loader;
use crate::reporter::Reporter;
use crate::runner;

/// Runs every account in the token file once.
///
/// Returns `None` when the token file is missing, unreadable or empty.
pub async fn run_batch(ctx: &BotContext) -> Option<Reporter> {
    tracing::info!("[Batch] Batch started at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let tokens = loader::read_tokens(&ctx.config.data_file);
    if tokens.is_empty() {
        tracing::error!("[Batch] Batch aborted: no accounts to process");
        return None;
    }
    tracing::info!("[Batch] Total accounts: {}", tokens.len());

    let mut reporter = Reporter::new();
    let progress = ctx.console.progress_bar(tokens.len() as u64);

    for (offset, token) in tokens.iter().enumerate() {
        let index = offset + 1;
        tracing::info!("[Batch] Account {} processing", index);

        reporter.push(runner::run_account(ctx, index, token).await);
        progress.inc(1);
        tokio::time::sleep(ctx.config.account_pause()).await;
    }
    progress.finish_and_clear();

    ctx.console.print("Batch Summary".bold());
    ctx.console.print(reporter.render());
    if let Some(breakdown) = reporter.failure_breakdown() {
        ctx.console.print(breakdown.yellow());
    }
    tracing::info!(
        "[Batch] Batch complete: {}/{} accounts fully succeeded",
        reporter.fully_succeeded(),
        reporter.len()
    );
    Some(reporter)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_context, token_file, FakeApi};
    use std::sync::Arc;
    use std::time::Duration;
    use voxelplay_types::models::Endpoint;

    #[tokio::test(start_paused = true)]
    async fn test_two_accounts_two_rows_two_pauses() {
        let file = token_file(&["tok-a", "", "tok-b"]);
        let api = Arc::new(FakeApi::new());
        let ctx = test_context(Arc::clone(&api), file.path());

        let start = tokio::time::Instant::now();
        let reporter = run_batch(&ctx).await.expect("batch should run");
        let elapsed = start.elapsed();

        assert!(
            elapsed >= Duration::from_secs(2) && elapsed < Duration::from_millis(2_100),
            "{:?}",
            elapsed
        );
        let indexes: Vec<usize> = reporter.rows().iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert!(reporter.rows().iter().all(|r| r.all_succeeded()));

        let tokens: Vec<String> =
            api.calls_to(Endpoint::Progress).into_iter().map(|c| c.token).collect();
        assert_eq!(tokens, vec!["tok-a", "tok-b"]);
    }

    #[tokio::test]
    async fn test_missing_file_skips_batch() {
        let dir = tempfile::tempdir().unwrap();
        let api = Arc::new(FakeApi::new());
        let ctx = test_context(Arc::clone(&api), &dir.path().join("data.txt"));

        assert!(run_batch(&ctx).await.is_none());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_skips_batch() {
        let file = token_file(&["", "   "]);
        let api = Arc::new(FakeApi::new());
        let ctx = test_context(Arc::clone(&api), file.path());

        assert!(run_batch(&ctx).await.is_none());
        assert!(api.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_account_still_gets_a_row() {
        let file = token_file(&["tok-a", "tok-b", "tok-c"]);
        let api = Arc::new(FakeApi::new().failing(Endpoint::InventoryClaim, 500));
        let ctx = test_context(Arc::clone(&api), file.path());

        let reporter = run_batch(&ctx).await.expect("batch should run");
        assert_eq!(reporter.len(), 3);
        for row in reporter.rows() {
            assert_eq!(row.outcomes().count(), 6);
            assert_eq!(row.success_count(), 5);
        }
        assert_eq!(reporter.failure_breakdown().as_deref(), Some("Failures: http 500 x3"));
    }
}
