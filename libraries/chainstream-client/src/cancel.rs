//! Cancellation plumbing shared by async operations

use crate::error::{ClientError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Drive `fut` unless `cancel` fires first
///
/// Cancellation wins ties, so a result is never observed once the token is
/// cancelled.
pub(crate) async fn until_cancelled<T, F>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(ClientError::Cancelled),
        result = fut => result,
    }
}
