//! Lazy record listings.
//!
//! Database listings are driven by a task owning the cursor; rows are handed
//! over through a bounded channel so a slow consumer applies backpressure and
//! a vanished consumer stops the cursor.

use futures::stream::{BoxStream, Stream, StreamExt};
use sea_orm::{Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Select};
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

use crate::errors::ServiceError;

pub type RecordStream<T> = BoxStream<'static, Result<T, ServiceError>>;

const CHANNEL_CAPACITY: usize = 64;

/// Open a cursor over `E` restricted by `cond`. Failing to open is reported
/// here as `Internal`; failures after the first row arrive as a final
/// `Unavailable` item.
pub async fn cursor<E>(db: DatabaseConnection, cond: Condition) -> Result<RecordStream<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    let select: Select<E> = E::find().filter(cond);
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (opened_tx, opened_rx) = oneshot::channel::<Result<(), ServiceError>>();

    tokio::spawn(async move {
        let rows = match select.stream(&db).await {
            Ok(rows) => {
                let _ = opened_tx.send(Ok(()));
                Box::pin(rows)
            }
            Err(e) => {
                let _ = opened_tx.send(Err(ServiceError::Internal(e.to_string())));
                return;
            }
        };
        forward(rows, tx).await;
    });

    match opened_rx.await {
        Ok(Ok(())) => Ok(ReceiverStream::new(rx).boxed()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(ServiceError::Internal("listing task ended before opening the cursor".into())),
    }
}

/// Pump `rows` into `tx` until the source ends, the receiver is dropped, or a
/// row fails to decode. A decode failure is sent as a final `Unavailable`.
/// Returns the number of rows delivered; `rows` is dropped on every exit.
async fn forward<S, M>(mut rows: S, tx: mpsc::Sender<Result<M, ServiceError>>) -> usize
where
    S: Stream<Item = Result<M, DbErr>> + Unpin,
{
    let mut sent = 0usize;
    while let Some(row) = rows.next().await {
        match row {
            Ok(model) => {
                if tx.send(Ok(model)).await.is_err() {
                    debug!(sent, "listing consumer gone, closing cursor");
                    break;
                }
                sent += 1;
            }
            Err(e) => {
                warn!(error = %e, sent, "listing aborted on decode failure");
                let _ = tx.send(Err(ServiceError::Unavailable(e.to_string()))).await;
                break;
            }
        }
    }
    sent
}

/// Listing over an in-memory snapshot.
pub fn from_vec<T: Send + 'static>(items: Vec<T>) -> RecordStream<T> {
    futures::stream::iter(items.into_iter().map(Ok)).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn dropped_consumer_stops_the_producer() {
        let polled = Arc::new(AtomicUsize::new(0));
        let counter = polled.clone();
        let rows = futures::stream::iter(0u32..).map(move |i| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, DbErr>(i)
        });
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let producer = tokio::spawn(forward(rows, tx));

        let mut listing: RecordStream<u32> = ReceiverStream::new(rx).boxed();
        assert_eq!(listing.next().await.unwrap().unwrap(), 0);
        drop(listing);

        let sent = tokio::time::timeout(Duration::from_secs(1), producer)
            .await
            .expect("producer kept running after the consumer left")
            .unwrap();
        assert!(sent <= CHANNEL_CAPACITY + 1, "sent {sent}");
        assert_eq!(polled.load(Ordering::SeqCst), sent + 1);
    }

    #[tokio::test]
    async fn decode_failure_ends_listing_with_unavailable() {
        let rows = futures::stream::iter(vec![
            Ok(1u32),
            Err(DbErr::Type("bad column".into())),
            Ok(3u32),
        ]);
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let sent = forward(rows, tx).await;
        assert_eq!(sent, 1);

        let items: Vec<_> = ReceiverStream::new(rx).collect().await;
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], Ok(1)));
        assert!(matches!(&items[1], Err(ServiceError::Unavailable(m)) if m.contains("bad column")));
    }

    #[tokio::test]
    async fn from_vec_yields_in_order() {
        let items: Vec<u32> = from_vec(vec![1, 2, 3]).map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3]);
    }
}
