//! JSON-lines transport
//!
//! Each input line is served by its own task so a slow check never blocks a
//! listing call. Responses funnel through one writer task, which keeps every
//! line whole; they are written in completion order and matched by `id`.

use crate::constants::RESPONSE_CHANNEL_CAPACITY;
use crate::plugin_server::PluginServer;
use crate::transport::PluginResponse;
use cpk_domain::error::{Error, Result};
use cpk_infrastructure::ErrorContext;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

/// Serve requests from `reader` until EOF or `shutdown`
///
/// On shutdown, requests still running are cancelled and answered before
/// this returns. Blank lines are ignored.
pub async fn serve_lines<R, W>(
    server: Arc<PluginServer>,
    reader: R,
    writer: W,
    shutdown: CancellationToken,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(RESPONSE_CHANNEL_CAPACITY);
    let writer_task = tokio::spawn(write_responses(writer, rx));
    let tracker = TaskTracker::new();

    let mut lines = reader.lines();
    let read_result = loop {
        let line = tokio::select! {
            biased;
            () = shutdown.cancelled() => {
                info!("Shutdown requested, draining in-flight requests");
                break Ok(());
            }
            line = lines.next_line() => line,
        };
        let line = match line.io_context("Failed to read request line") {
            Ok(Some(line)) => line,
            Ok(None) => break Ok(()),
            Err(e) => break Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }

        let server = Arc::clone(&server);
        let tx = tx.clone();
        let token = shutdown.child_token();
        tracker.spawn(async move {
            let response = server.handle_line(&line, token).await;
            if tx.send(response).await.is_err() {
                debug!("Response writer closed, dropping response");
            }
        });
    };

    if read_result.is_err() {
        shutdown.cancel();
    }
    tracker.close();
    tracker.wait().await;
    drop(tx);

    let write_result = writer_task
        .await
        .map_err(|e| Error::internal(format!("Response writer task failed: {e}")))?;
    read_result.and(write_result)
}

async fn write_responses<W>(mut writer: W, mut rx: mpsc::Receiver<PluginResponse>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer
            .write_all(&line)
            .await
            .io_context("Failed to write response")?;
        writer.flush().await.io_context("Failed to flush response")?;
    }
    Ok(())
}
