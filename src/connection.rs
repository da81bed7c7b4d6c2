//! Outfits Socket Connection
//!
//! One supervisor task per manager owns the WebSocket. It reconnects forever
//! after a fixed delay; `OutfitsManager::connect` can cut the delay short.

use std::time::Duration;

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::future::Either;
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;

use crate::outfits::OutfitsManager;

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Open,
}

/// Connection loop. Runs for the lifetime of the page.
pub async fn supervise(
    manager: OutfitsManager,
    url: String,
    reconnect_delay: Duration,
    mut wake: UnboundedReceiver<()>,
) {
    loop {
        manager.set_status(ConnectionStatus::Connecting);

        match connect_and_run(&url, manager).await {
            Ok(()) => log::info!("[Outfits] disconnected"),
            Err(e) => log::warn!("[Outfits] socket error: {}", e),
        }

        manager.detach();

        // Wake-ups queued while we were connected are stale.
        while wake.try_recv().is_ok() {}

        let sleep = Box::pin(gloo_timers::future::sleep(reconnect_delay));
        match futures::future::select(sleep, wake.next()).await {
            Either::Left(_) => {}
            Either::Right((Some(()), _)) => log::debug!("[Outfits] reconnect requested"),
            Either::Right((None, sleep)) => sleep.await,
        }
    }
}

/// Connect and pump frames until either direction ends.
async fn connect_and_run(url: &str, manager: OutfitsManager) -> Result<(), String> {
    let load_request = manager.load_request().map_err(|e| e.to_string())?;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    let (tx, mut rx) = mpsc::unbounded::<String>();

    // The first send completes once the socket is open; warm the cache right away.
    let send_task = async {
        ws_write
            .send(Message::Text(load_request))
            .await
            .map_err(|e| format!("open failed: {}", e))?;
        manager.attach(tx);
        log::info!("[Outfits] connected to {}", url);

        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
        Ok::<(), String>(())
    };

    // Each frame is handled to completion before the next is read.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => manager.handle_text(&text),
                Ok(Message::Bytes(_)) => log::debug!("[Outfits] ignoring binary frame"),
                Err(e) => {
                    log::warn!("[Outfits] recv error: {}", e);
                    break;
                }
            }
        }
    };

    let result = match futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) if !manager.is_connected() => {
            Err("closed before opening".to_string())
        }
        Either::Right(((), _)) => Ok(()),
    };
    result
}
