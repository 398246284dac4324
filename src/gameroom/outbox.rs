use super::message::ServerMessage;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Write half of a participant's connection.
/// The gateway drains the other end into the WebSocket.
#[derive(Debug, Clone)]
pub struct Outbox(UnboundedSender<String>);

impl Outbox {
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        (Self(tx), rx)
    }
    /// Delivery is best effort: a closed connection only gets logged.
    pub fn send(&self, message: &ServerMessage) {
        self.0
            .send(message.to_json())
            .inspect_err(|e| log::warn!("failed to deliver message: {}", e))
            .ok();
    }
}
