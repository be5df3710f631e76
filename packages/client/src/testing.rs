//! In-memory fakes for the messaging channel.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use crate::domain::{ChannelError, Connector, MessagingChannel};

/// What a [`FakeChannel`] was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Subscribe(String),
    Send { destination: String, body: String },
    Close,
}

/// Channel that records outbound calls and replays queued inbound messages.
/// Clones share their state.
#[derive(Clone, Default)]
pub struct FakeChannel {
    recorded: Arc<Mutex<Vec<Recorded>>>,
    inbound: Arc<Mutex<VecDeque<Result<String, ChannelError>>>>,
    fail_sends: bool,
}

impl FakeChannel {
    pub fn failing_sends() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn push_inbound(&self, message: Result<String, ChannelError>) {
        self.inbound.lock().unwrap().push_back(message);
    }
}

#[async_trait]
impl MessagingChannel for FakeChannel {
    async fn subscribe(&mut self, destination: &str) -> Result<(), ChannelError> {
        self.recorded
            .lock()
            .unwrap()
            .push(Recorded::Subscribe(destination.to_string()));
        Ok(())
    }

    async fn send(&mut self, destination: &str, body: String) -> Result<(), ChannelError> {
        if self.fail_sends {
            return Err(ChannelError::Transport("send failed".to_string()));
        }
        self.recorded.lock().unwrap().push(Recorded::Send {
            destination: destination.to_string(),
            body,
        });
        Ok(())
    }

    async fn next_message(&mut self) -> Option<Result<String, ChannelError>> {
        self.inbound.lock().unwrap().pop_front()
    }

    async fn close(&mut self) -> Result<(), ChannelError> {
        self.recorded.lock().unwrap().push(Recorded::Close);
        Ok(())
    }
}

/// Connector handing out clones of one [`FakeChannel`]
#[derive(Clone, Default)]
pub struct FakeConnector {
    pub channel: FakeChannel,
    pub refuse: bool,
    attempts: Arc<AtomicUsize>,
}

impl FakeConnector {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for FakeConnector {
    type Channel = FakeChannel;

    async fn connect(&self) -> Result<FakeChannel, ChannelError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.refuse {
            return Err(ChannelError::Connect("connection refused".to_string()));
        }
        Ok(self.channel.clone())
    }
}
