//! Infrastructure layer: STOMP over WebSocket.

pub mod stomp;
