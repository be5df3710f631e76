//! Minimal STOMP 1.2 client.
//!
//! Only the commands the chat needs are supported: CONNECT, SUBSCRIBE,
//! SEND and DISCONNECT outbound; CONNECTED, MESSAGE, RECEIPT and ERROR
//! inbound.

pub mod channel;
pub mod frame;

pub use channel::{StompChannel, StompConnector};
pub use frame::{Command, Frame, FrameError, decode_frames};
