use heapless::Vec;

use crate::firmware::types::{WifiCredentials, HTTP_CHUNK_MAX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioError {
    InvalidCredentials,
    RadioFault,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioEvent {
    LinkUp,
}

/// Wireless chipset boundary. `associate` supersedes any prior session;
/// the driver emits at most one `LinkUp` per association, delivered
/// through `poll_event` from the device's single execution context.
pub trait RadioDriver {
    fn associate(&mut self, credentials: &WifiCredentials) -> Result<(), RadioError>;
    fn poll_event(&mut self) -> Option<RadioEvent>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportError {
    LinkDown,
    Busy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferEvent {
    Body {
        bytes: Vec<u8, HTTP_CHUNK_MAX>,
        finished: bool,
    },
    Failed {
        code: u8,
    },
}

/// HTTP GET boundary. A `Failed` event is terminal failure; a `Body`
/// event with `finished` set is terminal success.
pub trait HttpTransport {
    fn start_get(&mut self, url: &str) -> Result<(), TransportError>;
    fn poll_event(&mut self) -> Option<TransferEvent>;
}
