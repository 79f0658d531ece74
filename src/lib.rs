#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod firmware;

pub use firmware::config::{ConfigStore, MemoryConfigStore};
pub use firmware::link::{
    ByteSink, DocumentHandler, HttpTransport, LinkStatus, RadioDriver, RadioError, RadioEvent,
    ReadyHandler, SharedSink, StatusHandler, TransferEvent, TransportError, WifiLink,
};
pub use firmware::report::{ReportController, Thermometer};
pub use firmware::telemetry::{link_snapshot, LinkTelemetrySnapshot};
pub use firmware::types::WifiCredentials;
