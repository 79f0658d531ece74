mod dispatcher;
mod driver;
mod engine;
mod events;
mod machine;
mod manager;
mod request;
mod status;

pub use dispatcher::{DocumentHandler, ReadyHandler, StatusHandler};
pub use driver::{
    HttpTransport, RadioDriver, RadioError, RadioEvent, TransferEvent, TransportError,
};
pub use manager::WifiLink;
pub use request::{ByteSink, SharedSink};
pub use status::LinkStatus;
