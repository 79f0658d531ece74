use alloc::rc::Rc;
use core::cell::RefCell;

use heapless::String;

use crate::firmware::types::URL_MAX;

/// Caller-owned response accumulator. The link appends body chunks in
/// arrival order while a request is receiving; chunks delivered before a
/// failure are not retracted.
pub trait ByteSink {
    fn append(&mut self, bytes: &[u8]);
}

pub type SharedSink = Rc<RefCell<dyn ByteSink>>;

impl ByteSink for alloc::vec::Vec<u8> {
    fn append(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    // Appends as much as capacity allows; the tail of an oversized
    // document is dropped.
    fn append(&mut self, bytes: &[u8]) {
        let free = N.saturating_sub(self.len());
        let take = bytes.len().min(free);
        let _ = self.extend_from_slice(&bytes[..take]);
    }
}

/// The single in-flight request. Replacing the owning `Option` drops the
/// superseded value together with its sink reference.
pub(super) struct PendingRequest {
    url: String<URL_MAX>,
    sink: Option<SharedSink>,
}

impl PendingRequest {
    pub(super) fn new(url: &str, sink: Option<SharedSink>) -> Result<Self, ()> {
        let mut owned: String<URL_MAX> = String::new();
        owned.push_str(url).map_err(|_| ())?;
        Ok(Self { url: owned, sink })
    }

    pub(super) fn url(&self) -> &str {
        self.url.as_str()
    }

    pub(super) fn sink(&self) -> Option<&SharedSink> {
        self.sink.as_ref()
    }
}
