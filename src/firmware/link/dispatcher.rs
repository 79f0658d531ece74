use alloc::boxed::Box;

use super::request::SharedSink;
use super::status::LinkStatus;

pub type ReadyHandler = Box<dyn FnMut()>;
pub type StatusHandler = Box<dyn FnMut(LinkStatus)>;
pub type DocumentHandler = Box<dyn FnMut(Option<&SharedSink>)>;

/// Single-slot handler registries: one handler per event class, the
/// latest registration wins and the replaced handler is dropped.
#[derive(Default)]
pub(super) struct LinkDispatcher {
    ready: Option<ReadyHandler>,
    status: Option<StatusHandler>,
    document: Option<DocumentHandler>,
}

impl LinkDispatcher {
    pub(super) fn attach_ready(&mut self, handler: ReadyHandler) {
        self.ready = Some(handler);
    }

    pub(super) fn attach_status(&mut self, handler: StatusHandler) {
        self.status = Some(handler);
    }

    pub(super) fn attach_document(&mut self, handler: DocumentHandler) {
        self.document = Some(handler);
    }

    pub(super) fn emit_ready(&mut self) {
        if let Some(handler) = self.ready.as_mut() {
            handler();
        }
    }

    pub(super) fn emit_status(&mut self, status: LinkStatus) {
        if let Some(handler) = self.status.as_mut() {
            handler(status);
        }
    }

    pub(super) fn emit_document(&mut self, sink: Option<&SharedSink>) {
        if let Some(handler) = self.document.as_mut() {
            handler(sink);
        }
    }
}
