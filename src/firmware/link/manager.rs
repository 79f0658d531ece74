use log::{debug, info, warn};

use super::dispatcher::{DocumentHandler, LinkDispatcher, ReadyHandler, StatusHandler};
use super::driver::{HttpTransport, RadioDriver, RadioEvent, TransferEvent};
use super::engine::{LinkApplyResult, LinkEngine};
use super::events::{LinkCommand, LinkNotification};
use super::request::{PendingRequest, SharedSink};
use super::status::LinkStatus;
use crate::firmware::config::{keys, ConfigStore};
use crate::firmware::telemetry;
use crate::firmware::types::WifiCredentials;

// Upper bound on events drained per service() call so a misbehaving
// driver cannot starve the rest of the loop.
const SERVICE_EVENTS_MAX: usize = 16;

/// Wireless link and HTTP-request lifecycle manager.
///
/// Owns the association lifecycle and at most one in-flight GET request.
/// All operations return immediately; radio and transport events are
/// drained from `service()` on the device's single execution context.
/// The stored status is always updated before the corresponding handler
/// runs, so `status()` read from inside a handler is never stale.
pub struct WifiLink<C, R, T>
where
    C: ConfigStore,
    R: RadioDriver,
    T: HttpTransport,
{
    config: C,
    radio: R,
    transport: T,
    engine: LinkEngine,
    dispatcher: LinkDispatcher,
    pending: Option<PendingRequest>,
}

impl<C, R, T> WifiLink<C, R, T>
where
    C: ConfigStore,
    R: RadioDriver,
    T: HttpTransport,
{
    pub fn new(config: C, radio: R, transport: T) -> Self {
        Self {
            config,
            radio,
            transport,
            engine: LinkEngine::new(),
            dispatcher: LinkDispatcher::default(),
            pending: None,
        }
    }

    pub fn status(&self) -> LinkStatus {
        self.engine.status()
    }

    /// Start an association attempt using the stored credentials.
    ///
    /// Missing (or empty) ssid or password fails synchronously with
    /// `BrokenConfiguration` and never touches the radio. Otherwise the
    /// radio is handed the credentials, the status becomes `Connecting`,
    /// and `on_ready` fires once the link comes up. Calling again
    /// supersedes the prior association and retires any in-flight
    /// request.
    pub fn connect(&mut self, on_ready: ReadyHandler) -> LinkStatus {
        self.dispatcher.attach_ready(on_ready);
        telemetry::record_link_connect_attempt();

        // The prior association is superseded either way; an in-flight
        // request would target a dead session.
        self.pending = None;

        let credentials = {
            let ssid = self.config.get(keys::WIFI_SSID);
            let password = self.config.get(keys::WIFI_PASSWORD);
            match (ssid, password) {
                (Some(ssid), Some(password)) => WifiCredentials::from_parts(ssid, password).ok(),
                _ => None,
            }
        };
        let credentials = match credentials {
            Some(credentials) => credentials,
            None => {
                warn!("link: wifi configuration missing or invalid");
                telemetry::record_link_config_error();
                let result = self.engine.apply(LinkCommand::CredentialsMissing);
                self.dispatch(result);
                return self.engine.status();
            }
        };

        match self.radio.associate(&credentials) {
            Ok(()) => {
                info!("link: associating to access point");
                let result = self.engine.apply(LinkCommand::CredentialsAccepted);
                self.dispatch(result);
            }
            Err(err) => {
                warn!("link: radio rejected credentials err={:?}", err);
                telemetry::record_link_config_error();
                let result = self.engine.apply(LinkCommand::CredentialsRejected);
                self.dispatch(result);
            }
        }
        self.engine.status()
    }

    /// Request a document over the associated link.
    ///
    /// Rejected outright with `NotReady` unless the current status is
    /// `Ready`; there is no queueing and no cancellation of an in-flight
    /// request. On acceptance the previous pending request (if any) is
    /// dropped, the sink and handlers are registered, the status becomes
    /// `Receiving`, and the GET is issued.
    pub fn get(
        &mut self,
        url: &str,
        sink: Option<SharedSink>,
        on_document: Option<DocumentHandler>,
        on_status: Option<StatusHandler>,
    ) -> LinkStatus {
        if let Some(handler) = on_status {
            self.dispatcher.attach_status(handler);
        }

        let current = self.engine.status();
        if current != LinkStatus::Ready {
            debug!("link: request rejected status={}", current.as_str());
            telemetry::record_link_request_rejected();
            self.dispatcher.emit_status(current);
            return LinkStatus::NotReady;
        }

        let request = if request_url_valid(url) {
            PendingRequest::new(url, sink).ok()
        } else {
            None
        };
        let request = match request {
            Some(request) => request,
            None => {
                warn!("link: broken request url");
                telemetry::record_link_request_rejected();
                self.dispatcher.emit_status(LinkStatus::BrokenUrl);
                return LinkStatus::BrokenUrl;
            }
        };

        if let Some(handler) = on_document {
            self.dispatcher.attach_document(handler);
        }
        self.pending = Some(request);
        telemetry::record_link_request_started();

        let result = self.engine.apply(LinkCommand::RequestStarted);
        self.dispatch(result);

        match self.transport.start_get(url) {
            Ok(()) => LinkStatus::Receiving,
            Err(err) => {
                warn!("link: http start failed err={:?}", err);
                telemetry::record_link_request_failure(0);
                let result = self.engine.apply(LinkCommand::RequestFailed);
                self.dispatch(result);
                self.pending = None;
                LinkStatus::BrokenReply
            }
        }
    }

    /// Drain pending radio and transport events and deliver the
    /// resulting notifications. Non-blocking; call from the main loop.
    pub fn service(&mut self) {
        let mut budget = SERVICE_EVENTS_MAX;
        while budget > 0 {
            match self.radio.poll_event() {
                Some(RadioEvent::LinkUp) => self.handle_link_up(),
                None => break,
            }
            budget -= 1;
        }

        let mut budget = SERVICE_EVENTS_MAX;
        while budget > 0 {
            match self.transport.poll_event() {
                Some(TransferEvent::Body { bytes, finished }) => {
                    self.handle_body(&bytes, finished);
                }
                Some(TransferEvent::Failed { code }) => self.handle_failure(code),
                None => break,
            }
            budget -= 1;
        }
    }

    fn handle_link_up(&mut self) {
        let result = self.engine.apply(LinkCommand::LinkUp);
        if !result.changed() {
            debug!("link: spurious link-ready event");
            return;
        }
        info!("link: network ready");
        telemetry::record_link_ready();
        self.dispatch(result);
    }

    fn handle_body(&mut self, bytes: &[u8], finished: bool) {
        if self.engine.status() != LinkStatus::Receiving || self.pending.is_none() {
            // Stale event from a superseded request.
            return;
        }
        if let Some(pending) = self.pending.as_ref() {
            if let Some(sink) = pending.sink() {
                sink.borrow_mut().append(bytes);
            }
        }
        telemetry::record_link_chunk(bytes.len());

        let result = self.engine.apply(LinkCommand::RequestChunk { finished });
        self.dispatch(result);

        if finished {
            if let Some(pending) = self.pending.take() {
                debug!("link: document complete url={}", pending.url());
            }
            telemetry::record_link_request_success();
        }
    }

    fn handle_failure(&mut self, code: u8) {
        if self.engine.status() != LinkStatus::Receiving {
            return;
        }
        warn!("link: request failed code={}", code);
        telemetry::record_link_request_failure(code);
        let result = self.engine.apply(LinkCommand::RequestFailed);
        self.dispatch(result);
        self.pending = None;
    }

    fn dispatch(&mut self, result: LinkApplyResult) {
        if result.changed() && result.before != result.after {
            debug!(
                "link: status {} -> {}",
                result.before.as_str(),
                result.after.as_str()
            );
        }
        for notification in result.notifications.iter() {
            match notification {
                LinkNotification::Status(status) => self.dispatcher.emit_status(*status),
                LinkNotification::Ready => self.dispatcher.emit_ready(),
                LinkNotification::Document => self
                    .dispatcher
                    .emit_document(self.pending.as_ref().and_then(PendingRequest::sink)),
            }
        }
    }
}

// Light validation only: the URL is otherwise passed opaquely to the
// transport. Plain-HTTP device, so a scheme other than http:// is broken
// input rather than an unsupported feature.
fn request_url_valid(url: &str) -> bool {
    const SCHEME: &str = "http://";
    match url.strip_prefix(SCHEME) {
        Some(rest) => !rest.is_empty() && !rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::request_url_valid;

    #[test]
    fn url_validation_accepts_plain_http() {
        assert!(request_url_valid("http://example.net/doc"));
        assert!(request_url_valid("http://10.0.0.2:8080/t?x=1"));
    }

    #[test]
    fn url_validation_rejects_broken_targets() {
        assert!(!request_url_valid(""));
        assert!(!request_url_valid("example.net/doc"));
        assert!(!request_url_valid("https://example.net/doc"));
        assert!(!request_url_valid("http://"));
        assert!(!request_url_valid("http:///doc"));
    }
}
