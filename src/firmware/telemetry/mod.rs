use core::sync::atomic::{AtomicU32, Ordering};

static LINK_CONNECT_ATTEMPTS: AtomicU32 = AtomicU32::new(0);
static LINK_CONFIG_ERRORS: AtomicU32 = AtomicU32::new(0);
static LINK_READY_EVENTS: AtomicU32 = AtomicU32::new(0);
static LINK_REQUESTS_STARTED: AtomicU32 = AtomicU32::new(0);
static LINK_REQUESTS_REJECTED: AtomicU32 = AtomicU32::new(0);
static LINK_REQUEST_CHUNKS: AtomicU32 = AtomicU32::new(0);
static LINK_REQUEST_BYTES: AtomicU32 = AtomicU32::new(0);
static LINK_REQUEST_SUCCESSES: AtomicU32 = AtomicU32::new(0);
static LINK_REQUEST_FAILURES: AtomicU32 = AtomicU32::new(0);
static LINK_LAST_FAILURE_CODE: AtomicU32 = AtomicU32::new(0);
static REPORT_SAMPLES: AtomicU32 = AtomicU32::new(0);
static REPORT_SKIPPED: AtomicU32 = AtomicU32::new(0);

pub(crate) fn record_link_connect_attempt() {
    LINK_CONNECT_ATTEMPTS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_link_config_error() {
    LINK_CONFIG_ERRORS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_link_ready() {
    LINK_READY_EVENTS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_link_request_started() {
    LINK_REQUESTS_STARTED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_link_request_rejected() {
    LINK_REQUESTS_REJECTED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_link_chunk(len: usize) {
    LINK_REQUEST_CHUNKS.fetch_add(1, Ordering::Relaxed);
    LINK_REQUEST_BYTES.fetch_add(len.min(u32::MAX as usize) as u32, Ordering::Relaxed);
}

pub(crate) fn record_link_request_success() {
    LINK_REQUEST_SUCCESSES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_link_request_failure(code: u8) {
    LINK_REQUEST_FAILURES.fetch_add(1, Ordering::Relaxed);
    LINK_LAST_FAILURE_CODE.store(code as u32, Ordering::Relaxed);
}

pub(crate) fn record_report_sample() {
    REPORT_SAMPLES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_report_skipped() {
    REPORT_SKIPPED.fetch_add(1, Ordering::Relaxed);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkTelemetrySnapshot {
    pub connect_attempts: u32,
    pub config_errors: u32,
    pub ready_events: u32,
    pub requests_started: u32,
    pub requests_rejected: u32,
    pub request_chunks: u32,
    pub request_bytes: u32,
    pub request_successes: u32,
    pub request_failures: u32,
    pub last_failure_code: u32,
    pub report_samples: u32,
    pub report_skipped: u32,
}

pub fn link_snapshot() -> LinkTelemetrySnapshot {
    LinkTelemetrySnapshot {
        connect_attempts: LINK_CONNECT_ATTEMPTS.load(Ordering::Relaxed),
        config_errors: LINK_CONFIG_ERRORS.load(Ordering::Relaxed),
        ready_events: LINK_READY_EVENTS.load(Ordering::Relaxed),
        requests_started: LINK_REQUESTS_STARTED.load(Ordering::Relaxed),
        requests_rejected: LINK_REQUESTS_REJECTED.load(Ordering::Relaxed),
        request_chunks: LINK_REQUEST_CHUNKS.load(Ordering::Relaxed),
        request_bytes: LINK_REQUEST_BYTES.load(Ordering::Relaxed),
        request_successes: LINK_REQUEST_SUCCESSES.load(Ordering::Relaxed),
        request_failures: LINK_REQUEST_FAILURES.load(Ordering::Relaxed),
        last_failure_code: LINK_LAST_FAILURE_CODE.load(Ordering::Relaxed),
        report_samples: REPORT_SAMPLES.load(Ordering::Relaxed),
        report_skipped: REPORT_SKIPPED.load(Ordering::Relaxed),
    }
}
