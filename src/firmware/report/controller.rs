use core::fmt::Write as _;

use heapless::String;
use log::{info, warn};

use super::thermometer::{TemperatureFilter, Thermometer};
use crate::firmware::config::{keys, ConfigStore};
use crate::firmware::link::{
    DocumentHandler, HttpTransport, LinkStatus, RadioDriver, SharedSink, StatusHandler, WifiLink,
};
use crate::firmware::telemetry;
use crate::firmware::types::URL_MAX;

/// Periodic measure-then-upload glue: smooths sensor samples and posts
/// the latest reading to the configured report endpoint whenever the
/// link is ready. No queueing and no retries; a reading that cannot be
/// sent is simply dropped and the next cycle tries again.
pub struct ReportController {
    url: String<URL_MAX>,
    filter: TemperatureFilter,
}

impl ReportController {
    /// Reads the report URL once. `None` when the key is absent, empty,
    /// not UTF-8, or oversized; reporting is then unavailable until the
    /// configuration is fixed and the controller rebuilt.
    pub fn from_config(config: &impl ConfigStore) -> Option<Self> {
        let raw = config.get(keys::REPORT_URL)?;
        let trimmed = core::str::from_utf8(raw).ok()?.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut url = String::new();
        if url.push_str(trimmed).is_err() {
            return None;
        }
        Some(Self {
            url,
            filter: TemperatureFilter::new(),
        })
    }

    /// Take one sensor sample through the smoothing filter.
    pub fn sample(&mut self, thermometer: &mut impl Thermometer) -> i32 {
        let smoothed = self.filter.update(thermometer.read_millicelsius());
        telemetry::record_report_sample();
        smoothed
    }

    /// Clear the smoothing seed, e.g. after wake from sleep.
    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    pub fn last_millicelsius(&self) -> Option<i32> {
        self.filter.last_millicelsius()
    }

    /// Upload the latest smoothed reading as
    /// `{url}?celcius={millicelsius}` (the parameter name is the wire
    /// format the report server expects). Skipped with `NotReady` when
    /// the link is busy or down.
    pub fn report<C, R, T>(
        &mut self,
        link: &mut WifiLink<C, R, T>,
        sink: Option<SharedSink>,
        on_document: Option<DocumentHandler>,
        on_status: Option<StatusHandler>,
    ) -> LinkStatus
    where
        C: ConfigStore,
        R: RadioDriver,
        T: HttpTransport,
    {
        let status = link.status();
        if status != LinkStatus::Ready {
            info!("report: link not ready status={}", status.as_str());
            telemetry::record_report_skipped();
            return LinkStatus::NotReady;
        }

        let millis = self.filter.last_millicelsius().unwrap_or(0);
        let mut target: String<URL_MAX> = String::new();
        if write!(target, "{}?celcius={}", self.url, millis).is_err() {
            warn!("report: url too long with query");
            telemetry::record_report_skipped();
            return LinkStatus::BrokenUrl;
        }
        link.get(target.as_str(), sink, on_document, on_status)
    }
}
