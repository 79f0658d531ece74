mod wifi;

pub use wifi::{WifiCredentials, WIFI_PASSWORD_MAX, WIFI_SSID_MAX};

pub const URL_MAX: usize = 128;
pub const HTTP_CHUNK_MAX: usize = 512;
