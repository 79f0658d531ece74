pub const WIFI_SSID_MAX: usize = 32;
pub const WIFI_PASSWORD_MAX: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: [u8; WIFI_SSID_MAX],
    pub ssid_len: u8,
    pub password: [u8; WIFI_PASSWORD_MAX],
    pub password_len: u8,
}

impl WifiCredentials {
    /// Both fields are required: an empty ssid or password is treated the
    /// same as a missing one by the connection manager.
    pub fn from_parts(ssid: &[u8], password: &[u8]) -> Result<Self, ()> {
        if ssid.is_empty() || ssid.len() > WIFI_SSID_MAX {
            return Err(());
        }
        if password.is_empty() || password.len() > WIFI_PASSWORD_MAX {
            return Err(());
        }
        let mut result = Self {
            ssid: [0u8; WIFI_SSID_MAX],
            ssid_len: ssid.len() as u8,
            password: [0u8; WIFI_PASSWORD_MAX],
            password_len: password.len() as u8,
        };
        result.ssid[..ssid.len()].copy_from_slice(ssid);
        result.password[..password.len()].copy_from_slice(password);
        Ok(result)
    }

    pub fn ssid_bytes(&self) -> &[u8] {
        &self.ssid[..self.ssid_len as usize]
    }

    pub fn password_bytes(&self) -> &[u8] {
        &self.password[..self.password_len as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_round_trips_bytes() {
        let credentials = WifiCredentials::from_parts(b"attic", b"hunter2").unwrap();
        assert_eq!(credentials.ssid_bytes(), b"attic");
        assert_eq!(credentials.password_bytes(), b"hunter2");
    }

    #[test]
    fn from_parts_rejects_empty_fields() {
        assert!(WifiCredentials::from_parts(b"", b"hunter2").is_err());
        assert!(WifiCredentials::from_parts(b"attic", b"").is_err());
    }

    #[test]
    fn from_parts_rejects_oversized_fields() {
        let long = [b'x'; WIFI_SSID_MAX + 1];
        assert!(WifiCredentials::from_parts(&long, b"hunter2").is_err());
        let long_pw = [b'x'; WIFI_PASSWORD_MAX + 1];
        assert!(WifiCredentials::from_parts(b"attic", &long_pw).is_err());
    }
}
