/// Connection and request status surfaced to callers.
///
/// `NotConnected`, `BrokenConfiguration`, `Connecting`, `Ready` and
/// `Receiving` are stored states; `NotReady`, `BrokenUrl` and `BrokenReply`
/// only appear as return values and status notifications. After a failed
/// request the stored status is `Ready` again: the link itself is assumed
/// usable, only the request is abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    NotConnected,
    BrokenConfiguration,
    Connecting,
    Ready,
    NotReady,
    BrokenUrl,
    Receiving,
    BrokenReply,
}

impl LinkStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotConnected => "NotConnected",
            Self::BrokenConfiguration => "BrokenConfiguration",
            Self::Connecting => "Connecting",
            Self::Ready => "Ready",
            Self::NotReady => "NotReady",
            Self::BrokenUrl => "BrokenUrl",
            Self::Receiving => "Receiving",
            Self::BrokenReply => "BrokenReply",
        }
    }
}
