use super::status::LinkStatus;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum LinkCommand {
    CredentialsMissing,
    CredentialsAccepted,
    CredentialsRejected,
    LinkUp,
    RequestStarted,
    RequestChunk { finished: bool },
    RequestFailed,
}

/// Ordered side effects of one applied command. The owner emits these
/// after the machine state is updated, so `status()` is never stale from
/// inside a handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum LinkNotification {
    Status(LinkStatus),
    Ready,
    Document,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum LinkApplyStatus {
    Applied,
    Unchanged,
    Ignored,
}
