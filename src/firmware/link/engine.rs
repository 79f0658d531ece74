use heapless::Vec;
use statig::blocking::IntoStateMachineExt as _;

use super::events::{LinkApplyStatus, LinkCommand, LinkNotification};
use super::machine::{DispatchContext, LinkMachine, LINK_NOTIFICATIONS_MAX};
use super::status::LinkStatus;

#[derive(Clone, Debug)]
pub(crate) struct LinkApplyResult {
    pub(crate) before: LinkStatus,
    pub(crate) after: LinkStatus,
    pub(crate) status: LinkApplyStatus,
    pub(crate) notifications: Vec<LinkNotification, LINK_NOTIFICATIONS_MAX>,
}

impl LinkApplyResult {
    pub(crate) fn changed(&self) -> bool {
        matches!(self.status, LinkApplyStatus::Applied)
    }
}

pub(crate) struct LinkEngine {
    machine: statig::blocking::StateMachine<LinkMachine>,
}

impl LinkEngine {
    pub(crate) fn new() -> Self {
        Self {
            machine: LinkMachine::new().state_machine(),
        }
    }

    pub(crate) fn status(&self) -> LinkStatus {
        self.machine.inner().status
    }

    pub(crate) fn apply(&mut self, command: LinkCommand) -> LinkApplyResult {
        let before = self.status();
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&command, &mut context);
        let after = self.status();
        LinkApplyResult {
            before,
            after,
            status: context.status,
            notifications: context.notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_connected() {
        let engine = LinkEngine::new();
        assert_eq!(engine.status(), LinkStatus::NotConnected);
    }

    #[test]
    fn missing_credentials_break_configuration() {
        let mut engine = LinkEngine::new();
        let result = engine.apply(LinkCommand::CredentialsMissing);
        assert!(result.changed());
        assert_eq!(result.after, LinkStatus::BrokenConfiguration);
        assert_eq!(
            result.notifications.as_slice(),
            &[LinkNotification::Status(LinkStatus::BrokenConfiguration)]
        );
    }

    #[test]
    fn accepted_credentials_reach_connecting_then_ready() {
        let mut engine = LinkEngine::new();
        let connecting = engine.apply(LinkCommand::CredentialsAccepted);
        assert_eq!(connecting.after, LinkStatus::Connecting);

        let ready = engine.apply(LinkCommand::LinkUp);
        assert_eq!(ready.after, LinkStatus::Ready);
        assert_eq!(
            ready.notifications.as_slice(),
            &[
                LinkNotification::Status(LinkStatus::Ready),
                LinkNotification::Ready,
            ]
        );
    }

    #[test]
    fn broken_configuration_recovers_via_new_connect() {
        let mut engine = LinkEngine::new();
        let _ = engine.apply(LinkCommand::CredentialsMissing);
        let result = engine.apply(LinkCommand::CredentialsAccepted);
        assert_eq!(result.after, LinkStatus::Connecting);
    }

    #[test]
    fn link_up_outside_connecting_is_ignored() {
        let mut engine = LinkEngine::new();
        let result = engine.apply(LinkCommand::LinkUp);
        assert_eq!(result.status, LinkApplyStatus::Ignored);
        assert_eq!(engine.status(), LinkStatus::NotConnected);
        assert!(result.notifications.is_empty());
    }

    #[test]
    fn chunk_keeps_receiving_and_notifies_progress() {
        let mut engine = ready_engine();
        let _ = engine.apply(LinkCommand::RequestStarted);
        let chunk = engine.apply(LinkCommand::RequestChunk { finished: false });
        assert_eq!(engine.status(), LinkStatus::Receiving);
        assert_eq!(
            chunk.notifications.as_slice(),
            &[LinkNotification::Status(LinkStatus::Receiving)]
        );
    }

    #[test]
    fn final_chunk_orders_status_before_document() {
        let mut engine = ready_engine();
        let _ = engine.apply(LinkCommand::RequestStarted);
        let result = engine.apply(LinkCommand::RequestChunk { finished: true });
        assert_eq!(result.after, LinkStatus::Ready);
        assert_eq!(
            result.notifications.as_slice(),
            &[
                LinkNotification::Status(LinkStatus::Ready),
                LinkNotification::Document,
            ]
        );
    }

    #[test]
    fn request_failure_restores_ready_and_notifies_broken_reply() {
        let mut engine = ready_engine();
        let _ = engine.apply(LinkCommand::RequestStarted);
        let result = engine.apply(LinkCommand::RequestFailed);
        assert_eq!(result.after, LinkStatus::Ready);
        assert_eq!(
            result.notifications.as_slice(),
            &[LinkNotification::Status(LinkStatus::BrokenReply)]
        );
    }

    #[test]
    fn request_start_rejected_outside_ready() {
        let mut engine = LinkEngine::new();
        let _ = engine.apply(LinkCommand::CredentialsAccepted);
        let result = engine.apply(LinkCommand::RequestStarted);
        assert_eq!(result.status, LinkApplyStatus::Ignored);
        assert_eq!(engine.status(), LinkStatus::Connecting);
    }

    #[test]
    fn reconnect_during_receiving_supersedes_request() {
        let mut engine = ready_engine();
        let _ = engine.apply(LinkCommand::RequestStarted);
        let result = engine.apply(LinkCommand::CredentialsAccepted);
        assert_eq!(result.after, LinkStatus::Connecting);
    }

    fn ready_engine() -> LinkEngine {
        let mut engine = LinkEngine::new();
        let _ = engine.apply(LinkCommand::CredentialsAccepted);
        let _ = engine.apply(LinkCommand::LinkUp);
        engine
    }
}
