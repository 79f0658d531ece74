use heapless::Vec;
use statig::prelude::*;

use super::events::{LinkApplyStatus, LinkCommand, LinkNotification};
use super::status::LinkStatus;

pub(super) const LINK_NOTIFICATIONS_MAX: usize = 2;

#[derive(Clone, Copy, Debug)]
pub(super) struct LinkMachine {
    pub(super) status: LinkStatus,
}

#[derive(Debug)]
pub(super) struct DispatchContext {
    pub(super) status: LinkApplyStatus,
    pub(super) notifications: Vec<LinkNotification, LINK_NOTIFICATIONS_MAX>,
}

impl Default for DispatchContext {
    fn default() -> Self {
        Self {
            status: LinkApplyStatus::Unchanged,
            notifications: Vec::new(),
        }
    }
}

impl LinkMachine {
    pub(super) fn new() -> Self {
        Self {
            status: LinkStatus::NotConnected,
        }
    }

    fn enter(&mut self, context: &mut DispatchContext, status: LinkStatus) {
        self.status = status;
        context.status = LinkApplyStatus::Applied;
        let _ = context
            .notifications
            .push(LinkNotification::Status(status));
    }

    // connect() is legal from every state; the three credential commands
    // behave identically wherever they arrive.
    fn connect_outcome(
        &mut self,
        context: &mut DispatchContext,
        event: &LinkCommand,
    ) -> Option<Outcome<State>> {
        match event {
            LinkCommand::CredentialsMissing | LinkCommand::CredentialsRejected => {
                self.enter(context, LinkStatus::BrokenConfiguration);
                Some(Transition(State::broken_configuration()))
            }
            LinkCommand::CredentialsAccepted => {
                self.enter(context, LinkStatus::Connecting);
                Some(Transition(State::connecting()))
            }
            _ => None,
        }
    }

    fn ignore(context: &mut DispatchContext) -> Outcome<State> {
        context.status = LinkApplyStatus::Ignored;
        Handled
    }
}

#[state_machine(initial = "State::not_connected()")]
impl LinkMachine {
    #[state]
    fn not_connected(
        &mut self,
        context: &mut DispatchContext,
        event: &LinkCommand,
    ) -> Outcome<State> {
        match self.connect_outcome(context, event) {
            Some(outcome) => outcome,
            None => Self::ignore(context),
        }
    }

    #[state]
    fn broken_configuration(
        &mut self,
        context: &mut DispatchContext,
        event: &LinkCommand,
    ) -> Outcome<State> {
        match self.connect_outcome(context, event) {
            Some(outcome) => outcome,
            None => Self::ignore(context),
        }
    }

    #[state]
    fn connecting(
        &mut self,
        context: &mut DispatchContext,
        event: &LinkCommand,
    ) -> Outcome<State> {
        if let Some(outcome) = self.connect_outcome(context, event) {
            return outcome;
        }
        match event {
            LinkCommand::LinkUp => {
                self.enter(context, LinkStatus::Ready);
                let _ = context.notifications.push(LinkNotification::Ready);
                Transition(State::ready())
            }
            _ => Self::ignore(context),
        }
    }

    #[state]
    fn ready(&mut self, context: &mut DispatchContext, event: &LinkCommand) -> Outcome<State> {
        if let Some(outcome) = self.connect_outcome(context, event) {
            return outcome;
        }
        match event {
            LinkCommand::RequestStarted => {
                self.enter(context, LinkStatus::Receiving);
                Transition(State::receiving())
            }
            _ => Self::ignore(context),
        }
    }

    #[state]
    fn receiving(&mut self, context: &mut DispatchContext, event: &LinkCommand) -> Outcome<State> {
        if let Some(outcome) = self.connect_outcome(context, event) {
            return outcome;
        }
        match event {
            LinkCommand::RequestChunk { finished: false } => {
                context.status = LinkApplyStatus::Unchanged;
                let _ = context
                    .notifications
                    .push(LinkNotification::Status(LinkStatus::Receiving));
                Handled
            }
            LinkCommand::RequestChunk { finished: true } => {
                self.enter(context, LinkStatus::Ready);
                let _ = context.notifications.push(LinkNotification::Document);
                Transition(State::ready())
            }
            LinkCommand::RequestFailed => {
                // The failure kills the request, not the association: the
                // stored status returns to Ready while the notification
                // carries BrokenReply.
                self.status = LinkStatus::Ready;
                context.status = LinkApplyStatus::Applied;
                let _ = context
                    .notifications
                    .push(LinkNotification::Status(LinkStatus::BrokenReply));
                Transition(State::ready())
            }
            _ => Self::ignore(context),
        }
    }
}
