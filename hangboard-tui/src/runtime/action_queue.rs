use hangboard::{Protocol, SessionSummary};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// A session ended, by finishing or by a confirmed exit.
    RecordSession(SessionSummary),
    SaveProtocol { protocol: Protocol, is_new: bool },
    ConfirmDelete,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
