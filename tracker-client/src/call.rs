use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::CallError;

/// Raw response body, or why there is none.
///
/// `Ok` means bytes came back from the server, whatever the HTTP status or
/// the payload says; semantic success is decided by whoever reads the body.
pub type CallResult = Result<String, CallError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Create a connected completer/handle pair for one call.
pub fn call_channel(id: RequestId, path: &'static str) -> (CallCompleter, CallHandle) {
    let (sender, receiver) = oneshot::channel();
    (
        CallCompleter { sender },
        CallHandle {
            id,
            path,
            receiver,
        },
    )
}

/// Producer side, owned by the task performing the request.
#[derive(Debug)]
pub struct CallCompleter {
    sender: oneshot::Sender<CallResult>,
}

impl CallCompleter {
    /// Deliver the result. Silently discarded when the handle was dropped.
    pub fn complete(self, result: CallResult) {
        let _ = self.sender.send(result);
    }
}

/// Consumer side of an in-flight call.
///
/// Polling never blocks. Dropping the handle abandons the call: the request
/// still runs to completion but nobody observes its result.
#[derive(Debug)]
pub struct CallHandle {
    id: RequestId,
    path: &'static str,
    receiver: oneshot::Receiver<CallResult>,
}

impl CallHandle {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Take the result if it has arrived. Consumes the handle either way so
    /// a result can only ever be observed once; a pending call is handed back.
    pub fn try_take(mut self) -> Result<CallResult, CallHandle> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(result),
            Err(TryRecvError::Empty) => Err(self),
            Err(TryRecvError::Closed) => Ok(Err(CallError::TaskEnded)),
        }
    }
}
