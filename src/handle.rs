use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::Protocol;

/// Cloneable handle serializing all access to a shared [`Protocol`].
///
/// The engine assumes each operation runs as an atomic, non-interleaved
/// unit; embedders that share one protocol across threads get that model
/// here from a single global lock.
#[derive(Clone, Default)]
pub struct ProtocolHandle {
    inner: Arc<Mutex<Protocol>>,
}

impl ProtocolHandle {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            inner: Arc::new(Mutex::new(protocol)),
        }
    }

    /// Run `f` with exclusive access to the protocol.
    pub fn with<R>(&self, f: impl FnOnce(&mut Protocol) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountId;

    #[test]
    fn clones_share_state() {
        let handle = ProtocolHandle::default();
        let other = handle.clone();

        let owner = AccountId::new([1; 32]);
        handle
            .with(|p| p.initialize(owner, AccountId::new([2; 32]), AccountId::new([3; 32])))
            .unwrap();

        assert!(other.with(|p| p.config().initialized));
    }
}
