use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::deck::{Deck, PageChange};
use crate::protocol::SyncMessage;

/// Outbound side of a cross-view channel.
pub trait SyncTransport {
    fn publish(&self, message: &SyncMessage);
}

/// Publishes `change` if the deck asked for it. Returns whether it was sent.
pub fn publish_change<T>(transport: &T, change: &PageChange) -> bool
where
    T: SyncTransport + ?Sized,
{
    if !change.publish {
        return false;
    }
    transport.publish(&SyncMessage::new(change.page));
    true
}

struct Mailbox {
    id: u64,
    queue: VecDeque<SyncMessage>,
}

#[derive(Default)]
struct BusState {
    mailboxes: Vec<Mailbox>,
    next_id: u64,
}

/// In-process broadcast bus with one mailbox per subscriber.
///
/// Publishing enqueues into every other mailbox; nothing is delivered until
/// the receiving side drains its own mailbox.
#[derive(Clone, Default)]
pub struct LocalBus {
    state: Rc<RefCell<BusState>>,
}

impl LocalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> BusEndpoint {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id = state.next_id.saturating_add(1);
        state.mailboxes.push(Mailbox {
            id,
            queue: VecDeque::new(),
        });
        BusEndpoint {
            id,
            state: Rc::clone(&self.state),
        }
    }

    pub fn subscribers(&self) -> usize {
        self.state.borrow().mailboxes.len()
    }

    /// Messages queued across all mailboxes.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .mailboxes
            .iter()
            .map(|mailbox| mailbox.queue.len())
            .sum()
    }
}

/// One subscriber of a [`LocalBus`]. Dropping it closes the mailbox.
pub struct BusEndpoint {
    id: u64,
    state: Rc<RefCell<BusState>>,
}

impl BusEndpoint {
    pub fn drain(&self) -> Vec<SyncMessage> {
        let mut state = self.state.borrow_mut();
        state
            .mailboxes
            .iter_mut()
            .find(|mailbox| mailbox.id == self.id)
            .map(|mailbox| mailbox.queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Delivers queued messages to `deck`, returning the changes they caused.
    pub fn pump(&self, deck: &mut Deck) -> Vec<PageChange> {
        self.drain()
            .iter()
            .filter_map(|message| deck.apply_remote(message))
            .collect()
    }
}

impl SyncTransport for BusEndpoint {
    fn publish(&self, message: &SyncMessage) {
        let mut state = self.state.borrow_mut();
        for mailbox in state.mailboxes.iter_mut() {
            if mailbox.id != self.id {
                mailbox.queue.push_back(*message);
            }
        }
    }
}

impl Drop for BusEndpoint {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.mailboxes.retain(|mailbox| mailbox.id != self.id);
        }
    }
}
