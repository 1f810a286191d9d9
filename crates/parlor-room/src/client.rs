//! Roster entries and the (stubbed) delivery channel.

use tokio::sync::mpsc;

/// Capacity of a client's inbound message channel. Tokio has no
/// zero-capacity rendezvous channel; a single slot is the closest
/// bounded analogue.
const INBOX_CAPACITY: usize = 1;

/// One connected peer, as recorded on a room's roster.
///
/// The transport handle `C` moves in here at join time, which is what
/// keeps the underlying connection alive after the onboarding task
/// finishes; there is no disconnect or removal path in this core, so a
/// roster entry outlives its task.
///
/// The nickname is taken verbatim from onboarding: it may be empty and
/// is never validated.
pub struct Client<C> {
    conn: C,
    nickname: String,
    inbox: mpsc::Sender<Message<C>>,
}

impl<C> Client<C> {
    /// Creates a client and its inbound message channel, returning the
    /// receiving end alongside it.
    ///
    /// Nothing sends on this channel yet: it exists as the delivery seam
    /// for a future fan-out feature, and callers currently drop the
    /// receiver. See [`Message`].
    pub fn new(nickname: impl Into<String>, conn: C) -> (Self, mpsc::Receiver<Message<C>>) {
        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
        let client = Self {
            conn,
            nickname: nickname.into(),
            inbox: tx,
        };
        (client, rx)
    }

    /// The nickname chosen during onboarding.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The parked transport handle.
    pub fn conn(&self) -> &C {
        &self.conn
    }

    /// A sender for this client's inbound message channel.
    pub fn inbox(&self) -> mpsc::Sender<Message<C>> {
        self.inbox.clone()
    }
}

/// A chat message addressed to a client.
///
/// Declared but never produced or consumed: no reachable code path sends
/// or reads one of these. Kept, together with [`Client::inbox`], as the
/// extension point a broadcast feature would plug into.
pub struct Message<C> {
    /// The client the message originates from.
    pub from: Client<C>,
    /// The text payload.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn inbox_sender_reaches_the_receiver() {
        let (alice, _alice_inbox) = Client::new("alice", ());
        let (bob, mut bob_inbox) = Client::new("bob", ());

        bob.inbox()
            .send(Message {
                from: alice,
                text: "hello".to_string(),
            })
            .await
            .expect("receiver is alive");

        let msg = bob_inbox.recv().await.expect("message delivered");
        assert_eq!(msg.from.nickname(), "alice");
        assert_eq!(msg.text, "hello");
    }

    #[tokio::test]
    async fn empty_nickname_is_allowed() {
        let (client, _inbox) = Client::new("", ());
        assert_eq!(client.nickname(), "");
    }
}
