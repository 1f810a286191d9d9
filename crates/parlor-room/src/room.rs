//! A room: a named roster of joined clients.

use crate::Client;

/// A chat room. Owned by the registry; the roster may only be touched
/// from inside a [`RoomRegistry::open_room`] callback, which is what
/// guarantees exclusive access.
///
/// The roster keeps insertion order (join order) and performs no
/// de-duplication; the same identity joining twice appears twice.
///
/// [`RoomRegistry::open_room`]: crate::RoomRegistry::open_room
pub struct Room<C> {
    name: String,
    clients: Vec<Client<C>>,
}

impl<C> Room<C> {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            clients: Vec::new(),
        }
    }

    /// The room's name. Immutable after creation and identical to the
    /// registry key the room lives under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a client to the roster.
    pub fn add_client(&mut self, client: Client<C>) {
        tracing::info!(
            room = %self.name,
            nickname = %client.nickname(),
            clients = self.clients.len() + 1,
            "client joined room"
        );
        self.clients.push(client);
    }

    /// The joined clients, in join order.
    pub fn clients(&self) -> &[Client<C>] {
        &self.clients
    }
}
