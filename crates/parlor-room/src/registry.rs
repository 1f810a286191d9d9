//! The room registry: creates rooms lazily and serializes all room access.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::Room;

/// The lock-guarded collection of all rooms, keyed by name.
///
/// This is the entry point for room operations from the connection
/// handlers. The registry lock is coarse-grained: callbacks for different
/// room names still serialize against each other, which bounds throughput
/// but makes the consistency story trivial; a callback always observes a
/// fully settled registry.
///
/// Rooms are created lazily on first open and live until the process
/// exits. There is no removal path.
pub struct RoomRegistry<C> {
    rooms: Mutex<HashMap<String, Room<C>>>,
}

impl<C> RoomRegistry<C> {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    /// Opens the room called `name`, creating it first if it does not
    /// exist, and runs `f` with exclusive access to it.
    ///
    /// The registry lock is held for the whole get-or-create-and-mutate
    /// sequence: no other task can touch any room while `f` runs. The
    /// guard drops on every exit path, so the lock is released even if
    /// `f` panics.
    ///
    /// Names are case-sensitive and taken as given: at most one `Room`
    /// ever exists per distinct name. Lookups cannot fail; whatever `f`
    /// returns is passed back to the caller.
    pub async fn open_room<F, T>(&self, name: &str, f: F) -> T
    where
        F: FnOnce(&mut Room<C>) -> T,
    {
        let mut rooms = self.rooms.lock().await;
        let room = rooms.entry(name.to_owned()).or_insert_with(|| {
            tracing::info!(room = name, "room created");
            Room::new(name.to_owned())
        });
        f(room)
    }

    /// Returns the number of rooms currently in the registry.
    pub async fn room_count(&self) -> usize {
        self.rooms.lock().await.len()
    }

    /// Lists the names of all rooms, sorted for stable output.
    pub async fn room_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rooms.lock().await.keys().cloned().collect();
        names.sort();
        names
    }
}

impl<C> Default for RoomRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
