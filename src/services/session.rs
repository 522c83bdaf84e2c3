//! Session storage for the signed-in user
//!
//! The identity store never keeps the current user in a global. It receives a
//! [`SessionStore`] at construction instead, so each caller (the binary, a
//! test) owns its own session.

use parking_lot::RwLock;
use crate::models::User;

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<User>;
    fn save(&self, user: User);
    fn clear(&self);
}

/// Ephemeral session held in process memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: RwLock<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<User> {
        self.current.read().clone()
    }

    fn save(&self, user: User) {
        *self.current.write() = Some(user);
    }

    fn clear(&self) {
        *self.current.write() = None;
    }
}
