use std::collections::HashMap;
use std::fmt;

use super::session::GameSession;

/// Characters that some key-value backends refuse in keys.
const RESERVED: [char; 6] = ['.', '$', '#', '[', ']', '/'];

/// Sanitized user identifier. Both lookups and inserts go through this type,
/// so a raw id always maps to the same entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserKey(String);

impl UserKey {
    pub fn new(raw: &str) -> Self {
        Self(raw.chars().map(|ch| if RESERVED.contains(&ch) { '_' } else { ch }).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory registry of games, one per user.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<UserKey, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user: &UserKey) -> Option<&GameSession> {
        self.sessions.get(user)
    }

    pub fn get_mut(&mut self, user: &UserKey) -> Option<&mut GameSession> {
        self.sessions.get_mut(user)
    }

    /// Returns the user's session, creating it with `create` when missing. The
    /// flag is true when a session was created.
    pub fn get_or_create<F>(&mut self, user: &UserKey, create: F) -> (&mut GameSession, bool)
    where
        F: FnOnce() -> GameSession,
    {
        let mut created = false;
        let session = self.sessions.entry(user.clone()).or_insert_with(|| {
            created = true;
            create()
        });
        (session, created)
    }

    /// Installs `session` for the user, returning the one it replaced.
    pub fn replace(&mut self, user: &UserKey, session: GameSession) -> Option<GameSession> {
        self.sessions.insert(user.clone(), session)
    }

    pub fn remove(&mut self, user: &UserKey) -> Option<GameSession> {
        self.sessions.remove(user)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_are_replaced() {
        assert_eq!(UserKey::new("ada.l@x.io").as_str(), "ada_l@x_io");
        assert_eq!(UserKey::new("a$b#c[d]e/f").as_str(), "a_b_c_d_e_f");
        assert_eq!(UserKey::from("plain"), UserKey::new("plain"));
    }

    #[test]
    fn keys_agree_between_insert_and_lookup() {
        let mut store = SessionStore::new();
        store.replace(&UserKey::new("ada.l"), GameSession::new("CRANE", 6));
        assert!(store.get(&UserKey::new("ada.l")).is_some());
        assert!(store.get(&UserKey::new("ada_l")).is_some());
    }

    #[test]
    fn get_or_create_reports_creation_once() {
        let mut store = SessionStore::new();
        let user = UserKey::new("u1");
        let (_, created) = store.get_or_create(&user, || GameSession::new("CRANE", 6));
        assert!(created);
        let (session, created) = store.get_or_create(&user, || GameSession::new("SLATE", 6));
        assert!(!created);
        assert_eq!(session.target(), "CRANE");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = SessionStore::new();
        let user = UserKey::new("u1");
        store.replace(&user, GameSession::new("CRANE", 6));
        assert!(store.remove(&user).is_some());
        assert!(store.remove(&user).is_none());
        assert!(store.is_empty());
    }
}
