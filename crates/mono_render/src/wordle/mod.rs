//! Voice driven Wordle.
//!
//! [`WordleEngine`] is the entry point for a host: it takes transcripts per
//! user, keeps one [`GameSession`] per user in a [`SessionStore`] and renders
//! the current board as a base64 encoded 1-bit bitmap.

pub mod dictionary;
pub mod scoring;
pub mod session;
pub mod store;
pub mod view;
mod words;

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::raster::bmp;
use crate::raster::canvas::Canvas;

use dictionary::Dictionary;
use session::{GameSession, Phase};
use store::{SessionStore, UserKey};

/// Letters per word, fixed for the whole game.
pub const WORD_LENGTH: usize = 5;

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Rows in the guess grid.
    pub max_guesses: usize,
    pub canvas_width: u16,
    pub canvas_height: u16,
    /// Characters per line before the absent letter list wraps.
    pub hint_line_chars: usize,
    /// Seed for target selection; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            canvas_width: 526,
            canvas_height: 100,
            hint_line_chars: 24,
            seed: None,
        }
    }
}

/// A piece of speech recognised by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    /// Interim transcripts may still change and are never acted on.
    pub is_final: bool,
}

impl Transcript {
    pub fn final_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_final: true }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_final: false }
    }
}

/// Engine handle for hosts that call in from several threads. The single lock
/// keeps each guess commit from interleaving with any other access.
pub type SharedEngine = Arc<Mutex<WordleEngine>>;

/// Process wide game host: created once at startup and handed to whatever
/// dispatches input and render requests.
pub struct WordleEngine {
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    rng: StdRng,
    sessions: SessionStore,
}

impl WordleEngine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_dictionary(Arc::new(Dictionary::builtin().clone()), config)
    }

    pub fn with_dictionary(dictionary: Arc<Dictionary>, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { dictionary, config, rng, sessions: SessionStore::new() }
    }

    pub fn shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self, user: &str) -> Option<&GameSession> {
        self.sessions.get(&UserKey::new(user))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn new_session(&mut self) -> GameSession {
        fresh_session(&self.dictionary, &mut self.rng, self.config.max_guesses)
    }

    fn ensure_session(&mut self, user: &UserKey) -> bool {
        let (dictionary, rng) = (&self.dictionary, &mut self.rng);
        let max_guesses = self.config.max_guesses;
        let (_, created) = self
            .sessions
            .get_or_create(user, || fresh_session(dictionary, rng, max_guesses));
        if created {
            debug!("created wordle session for {user}");
        }
        created
    }

    /// Applies a transcript to the user's game and reports whether anything
    /// visible changed. Bad input is ignored and reports `false`.
    pub fn process_input(&mut self, user: &str, raw: &str) -> bool {
        let user = UserKey::new(user);
        let created = self.ensure_session(&user);
        let normalized = scoring::normalize(raw);

        let phase = match self.sessions.get(&user) {
            Some(session) => session.phase(),
            None => return created,
        };

        match phase {
            Phase::WaitingRestart => {
                if !scoring::wants_restart(&normalized) {
                    return created;
                }
                let session = self.new_session();
                self.sessions.replace(&user, session);
                debug!("restarted wordle session for {user}");
                true
            },
            Phase::Playing => {
                let dictionary = Arc::clone(&self.dictionary);
                let Some(session) = self.sessions.get_mut(&user) else {
                    return created;
                };
                match session.submit(&normalized, &dictionary) {
                    Ok(()) => true,
                    Err(rejection) => {
                        debug!("ignored input from {user}: {rejection}");
                        created
                    },
                }
            },
            Phase::Won | Phase::Lost => created,
        }
    }

    /// Like [`process_input`](Self::process_input), skipping interim transcripts.
    pub fn process_transcript(&mut self, user: &str, transcript: &Transcript) -> bool {
        if !transcript.is_final {
            return false;
        }
        self.process_input(user, &transcript.text)
    }

    /// Draws the user's board, creating a game first if there is none.
    pub fn render_canvas(&mut self, user: &str) -> Canvas {
        let user = UserKey::new(user);
        self.ensure_session(&user);
        match self.sessions.get(&user) {
            Some(session) => view::render_session(session, &self.config),
            None => Canvas::new(self.config.canvas_width, self.config.canvas_height),
        }
    }

    /// The user's board as a base64 encoded 1-bit BMP.
    pub fn render(&mut self, user: &str) -> String {
        bmp::encode_base64(&self.render_canvas(user))
    }

    /// Forgets the user's game. Unknown users are ignored.
    pub fn delete_session(&mut self, user: &str) {
        let user = UserKey::new(user);
        if self.sessions.remove(&user).is_some() {
            debug!("deleted wordle session for {user}");
        }
    }
}

fn fresh_session(dictionary: &Dictionary, rng: &mut StdRng, max_guesses: usize) -> GameSession {
    GameSession::new(dictionary.random_target(rng), max_guesses)
}
