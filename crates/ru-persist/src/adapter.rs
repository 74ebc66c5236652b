//! The `PersistenceAdapter` trait and the session wiring around it.

use ru_core::RandomSource;
use ru_events::Host;
use ru_session::{Session, SessionState};

use crate::PersistResult;

/// Stores and retrieves the persisted triple.
///
/// Adapters move [`SessionState`] as-is.  Normalizing missing collections
/// and healing inconsistent membership is the session's job on restore, so
/// an adapter should hand back absent keys as `None` rather than inventing
/// empty values.
pub trait PersistenceAdapter {
    fn save(&mut self, state: &SessionState) -> PersistResult<()>;

    /// `Ok(None)` when nothing has been saved yet.
    fn load(&mut self) -> PersistResult<Option<SessionState>>;
}

/// Keeps the last saved state in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryAdapter {
    state: Option<SessionState>,
    saves: usize,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state, as if it had been saved earlier.
    pub fn with_state(state: SessionState) -> Self {
        Self { state: Some(state), saves: 0 }
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn save(&mut self, state: &SessionState) -> PersistResult<()> {
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&mut self) -> PersistResult<Option<SessionState>> {
        Ok(self.state.clone())
    }
}

/// `Serialize`: write the session's current state through `adapter`.
pub fn save_session<H, R, A>(session: &Session<H, R>, adapter: &mut A) -> PersistResult<()>
where
    H: Host,
    R: RandomSource,
    A: PersistenceAdapter + ?Sized,
{
    let state = session.snapshot();
    tracing::debug!(
        available  = state.available.as_ref().map_or(0, Vec::len),
        dispatched = state.dispatched.as_ref().map_or(0, Vec::len),
        next       = state.next_event_tick,
        "saving reunion state"
    );
    adapter.save(&state)
}

/// `Deserialize`: restore the session from `adapter`.
///
/// With no saved state the session starts a new game.  Returns `true` if a
/// saved state was restored.
pub fn load_session<H, R, A>(session: &mut Session<H, R>, adapter: &mut A) -> PersistResult<bool>
where
    H: Host,
    R: RandomSource,
    A: PersistenceAdapter + ?Sized,
{
    match adapter.load()? {
        Some(state) => {
            session.restore(state);
            Ok(true)
        }
        None => {
            tracing::debug!("no saved reunion state, starting fresh");
            session.init_new_game();
            Ok(false)
        }
    }
}
