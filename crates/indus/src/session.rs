//! Session context for one interactive fetch.
//!
//! The pipeline walks `Idle -> UniverseChosen -> ListLoaded -> Fetching ->
//! Fetched`. A failed list load keeps the session at `UniverseChosen` with
//! the error recorded, so the user can retry by re-choosing a universe.
//! There is no cancellation once fetching begins.

use crate::universe::NseUniverse;
use indus_data::fetcher::IndustryRecord;
use indus_data::universe_list::SymbolRecord;
use thiserror::Error;

/// States of a fetch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No universe chosen yet.
    Idle,
    /// A universe is chosen; its list is not loaded (or failed to load).
    UniverseChosen,
    /// The symbol list is loaded and ready to fetch.
    ListLoaded,
    /// Industry data is being fetched.
    Fetching,
    /// The industry table is complete.
    Fetched,
}

/// Errors from invalid session transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The requested action is not allowed in the current state.
    #[error("{action} is not allowed in state {state:?}")]
    InvalidTransition {
        /// The rejected action.
        action: &'static str,
        /// The state the session was in.
        state: SessionState,
    },
}

/// Context object carrying one interaction's state through the pipeline.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    universe: Option<NseUniverse>,
    symbols: Vec<SymbolRecord>,
    load_error: Option<String>,
    table: Vec<IndustryRecord>,
}

impl Session {
    /// Create an idle session.
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
            universe: None,
            symbols: Vec::new(),
            load_error: None,
            table: Vec::new(),
        }
    }

    /// Current state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The chosen universe, if any.
    pub const fn universe(&self) -> Option<NseUniverse> {
        self.universe
    }

    /// The loaded symbol list.
    pub fn symbols(&self) -> &[SymbolRecord] {
        &self.symbols
    }

    /// The most recent list-load error, if the last load failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The fetched industry table.
    pub fn table(&self) -> &[IndustryRecord] {
        &self.table
    }

    /// Choose (or re-choose) a universe. Drops any previously loaded list.
    pub fn choose_universe(&mut self, universe: NseUniverse) -> Result<(), SessionError> {
        match self.state {
            SessionState::Idle | SessionState::UniverseChosen | SessionState::ListLoaded => {
                self.universe = Some(universe);
                self.symbols.clear();
                self.load_error = None;
                self.state = SessionState::UniverseChosen;
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                action: "choose_universe",
                state,
            }),
        }
    }

    /// Record a successfully loaded symbol list.
    pub fn list_loaded(&mut self, symbols: Vec<SymbolRecord>) -> Result<(), SessionError> {
        match self.state {
            SessionState::UniverseChosen => {
                self.symbols = symbols;
                self.load_error = None;
                self.state = SessionState::ListLoaded;
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                action: "list_loaded",
                state,
            }),
        }
    }

    /// Record a failed list load. The session stays at `UniverseChosen`.
    pub fn list_load_failed(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        match self.state {
            SessionState::UniverseChosen => {
                self.load_error = Some(message.into());
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                action: "list_load_failed",
                state,
            }),
        }
    }

    /// Start fetching. Returns the Yahoo symbols captured at this instant.
    pub fn begin_fetch(&mut self) -> Result<Vec<String>, SessionError> {
        match self.state {
            SessionState::ListLoaded => {
                self.state = SessionState::Fetching;
                Ok(self
                    .symbols
                    .iter()
                    .map(|s| s.yahoo_symbol.clone())
                    .collect())
            }
            state => Err(SessionError::InvalidTransition {
                action: "begin_fetch",
                state,
            }),
        }
    }

    /// Record the completed industry table.
    pub fn finish_fetch(&mut self, table: Vec<IndustryRecord>) -> Result<(), SessionError> {
        match self.state {
            SessionState::Fetching => {
                self.table = table;
                self.state = SessionState::Fetched;
                Ok(())
            }
            state => Err(SessionError::InvalidTransition {
                action: "finish_fetch",
                state,
            }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
