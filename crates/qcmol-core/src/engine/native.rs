use super::error::EngineError;
use std::sync::Mutex;
use tracing::{debug, info};

/// The capabilities qcmol consumes from an external quantum-chemistry engine.
///
/// Implementors wrap the engine's own molecule object as [`NativeEngine::Handle`]. None of
/// the operations are performed by qcmol itself; it only relies on their contracts:
///
/// - [`initialize`](NativeEngine::initialize) sets up process-wide engine state. It may not
///   be safe to call twice, so callers go through [`EngineSession::ensure_initialized`].
/// - [`update_geometry`](NativeEngine::update_geometry) may translate, reorient or reorder
///   atoms; molecules built from the exported text reflect whatever it did.
pub trait NativeEngine {
    type Handle;

    fn initialize(&self) -> Result<(), EngineError>;

    fn create_molecule_from_string(&self, text: &str) -> Result<Self::Handle, EngineError>;

    fn update_geometry(&self, handle: &mut Self::Handle) -> Result<(), EngineError>;

    fn export_string(&self, handle: &Self::Handle) -> Result<String, EngineError>;
}

/// Owns an engine together with a guard around its one-time initialization.
///
/// The guard is held while `initialize` runs, so concurrent callers never initialize
/// twice. A failed initialization leaves the session uninitialized and is retried on the
/// next call.
#[derive(Debug)]
pub struct EngineSession<E: NativeEngine> {
    engine: E,
    initialized: Mutex<bool>,
}

impl<E: NativeEngine> EngineSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            initialized: Mutex::new(false),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.lock().map(|flag| *flag).unwrap_or(false)
    }

    /// Initializes the engine unless a previous call already succeeded.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if initialization fails, or [`EngineError::Internal`] if
    /// the guard was poisoned by a panic in another thread.
    pub fn ensure_initialized(&self) -> Result<(), EngineError> {
        let mut initialized = self
            .initialized
            .lock()
            .map_err(|_| EngineError::Internal("engine initialization guard poisoned".into()))?;
        if *initialized {
            debug!("Engine already initialized; skipping.");
            return Ok(());
        }
        info!("Initializing external engine.");
        self.engine.initialize()?;
        *initialized = true;
        Ok(())
    }
}
