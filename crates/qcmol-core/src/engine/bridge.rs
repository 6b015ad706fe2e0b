use super::error::EngineError;
use super::native::{EngineSession, NativeEngine};
use crate::core::models::molecule::Molecule;
use crate::core::models::units::Units;
use crate::core::utils::masses::MassTable;
use tracing::{debug, instrument};

impl Molecule {
    /// Builds a molecule from an engine's native molecule.
    ///
    /// The engine is asked to update (normalize) the geometry in place first, so the result
    /// reflects any recentering or reorientation the engine applies. The conversion goes
    /// through the engine's string export, so anything the export omits (symmetry frame,
    /// point group) is lost. Masses come from the built-in table.
    pub fn from_native_handle<E: NativeEngine>(
        session: &EngineSession<E>,
        handle: &mut E::Handle,
    ) -> Result<Self, EngineError> {
        Self::from_native_handle_with(session, handle, &MassTable::standard())
    }

    /// Same as [`Molecule::from_native_handle`], with masses looked up in `mass_table`.
    #[instrument(skip_all, name = "from_native_handle")]
    pub fn from_native_handle_with<E: NativeEngine>(
        session: &EngineSession<E>,
        handle: &mut E::Handle,
        mass_table: &MassTable,
    ) -> Result<Self, EngineError> {
        let engine = session.engine();
        engine.update_geometry(handle)?;
        let text = engine.export_string(handle)?;
        debug!("Engine exported {} line(s) of geometry", text.lines().count());
        Ok(Molecule::parse_with(&text, Units::default(), mass_table)?)
    }

    /// Creates the engine's native molecule for this geometry.
    ///
    /// Initializes the engine on first use; this touches process-wide engine state that is
    /// owned by the session, not by the molecule. The returned handle has already had its
    /// geometry updated.
    #[instrument(skip_all, name = "make_native_handle")]
    pub fn make_native_handle<E: NativeEngine>(
        &self,
        session: &EngineSession<E>,
    ) -> Result<E::Handle, EngineError> {
        session.ensure_initialized()?;
        let engine = session.engine();
        let mut handle = engine.create_molecule_from_string(&self.to_string())?;
        engine.update_geometry(&mut handle)?;
        Ok(handle)
    }
}
