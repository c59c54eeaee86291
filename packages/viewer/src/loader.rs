//! Module loader
//!
//! Instantiating a module means: ask it for its instance handle, initialize
//! it, and confirm the three geometry buffers exist. The result pairs the
//! module with the handle every later call needs.

use hexgrid_engine::{GridConfig, GridCore, GridModule, Handle};
use log::{debug, info};

use crate::error::ViewerError;

pub struct LoadedModule<M: GridModule> {
    module: M,
    handle: Handle,
}

impl<M: GridModule> LoadedModule<M> {
    pub fn module(&self) -> &M {
        &self.module
    }

    pub fn module_mut(&mut self) -> &mut M {
        &mut self.module
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Module and handle, for callers that need both borrowed at once.
    pub fn parts_mut(&mut self) -> (&mut M, Handle) {
        (&mut self.module, self.handle)
    }

    pub fn into_inner(self) -> M {
        self.module
    }
}

/// Initialize `module` and log its exported buffers.
pub fn load<M: GridModule>(mut module: M) -> Result<LoadedModule<M>, ViewerError> {
    let handle = module.ptr();
    debug!("ptr: {}", handle.raw());
    module.init(handle)?;
    debug!("init");

    let hexes = module.hex_buf(handle)?;
    let centers = module.centers_buf(handle)?;
    let corners = module.corners_buf(handle)?;
    debug!("hex {:?}", hexes);
    debug!("centers {:?}", centers);
    debug!("corners {:?}", corners);
    info!(
        "loaded grid module: {} hexes, {} bytes of linear memory",
        hexes.len,
        module.memory().size()
    );

    Ok(LoadedModule { module, handle })
}

/// Build and load the bundled engine from a grid config.
pub fn load_grid(config: GridConfig) -> Result<LoadedModule<GridCore>, ViewerError> {
    config.validate()?;
    load(GridCore::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_initializes_the_module() {
        let loaded = load_grid(GridConfig::default()).unwrap();
        assert!(loaded.module().is_initialized());
        assert_eq!(loaded.module().ptr(), loaded.handle());
        assert_eq!(4, loaded.module().hex_buf(loaded.handle()).unwrap().len);
    }

    #[test]
    fn load_rejects_invalid_config() {
        let config = GridConfig { hex_size: [-1., 4.], ..GridConfig::default() };
        assert!(matches!(load_grid(config), Err(ViewerError::Engine(_))));
    }
}
