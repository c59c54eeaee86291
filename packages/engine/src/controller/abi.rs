//! The module's exported function table.
//!
//! Hosts only ever talk to a grid through these calls, passing back the
//! handle they got from [`GridModule::ptr`]. Buffers come back as regions of
//! [`GridModule::memory`].

use crate::core::{EngineError, LinearMemory, Region};

use super::{GridCore, Handle};

pub trait GridModule {
    fn ptr(&self) -> Handle;
    fn init(&mut self, handle: Handle) -> Result<(), EngineError>;

    fn hex_buf(&self, handle: Handle) -> Result<Region, EngineError>;
    fn centers_buf(&self, handle: Handle) -> Result<Region, EngineError>;
    fn corners_buf(&self, handle: Handle) -> Result<Region, EngineError>;

    fn zoom(&mut self, handle: Handle, dy: f32, x: f32, y: f32) -> Result<(), EngineError>;
    fn get_hex(&self, handle: Handle, x: f32, y: f32) -> Result<(i32, i32), EngineError>;
    fn get_origin(&self, handle: Handle) -> Result<(f32, f32), EngineError>;
    fn adj_origin(&mut self, handle: Handle, dx: f32, dy: f32) -> Result<(), EngineError>;
    fn adj_size(&mut self, handle: Handle, factor: f32) -> Result<(), EngineError>;
    fn get_scale(&self, handle: Handle) -> Result<f32, EngineError>;

    fn memory(&self) -> &LinearMemory;
}

impl GridCore {
    fn check(&self, handle: Handle) -> Result<(), EngineError> {
        if handle == self.handle {
            Ok(())
        } else {
            Err(EngineError::InvalidHandle(handle))
        }
    }
}

impl GridModule for GridCore {
    fn ptr(&self) -> Handle {
        self.handle
    }

    fn init(&mut self, handle: Handle) -> Result<(), EngineError> {
        self.check(handle)?;
        self.init_buffers().map(|_| ())
    }

    fn hex_buf(&self, handle: Handle) -> Result<Region, EngineError> {
        self.check(handle)?;
        Ok(self.buffers()?.hexes)
    }

    fn centers_buf(&self, handle: Handle) -> Result<Region, EngineError> {
        self.check(handle)?;
        Ok(self.buffers()?.centers)
    }

    fn corners_buf(&self, handle: Handle) -> Result<Region, EngineError> {
        self.check(handle)?;
        Ok(self.buffers()?.corners)
    }

    fn zoom(&mut self, handle: Handle, dy: f32, x: f32, y: f32) -> Result<(), EngineError> {
        self.check(handle)?;
        self.zoom_at(dy, x, y);
        Ok(())
    }

    fn get_hex(&self, handle: Handle, x: f32, y: f32) -> Result<(i32, i32), EngineError> {
        self.check(handle)?;
        let h = self.hex_at(x, y);
        Ok((h.q(), h.r()))
    }

    fn get_origin(&self, handle: Handle) -> Result<(f32, f32), EngineError> {
        self.check(handle)?;
        let o = self.origin();
        Ok((o.x(), o.y()))
    }

    fn adj_origin(&mut self, handle: Handle, dx: f32, dy: f32) -> Result<(), EngineError> {
        self.check(handle)?;
        self.pan_by(dx, dy);
        Ok(())
    }

    fn adj_size(&mut self, handle: Handle, factor: f32) -> Result<(), EngineError> {
        self.check(handle)?;
        self.scale_by(factor);
        Ok(())
    }

    fn get_scale(&self, handle: Handle) -> Result<f32, EngineError> {
        self.check(handle)?;
        Ok(self.scale())
    }

    fn memory(&self) -> &LinearMemory {
        &self.memory
    }
}
