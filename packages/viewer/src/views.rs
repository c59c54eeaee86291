//! Typed views over the module's linear memory.
//!
//! A buffer comes back from the module as a `(pointer, count)` region whose
//! elements are scalar pairs. The views here are flat scalar slices, the same
//! shape a page gets from `new Int32Array(memory.buffer, ptr, count * HEX_SIZE)`.
//! They borrow the module, so nothing can mutate its memory while they live.

use hexgrid_engine::{GridModule, Handle, LinearMemory, Region};

use crate::error::ViewerError;

/// Scalars per axial coordinate (`q, r`).
pub const HEX_SIZE: usize = 2;
/// Scalars per pixel point (`x, y`).
pub const POINT_SIZE: usize = 2;
pub const CORNERS_PER_HEX: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct GeometryViews<'a> {
    hexes: &'a [i32],
    centers: &'a [f32],
    corners: &'a [f32],
}

impl<'a> GeometryViews<'a> {
    /// Query the three buffers of an initialized module and view them in place.
    pub fn build<M: GridModule + ?Sized>(module: &'a M, handle: Handle) -> Result<Self, ViewerError> {
        let memory = module.memory();
        let hexes = scalar_view(memory, module.hex_buf(handle)?, HEX_SIZE)?;
        let centers = scalar_view(memory, module.centers_buf(handle)?, POINT_SIZE)?;
        let corners = scalar_view(memory, module.corners_buf(handle)?, POINT_SIZE)?;
        Self::from_slices(hexes, centers, corners)
    }

    /// Wrap already-flat buffers, checking the length invariants.
    pub fn from_slices(hexes: &'a [i32], centers: &'a [f32], corners: &'a [f32]) -> Result<Self, ViewerError> {
        if hexes.len() % HEX_SIZE != 0 || centers.len() % POINT_SIZE != 0 || corners.len() % POINT_SIZE != 0 {
            return Err(ViewerError::Geometry(format!(
                "odd scalar counts: hexes {}, centers {}, corners {}",
                hexes.len(),
                centers.len(),
                corners.len()
            )));
        }
        let n = hexes.len() / HEX_SIZE;
        if centers.len() / POINT_SIZE != n {
            return Err(ViewerError::Geometry(format!(
                "{} centers for {} hexes",
                centers.len() / POINT_SIZE,
                n
            )));
        }
        if corners.len() / POINT_SIZE != n * CORNERS_PER_HEX {
            return Err(ViewerError::Geometry(format!(
                "{} corners for {} hexes, expected {}",
                corners.len() / POINT_SIZE,
                n,
                n * CORNERS_PER_HEX
            )));
        }
        Ok(Self { hexes, centers, corners })
    }

    pub fn len(&self) -> usize {
        self.hexes.len() / HEX_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn hexes(&self) -> &'a [i32] {
        self.hexes
    }

    pub fn centers(&self) -> &'a [f32] {
        self.centers
    }

    pub fn corners(&self) -> &'a [f32] {
        self.corners
    }

    pub fn hex(&self, i: usize) -> Option<[i32; 2]> {
        let s = self.hexes.get(i * HEX_SIZE..i * HEX_SIZE + HEX_SIZE)?;
        Some([s[0], s[1]])
    }

    pub fn center(&self, i: usize) -> Option<[f32; 2]> {
        let s = self.centers.get(i * POINT_SIZE..i * POINT_SIZE + POINT_SIZE)?;
        Some([s[0], s[1]])
    }

    /// The 12 scalars of polygon `i`.
    pub fn polygon(&self, i: usize) -> Option<&'a [f32]> {
        let n = CORNERS_PER_HEX * POINT_SIZE;
        self.corners.get(i * n..i * n + n)
    }
}

fn scalar_view<T: bytemuck::Pod>(memory: &LinearMemory, region: Region, per_elem: usize) -> Result<&[T], ViewerError> {
    let len = (region.len as usize)
        .checked_mul(per_elem)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ViewerError::Geometry(format!("region of {} elements overflows", region.len)))?;
    Ok(memory.view(Region { len, ..region })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_grid;
    use hexgrid_engine::GridConfig;

    #[test]
    fn views_follow_module_buffers() {
        let loaded = load_grid(GridConfig::default()).unwrap();
        let views = GeometryViews::build(loaded.module(), loaded.handle()).unwrap();
        assert_eq!(4, views.len());
        assert_eq!(&[1, 1, 3, 3, 3, 2, 2, 3], views.hexes());
        assert_eq!(8, views.centers().len());
        assert_eq!(48, views.corners().len());

        let centers = loaded.module().centers().unwrap();
        assert_eq!(Some([centers[2].x(), centers[2].y()]), views.center(2));
        assert_eq!(Some([3, 2]), views.hex(2));
        assert_eq!(None, views.hex(4));
        assert_eq!(12, views.polygon(3).map(<[f32]>::len).unwrap_or(0));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let hexes = [0, 0, 1, 0];
        let centers = [0.; 4];
        let corners = [0.; 24];
        assert!(GeometryViews::from_slices(&hexes, &centers, &corners).is_ok());
        assert!(matches!(
            GeometryViews::from_slices(&hexes, &centers[..2], &corners),
            Err(ViewerError::Geometry(_))
        ));
        assert!(matches!(
            GeometryViews::from_slices(&hexes, &centers, &corners[..22]),
            Err(ViewerError::Geometry(_))
        ));
        assert!(matches!(
            GeometryViews::from_slices(&hexes[..3], &centers, &corners),
            Err(ViewerError::Geometry(_))
        ));
    }

    #[test]
    fn views_before_init_fail() {
        let core = hexgrid_engine::GridCore::new(GridConfig::default());
        let h = core.handle();
        assert!(matches!(
            GeometryViews::build(&core, h),
            Err(ViewerError::Engine(hexgrid_engine::EngineError::NotInitialized))
        ));
    }
}
