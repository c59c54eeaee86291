use crate::core::{EngineError, Stopwatch};
use crate::geometry::Hex;
use crate::screen::{point, Point};

use super::{GridBuffers, GridCore};

pub(super) fn build_buffers(core: &mut GridCore) -> Result<GridBuffers, EngineError> {
    core.config.validate()?;
    let sw = Stopwatch::start("grid init");

    let hexes = core.config.hexes();
    let centers = core.layout.grid_centers(&hexes);
    let corners = core.layout.grid_corners(&centers);

    core.memory.reset();
    core.memory.reserve(
        (hexes.len() * std::mem::size_of::<Hex>())
            + (centers.len() + corners.len()) * std::mem::size_of::<Point>(),
    );

    let buffers = GridBuffers {
        hexes: core.memory.store(&hexes)?,
        centers: core.memory.store(&centers)?,
        corners: core.memory.store(&corners)?,
    };
    core.buffers = Some(buffers);

    core.view_origin = point(0., 0.);
    core.view_scale = 1.;

    log::debug!(
        "grid {:?}: {} hexes, {} corners, {} bytes of linear memory",
        core.handle,
        hexes.len(),
        corners.len(),
        core.memory.size()
    );
    sw.finish();

    Ok(buffers)
}
