//! Native driver: loads a grid, replays scripted input over a number of
//! frames and writes the last composited frame as PNG.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::fs::{self, File};
    use std::io::BufWriter;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use clap::Parser;
    use hexgrid_engine::GridConfig;
    use hexgrid_viewer::{InputEvent, Surface, Viewer, ViewerConfig};

    #[derive(Parser, Debug)]
    #[command(name = "hexgrid-viewer", version, about = "Render a hex grid module through the viewer harness")]
    struct Args {
        /// Grid config JSON; the demo grid when omitted
        #[arg(long)]
        grid: Option<PathBuf>,

        /// Viewer config JSON
        #[arg(long)]
        viewer: Option<PathBuf>,

        /// JSON array of wheel / mouse_down events in page coordinates
        #[arg(long)]
        events: Option<PathBuf>,

        #[arg(long, default_value_t = 1)]
        frames: u32,

        /// Where the last visible frame goes
        #[arg(long, default_value = "frame.png")]
        out: PathBuf,

        /// Also write the offscreen surface
        #[arg(long)]
        offscreen_out: Option<PathBuf>,
    }

    fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }

    fn write_png(surface: &Surface, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        surface
            .write_png(BufWriter::new(file))
            .with_context(|| format!("failed to encode {}", path.display()))?;
        log::info!("wrote {}x{} png to {}", surface.width(), surface.height(), path.display());
        Ok(())
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();

        let grid = match &args.grid {
            Some(p) => GridConfig::from_json(&read(p)?).context("invalid grid config")?,
            None => GridConfig::default(),
        };
        let config = match &args.viewer {
            Some(p) => ViewerConfig::from_json(&read(p)?).context("invalid viewer config")?,
            None => ViewerConfig::default(),
        };
        let events = match &args.events {
            Some(p) => InputEvent::parse_script(&read(p)?).context("invalid event script")?,
            None => Vec::new(),
        };

        let mut viewer = Viewer::from_configs(grid, config)?;
        let blit = viewer.run(&events, args.frames)?;
        match blit {
            Some(b) => log::info!("last frame copied {:?} -> {:?}", b.src, b.dst),
            None => log::warn!("viewport is outside the offscreen surface; last frame is empty"),
        }

        write_png(viewer.canvas(), &args.out)?;
        if let Some(p) = &args.offscreen_out {
            write_png(viewer.offscreen(), p)?;
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
