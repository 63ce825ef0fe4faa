mod drawing;

use std::path::PathBuf;

use anyhow::{Context, Result};

use easel_canvas::Application;
use easel_engine::logging::{init_logging, LoggingConfig};

/// Environment variable naming a font file that overrides the system search.
const FONT_ENV: &str = "EASEL_FONT";

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let canvas = drawing::build_canvas().context("failed to build the canvas")?;

    let mut app = Application::new()
        .title(drawing::TITLE)
        .geometry(drawing::GEOMETRY)?
        .canvas(canvas);
    if let Some(font) = load_font() {
        app = app.font(font);
    }

    app.run()
}

/// Reads the first usable sans-serif font, preferring `$EASEL_FONT`.
fn load_font() -> Option<Vec<u8>> {
    if let Some(path) = std::env::var_os(FONT_ENV).map(PathBuf::from) {
        match std::fs::read(&path) {
            Ok(bytes) => return Some(bytes),
            Err(e) => log::warn!("{FONT_ENV}={}: {e}; falling back to system fonts", path.display()),
        }
    }

    let found = FONT_CANDIDATES.iter().find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        log::debug!("using font {p}");
        Some(bytes)
    });
    if found.is_none() {
        log::warn!("no system font found; set {FONT_ENV} to a .ttf file to draw text");
    }
    found
}
