// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command-line entry point: replay a drag gesture over an image and save the
// selected pixels.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};

use region_select::app::document::RasterDocument;
use region_select::app::view::canvas::{FrameSurface, compose_frame};
use region_select::app::view::crop::{HiddenSurface, OverlaySurface};
use region_select::app::{AppMessage, AppModel, update};
use region_select::config::AppConfig;
use region_select::{ContentMode, Point, PointerId, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    AspectFit,
    AspectFill,
    ScaleToFill,
    Center,
}

impl From<Mode> for ContentMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::AspectFit => ContentMode::AspectFit,
            Mode::AspectFill => ContentMode::AspectFill,
            Mode::ScaleToFill => ContentMode::ScaleToFill,
            Mode::Center => ContentMode::Center,
        }
    }
}

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "region-select", version, about)]
struct Args {
    /// Image to select from.
    file: PathBuf,

    /// Display area size in logical units.
    #[arg(long, value_parser = parse_size, default_value = "800x600")]
    display: Size,

    /// Display area position within the event coordinate space.
    #[arg(long, value_parser = parse_point, default_value = "0,0", allow_hyphen_values = true)]
    origin: Point,

    /// Pixel scale of the image; defaults to its @Nx suffix or 1.
    #[arg(long)]
    scale: Option<f64>,

    /// Content mode of the display area.
    #[arg(long, value_enum, default_value_t = Mode::AspectFit)]
    mode: Mode,

    /// Pointer-down location.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: Point,

    /// Intermediate pointer-move locations, in order.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    via: Vec<Point>,

    /// Pointer-up location.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: Point,

    /// Where to write the extracted region.
    #[arg(short, long, default_value = "selection.png")]
    output: PathBuf,

    /// Also write a frame showing the letterboxed image and the selection.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Extract on every move instead of only on release.
    #[arg(long)]
    live: bool,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        Self {
            display_frame: Rect::from_origin_size(args.origin, args.display),
            content_mode: args.mode.into(),
            pixel_scale: args.scale,
            live_extraction: args.live,
        }
    }
}

fn parse_pair(s: &str, sep: char) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(sep)
        .ok_or_else(|| format!("expected two numbers separated by '{sep}', got '{s}'"))?;
    let a = a.trim().parse().map_err(|e| format!("'{a}': {e}"))?;
    let b = b.trim().parse().map_err(|e| format!("'{b}': {e}"))?;
    Ok((a, b))
}

fn parse_point(s: &str) -> Result<Point, String> {
    parse_pair(s, ',').map(|(x, y)| Point::new(x, y))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = parse_pair(&s.to_ascii_lowercase(), 'x')?;
    Ok(Size::new(w, h))
}

/// Pointer messages for a single-finger drag.
fn gesture(args: &Args) -> Vec<AppMessage> {
    let pointer = PointerId::default();
    std::iter::once(AppMessage::PointerDown {
        pointer,
        at: args.from,
    })
    .chain(
        args.via
            .iter()
            .map(|&at| AppMessage::PointerMove { pointer, at }),
    )
    .chain(std::iter::once(AppMessage::PointerUp { pointer, at: args.to }))
    .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn preview_surface(model: &AppModel) -> anyhow::Result<FrameSurface> {
    let (Some(doc), Some(ctx)) = (model.document.as_ref(), model.display_context()) else {
        bail!("no document loaded");
    };
    let ctx = ctx.context("invalid display configuration")?;
    let frame = ctx.display_frame;
    let width = frame.max_x().ceil().max(1.0) as u32;
    let height = frame.max_y().ceil().max(1.0) as u32;

    let base = compose_frame(doc.image(), &ctx, width, height)
        .context("failed to compose preview frame")?;
    Ok(FrameSurface::new(base))
}

fn run(args: Args) -> anyhow::Result<()> {
    let document = RasterDocument::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    let mut model = AppModel::new(AppConfig::from(&args));
    model.set_document(document);

    let mut frame = match args.preview {
        Some(_) => Some(preview_surface(&model)?),
        None => None,
    };
    let mut hidden = HiddenSurface;
    let surface: &mut dyn OverlaySurface = match frame.as_mut() {
        Some(frame) => frame,
        None => &mut hidden,
    };

    for message in gesture(&args) {
        update(&mut model, &mut *surface, message)?;
    }

    if let (Some(path), Some(frame)) = (&args.preview, &frame) {
        frame
            .render_last_selection()
            .save(path)
            .with_context(|| format!("failed to write preview {}", path.display()))?;
        log::info!("preview written to {}", path.display());
    }

    match &model.extracted {
        Some(image) => {
            image
                .save(&args.output)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            log::info!("selection written to {}", args.output.display());
        }
        None => log::info!("nothing selected, {} not written", args.output.display()),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{args:?}");
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_and_size() {
        assert_eq!(parse_point("10,-2.5"), Ok(Point::new(10.0, -2.5)));
        assert_eq!(parse_size("320X240"), Ok(Size::new(320.0, 240.0)));
        assert!(parse_point("10").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_args_to_gesture_and_config() {
        let args = Args::try_parse_from([
            "region-select",
            "photo@2x.png",
            "--display",
            "100x100",
            "--origin",
            "-10,20",
            "--from",
            "50,50",
            "--via",
            "30,30",
            "--to",
            "10,10",
            "--mode",
            "aspect-fill",
        ])
        .expect("valid args");

        let config = AppConfig::from(&args);
        assert_eq!(config.display_frame, Rect::new(-10.0, 20.0, 100.0, 100.0));
        assert_eq!(config.content_mode, ContentMode::AspectFill);
        assert!(!config.live_extraction);

        let messages = gesture(&args);
        assert_eq!(messages.len(), 3);
        assert!(matches!(messages[0], AppMessage::PointerDown { .. }));
        assert!(matches!(messages[1], AppMessage::PointerMove { .. }));
        assert!(matches!(messages[2], AppMessage::PointerUp { .. }));
    }
}
