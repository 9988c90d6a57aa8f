//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::config::CanvasConfig;
use crate::error::{CanvasError, Result};
use crate::layers::{get_layers, layer_by_name, Layer, Rgb};
use crate::session::CanvasSession;

/// Colour every cell starts from before its layers apply
const CANVAS_BACKGROUND: Rgb = Rgb::WHITE;

/// One scripted session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Paint {
        x: usize,
        y: usize,
        layer: &'static Layer,
    },
    Erase {
        x: usize,
        y: usize,
        layer: &'static Layer,
    },
    Special,
    Undo,
    Redo,
    BrushUp,
    BrushDown,
}

impl FromStr for Op {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CanvasError::InvalidOperation { op: s.to_string() };
        let parts: Vec<&str> = s.split_whitespace().collect();

        match parts.as_slice() {
            ["special"] => Ok(Op::Special),
            ["undo"] => Ok(Op::Undo),
            ["redo"] => Ok(Op::Redo),
            ["brush+"] => Ok(Op::BrushUp),
            ["brush-"] => Ok(Op::BrushDown),
            [verb @ ("paint" | "erase"), x, y, name] => {
                let x: usize = x.parse().map_err(|_| invalid())?;
                let y: usize = y.parse().map_err(|_| invalid())?;
                let layer = layer_by_name(name).ok_or_else(|| CanvasError::UnknownLayer {
                    name: name.to_string(),
                })?;
                if *verb == "paint" {
                    Ok(Op::Paint { x, y, layer })
                } else {
                    Ok(Op::Erase { x, y, layer })
                }
            }
            _ => Err(invalid()),
        }
    }
}

/// Parse a probe position written as `X,Y`
pub fn parse_probe(s: &str) -> Result<(usize, usize)> {
    let invalid = || CanvasError::InvalidOperation {
        op: format!("probe {}", s),
    };
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x: usize = x.trim().parse().map_err(|_| invalid())?;
    let y: usize = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

/// Print the layer registry.
pub fn list_layers() -> Result<()> {
    for layer in get_layers() {
        println!("{:>2}  {}", layer.index(), layer.name());
    }
    Ok(())
}

/// Build the session config from an optional file plus command-line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    style: Option<&str>,
    width: Option<usize>,
    height: Option<usize>,
) -> Result<CanvasConfig> {
    let mut config = match config_path {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };
    if let Some(style) = style {
        config.draw_style = style.parse()?;
    }
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
    config.validate()?;
    Ok(config)
}

/// Apply one operation to the session.
pub fn apply_op(session: &mut CanvasSession, op: Op) -> Result<()> {
    match op {
        Op::Paint { x, y, layer } => {
            session.paint(x, y, layer)?;
        }
        Op::Erase { x, y, layer } => {
            session.erase(x, y, layer)?;
        }
        Op::Special => session.special(),
        Op::Undo => {
            if session.undo().is_none() {
                println!("Nothing to undo");
            }
        }
        Op::Redo => {
            if session.redo().is_none() {
                println!("Nothing to redo");
            }
        }
        Op::BrushUp => session.grid_mut().increase_brush_size(),
        Op::BrushDown => session.grid_mut().decrease_brush_size(),
    }
    Ok(())
}

/// Run a scripted session and report the result.
pub fn run_script(
    config: &CanvasConfig,
    ops: &[String],
    probe: Option<(usize, usize)>,
    timestamp: u64,
    replay: bool,
) -> Result<CanvasSession> {
    info!(
        "Running {} ops on a {}x{} {} grid",
        ops.len(),
        config.width,
        config.height,
        config.draw_style
    );

    let ops = ops
        .iter()
        .map(|op| op.parse::<Op>())
        .collect::<Result<Vec<_>>>()?;

    let mut session = CanvasSession::from_config(config)?;
    for op in ops {
        apply_op(&mut session, op)?;
    }

    let undo = session.undo_tracker();
    println!(
        "Undo: {} actions, Redo: {} actions, Brush: {}",
        undo.undo_count(),
        undo.redo_count(),
        session.grid().brush_size()
    );
    print_probe(&session, probe, timestamp)?;

    if replay {
        session.start_replay();
        let mut step = 0;
        while !session.play_next_action().is_finished() {
            step += 1;
            println!("Replayed action {}", step);
            print_probe(&session, probe, timestamp)?;
        }
        println!("Replay finished after {} actions", step);
    }

    Ok(session)
}

/// Colour of one cell over the canvas background at `timestamp`
pub fn probe_colour(session: &CanvasSession, x: usize, y: usize, timestamp: u64) -> Result<Rgb> {
    session.grid().color_at(x, y, CANVAS_BACKGROUND, timestamp)
}

fn print_probe(
    session: &CanvasSession,
    probe: Option<(usize, usize)>,
    timestamp: u64,
) -> Result<()> {
    if let Some((x, y)) = probe {
        let colour = probe_colour(session, x, y, timestamp)?;
        println!("Cell ({}, {}) at t={}: {}", x, y, timestamp, colour);
    }
    Ok(())
}
