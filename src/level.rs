//! Level data
//!
//! Levels are JSON documents: a palette, a size table and a list of brick
//! runs. A run expands row-major into concrete bricks with per-run repeat
//! counts and step offsets, so a wall of bricks is one entry.

use serde::{Deserialize, Serialize};

use crate::sim::rect::Rect;
use crate::sim::state::{Brick, BrickState};

fn one() -> u32 {
    1
}

/// One brick run in a level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickRun {
    pub x: f32,
    pub y: f32,
    /// Index into the level palette.
    #[serde(default)]
    pub color: usize,
    /// Index into the level size table.
    #[serde(default)]
    pub size: usize,
    #[serde(default = "one", rename = "repeat-x")]
    pub repeat_x: u32,
    #[serde(default = "one", rename = "repeat-y")]
    pub repeat_y: u32,
    #[serde(default, rename = "step-x")]
    pub step_x: f32,
    #[serde(default, rename = "step-y")]
    pub step_y: f32,
    /// Indestructible; participates in collision but never clears.
    #[serde(default)]
    pub fixed: bool,
}

/// A complete level: speed schedule plus brick layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    #[serde(rename = "startSpeed")]
    pub start_speed: f32,
    #[serde(rename = "endSpeed")]
    pub end_speed: f32,
    /// Brick palette, `#RRGGBB` entries.
    pub colors: Vec<String>,
    /// Brick size table, `[w, h]` pairs.
    pub sizes: Vec<[f32; 2]>,
    pub bricks: Vec<BrickRun>,
}

impl LevelSpec {
    /// Expand the runs into concrete bricks, row-major per run.
    ///
    /// Palette and size indices must be in range for this level.
    pub fn build_bricks(&self) -> Vec<Brick> {
        let mut bricks = Vec::new();
        for run in &self.bricks {
            let color = parse_hex_color(&self.colors[run.color]).unwrap_or([255.0; 3]);
            let [w, h] = self.sizes[run.size];
            let state = if run.fixed {
                BrickState::Fixed
            } else {
                BrickState::Live
            };
            let mut y = run.y;
            for _ in 0..run.repeat_y {
                let mut x = run.x;
                for _ in 0..run.repeat_x {
                    bricks.push(Brick {
                        rect: Rect::new(x, y, w, h),
                        state,
                        color,
                    });
                    x += run.step_x;
                }
                y += run.step_y;
            }
        }
        bricks
    }
}

/// Parse a set of levels from a JSON document.
pub fn load_levels(json: &str) -> Result<Vec<LevelSpec>, serde_json::Error> {
    serde_json::from_str(json)
}

/// `#RRGGBB` to 0-255 channels.
pub fn parse_hex_color(color: &str) -> Option<[f32; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32, g as f32, b as f32])
}
