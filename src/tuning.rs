//! Data-driven physics tuning
//!
//! Serve speeds and paddle deflection, loadable from JSON so a host can tweak
//! the feel without rebuilding.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_DEFLECTION_SPAN;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "normal" | "2" => Some(Difficulty::Normal),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// 1-based level number used by the serve speed formula
    pub fn level(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Physics tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal speed range of a paddle bounce (edge hits leave at ±span/2)
    pub paddle_deflection_span: f32,
    /// Horizontal serve speed at level 1
    pub serve_base_speed: f32,
    /// Serve speed added per level above 1
    pub serve_speed_per_level: f32,
    /// Extra upward speed on serve
    pub serve_vertical_bonus: f32,
    /// Gap between a parked ball and the paddle top
    pub serve_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_deflection_span: PADDLE_DEFLECTION_SPAN,
            serve_base_speed: 300.0,
            serve_speed_per_level: 80.0,
            serve_vertical_bonus: 150.0,
            serve_gap: 5.0,
        }
    }
}

impl Tuning {
    /// Parse from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Base serve speed for a 1-based level
    pub fn serve_speed(&self, level: u32) -> f32 {
        self.serve_base_speed + level.saturating_sub(1) as f32 * self.serve_speed_per_level
    }

    /// Serve velocity: random horizontal direction, always upward
    pub fn serve_velocity<R: Rng>(&self, level: u32, rng: &mut R) -> Vec2 {
        let speed = self.serve_speed(level);
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Vec2::new(dir * speed, -(speed + self.serve_vertical_bonus))
    }
}
