//! Geometry for the decorative hero orbit
//!
//! Purely visual: a glowing core with cubes circling it. The UI turns these
//! numbers into CSS custom properties and lets keyframes do the motion.

use std::f64::consts::TAU;

/// Orbit colours, one per cube
pub const ORBIT_COLORS: [&str; 8] = [
    "#14b8a6", "#0d9488", "#2dd4bf", "#34d399", "#6ee7b7", "#0f766e", "#059669", "#10b981",
];

/// Starting point of one orbiting cube
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPoint {
    pub x: f64,
    pub y: f64,
    /// Starting angle in degrees, used as the animation phase
    pub angle_deg: f64,
    pub color: &'static str,
}

/// Evenly spaced points on a circle of `radius`, one per colour
pub fn orbit_positions(radius: f64) -> Vec<OrbitPoint> {
    let count = ORBIT_COLORS.len();
    ORBIT_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let angle = i as f64 / count as f64 * TAU;
            OrbitPoint {
                x: angle.cos() * radius,
                y: angle.sin() * radius,
                angle_deg: angle.to_degrees(),
                color,
            }
        })
        .collect()
}
