// File: crates/crosshair-core/src/color.rs
// Summary: RGBA colour value with CSS-style parsing for option tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// Straight (non-premultiplied) RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f32(&self) -> f32 { self.a as f32 / 255.0 }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`,
    /// `rgba(r,g,b,a)` with `a` in `[0,1]`, and a handful of names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let t = s.trim().to_ascii_lowercase();
        match t.as_str() {
            "white" => return Ok(Color::WHITE),
            "black" => return Ok(Color::BLACK),
            "transparent" => return Ok(Color::TRANSPARENT),
            "red" => return Ok(Color::from_rgb(255, 0, 0)),
            "green" => return Ok(Color::from_rgb(0, 128, 0)),
            "blue" => return Ok(Color::from_rgb(0, 0, 255)),
            _ => {}
        }

        if let Some(hex) = t.strip_prefix('#') {
            let nib = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
            let bytes = hex.as_bytes();
            let mut v = Vec::with_capacity(bytes.len());
            for &c in bytes { v.push(nib(c).ok_or_else(err)?); }
            return match v.len() {
                3 | 4 => {
                    let a = if v.len() == 4 { v[3] * 17 } else { 255 };
                    Ok(Color { r: v[0] * 17, g: v[1] * 17, b: v[2] * 17, a })
                }
                6 | 8 => {
                    let a = if v.len() == 8 { v[6] << 4 | v[7] } else { 255 };
                    Ok(Color { r: v[0] << 4 | v[1], g: v[2] << 4 | v[3], b: v[4] << 4 | v[5], a })
                }
                _ => Err(err()),
            };
        }

        let args = t
            .strip_prefix("rgba(")
            .or_else(|| t.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(err());
        }
        let channel = |p: &str| p.parse::<f64>().ok().filter(|v| (0.0..=255.0).contains(v)).map(|v| v.round() as u8);
        let r = channel(parts[0]).ok_or_else(err)?;
        let g = channel(parts[1]).ok_or_else(err)?;
        let b = channel(parts[2]).ok_or_else(err)?;
        let a = match parts.get(3) {
            Some(p) => {
                let f = p.parse::<f64>().ok().filter(|v| (0.0..=1.0).contains(v)).ok_or_else(err)?;
                (f * 255.0).round() as u8
            }
            None => 255,
        };
        Ok(Color { r, g, b, a })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
