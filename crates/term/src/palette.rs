//! Colour palette.

use crate::canvas::Rgb;
use crate::types::PieceColor;

pub const RAYWHITE: Rgb = Rgb::new(245, 245, 245);
pub const LIGHTGRAY: Rgb = Rgb::new(200, 200, 200);
pub const DARKGRAY: Rgb = Rgb::new(80, 80, 80);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(230, 41, 55);

pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::SkyBlue => Rgb::new(102, 191, 255),
        PieceColor::Yellow => Rgb::new(253, 249, 0),
        PieceColor::Purple => Rgb::new(200, 122, 255),
        PieceColor::Green => Rgb::new(0, 228, 48),
        PieceColor::Red => RED,
        PieceColor::Blue => Rgb::new(0, 121, 241),
        PieceColor::Orange => Rgb::new(255, 161, 0),
    }
}
