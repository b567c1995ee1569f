//! Random colors, uniform over the sRGB cube.

use rand::Rng;

use crate::color::Color;

impl Color {
    /// A random opaque sRGB color from the thread local generator.
    pub fn random() -> Color {
        Self::random_with(&mut rand::thread_rng())
    }

    /// A random opaque sRGB color drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
        let [r, g, b] = rng.gen::<[u8; 3]>();
        Color::rgb(r, g, b)
    }
}

/// A random color as a `#RRGGBB` string.
pub fn random_hex() -> String {
    Color::random().to_hex()
}
