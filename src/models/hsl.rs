//! Model colors with the HSL and HSV notations in the sRGB color space.

use crate::color::{Component, HasSpace, Space};

huekit_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

huekit_macros::gen_model! {
    /// A color specified with the HSV (also known as HSB) notation in the
    /// sRGB color space.
    pub struct Hsv {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}
