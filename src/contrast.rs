//! WCAG 2.x relative luminance and contrast ratios.

use bitflags::bitflags;

use crate::{
    color::{Color, Component},
    math::round_to,
};

bitflags! {
    /// The WCAG conformance levels a contrast ratio meets.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Compliance : u8 {
        /// Level AA for normal text, a ratio of at least 4.5.
        const AA_SMALL = 1 << 0;
        /// Level AA for large text, a ratio of at least 3.
        const AA_LARGE = 1 << 1;
        /// Level AAA for normal text, a ratio of at least 7.
        const AAA_SMALL = 1 << 2;
        /// Level AAA for large text, a ratio of at least 4.5.
        const AAA_LARGE = 1 << 3;
    }
}

impl Compliance {
    /// The levels met by `ratio`.
    pub fn from_ratio(ratio: Component) -> Self {
        let mut compliance = Self::empty();
        compliance.set(Self::AA_SMALL, ratio >= 4.5);
        compliance.set(Self::AA_LARGE, ratio >= 3.0);
        compliance.set(Self::AAA_SMALL, ratio >= 7.0);
        compliance.set(Self::AAA_LARGE, ratio >= 4.5);
        compliance
    }

    /// Level AA for normal text.
    pub fn aa_small(self) -> bool {
        self.contains(Self::AA_SMALL)
    }

    /// Level AA for large text.
    pub fn aa_large(self) -> bool {
        self.contains(Self::AA_LARGE)
    }

    /// Level AAA for normal text.
    pub fn aaa_small(self) -> bool {
        self.contains(Self::AAA_SMALL)
    }

    /// Level AAA for large text.
    pub fn aaa_large(self) -> bool {
        self.contains(Self::AAA_LARGE)
    }
}

/// The contrast between two colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastResult {
    /// The contrast ratio rounded to 2 decimals, from 1 to 21.
    pub ratio: Component,
    /// The levels the rounded ratio meets.
    pub compliance: Compliance,
}

fn linearize(channel: u8) -> Component {
    let c = channel as Component / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    /// The WCAG relative luminance of the color, from 0 for black to 1 for
    /// white.
    pub fn relative_luminance(&self) -> Component {
        let [r, g, b] = self.to_rgb8();
        0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
    }

    /// The WCAG contrast ratio between this color and `other`. The order of
    /// the colors does not matter.
    pub fn contrast_ratio(&self, other: &Color) -> Component {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// Compute the contrast ratio between two colors and the levels it meets.
///
/// ```rust
/// use huekit::{analyze, Color};
/// let result = analyze(&Color::rgb(0, 0, 0), &Color::rgb(255, 255, 255));
/// assert_eq!(result.ratio, 21.0);
/// assert!(result.compliance.aaa_small());
/// ```
pub fn analyze(foreground: &Color, background: &Color) -> ContrastResult {
    let ratio = round_to(foreground.contrast_ratio(background), 2);
    let result = ContrastResult {
        ratio,
        compliance: Compliance::from_ratio(ratio),
    };
    log::trace!("contrast of {} on {}: {:?}", foreground, background, result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn luminance_extremes() {
        assert_eq!(Color::rgb(0, 0, 0).relative_luminance(), 0.0);
        assert_component_eq!(Color::rgb(255, 255, 255).relative_luminance(), 1.0);
        assert_component_eq!(Color::rgb(255, 0, 0).relative_luminance(), 0.2126);
    }

    #[test]
    fn black_on_white() {
        let result = analyze(&Color::rgb(0, 0, 0), &Color::rgb(255, 255, 255));
        assert_eq!(result.ratio, 21.0);
        assert_eq!(result.compliance, Compliance::all());
    }

    #[test]
    fn identical_colors() {
        let c = Color::rgb(210, 105, 30);
        let result = analyze(&c, &c);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.compliance, Compliance::empty());
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Color::rgb(210, 105, 30);
        let b = Color::rgb(240, 248, 255);
        assert_eq!(analyze(&a, &b), analyze(&b, &a));
    }

    #[test]
    fn gray_on_white() {
        // #767676 is the lightest gray passing AA on white.
        let result = analyze(&Color::rgb(0x76, 0x76, 0x76), &Color::rgb(255, 255, 255));
        assert_eq!(result.ratio, 4.54);
        assert!(result.compliance.aa_small());
        assert!(result.compliance.aaa_large());
        assert!(!result.compliance.aaa_small());

        let result = analyze(&Color::rgb(0x77, 0x77, 0x77), &Color::rgb(255, 255, 255));
        assert!(!result.compliance.aa_small());
        assert!(result.compliance.aa_large());
    }

    #[test]
    fn compliance_follows_the_reported_ratio() {
        // 4.4989 unrounded, reported as 4.5.
        let result = analyze(&Color::rgb(0x00, 0x78, 0xD7), &Color::rgb(255, 255, 255));
        assert_eq!(result.ratio, 4.5);
        assert!(result.compliance.aa_small());
        assert!(result.compliance.aaa_large());

        for v in (0..=255u8).step_by(3) {
            for bg in [Color::rgb(255, 255, 255), Color::rgb(0, 0, 0)] {
                let ContrastResult { ratio, compliance } =
                    analyze(&Color::rgb(v, 255 - v, v / 3), &bg);
                assert_eq!(compliance.aa_small(), ratio >= 4.5, "{v} {ratio}");
                assert_eq!(compliance.aa_large(), ratio >= 3.0, "{v} {ratio}");
                assert_eq!(compliance.aaa_small(), ratio >= 7.0, "{v} {ratio}");
                assert_eq!(compliance.aaa_large(), ratio >= 4.5, "{v} {ratio}");
            }
        }
    }

    #[test]
    fn compliance_thresholds() {
        assert_eq!(Compliance::from_ratio(2.9), Compliance::empty());
        assert_eq!(Compliance::from_ratio(3.0), Compliance::AA_LARGE);
        assert_eq!(
            Compliance::from_ratio(4.5),
            Compliance::AA_SMALL | Compliance::AA_LARGE | Compliance::AAA_LARGE
        );
        assert_eq!(Compliance::from_ratio(7.0), Compliance::all());
    }
}
