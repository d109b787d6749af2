//! The pollutant grammar.
//!
//! Pollutants fall into four fixed categories, each identified by a single
//! code letter. A pollutant label is the code letter followed by a sequence
//! number (`G1`, `W2`, `S3`); noise may omit the number (`N`).
//!
//! Every category also carries two fixed rendering facts: the side of the
//! process box its pollutant group is drawn on, and the fill/stroke palette
//! used for its boxes and legend swatch.

use std::fmt;

use crate::color::Color;

/// Side of a process box on which a pollutant group is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Returns a lowercase name used in layout identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a category's label requires at least one digit after the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitRule {
    /// One or more digits (`G1`, `W12`).
    AtLeastOne,
    /// Zero or more digits (`N`, `N2`).
    Optional,
}

/// One of the four pollutant categories.
///
/// # Examples
///
/// ```
/// # use pollflow_core::pollutant::{PollutantCategory, Side};
/// let category = PollutantCategory::from_code('S').unwrap();
/// assert_eq!(category, PollutantCategory::SolidWaste);
/// assert_eq!(category.name(), "固废");
/// assert_eq!(category.side(), Side::Right);
/// assert!(category.validate_label("S1"));
/// assert!(!category.validate_label("S"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollutantCategory {
    /// Waste gas (`G`).
    Gas,
    /// Wastewater (`W`).
    Wastewater,
    /// Solid waste (`S`).
    SolidWaste,
    /// Noise (`N`).
    Noise,
}

impl PollutantCategory {
    /// All categories in legend order.
    pub const ALL: [PollutantCategory; 4] = [
        PollutantCategory::Gas,
        PollutantCategory::Wastewater,
        PollutantCategory::SolidWaste,
        PollutantCategory::Noise,
    ];

    /// Looks up a category by its code letter.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'G' => Some(Self::Gas),
            'W' => Some(Self::Wastewater),
            'S' => Some(Self::SolidWaste),
            'N' => Some(Self::Noise),
            _ => None,
        }
    }

    /// Returns the single-letter code.
    pub fn code(self) -> char {
        match self {
            Self::Gas => 'G',
            Self::Wastewater => 'W',
            Self::SolidWaste => 'S',
            Self::Noise => 'N',
        }
    }

    /// Returns the display name shown in the legend.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gas => "废气",
            Self::Wastewater => "废水",
            Self::SolidWaste => "固废",
            Self::Noise => "噪声",
        }
    }

    /// Returns a short free-text description of the category.
    pub fn description(self) -> &'static str {
        match self {
            Self::Gas => "气态污染物",
            Self::Wastewater => "液态污染物",
            Self::SolidWaste => "固态污染物",
            Self::Noise => "噪声污染",
        }
    }

    /// Returns how many digits a label of this category needs.
    pub fn digit_rule(self) -> DigitRule {
        match self {
            Self::Noise => DigitRule::Optional,
            Self::Gas | Self::Wastewater | Self::SolidWaste => DigitRule::AtLeastOne,
        }
    }

    /// Returns the side of the process box this category is drawn on.
    pub fn side(self) -> Side {
        match self {
            Self::Gas | Self::Wastewater => Side::Left,
            Self::SolidWaste | Self::Noise => Side::Right,
        }
    }

    /// Returns the fixed fill/stroke palette for this category.
    pub fn palette(self) -> CategoryPalette {
        match self {
            Self::Gas => CategoryPalette::new("#E8F5E9", "#4CAF50"),
            Self::Wastewater => CategoryPalette::new("#E1F5FE", "#2196F3"),
            Self::SolidWaste => CategoryPalette::new("#FFF3E0", "#FF9800"),
            Self::Noise => CategoryPalette::new("#FFECB3", "#FFA000"),
        }
    }

    /// Checks whether `label` is this category's code followed by the
    /// digits its [`DigitRule`] demands, and nothing else.
    pub fn validate_label(self, label: &str) -> bool {
        let mut chars = label.chars();
        if chars.next() != Some(self.code()) {
            return false;
        }

        let digits = chars.as_str();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        match self.digit_rule() {
            DigitRule::AtLeastOne => !digits.is_empty(),
            DigitRule::Optional => true,
        }
    }
}

impl fmt::Display for PollutantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validates a pollutant label against the category selected by its first letter.
///
/// Returns `false` for an empty label or an unknown code letter.
///
/// # Examples
///
/// ```
/// # use pollflow_core::pollutant::validate_label;
/// assert!(validate_label("G1"));
/// assert!(validate_label("N"));
/// assert!(!validate_label("G"));
/// assert!(!validate_label("X1"));
/// ```
pub fn validate_label(label: &str) -> bool {
    label
        .chars()
        .next()
        .and_then(PollutantCategory::from_code)
        .is_some_and(|category| category.validate_label(label))
}

/// Fill and stroke colors of a pollutant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPalette {
    fill: &'static str,
    stroke: &'static str,
}

impl CategoryPalette {
    const fn new(fill: &'static str, stroke: &'static str) -> Self {
        Self { fill, stroke }
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        Color::new(self.fill).expect("palette fill colors are valid CSS colors")
    }

    /// Returns the stroke color.
    pub fn stroke(&self) -> Color {
        Color::new(self.stroke).expect("palette stroke colors are valid CSS colors")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_code_roundtrip() {
        for category in PollutantCategory::ALL {
            assert_eq!(PollutantCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(PollutantCategory::from_code('X'), None);
        assert_eq!(PollutantCategory::from_code('g'), None);
    }

    #[test]
    fn test_validate_label_examples() {
        assert!(validate_label("G1"));
        assert!(validate_label("W12"));
        assert!(validate_label("S3"));
        assert!(validate_label("N"));
        assert!(validate_label("N2"));

        assert!(!validate_label("G"));
        assert!(!validate_label("W"));
        assert!(!validate_label("S"));
        assert!(!validate_label("X1"));
        assert!(!validate_label(""));
        assert!(!validate_label("G1a"));
        assert!(!validate_label("g1"));
    }

    #[test]
    fn test_category_rejects_other_codes() {
        assert!(!PollutantCategory::Gas.validate_label("W1"));
        assert!(!PollutantCategory::Noise.validate_label("G1"));
    }

    #[test]
    fn test_side_assignment() {
        assert_eq!(PollutantCategory::Gas.side(), Side::Left);
        assert_eq!(PollutantCategory::Wastewater.side(), Side::Left);
        assert_eq!(PollutantCategory::SolidWaste.side(), Side::Right);
        assert_eq!(PollutantCategory::Noise.side(), Side::Right);
    }

    #[test]
    fn test_palette_colors_parse() {
        for category in PollutantCategory::ALL {
            let palette = category.palette();
            assert_ne!(palette.fill(), palette.stroke());
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = PollutantCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["废气", "废水", "固废", "噪声"]);
    }

    proptest! {
        #[test]
        fn label_with_digits_is_valid_for_every_category(
            code in prop::sample::select(vec!['G', 'W', 'S', 'N']),
            digits in "[0-9]{1,4}",
        ) {
            let label = format!("{code}{digits}");
            prop_assert!(validate_label(&label));
        }

        #[test]
        fn unknown_code_letter_is_invalid(
            code in "[A-Z]".prop_filter("known code", |c| !"GWSN".contains(c.as_str())),
            digits in "[0-9]{0,3}",
        ) {
            let label = format!("{code}{digits}");
            prop_assert!(!validate_label(&label));
        }
    }
}
