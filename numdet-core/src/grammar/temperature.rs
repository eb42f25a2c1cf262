//! Temperaturas: `25°C`, `25°F`, `25°`, `23,4°`.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[PatternDef {
    name: "degrees",
    source: r"(\d{1,2})([,.]\d{1,2})?°[CF]?",
}];
