//! Percentuais: `25%`, `25,4%`, `25 p. cent`.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    // 2% 2,3% 2.3% 25% 234,56% 1234%
    PatternDef {
        name: "percent_sign",
        source: r"(\d{1,4})([,.]\d{1,2})?%",
    },
    // 25 p.cent, 25 p. cent, 25 p. 100
    PatternDef {
        name: "percent_spelled",
        source: r"(\d{1,4})([,.]\d{1,2})? (p\.cent|p\. cent|p\. 100)",
    },
];
