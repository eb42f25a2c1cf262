//! Medidas físicas: número + espaço + unidade de um conjunto fechado.

use super::PatternDef;

// 58 cl, 54,345 dl, 3456 Go, Gy, ha, Hz, kg, km, km/h, kW, ko, l, L, lb, lm, lx,
// m, m/s, MHz, ml, Mo, mol, mt, o, oz, Pa, po, s, t, Wb
pub(super) const PATTERNS: &[PatternDef] = &[PatternDef {
    name: "amount_unit",
    source: r"(\d+)([,.]\d+)? ([cdm]l|[GMk]o|Gy|ha|M?Hz|k[gW]|km(/h)?|L|l[bmx]?|m(/s|t)?|m|mol|oz?|Pa|po|s|t|Wb)",
}];
