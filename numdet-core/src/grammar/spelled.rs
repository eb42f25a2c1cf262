//! # Numerais por Extenso (francês)
//!
//! A gramática mais delicada: cardinais compostos por morfemas hifenizados
//! (unidades, dezenas, `cent`, `mille`) e ordinais em `-ième`.
//!
//! Os padrões vão do mais específico (`deux-mille-cent-vingt`) ao mais genérico
//! (dígitos isolados e sufixo ordinal). Cada padrão roda sobre o texto inteiro e
//! seus matches são emitidos independentemente: `deux` dentro de `deux-mille`
//! também é reportado. As tabelas grafam `quince` (não `quinze`) e o padrão de
//! dezenas tem um `sept` sem hífen: `vingt-quinze` e `vingt-sept` completos não casam.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    // deux-cent-vingt .. neuf-cent-quatre-vingt-dix-neuf,
    // mille-deux-cent-vingt .. neuf-mille-neuf-cent-quatre-vingt-dix-neuf
    PatternDef {
        name: "thousands_hundreds_tens",
        source: r"\b(deux-|trois-|quatre-|cinq-|six-|sept-|huit-|neuf-)?(mille-)?(deux-|trois-|quatre-|cinq-|six-|sept-|huit-|neuf-)cent-(quatre-vingts|quatre-vingt(-et-un|-deux|-trois|-quatre|-cinq|-six|-sept|-huit|-neuf|-onze|-douze|-treize|-quatorze|-quince|-seize|-dix-(sept|huit|neuf)|-dix)|soixante(-et-onze|-douze|-treize|-quatorze|-quince|-seize|-dix-(sept|huit|neuf))?|soixante-dix|(vingt|trente|quarante|cinquante|soixante)(-et-un|-deux|-trois|-quatre|-cinq|-six|-sept|-huit|-neuf)?)\b",
    },
    // mille-onze .. mille-dix-neuf, deux-mille-onze .. deux-mille-dix-neuf
    PatternDef {
        name: "thousands_teens",
        source: r"\b(deux-|trois-|quatre-|cinq-|six-|sept-|huit-|neuf-)?(mille-)(onze|douze|treize|quatorze|quince|seize|dix-(sept|huit|neuf)|dix)\b",
    },
    // mille-un .. mille-neuf, deux-mille-un .. deux-mille-neuf
    PatternDef {
        name: "thousands_units",
        source: r"\b(deux-|trois-|quatre-|cinq-|six-|sept-|huit-|neuf-)?(mille-)(un|deux|trois|quatre|cinq|six|sept|huit|neuf)\b",
    },
    // deux-cents .. neuf-cents, mille-deux-cents .. mille-neuf-cents
    PatternDef {
        name: "hundreds",
        source: r"\b(mille-)?(deux-|trois-|quatre-|cinq-|six-|sept-|huit-|neuf-)(cents?)\b",
    },
    // cent, mille, mille-cent, deux-mille, trois-mille
    PatternDef {
        name: "cent_or_mille",
        source: r"\b(mille-)?cent|(deux-|trois-|quatre-|cinq-|six-|sept-|huit-|neuf-)?mille\b",
    },
    // vingt .. quatre-vingt-dix-neuf, cent-vingt .., mille-vingt ..
    PatternDef {
        name: "tens",
        source: r"\b(mille-)?(cent-)?(quatre-vingts|quatre-vingt(-et-un|-deux|-trois|-quatre|-cinq|-six|-sept|-huit|-neuf|-onze|-douze|-treize|-quatorze|-quince|-seize|-dix-(sept|huit|neuf)|-dix)|soixante(-et-onze|-douze|-treize|-quatorze|-quince|-seize|-dix-(sept|huit|neuf))?|soixante-dix|(vingt|trente|quarante|cinquante|soixante)(-et-un|-deux|-trois|-quatre|-cinq|-six|sept|-huit|-neuf)?)\b",
    },
    // onze .. dix-neuf, cent-onze .., mille-onze ..
    PatternDef {
        name: "teens",
        source: r"\b(mille-)?(cent-)?(onze|douze|treize|quatorze|quince|seize|dix-(sept|huit|neuf)|dix)\b",
    },
    // cent-un .. cent-neuf, mille-un .. mille-neuf
    PatternDef {
        name: "units",
        source: r"\b(mille-)?(cent-)?(un|deux|trois|quatre|cinq|six|sept|huit|neuf)\b",
    },
    // zéro, deux .. neuf
    PatternDef {
        name: "single_digit",
        source: r"\b(zéro|deux|trois|quatre|cinq|six|sept|huit|neuf)\b",
    },
    // premier, première, second, seconde, troisième, dix-huitième, millième
    PatternDef {
        name: "ordinal",
        source: r"premi(er|ère)|seconde?|\b[a-zA-Z-]+i?ème\b",
    },
];
