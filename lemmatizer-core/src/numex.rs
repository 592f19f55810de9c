//! # Normalização de Expressões Numéricas (Numex)
//!
//! Medidas e valores monetários: numerais seguidos de uma unidade. A forma
//! canônica coloca a unidade no partitivo, como o finlandês exige depois de
//! numerais, exceto quando o número é "um".
//!
//! ```text
//! kolmella miljoonalla eurolla  →  kolme miljoonaa euroa
//! yhden kilon                   →  yksi kilo
//! ```

use crate::morphology::partitive;
use crate::reader::Token;

/// Tag das medidas monetárias, em que genitivos próprios ("Suomen markkaa")
/// ficam como escritos.
const CURRENCY_TAG: &str = "NumexMsrCur";

/// Normaliza os tokens de um span Numex (ordem do texto).
pub fn parse_numex(tokens: &[Token], tag: &str) -> String {
    let Some((unit, numerals)) = tokens.split_last() else {
        return String::new();
    };

    let mut normalized: Vec<String> = numerals
        .iter()
        .enumerate()
        .map(|(i, token)| {
            // O primeiro numeral vai sempre para o lema; os seguintes fazem
            // parte de um numeral composto e ficam no partitivo.
            let interior = i > 0;
            if interior && token.tags.is_numeral() {
                partitive(&token.word_form, &token.lemma, &token.tags)
            } else if interior
                && tag == CURRENCY_TAG
                && token.tags.is_proper()
                && token.tags.is_genitive()
            {
                token.word_form.to_lowercase()
            } else {
                token.lemma.clone()
            }
        })
        .collect();

    let singular = matches!(normalized.first().map(String::as_str), Some("yksi" | "1"));
    if singular {
        normalized.push(unit.lemma.clone());
    } else {
        normalized.push(partitive(&unit.word_form, &unit.lemma, &unit.tags));
    }

    normalized.join(" ")
}
