//! # Normalização de Expressões Temporais (Timex)
//!
//! Datas e períodos. A varredura vai do último token para o primeiro, como
//! uma pilha, porque o nome do mês ou o substantivo que fecha a expressão
//! decide como o numeral anterior deve ser escrito.
//!
//! ```text
//! 5. toukokuuta          →  5. toukokuuta
//! toukokuussa 2020       →  toukokuu 2020
//! vuoden 1995 aikana     →  vuoden 1995 aikana
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::reader::Token;

/// Conectores de período: "durante", "entre". Encerram a varredura e o resto
/// da expressão é mantido como escrito.
const SPAN_CONNECTORS: &[&str] = &["aikana", "välillä", "aikaa"];

/// "no ano", "nos anos".
const YEAR_ADVERBIALS: &[&str] = &["vuonna", "vuosina"];

/// Numeral em dígitos, possivelmente ordinal ("12", "5.").
static DAY_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.?$").expect("static pattern"));

/// Lemas que a expressão normalizada usa no lugar da forma flexionada.
static TIME_LEMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(vuosi|.+kuu|päivä)$").expect("static pattern"));

/// Normaliza os tokens de um span Timex (ordem do texto).
pub fn parse_timex(tokens: &[Token]) -> String {
    let mut stack: Vec<&Token> = tokens.iter().collect();
    let mut normalized: Vec<String> = Vec::new();

    while let Some(mut token) = stack.pop() {
        // Mês no partitivo ("toukokuuta"): depois de um ordinal fica como
        // escrito, senão vai para o lema. A varredura segue com o token anterior.
        if token.word_form.to_lowercase().ends_with("kuuta") {
            if let Some(previous) = stack.pop() {
                if previous.tags.is_ordinal() {
                    normalized.push(token.word_form.to_lowercase());
                } else {
                    normalized.push(token.lemma.clone());
                }
                token = previous;
            }
        }

        let word_form = token.word_form.to_lowercase();

        if SPAN_CONNECTORS.contains(&word_form.as_str()) {
            normalized.push(word_form);
            normalized.extend(stack.iter().rev().map(|t| t.word_form.clone()));
            normalized.reverse();
            return normalized.join(" ");
        }

        if token.tags.is_ordinal() {
            normalized.push(token.lemma.clone());
            if let Some(previous) = stack.pop() {
                if previous.word_form.ends_with("kuun") {
                    normalized.push(previous.word_form.clone());
                } else {
                    normalized.push(previous.lemma.clone());
                }
            }
        } else if DAY_NUMBER.is_match(&word_form) || YEAR_ADVERBIALS.contains(&word_form.as_str()) {
            normalized.push(word_form);
        } else if TIME_LEMMA.is_match(&token.lemma) {
            normalized.push(token.lemma.clone());
        } else {
            normalized.push(word_form);
        }
    }

    normalized.reverse();
    normalized.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(word: &str, lemma: &str, tags: &str) -> Token {
        Token::new(word, lemma, tags, 0)
    }

    const ORD: &str = "[POS=ADJECTIVE][SUBCAT=ORD][NUM=SG][CASE=NOM]";

    #[test]
    fn test_ordinal_day_with_partitive_month() {
        let tokens = vec![
            token("5.", "5.", ORD),
            token("toukokuuta", "toukokuu", "[POS=NOUN][NUM=SG][CASE=PAR]"),
        ];
        assert_eq!(parse_timex(&tokens), "5. toukokuuta");
    }

    #[test]
    fn test_partitive_month_without_ordinal() {
        let tokens = vec![
            token("viime", "viime", "[POS=ADJECTIVE]"),
            token("toukokuuta", "toukokuu", "[POS=NOUN][NUM=SG][CASE=PAR]"),
        ];
        assert_eq!(parse_timex(&tokens), "viime toukokuu");
    }

    #[test]
    fn test_month_and_year_lemmas() {
        let tokens = vec![
            token("toukokuussa", "toukokuu", "[POS=NOUN][NUM=SG][CASE=INE]"),
            token("2020", "2020", "[POS=NUMERAL][SUBCAT=CARD]"),
        ];
        assert_eq!(parse_timex(&tokens), "toukokuu 2020");

        let tokens = vec![
            token("vuonna", "vuonna", "[POS=ADVERB]"),
            token("1995", "1995", "[POS=NUMERAL][SUBCAT=CARD]"),
        ];
        assert_eq!(parse_timex(&tokens), "vuonna 1995");
    }

    #[test]
    fn test_year_lemma_and_plural_adverbial() {
        let tokens = vec![
            token("vuoden", "vuosi", "[POS=NOUN][NUM=SG][CASE=GEN]"),
            token("2020", "2020", "[POS=NUMERAL][SUBCAT=CARD]"),
        ];
        assert_eq!(parse_timex(&tokens), "vuosi 2020");

        // "vuosina" fica como escrito, mesmo com o lema "vuosi"
        let tokens = vec![
            token("vuosina", "vuosi", "[POS=NOUN][NUM=PL][CASE=ESS]"),
            token("1990", "1990", "[POS=NUMERAL][SUBCAT=CARD]"),
        ];
        assert_eq!(parse_timex(&tokens), "vuosina 1990");
    }

    #[test]
    fn test_connector_stops_scan() {
        let tokens = vec![
            token("Vuoden", "vuosi", "[POS=NOUN][NUM=SG][CASE=GEN]"),
            token("1995", "1995", "[POS=NUMERAL][SUBCAT=CARD]"),
            token("aikana", "aika", "[POS=NOUN][NUM=SG][CASE=ESS]"),
        ];
        assert_eq!(parse_timex(&tokens), "Vuoden 1995 aikana");
    }

    #[test]
    fn test_connector_after_processed_tokens() {
        let tokens = vec![
            token("maalis-", "maalis-", "[POS=NOUN]"),
            token("ja", "ja", "[POS=CONJUNCTION]"),
            token("huhtikuun", "huhtikuu", "[POS=NOUN][NUM=SG][CASE=GEN]"),
            token("välillä", "väli", "[POS=NOUN][NUM=SG][CASE=ADE]"),
        ];
        assert_eq!(parse_timex(&tokens), "maalis- ja huhtikuun välillä");
    }

    #[test]
    fn test_ordinal_with_genitive_month() {
        let tokens = vec![
            token("kesäkuun", "kesäkuu", "[POS=NOUN][NUM=SG][CASE=GEN]"),
            token("ensimmäisenä", "ensimmäinen", "[POS=ADJECTIVE][SUBCAT=ORD][NUM=SG][CASE=ESS]"),
        ];
        assert_eq!(parse_timex(&tokens), "kesäkuun ensimmäinen");
    }

    #[test]
    fn test_ordinal_takes_lemma_of_preceding_word() {
        let tokens = vec![
            token("viikolla", "viikko", "[POS=NOUN][NUM=SG][CASE=ADE]"),
            token("toisella", "toinen", "[POS=ADJECTIVE][SUBCAT=ORD][NUM=SG][CASE=ADE]"),
        ];
        assert_eq!(parse_timex(&tokens), "viikko toinen");
    }

    #[test]
    fn test_day_lemma_and_fallback() {
        let tokens = vec![
            token("Itsenäisyyspäivänä", "itsenäisyyspäivä", "[POS=NOUN][NUM=SG][CASE=ESS]"),
        ];
        // "päivä" só casa inteiro; composto fica como escrito
        assert_eq!(parse_timex(&tokens), "itsenäisyyspäivänä");

        let tokens = vec![token("päivänä", "päivä", "[POS=NOUN][NUM=SG][CASE=ESS]")];
        assert_eq!(parse_timex(&tokens), "päivä");
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(parse_timex(&[]), "");
    }
}
