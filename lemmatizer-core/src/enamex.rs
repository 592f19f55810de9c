//! # Normalização de Nomes (Enamex)
//!
//! Pessoas, lugares, organizações, eventos e produtos. O núcleo do nome é o
//! último token; modificadores à esquerda que concordam com ele em caso e
//! número ("Suuressa Britanniassa" → "suuri britannia") também vão para o
//! lema. No primeiro modificador que não concorda a varredura para, e tudo à
//! esquerda dele fica como está no texto, em minúsculas.
//!
//! ```text
//! Helsingin   yliopistossa   →  helsingin yliopisto
//! Suuressa    Britanniassa   →  suuri britannia
//! Tour de France 2019        →  tour de france 2019
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::morphology::{agreement, select_lemma};
use crate::reader::Token;

/// Ano de 1800 a 2099 que qualifica um evento ("Tour de France 2019").
static EVENT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(18|19|20)[0-9]{2}$").expect("static pattern"));

/// Normaliza os tokens de um span Enamex (ordem do texto).
pub fn parse_enamex(tokens: &[Token], tag: &str) -> String {
    let mut stack: Vec<&Token> = tokens.iter().collect();
    let mut normalized: Vec<String> = Vec::new();

    let Some(mut head) = stack.pop() else {
        return String::new();
    };

    if EVENT_YEAR.is_match(&head.word_form) && tag.starts_with("EnamexEvt") {
        if let Some(next) = stack.pop() {
            normalized.push(head.word_form.to_lowercase());
            head = next;
        }
    }

    normalized.push(select_lemma(&head.word_form, &head.lemma, &head.tags, tag));

    // Cadeia de concordância para a esquerda: cada modificador é comparado
    // com o último token aceito, não com o núcleo.
    let mut current = head;
    while !current.word_form.starts_with('-') {
        let Some(modifier) = stack.pop() else {
            break;
        };

        if modifier.tags.is_modifier() && agreement(&modifier.tags, &current.tags) {
            normalized.push(select_lemma(
                &modifier.word_form,
                &modifier.lemma,
                &modifier.tags,
                tag,
            ));
            current = modifier;
        } else {
            normalized.push(modifier.word_form.to_lowercase());
            break;
        }
    }

    let mut words: Vec<String> = stack
        .iter()
        .map(|token| token.word_form.to_lowercase())
        .collect();
    words.extend(normalized.into_iter().rev());
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(word: &str, lemma: &str, tags: &str) -> Token {
        Token::new(word, lemma, tags, 0)
    }

    #[test]
    fn test_agreeing_adjective_is_lemmatized() {
        let tokens = vec![
            token("Suuressa", "suuri", "[POS=ADJECTIVE][NUM=SG][CASE=INE]"),
            token("Britanniassa", "britannia", "[POS=NOUN][PROPER=PROPER][NUM=SG][CASE=INE]"),
        ];
        assert_eq!(parse_enamex(&tokens, "EnamexLocPpl"), "suuri britannia");
    }

    #[test]
    fn test_genitive_modifier_kept_as_written() {
        let tokens = vec![
            token("Helsingin", "helsinki", "[POS=NOUN][PROPER=PROPER][NUM=SG][CASE=GEN]"),
            token("yliopistossa", "yliopisto", "[POS=NOUN][NUM=SG][CASE=INE]"),
        ];
        assert_eq!(parse_enamex(&tokens, "EnamexOrgEdu"), "helsingin yliopisto");
    }

    #[test]
    fn test_scan_stops_at_first_disagreement() {
        let tokens = vec![
            token("Euroopan", "eurooppa", "[POS=NOUN][PROPER=PROPER][NUM=SG][CASE=GEN]"),
            token("Keskuspankin", "keskuspankki", "[POS=NOUN][NUM=SG][CASE=GEN]"),
            token("uuden", "uusi", "[POS=ADJECTIVE][NUM=SG][CASE=GEN]"),
            token("johtokunnan", "johtokunta", "[POS=NOUN][NUM=SG][CASE=GEN]"),
        ];
        // "uuden" concorda e vai para o lema; "Keskuspankin" é substantivo e
        // encerra a varredura; "Euroopan" fica intocado
        assert_eq!(
            parse_enamex(&tokens, "EnamexOrgCrp"),
            "euroopan keskuspankin uusi johtokunta"
        );
    }

    #[test]
    fn test_chained_agreement() {
        let tokens = vec![
            token("Toisessa", "toinen", "[POS=ADJECTIVE][SUBCAT=ORD][NUM=SG][CASE=INE]"),
            token("Suuressa", "suuri", "[POS=ADJECTIVE][NUM=SG][CASE=INE]"),
            token("Sodassa", "sota", "[POS=NOUN][NUM=SG][CASE=INE]"),
        ];
        assert_eq!(parse_enamex(&tokens, "EnamexEvtWar"), "toinen suuri sota");
    }

    #[test]
    fn test_event_year_kept_verbatim() {
        let tokens = vec![
            token("Tour", "tour", "[POS=NOUN][NUM=SG][CASE=NOM]"),
            token("de", "de", "[POS=PARTICLE]"),
            token("Francessa", "france", "[POS=NOUN][PROPER=PROPER][NUM=SG][CASE=INE]"),
            token("2019", "2019", "[POS=NUMERAL][NUM=SG][CASE=NOM]"),
        ];
        assert_eq!(parse_enamex(&tokens, "EnamexEvtSpo"), "tour de france 2019");
    }

    #[test]
    fn test_year_only_special_for_events() {
        let tokens = vec![
            token("Nokia", "nokia", "[POS=NOUN][PROPER=PROPER][NUM=SG][CASE=NOM]"),
            token("2000", "2000", "[POS=NUMERAL][NUM=SG][CASE=NOM]"),
        ];
        assert_eq!(parse_enamex(&tokens, "EnamexOrgCrp"), "nokia 2000");

        let lone = vec![token("1999", "1999", "[POS=NUMERAL][NUM=SG][CASE=NOM]")];
        assert_eq!(parse_enamex(&lone, "EnamexEvtSpo"), "1999");
    }

    #[test]
    fn test_hyphen_head_blocks_scan() {
        let tokens = vec![
            token("Suuri", "suuri", "[POS=ADJECTIVE][NUM=SG][CASE=NOM]"),
            token("-yhtiö", "-yhtiö", "[POS=NOUN][NUM=SG][CASE=NOM]"),
        ];
        assert_eq!(parse_enamex(&tokens, "EnamexOrgCrp"), "suuri -yhtiö");
    }

    #[test]
    fn test_plural_location_with_plural_modifier() {
        let tokens = vec![
            token("Yhdistyneissä", "yhdistynyt", "[POS=ADJECTIVE][NUM=PL][CASE=INE]"),
            token("Arabiemiirikunnissa", "arabiemiirikunta", "[POS=NOUN][NUM=PL][CASE=INE]"),
        ];
        assert_eq!(
            parse_enamex(&tokens, "EnamexLocPpl"),
            "yhdistyneet arabiemiirikunnat"
        );
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(parse_enamex(&[], "EnamexPrsHum"), "");
    }
}
