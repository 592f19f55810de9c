//! # Etiquetas Morfológicas Estruturadas
//!
//! O analisador morfológico a montante entrega as etiquetas de cada token como
//! uma string compacta entre colchetes, por exemplo:
//!
//! ```text
//! [POS=NOUN][PROPER=PROPER][NUM=SG][CASE=GEN]
//! ```
//!
//! A ordem dos atributos não é garantida e palavras compostas repetem
//! atributos (`[BOUNDARY=COMPOUND]` separa as partes). Por isso a string é
//! lida **uma única vez** na ingestão e convertida em uma lista ordenada de
//! pares `(atributo, valor)`. Todas as perguntas morfológicas do sistema
//! ("é plural?", "é ordinal?") consultam essa estrutura.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_]+)=([^\[\]\s|]+)").expect("static tag pattern"));

/// Atributos que participam da concordância entre modificador e núcleo.
const AGREEMENT_ATTRIBUTES: &[&str] = &["CASE", "NUM"];

/// Conjunto ordenado de etiquetas `ATRIBUTO=VALOR` de um token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphTags {
    /// String original, preservada para depuração.
    raw: String,
    /// Pares na ordem em que aparecem, com repetições.
    pairs: Vec<(String, String)>,
}

impl MorphTags {
    /// Converte a string de etiquetas em pares estruturados.
    pub fn parse(raw: &str) -> Self {
        let pairs = TAG_PAIR
            .captures_iter(raw)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect();
        Self {
            raw: raw.to_string(),
            pairs,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Existe alguma ocorrência de `attr=value`?
    pub fn has(&self, attr: &str, value: &str) -> bool {
        self.pairs.iter().any(|(a, v)| a == attr && v == value)
    }

    pub fn pos_is(&self, value: &str) -> bool {
        self.has("POS", value)
    }

    /// Substantivo, numeral, adjetivo ou quantificador: as classes que são
    /// normalizadas pelo lema.
    pub fn is_nominal(&self) -> bool {
        self.pos_is("NOUN")
            || self.pos_is("NUMERAL")
            || self.pos_is("ADJECTIVE")
            || self.is_quantor()
    }

    /// Classes que podem modificar o núcleo de um nome à esquerda.
    pub fn is_modifier(&self) -> bool {
        self.pos_is("ADJECTIVE") || self.is_ordinal() || self.is_quantor()
    }

    pub fn is_numeral(&self) -> bool {
        self.pos_is("NUMERAL")
    }

    pub fn is_ordinal(&self) -> bool {
        self.has("SUBCAT", "ORD")
    }

    pub fn is_quantor(&self) -> bool {
        self.has("SUBCAT", "QUANTOR")
    }

    pub fn is_plural(&self) -> bool {
        self.has("NUM", "PL")
    }

    pub fn is_partitive(&self) -> bool {
        self.has("CASE", "PAR")
    }

    pub fn is_genitive(&self) -> bool {
        self.has("CASE", "GEN")
    }

    /// Nome próprio. O analisador marca isso de formas diferentes
    /// (`[PROPER=PROPER]` ou `[SUBCAT=PROPER]`), então basta aparecer
    /// como atributo ou como valor.
    pub fn is_proper(&self) -> bool {
        self.pairs
            .iter()
            .any(|(a, v)| a == "PROPER" || v == "PROPER")
    }

    /// Ocorrências de `CASE` e `NUM`, na ordem de entrada.
    pub fn agreement_features(&self) -> Vec<(&str, &str)> {
        self.pairs
            .iter()
            .filter(|(a, _)| AGREEMENT_ATTRIBUTES.contains(&a.as_str()))
            .map(|(a, v)| (a.as_str(), v.as_str()))
            .collect()
    }
}
