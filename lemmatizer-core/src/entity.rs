//! # Categorias de Entidade e Despacho
//!
//! O nome do marcador começa pela categoria principal, seguida de
//! subcategorias (ex: `EnamexLocPpl`, `NumexMsrCur`, `TimexTmeDat`).
//!
//! | Prefixo | Significado                         | Normalizador          |
//! |---------|-------------------------------------|-----------------------|
//! | Enamex  | Nomes: pessoa, lugar, organização…  | [`parse_enamex`]      |
//! | Numex   | Medidas e valores monetários        | [`parse_numex`]       |
//! | Timex   | Datas e expressões de tempo         | [`parse_timex`]       |
//! | outro   | Qualquer outro marcador             | formas unidas         |

use crate::enamex::parse_enamex;
use crate::numex::parse_numex;
use crate::span::EntitySpan;
use crate::timex::parse_timex;

/// Categoria principal de uma entidade, derivada do prefixo do marcador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// **Nomes**: pessoas, lugares, organizações, eventos, produtos.
    Enamex,
    /// **Numéricas**: medidas, valores monetários.
    Numex,
    /// **Temporais**: datas, horas, períodos.
    Timex,
    /// Marcador sem normalizador próprio.
    Other,
}

impl EntityKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with("Enamex") {
            EntityKind::Enamex
        } else if tag.starts_with("Timex") {
            EntityKind::Timex
        } else if tag.starts_with("Numex") {
            EntityKind::Numex
        } else {
            EntityKind::Other
        }
    }
}

/// Texto normalizado de um span, pelo normalizador da sua categoria.
pub fn normalize(span: &EntitySpan) -> String {
    match EntityKind::from_tag(&span.tag) {
        EntityKind::Enamex => parse_enamex(&span.tokens, &span.tag),
        EntityKind::Timex => parse_timex(&span.tokens),
        EntityKind::Numex => parse_numex(&span.tokens, &span.tag),
        EntityKind::Other => span
            .tokens
            .iter()
            .map(|t| t.word_form.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
