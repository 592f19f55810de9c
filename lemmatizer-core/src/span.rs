//! # Extração de Spans por Coluna de Marcadores
//!
//! O NER a montante marca entidades aninhadas em até [`MAX_DEPTH`] colunas
//! paralelas. Cada coluna é um fluxo de spans de **um único nível**: dentro
//! dela os spans não se sobrepõem, então basta uma pequena máquina de estados
//! por coluna.
//!
//! ## Marcadores
//! - `<TAG>` abre um span;
//! - `</TAG>` fecha o span aberto;
//! - `<TAG/>` abre e fecha no mesmo token.
//!
//! As quatro colunas são varridas de forma isolada sobre os mesmos tokens
//! (somente leitura); só a ordenação final, no [`crate::pipeline`], junta os
//! resultados.
//!
//! [`MAX_DEPTH`]: crate::reader::MAX_DEPTH

use tracing::debug;

use crate::reader::{Segment, Token};

/// Uma entidade delimitada pelos marcadores de uma coluna.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    /// Posição do token que abriu o span (inclusiva).
    pub start: usize,
    /// Posição do token que fechou o span (inclusiva).
    pub end: usize,
    /// Nome do marcador sem `<`, `>` e `/` (ex: "EnamexLocPpl").
    pub tag: String,
    /// Tokens do span, na ordem do texto, com lemas em minúsculas.
    pub tokens: Vec<Token>,
}

/// Máquina de estados de uma coluna: fora de span ou acumulando tokens de um
/// span aberto.
struct MarkerColumn<'a> {
    /// Só marcadores que começam com este prefixo abrem spans.
    prefix: &'a str,
    open: Option<String>,
    start: usize,
    accumulated: Vec<Token>,
}

impl<'a> MarkerColumn<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            open: None,
            start: 0,
            accumulated: Vec::new(),
        }
    }

    fn opens(&self, marker: &str) -> bool {
        !marker.starts_with("</")
            && marker
                .strip_prefix('<')
                .map(|name| name.starts_with(self.prefix))
                .unwrap_or(false)
    }

    /// Consome um token e o seu marcador nesta coluna; devolve o span se o
    /// marcador fechou o span aberto.
    fn feed(&mut self, token: &Token, marker: &str) -> Option<EntitySpan> {
        if self.opens(marker) {
            // Um novo marcador de abertura reinicia o início, mas mantém o
            // que já foi acumulado.
            self.start = token.position;
            self.open = Some(marker.trim_matches(['<', '>', '/']).to_string());
            self.accumulated.push(span_token(token));
        } else if !self.accumulated.is_empty() {
            self.accumulated.push(span_token(token));
        }

        let tag = self.open.as_deref()?;
        if !closes(marker, tag) {
            return None;
        }

        let tag = self.open.take()?;
        Some(EntitySpan {
            start: self.start,
            end: token.position,
            tag,
            tokens: std::mem::take(&mut self.accumulated),
        })
    }

    /// Span que ficou aberto no fim do segmento é descartado.
    fn finish(self) {
        if let Some(tag) = self.open {
            debug!(tag = %tag, start = self.start, "unclosed span discarded at segment end");
        }
    }
}

/// `</TAG...>` ou `<TAG.../>`.
fn closes(marker: &str, tag: &str) -> bool {
    let explicit = marker
        .strip_prefix("</")
        .map(|name| name.starts_with(tag))
        .unwrap_or(false);
    let self_closing = marker
        .strip_prefix('<')
        .map(|name| name.starts_with(tag))
        .unwrap_or(false)
        && marker.ends_with("/>");
    explicit || self_closing
}

fn span_token(token: &Token) -> Token {
    Token {
        lemma: token.lemma.to_lowercase(),
        ..token.clone()
    }
}

/// Extrai os spans de todas as colunas cujo marcador de abertura começa com
/// `prefix` (vazio casa com qualquer marcador).
///
/// A ordem devolvida é: coluna 1, coluna 2, ...; dentro da coluna, a ordem
/// de fechamento.
pub fn extract_spans(segment: &Segment, prefix: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();

    for column in &segment.columns {
        let mut machine = MarkerColumn::new(prefix);
        for (token, marker) in segment.tokens.iter().zip(column) {
            if let Some(span) = machine.feed(token, marker) {
                debug!(tag = %span.tag, start = span.start, end = span.end, "span closed");
                spans.push(span);
            }
        }
        machine.finish();
    }

    spans
}
