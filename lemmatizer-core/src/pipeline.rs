//! # Pipeline de Lematização — Orquestrador por Segmento
//!
//! Coordena os módulos: lê segmentos ([`reader`]), extrai os spans de cada
//! coluna de marcadores ([`span`]), normaliza cada span pela sua categoria
//! ([`entity`]) e escreve o bloco do segmento, ordenado por posição.
//!
//! O processamento é um único passe em streaming: cada segmento é escrito
//! assim que a linha em branco que o fecha é lida, e então descartado.
//!
//! [`reader`]: crate::reader
//! [`span`]: crate::span
//! [`entity`]: crate::entity

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::normalize;
use crate::error::Result;
use crate::reader::{PositionMode, Segment, SegmentReader};
use crate::span::extract_spans;

/// Formato de saída.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `início,fim<TAB>texto<TAB>tag`, uma entidade por linha.
    Tsv,
    /// Um objeto JSON por linha.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Tsv
    }
}

/// Configuração do lematizador.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemmatizerConfig {
    /// Só spans cujo marcador começa com este prefixo são extraídos
    /// (ex: "Enamex", "EnamexLoc", "Numex"). Vazio aceita todos.
    pub tag_prefix: String,
    pub positions: PositionMode,
    pub format: OutputFormat,
}

/// Uma entidade normalizada, pronta para a saída.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntity {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub tag: String,
}

impl fmt::Display for NormalizedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}\t{}\t{}", self.start, self.end, self.text, self.tag)
    }
}

/// Estatísticas de uma execução completa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub segments: usize,
    pub tokens: usize,
    pub entities: usize,
    /// Linhas com etiquetas morfológicas irregulares.
    pub warnings: usize,
}

/// O lematizador principal.
pub struct Lemmatizer {
    config: LemmatizerConfig,
}

impl Lemmatizer {
    pub fn new(config: LemmatizerConfig) -> Self {
        Self { config }
    }

    /// Extrai e normaliza as entidades de um segmento.
    ///
    /// As quatro colunas são juntadas e ordenadas por `(início, fim)`. A
    /// ordenação é estável: empates mantêm a ordem de coluna.
    pub fn process_segment(&self, segment: &Segment) -> Vec<NormalizedEntity> {
        let mut entities: Vec<NormalizedEntity> = extract_spans(segment, &self.config.tag_prefix)
            .iter()
            .map(|span| NormalizedEntity {
                start: span.start,
                end: span.end,
                text: normalize(span),
                tag: span.tag.clone(),
            })
            .collect();

        entities.sort_by_key(|e| (e.start, e.end));
        entities
    }

    /// Processa o fluxo inteiro, escrevendo um bloco por segmento.
    ///
    /// Para no primeiro erro fatal; o que já foi escrito permanece.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<RunStats> {
        let mut reader = SegmentReader::new(input, self.config.positions);
        let mut stats = RunStats::default();

        while let Some(segment) = reader.next() {
            let segment = segment?;
            let entities = self.process_segment(&segment);
            debug!(
                segment = stats.segments,
                tokens = segment.len(),
                entities = entities.len(),
                "segment processed"
            );

            for entity in &entities {
                self.write_entity(&mut output, entity)?;
            }

            stats.segments += 1;
            stats.tokens += segment.len();
            stats.entities += entities.len();
        }

        stats.warnings = reader.warnings();
        output.flush()?;
        Ok(stats)
    }

    fn write_entity<W: Write>(&self, output: &mut W, entity: &NormalizedEntity) -> Result<()> {
        match self.config.format {
            OutputFormat::Tsv => writeln!(output, "{}", entity)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, entity)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(LemmatizerConfig::default())
    }
}

/// Atalho: processa um texto em memória e devolve a saída como string.
pub fn lemmatize_str(text: &str, config: LemmatizerConfig) -> Result<String> {
    let mut output = Vec::new();
    Lemmatizer::new(config).run(text.as_bytes(), &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
