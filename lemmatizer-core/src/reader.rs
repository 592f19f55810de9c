//! # Leitura do Fluxo de Anotações
//!
//! A entrada é produzida pelo analisador morfológico e pelo NER a montante:
//! uma linha por token, campos separados por TAB.
//!
//! ```text
//! forma   lema   etiquetas   etiqueta-semântica   [marcador-1 ... marcador-4]
//! Suuri   suuri  [POS=ADJECTIVE][NUM=SG][CASE=NOM]  _   <EnamexLocPpl>
//! Britannia  britannia  [POS=NOUN][NUM=SG][CASE=NOM]  _   </EnamexLocPpl>
//! ```
//!
//! Linhas em branco separam **segmentos** (sentenças). Cada segmento guarda
//! os tokens e uma coluna de marcadores por nível de aninhamento; os
//! marcadores ausentes viram strings vazias e os excedentes são ignorados.

use std::io::{BufRead, Lines};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LemmatizeError, Result};
use crate::tags::MorphTags;

/// Número fixo de níveis de aninhamento (colunas de marcadores).
pub const MAX_DEPTH: usize = 4;

/// Campos obrigatórios: forma, lema, etiquetas morfológicas, etiqueta semântica.
const REQUIRED_FIELDS: usize = 4;

/// Sinal de que as etiquetas morfológicas vieram no formato esperado.
const MORPH_LABEL_MARK: &str = "\t[POS=";

/// Um token anotado.
///
/// Vive apenas enquanto o seu segmento está sendo processado.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Forma como aparece no texto (ex: "Helsingissä").
    pub word_form: String,
    /// Forma de dicionário (ex: "helsinki").
    pub lemma: String,
    /// Etiquetas morfológicas já estruturadas.
    pub tags: MorphTags,
    /// Quarto campo, repassado sem interpretação.
    pub semantic_tag: String,
    /// Posição do token; ver [`PositionMode`].
    pub position: usize,
}

impl Token {
    pub fn new(word_form: &str, lemma: &str, tags: &str, position: usize) -> Self {
        Self {
            word_form: word_form.to_string(),
            lemma: lemma.to_string(),
            tags: MorphTags::parse(tags),
            semantic_tag: "_".to_string(),
            position,
        }
    }
}

/// Como numerar as posições dos tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionMode {
    /// Índice do token dentro do segmento, a partir de 0. Cada segmento
    /// recomeça a contagem.
    Segment,
    /// Índice da linha no arquivo inteiro, a partir de 0 (linhas em branco
    /// incluídas; a primeira linha é 0, não 1). Facilita voltar à linha de origem.
    Document,
}

impl Default for PositionMode {
    fn default() -> Self {
        PositionMode::Segment
    }
}

/// Uma sentença: tokens e, para cada nível, a coluna de marcadores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    pub tokens: Vec<Token>,
    /// `columns[d][i]` é o marcador do token `i` no nível `d`.
    pub columns: [Vec<String>; MAX_DEPTH],
}

impl Segment {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Adiciona um token com seus marcadores, completando com vazios até
    /// [`MAX_DEPTH`] e descartando os excedentes.
    pub fn push(&mut self, token: Token, markers: &[&str]) {
        self.tokens.push(token);
        for (depth, column) in self.columns.iter_mut().enumerate() {
            column.push(markers.get(depth).copied().unwrap_or("").to_string());
        }
    }
}

/// Lê segmentos de qualquer `BufRead`, um por vez.
///
/// Erros fatais (linha com menos de 4 campos, falha de I/O) são devolvidos
/// como `Err` e o chamador deve abortar: pular a linha dessincronizaria as
/// posições.
pub struct SegmentReader<R> {
    lines: Lines<R>,
    mode: PositionMode,
    /// Índice (0-based) da próxima linha a ser lida.
    line_index: usize,
    current: Segment,
    warnings: usize,
}

impl<R: BufRead> SegmentReader<R> {
    pub fn new(input: R, mode: PositionMode) -> Self {
        Self {
            lines: input.lines(),
            mode,
            line_index: 0,
            current: Segment::default(),
            warnings: 0,
        }
    }

    /// Quantas linhas tinham etiquetas morfológicas irregulares.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    fn ingest(&mut self, line: &str, index: usize) -> Result<()> {
        let line = line
            .trim_end_matches([' ', '\r', '\n'])
            .trim_start_matches([' ', '\t']);

        if !line.contains(MORPH_LABEL_MARK) {
            self.warnings += 1;
            warn!(line = index + 1, "irregular morphological labels detected");
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < REQUIRED_FIELDS {
            return Err(LemmatizeError::FieldCount {
                line: index + 1,
                found: fields.len(),
            });
        }

        let position = match self.mode {
            PositionMode::Segment => self.current.len(),
            PositionMode::Document => index,
        };

        let token = Token {
            word_form: fields[0].to_string(),
            lemma: fields[1].to_string(),
            tags: MorphTags::parse(fields[2]),
            semantic_tag: fields[3].to_string(),
            position,
        };
        self.current.push(token, &fields[REQUIRED_FIELDS..]);
        Ok(())
    }

    fn take_segment(&mut self) -> Segment {
        std::mem::take(&mut self.current)
    }
}

impl<R: BufRead> Iterator for SegmentReader<R> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next() {
                None => {
                    // O último segmento não precisa de linha em branco final
                    if self.current.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.take_segment()));
                }
                Some(Err(e)) => return Some(Err(e.into())),
                Some(Ok(line)) => {
                    let index = self.line_index;
                    self.line_index += 1;

                    if line.trim().is_empty() {
                        if !self.current.is_empty() {
                            return Some(Ok(self.take_segment()));
                        }
                        continue;
                    }

                    if let Err(e) = self.ingest(&line, index) {
                        return Some(Err(e));
                    }
                }
            }
        }
    }
}

/// Lê todos os segmentos de um texto já em memória.
pub fn read_segments(text: &str, mode: PositionMode) -> Result<Vec<Segment>> {
    SegmentReader::new(text.as_bytes(), mode).collect()
}
