//! Tipos de erro do lematizador.

use thiserror::Error;

/// Erros fatais do processamento. Anomalias recuperáveis (etiquetas
/// morfológicas irregulares) são apenas registradas via `tracing`.
#[derive(Error, Debug)]
pub enum LemmatizeError {
    /// Linha de dados sem os 4 campos obrigatórios.
    #[error("line {line}: unexpected number of fields (expected at least 4, found {found})")]
    FieldCount { line: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LemmatizeError>;
