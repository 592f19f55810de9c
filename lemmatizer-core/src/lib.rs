//! # lemmatizer-core — Formas Canônicas de Entidades do Finlandês
//!
//! Este crate recebe a saída de um reconhecedor de entidades nomeadas (NER)
//! do finlandês, já com lemas e etiquetas morfológicas, e devolve cada
//! entidade marcada na sua forma base, na ordem em que aparece no texto.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui em uma única direção, sem estado compartilhado:
//!
//! 1.  **Entrada** ([`reader`]): linhas TSV agrupadas em segmentos (sentenças).
//! 2.  **Spans** ([`span`]): até 4 colunas de marcadores, cada uma varrida por
//!     uma máquina de estados própria.
//! 3.  **Normalização** ([`entity`]): cada span vai para o normalizador da sua
//!     categoria ([`enamex`], [`numex`], [`timex`]), que usa as funções de
//!     [`morphology`] sobre as etiquetas já estruturadas ([`tags`]).
//! 4.  **Saída** ([`pipeline`]): entidades ordenadas por posição, em TSV ou JSON.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lemmatizer_core::{lemmatize_str, LemmatizerConfig};
//!
//! let input = "Suuressa\tsuuri\t[POS=ADJECTIVE][NUM=SG][CASE=INE]\t_\t<EnamexLocPpl>\n\
//!              Britanniassa\tbritannia\t[POS=NOUN][NUM=SG][CASE=INE]\t_\t</EnamexLocPpl>\n";
//!
//! let output = lemmatize_str(input, LemmatizerConfig::default()).unwrap();
//! assert_eq!(output, "0,1\tsuuri britannia\tEnamexLocPpl\n");
//! ```

pub mod enamex;
pub mod entity;
pub mod error;
pub mod morphology;
pub mod numex;
pub mod pipeline;
pub mod reader;
pub mod span;
pub mod tags;
pub mod timex;

pub use entity::{normalize, EntityKind};
pub use error::LemmatizeError;
pub use pipeline::{
    lemmatize_str, Lemmatizer, LemmatizerConfig, NormalizedEntity, OutputFormat, RunStats,
};
pub use reader::{PositionMode, Segment, SegmentReader, Token, MAX_DEPTH};
pub use span::{extract_spans, EntitySpan};
pub use tags::MorphTags;
