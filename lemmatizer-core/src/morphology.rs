//! # Morfologia Finlandesa Mínima
//!
//! Funções puras que respondem às poucas perguntas linguísticas que a
//! normalização de entidades precisa:
//!
//! - [`agreement`]: modificador e núcleo concordam em caso e número?
//! - [`select_lemma`]: qual forma exibir para um token dentro de uma entidade?
//! - [`partitive`]: qual é a forma partitiva (caso exigido depois de numerais)?
//!
//! Não é uma morfologia geral do finlandês: apenas tabelas de sufixos
//! irregulares e uma derivação ingênua do partitivo.
//!
//! ## Tabelas ordenadas
//!
//! As tabelas de sufixos são **listas de prioridade**: a primeira entrada cujo
//! sufixo casa com o lema vence. Sufixos sobrepostos (`maa` e `amerikka`,
//! por exemplo) dependem dessa ordem, por isso nada aqui usa `HashMap`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tags::MorphTags;

/// Lemas que já são plurais por natureza (sufixos, casados no fim do lema).
pub const PLURALIA: &[&str] = &[
    "olympialaiset",
    "markkinat",
    "yhdysvallat",
    "uutiset",
    "voimat",
    "jokerit",
    "maat",
    "saaret",
    "vuoret",
    "laiset",
    "läiset",
];

/// Singular → plural nominativo de elementos que costumam aparecer no plural
/// em nomes de lugares, eventos e organizações.
pub const PLURAL_FORMS: &[(&str, &str)] = &[
    ("vuori", "vuoret"),
    ("saari", "saaret"),
    ("maa", "maat"),
    ("voima", "voimat"),
    ("sanoma", "sanomat"),
    ("putous", "putoukset"),
    ("kilpailu", "kilpailut"),
    ("kisa", "kisat"),
    ("aatti", "aatit"),
    ("uutinen", "uutiset"),
    ("markkina", "markkinat"),
    ("festivaali", "festivaalit"),
    ("festari", "festarit"),
    ("juhla", "juhlat"),
    ("alppi", "alpit"),
    ("viikko", "viikot"),
    ("amerikka", "amerikat"),
    ("vihreä", "vihreät"),
    ("filippiini", "filippiinit"),
    ("yhdistynyt", "yhdistyneet"),
    ("inen", "iset"),
    ("kunta", "kunnat"),
];

/// Marcador anexado quando nenhuma entrada de [`PLURAL_FORMS`] se aplica.
pub const PLURAL_FALLBACK: &str = "[t]";

/// Nominativo → partitivo irregular.
pub const PARTITIVE_FORMS: &[(&str, &str)] = &[
    ("vuosi", "vuotta"),
    ("aste", "astetta"),
    ("kcal", "kcal"),
];

/// Sufixo partitivo sintético, indexado por (termina em consoante, harmonia posterior).
const PARTITIVE_SUFFIXES: [((bool, bool), &str); 4] = [
    ((true, true), "[ia]"),
    ((true, false), "[iä]"),
    ((false, true), "[a]"),
    ((false, false), "[ä]"),
];

const VOWELS: &str = "aeiouyäö";
const BACK_VOWELS: &str = "aou";

/// Lemas mais curtos que isso não são flexionados.
const MIN_INFLECTABLE_LEN: usize = 4;
/// Janela (em caracteres, a partir do fim) usada para a harmonia vocálica.
const HARMONY_WINDOW: usize = 5;

/// Maiúscula, dígito ou símbolos de abreviação/unidade.
static NON_INFLECTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Lu}0-9/:.]").expect("static pattern"));
static COLON_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":.+").expect("static pattern"));

/// Substitui `suffix` no fim de `word` por `replacement`, se houver.
fn replace_suffix(word: &str, suffix: &str, replacement: &str) -> Option<String> {
    word.strip_suffix(suffix)
        .map(|stem| format!("{}{}", stem, replacement))
}

/// Primeira entrada da tabela cujo sufixo casa com `word`.
fn lookup_suffix(table: &[(&str, &str)], word: &str) -> Option<String> {
    table
        .iter()
        .find_map(|(suffix, replacement)| replace_suffix(word, suffix, replacement))
}

/// Concordância em caso e número: compara as sequências ordenadas de
/// `CASE=*` e `NUM=*` dos dois tokens.
pub fn agreement(a: &MorphTags, b: &MorphTags) -> bool {
    a.agreement_features() == b.agreement_features()
}

/// Categorias de entidade em que o plural do lema é mantido (lugares,
/// eventos e organizações: "Alpit", "Olympialaiset", "Vihreät").
fn keeps_plural(entity_tag: &str) -> bool {
    ["EnamexLoc", "EnamexEvt", "EnamexOrg"]
        .iter()
        .any(|category| entity_tag.contains(category))
}

/// Forma de exibição de um token dentro de uma entidade.
///
/// Classes nominais usam o lema; as demais usam a forma de superfície em
/// minúsculas. Se o token estiver no plural, numa entidade de lugar, evento
/// ou organização, e o lema ainda não for um plural conhecido, deriva-se o
/// plural pela tabela [`PLURAL_FORMS`] ou, na falta dela, anexa-se
/// [`PLURAL_FALLBACK`].
pub fn select_lemma(word_form: &str, lemma: &str, tags: &MorphTags, entity_tag: &str) -> String {
    if !tags.is_nominal() {
        return word_form.to_lowercase();
    }

    let already_plural = PLURALIA.iter().any(|plural| lemma.ends_with(plural));
    if tags.is_plural() && !already_plural && keeps_plural(entity_tag) {
        return lookup_suffix(PLURAL_FORMS, lemma)
            .unwrap_or_else(|| format!("{}{}", lemma, PLURAL_FALLBACK));
    }

    lemma.to_string()
}

/// Forma partitiva de um token (usada depois de numerais: "kolme euroa").
///
/// Ordem das regras:
/// 1. Abreviações, números e unidades não flexionam; só perdem uma eventual
///    anotação `:sufixo` ("12:00" → "12").
/// 2. Se o token já está no partitivo, a forma de superfície serve.
/// 3. Tabela de irregulares [`PARTITIVE_FORMS`].
/// 4. Lemas muito curtos ficam como estão.
/// 5. Derivação sintética pelo fim do lema e pela harmonia vocálica.
pub fn partitive(word_form: &str, lemma: &str, tags: &MorphTags) -> String {
    if NON_INFLECTING.is_match(word_form) {
        return COLON_ANNOTATION.replace(word_form, "").into_owned();
    }

    if tags.is_partitive() {
        return word_form.to_string();
    }

    if let Some(form) = lookup_suffix(PARTITIVE_FORMS, lemma) {
        return form;
    }

    let chars: Vec<char> = lemma.chars().collect();
    if chars.len() < MIN_INFLECTABLE_LEN {
        return lemma.to_string();
    }

    let ends_in_consonant = chars
        .last()
        .map(|c| !VOWELS.contains(*c))
        .unwrap_or(false);
    let back_harmony = chars[chars.len().saturating_sub(HARMONY_WINDOW)..]
        .iter()
        .any(|c| BACK_VOWELS.contains(*c));

    let suffix = PARTITIVE_SUFFIXES
        .iter()
        .find(|(key, _)| *key == (ends_in_consonant, back_harmony))
        .map(|(_, suffix)| *suffix)
        .unwrap_or_default();

    format!("{}{}", lemma, suffix)
}
