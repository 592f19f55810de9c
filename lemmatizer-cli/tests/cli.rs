use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const INPUT: &str = "\
Suuressa\tsuuri\t[POS=ADJECTIVE][NUM=SG][CASE=INE]\t_\t<EnamexLocPpl>
Britanniassa\tbritannia\t[POS=NOUN][PROPER=PROPER][NUM=SG][CASE=INE]\t_\t</EnamexLocPpl>
maksoi\tmaksaa\t[POS=VERB][VOICE=ACT][MOOD=INDV][TENSE=PAST][PERS=SG3]\t_
viisi\tviisi\t[POS=NUMERAL][SUBCAT=CARD][NUM=SG][CASE=NOM]\t_\t<NumexMsrCur>
puntaa\tpunta\t[POS=NOUN][NUM=SG][CASE=PAR]\t_\t</NumexMsrCur>

Vuonna\tvuonna\t[POS=ADVERB]\t_\t<TimexTmeDat>
1995\t1995\t[POS=NUMERAL][SUBCAT=CARD]\t_\t</TimexTmeDat>
";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("lemmatize-matches").unwrap();
    cmd.env_remove("LEMMATIZE_TAG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_all_categories_by_default() {
    cmd()
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(
            "0,1\tsuuri britannia\tEnamexLocPpl\n\
             3,4\tviisi puntaa\tNumexMsrCur\n\
             0,1\tvuonna 1995\tTimexTmeDat\n",
        );
}

#[test]
fn test_tag_prefix_filter() {
    cmd()
        .arg("Numex")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("3,4\tviisi puntaa\tNumexMsrCur\n");
}

#[test]
fn test_tag_prefix_from_env() {
    cmd()
        .env("LEMMATIZE_TAG", "Timex")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("0,1\tvuonna 1995\tTimexTmeDat\n");
}

#[test]
fn test_document_lines() {
    cmd()
        .args(["--document-lines", "Timex"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("6,7\tvuonna 1995\tTimexTmeDat\n");
}

#[test]
fn test_json_format_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(INPUT.as_bytes()).unwrap();

    cmd()
        .args(["--format", "json", "--input"])
        .arg(file.path())
        .arg("EnamexLoc")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""text":"suuri britannia""#))
        .stdout(predicate::str::contains(r#""start":0"#));
}

#[test]
fn test_malformed_line_exits_with_error() {
    cmd()
        .write_stdin("Turku\tturku\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 1: unexpected number of fields"));
}

#[test]
fn test_irregular_labels_warn_but_succeed() {
    cmd()
        .write_stdin("Turku\tturku\tNOUN\t_\t<EnamexLocPpl/>\n")
        .assert()
        .success()
        .stdout("0,0\tturku\tEnamexLocPpl\n")
        .stderr(predicate::str::contains("irregular morphological labels"));
}

#[test]
fn test_missing_input_file() {
    cmd()
        .args(["--input", "/nonexistent/anotado.tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_help_states_zero_based_positions() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--document-lines"))
        .stdout(predicate::str::contains("a partir de 0"));
}
