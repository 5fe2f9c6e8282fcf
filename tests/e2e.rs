use record_verifier as rv;
use rv::{Context, Repl, Verdict};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn acne_table() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "acne,ziana,tretinoin").unwrap();
    writeln!(file, "psoriasis,calcipotriene, clobetasol ").unwrap();
    file
}

#[test]
fn test_verified_ignores_case_and_padding() {
    let file = acne_table();
    assert_eq!(rv::verify(file.path(), " Acne ", "ZIANA"), Verdict::Verified);
    assert_eq!(rv::verify(file.path(), "PSORIASIS", "Clobetasol"), Verdict::Verified);
}

#[test]
fn test_value_mismatch() {
    let file = acne_table();
    assert_eq!(rv::verify(file.path(), "acne", "benzoyl peroxide"), Verdict::ValueMismatch);
}

#[test]
fn test_key_not_found() {
    let file = acne_table();
    assert_eq!(rv::verify(file.path(), "rosacea", "metronidazole"), Verdict::KeyNotFound);
}

#[test]
fn test_table_is_reread_between_calls() {
    let mut file = acne_table();
    let verifier = rv::RecordVerifier::new(file.path());
    assert_eq!(verifier.verify("rosacea", "metronidazole"), Verdict::KeyNotFound);
    writeln!(file, "rosacea,metronidazole").unwrap();
    file.flush().unwrap();
    assert_eq!(verifier.verify("rosacea", "metronidazole"), Verdict::Verified);
}

#[test]
fn test_interactive_session() {
    let file = acne_table();
    let ctx = Context::new(file.path());
    let input = "acne,ziana\nacne , benzoyl peroxide\nrosacea,metronidazole\nacne\nexit\n";
    let mut out = Vec::new();
    Repl::new(&ctx).run(Cursor::new(input), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out
        .split(rv::repl::PROMPT)
        .filter(|s| !s.is_empty())
        .map(str::trim_end)
        .collect();
    assert_eq!(
        lines,
        vec![
            "Medication verified",
            "Error Wrong Medication",
            "No disease doesn't exist in the DB",
            rv::repl::USAGE,
            rv::repl::GOODBYE,
        ]
    );
}
