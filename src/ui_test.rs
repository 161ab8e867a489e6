use super::*;

#[test]
fn formats_with_prefix_and_period() {
    assert_eq!(error_message("x"), "Error: x.");
    assert_eq!(error_message("service reported failure"), "Error: service reported failure.");
}

#[test]
fn write_emits_exactly_one_line() {
    let mut out = Vec::new();
    write_error_message(&mut out, "x");

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Error: x.\n");
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn each_call_emits_one_line() {
    let mut out = Vec::new();
    write_error_message(&mut out, "first");
    write_error_message(&mut out, "second");

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Error: first.\nError: second.\n");
}
