#[test]
fn tessera_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tessera_error_pass.rs");
    t.pass("tests/ui/tessera_error_context.rs");
}
