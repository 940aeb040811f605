// Expected stderr is refreshed with `TRYBUILD=overwrite cargo test -p propbind-macro-tests`.
#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
