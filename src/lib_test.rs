use super::*;

#[test]
fn loading_document_defers_install() {
    assert!(still_parsing("loading"));
}

#[test]
fn parsed_document_installs_immediately() {
    assert!(!still_parsing("interactive"));
    assert!(!still_parsing("complete"));
}
