//! Snapshot tests pinning the exact event transcript, positions and
//! diagnostic wording for a few representative documents.

use insta::assert_snapshot;

use super::utils::{events, transcript};

#[test]
fn snapshot_object_with_members() {
    let events = events("{\n  \"id\": -0.1e-01,\n  \"node_id\": \"abc\"\n}");
    assert_snapshot!(transcript(&events), @r#"
    startDocument
    (1,1) startObject: {
    (2,3) string: "id"
    (2,7) memberValue: :
    (2,9) number: -0.1e-01
    (2,17) nextElement: ,
    (3,3) string: "node_id"
    (3,12) memberValue: :
    (3,14) string: "abc"
    (4,1) endObject: }
    endDocument
    "#);
}

#[test]
fn snapshot_second_value_after_document() {
    let events = events("true true");
    assert_snapshot!(transcript(&events), @r"
    startDocument
    (1,1) boolean: true
    (1,6) boolean: true
    (1,1) error: JSON parse error at 'true' =:: values 'true' =:: JSON
    endDocument
    ");
}

#[test]
fn snapshot_malformed_fraction() {
    let events = events("-0.e-01");
    assert_snapshot!(transcript(&events), @r"
    startDocument
    (1,1) error: JSON syntax error at '-0.'
    (1,4) error: JSON syntax error at 'e'
    (1,5) number: -0
    (1,7) number: 1
    (1,5) error: JSON parse error at '-0' =:: values '1' =:: JSON
    endDocument
    ");
}

#[test]
fn snapshot_trailing_comma() {
    let events = events("[1,]");
    assert_snapshot!(transcript(&events), @r"
    startDocument
    (1,1) startArray: [
    (1,2) number: 1
    (1,3) nextElement: ,
    (1,4) endArray: ]
    (1,2) error: JSON parse error at '1' =:: values ',' =:: , ']' =:: ]
    (1,2) error: JSON parse error at '1' =:: values ',' =:: , ']' =:: ]
    endDocument
    ");
}
