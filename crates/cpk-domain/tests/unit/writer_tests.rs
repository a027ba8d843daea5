//! Unit tests for the response writer

use cpk_domain::{Location, ResponseWriter};
use std::sync::Arc;

#[test]
fn test_annotations_carry_rule_id_in_emission_order() {
    let writer = ResponseWriter::new("FIELD_LOWER_SNAKE");
    writer.add_file_annotation("first", "a.proto");
    writer.add_element_annotation("second", "a.proto", "pkg.Msg.Field");
    writer.add_annotation("third", None);

    assert_eq!(writer.len(), 3);
    let annotations = writer.into_annotations();
    let messages: Vec<_> = annotations.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert!(annotations.iter().all(|a| a.rule_id == "FIELD_LOWER_SNAKE"));
    assert_eq!(
        annotations[1].location,
        Some(Location::element("a.proto", "pkg.Msg.Field"))
    );
}

#[test]
fn test_concurrent_appends_are_all_kept() {
    let writer = Arc::new(ResponseWriter::new("RULE_NAME"));
    let threads: Vec<_> = (0..8)
        .map(|i| {
            let writer = Arc::clone(&writer);
            std::thread::spawn(move || {
                for j in 0..50 {
                    writer.add_annotation(format!("{i}-{j}"), None);
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
    let writer = Arc::try_unwrap(writer).expect("all threads joined");
    assert_eq!(writer.into_annotations().len(), 400);
}

#[test]
fn test_location_display() {
    assert_eq!(Location::file("a.proto").to_string(), "a.proto");
    assert_eq!(
        Location::element("a.proto", "pkg.Msg").to_string(),
        "a.proto:pkg.Msg"
    );
}
