//! End-to-end behaviour of the info and error loggers.

use std::collections::HashMap;
use std::rc::Rc;

use varlog::{
    impl_record, log_error, log_info, render, vars, CallerLocation, Logger, Record, RecordingSink,
    Renderer, Severity, Value, Vars,
};

mod common;

struct Profile {
    name: String,
    age: u32,
    profile_pic_blob_key: String,
    background_pic_blob_key: String,
}

impl_record!(Profile {
    name,
    age,
    profile_pic_blob_key,
    background_pic_blob_key,
});

fn profile() -> Profile {
    Profile {
        name: "Alice".into(),
        age: 30,
        profile_pic_blob_key: "secret-1".into(),
        background_pic_blob_key: "secret-2".into(),
    }
}

#[test]
fn test_info_plain_message() {
    let sink = RecordingSink::new();
    log_info(&sink, "hello", None);

    assert_eq!(common::single_entry(&sink), (Severity::Info, "hello".to_string()));
}

#[test]
fn test_info_single_var() {
    let sink = RecordingSink::new();
    log_info(&sink, "hello", Some(&vars! { "x" => 5 }));

    assert_eq!(
        common::single_entry(&sink),
        (Severity::Info, "hello\nVARS:\nx: 5\n".to_string())
    );
}

#[test]
fn test_info_from_hash_map() {
    let mut map = HashMap::new();
    map.insert("first", 1i64);
    map.insert("second", 2i64);
    let vars: Vars = map.into_iter().collect();

    let sink = RecordingSink::new();
    log_info(&sink, "counts", Some(&vars));

    let (_, text) = common::single_entry(&sink);
    assert!(text.starts_with("counts\nVARS:\n"));
    assert_eq!(common::sorted_var_lines(&text), vec!["first: 1", "second: 2"]);
}

#[test]
fn test_error_plain_message_has_location_tag() {
    let sink = RecordingSink::new();
    log_error(&sink, "bad thing", None);

    let (severity, text) = common::single_entry(&sink);
    assert_eq!(severity, Severity::Error);

    let (tag, body) = common::split_error(&text);
    assert_eq!(body, "bad thing");
    let parts: Vec<_> = tag.split(": ").collect();
    assert_eq!(parts.len(), 3);
    assert!(parts[0].ends_with("logging_pipeline.rs"));
    assert!(parts[2].parse::<u32>().unwrap() > 0);
}

#[test]
fn test_error_macro_tags_calling_function() {
    fn failing_operation(logger: &Logger<RecordingSink>) -> u32 {
        let line = line!() + 1;
        log_error!(logger, "operation failed"; "attempt" => 2u8);
        line
    }

    let logger = Logger::new(RecordingSink::new());
    let line = failing_operation(&logger);

    let (_, text) = common::single_entry(logger.sink());
    let (tag, body) = common::split_error(&text);
    assert!(tag.ends_with(&format!("::failing_operation: {}", line)));
    assert_eq!(body, "operation failed\nVARS:\nattempt: 2\n");
}

#[test]
fn test_error_with_injected_location() {
    let logger = Logger::new(RecordingSink::new());
    logger.error_at(CallerLocation::new("svc.rs", "svc::run", 88), "timeout", None);

    assert_eq!(
        logger.sink().last().as_deref(),
        Some("svc.rs: svc::run: 88\n\ttimeout")
    );
}

#[test]
fn test_record_excludes_blob_keys() {
    let out = render(&profile());

    assert_eq!(out, "\n\tname: Alice\n\tage: 30\n");
    assert!(!out.contains("blob_key"));
    assert!(!out.contains("secret"));
}

#[test]
fn test_record_with_go_style_field_names() {
    let record = Record::new()
        .field("Name", "Alice")
        .field("Age", 30)
        .field("ProfilePicBlobKey", "secret");

    let out = render(&record);
    assert!(out.contains("\tName: Alice\n"));
    assert!(out.contains("\tAge: 30\n"));
    assert!(!out.contains("ProfilePicBlobKey"));
    assert!(!out.contains("secret"));
}

#[test]
fn test_record_inside_vars_block() {
    let sink = RecordingSink::new();
    let user = profile();
    log_info(&sink, "loaded", Some(&vars! { "user" => user }));

    assert_eq!(
        sink.last().as_deref(),
        Some("loaded\nVARS:\nuser: \n\tname: Alice\n\tage: 30\n\n")
    );
}

#[test]
fn test_primitive_rendering() {
    assert_eq!(render(&true), "true");
    assert_eq!(render(&-7i32), "-7");
    assert_eq!(render(&3.5f64), "3.5000000000");
    assert_eq!(render(&i8::MIN), "-128");
    assert_eq!(render(&u16::MAX), "65535");
    assert_eq!(render("text"), "text");
    assert_eq!(render(&None::<u8>), "INVALID");
}

#[test]
fn test_opaque_rendering_ignores_contents() {
    let mut map = HashMap::new();
    map.insert(1, "one");
    let func: fn() -> u8 = || 1;

    assert_eq!(render(&map), "MAP");
    assert_eq!(render(&HashMap::<u8, u8>::new()), "MAP");
    assert_eq!(render(&func), "FUNCTION");
    assert_eq!(render(&Rc::new(5)), "POINTER");
    assert_eq!(render(&[0u8; 4]), "ARRAY");
    assert_eq!(render(&vec!["a"]), "SLICE");
}

#[test]
fn test_render_is_idempotent() {
    let user = profile();
    assert_eq!(render(&user), render(&user));

    let value = Value::F32(1.5);
    assert_eq!(render(&value), render(&value));
}

#[test]
fn test_logger_renderer_configuration_applies() {
    let renderer = Renderer::default().exclude("age").with_float_precision(3);
    let logger = Logger::with_renderer(RecordingSink::new(), renderer);
    let user = profile();

    log_info!(logger, "state"; "user" => user, "load" => 0.75f64);

    let (_, text) = common::single_entry(logger.sink());
    assert_eq!(text, "state\nVARS:\nuser: \n\tname: Alice\n\nload: 0.750\n");
}
