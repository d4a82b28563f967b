#![no_main]
use iri_parts::remove_dot_segments;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let p1 = remove_dot_segments(data);
    assert!(p1.len() <= data.len());
    assert!(!p1.split('/').any(|seg| seg == "." || seg == ".."));

    // Removing dot segments is idempotent.
    assert_eq!(remove_dot_segments(&p1), p1);
});
