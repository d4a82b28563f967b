#![no_main]
use iri_parts::Iri;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (base, r) = (Iri::parse(data.0), Iri::parse(data.1));

    let u1 = base.resolve(&r);
    let u2 = Iri::parse(u1.as_str());

    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.authority(), u2.authority());
    assert_eq!(u1.path(), u2.path());
    assert_eq!(u1.query(), u2.query());
    assert_eq!(u1.fragment(), u2.fragment());

    // The fragment always comes from the reference.
    assert_eq!(u1.fragment(), r.fragment());

    // Resolving text gives the same result as resolving a parsed reference.
    assert_eq!(base.resolve(data.1), u1);
});
