use iri_parts::Iri;

trait Test {
    fn pass(&self, r: &str, expected: &str);
}

impl Test for Iri<&str> {
    #[track_caller]
    fn pass(&self, r: &str, expected: &str) {
        let target = self.resolve(r);
        assert_eq!(target, expected, "{r:?} against {self}");

        // Resolving a parsed reference gives the same target.
        assert_eq!(self.resolve(&Iri::parse(r)), target);

        // The target decomposes like freshly parsed text.
        let reparsed = Iri::parse(target.as_str());
        assert_eq!(target.scheme(), reparsed.scheme());
        assert_eq!(target.authority(), reparsed.authority());
        assert_eq!(target.path(), reparsed.path());
        assert_eq!(target.query(), reparsed.query());
        assert_eq!(target.fragment(), reparsed.fragment());
    }
}

#[track_caller]
fn pass(base: &str, r: &str, expected: &str) {
    Iri::parse(base).pass(r, expected);
}

#[test]
fn resolve() {
    // Examples from Section 5.4 of RFC 3986.
    let base = Iri::parse("http://a/b/c/d;p?q");

    base.pass("g:h", "g:h");
    base.pass("g", "http://a/b/c/g");
    base.pass("./g", "http://a/b/c/g");
    base.pass("g/", "http://a/b/c/g/");
    base.pass("/g", "http://a/g");
    base.pass("//g", "http://g");
    base.pass("?y", "http://a/b/c/d;p?y");
    base.pass("g?y", "http://a/b/c/g?y");
    base.pass("#s", "http://a/b/c/d;p?q#s");
    base.pass("g#s", "http://a/b/c/g#s");
    base.pass("g?y#s", "http://a/b/c/g?y#s");
    base.pass(";x", "http://a/b/c/;x");
    base.pass("g;x", "http://a/b/c/g;x");
    base.pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    base.pass("", "http://a/b/c/d;p?q");
    base.pass(".", "http://a/b/c/");
    base.pass("./", "http://a/b/c/");
    base.pass("..", "http://a/b/");
    base.pass("../", "http://a/b/");
    base.pass("../g", "http://a/b/g");
    base.pass("../..", "http://a/");
    base.pass("../../", "http://a/");
    base.pass("../../g", "http://a/g");

    base.pass("../../../g", "http://a/g");
    base.pass("../../../../g", "http://a/g");

    base.pass("/./g", "http://a/g");
    base.pass("/../g", "http://a/g");
    base.pass("g.", "http://a/b/c/g.");
    base.pass(".g", "http://a/b/c/.g");
    base.pass("g..", "http://a/b/c/g..");
    base.pass("..g", "http://a/b/c/..g");

    base.pass("./../g", "http://a/b/g");
    base.pass("./g/.", "http://a/b/c/g/");
    base.pass("g/./h", "http://a/b/c/g/h");
    base.pass("g/../h", "http://a/b/c/h");
    base.pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    base.pass("g;x=1/../y", "http://a/b/c/y");

    base.pass("g?y/./x", "http://a/b/c/g?y/./x");
    base.pass("g?y/../x", "http://a/b/c/g?y/../x");
    base.pass("g#s/./x", "http://a/b/c/g#s/./x");
    base.pass("g#s/../x", "http://a/b/c/g#s/../x");

    base.pass("http:g", "http:g");

    // A colon in the first segment behind "./" is path content.
    base.pass("./g:h", "http://a/b/c/g:h");
}

#[test]
fn resolve_hierarchical() {
    pass("foo:xyz", "bar:abc", "bar:abc");
    pass("http://example/x/y/z", "../abc", "http://example/x/abc");
    pass("http://example2/x/y/z", "//example/x/abc", "http://example/x/abc");
    pass("http://example2/x/y/z", "http://example/x/abc", "http://example/x/abc");
    pass("http://ex/x/y/z", "../r", "http://ex/x/r");
    pass("http://ex/x/y/z", "/r", "http://ex/r");
    pass("http://ex/x/y/z", "q/r", "http://ex/x/y/q/r");
    pass("http://ex/x/y", "q/r", "http://ex/x/q/r");
    pass("http://ex/x/y", "q/r#s", "http://ex/x/q/r#s");
    pass("http://ex/x/y", "q/r#s/t", "http://ex/x/q/r#s/t");
    pass("http://ex/x/y", "ftp://ex/x/q/r", "ftp://ex/x/q/r");
    pass("http://ex/x/y", "", "http://ex/x/y");
    pass("http://ex/x/y/", "", "http://ex/x/y/");
    pass("http://ex/x/y/pdq", "", "http://ex/x/y/pdq");
    pass("http://ex/x/y/", "z/", "http://ex/x/y/z/");
    pass("http://ex/x/y", "./q:r", "http://ex/x/q:r");
    pass("http://ex/x/y", "./p=q:r", "http://ex/x/p=q:r");
    pass("http://ex/x/y?pp/qq", "?pp/rr", "http://ex/x/y?pp/rr");
    pass("http://ex/x/y?pp/qq", "y/z", "http://ex/x/y/z");
    pass("http://ex/x/z?q", "y?q", "http://ex/x/y?q");
    pass("http://example/x/abc.efg", "./", "http://example/x/");
    pass(
        "http://www.w3.org/People/Berners-Lee/card.rdf",
        "../../2002/01/tr-automation/tr.rdf",
        "http://www.w3.org/2002/01/tr-automation/tr.rdf",
    );
    pass("http://example.com/", ".", "http://example.com/");
    pass(
        "http://example.com/.meta.n3",
        ".meta.n3",
        "http://example.com/.meta.n3",
    );
    pass(
        "http://example.org/base/uri",
        "this",
        "http://example.org/base/this",
    );
    pass("http://example.org/base/uri", "http:this", "http:this");
    pass("http:base", "http:this", "http:this");
    pass(
        "f://example.org/base/a",
        "b/c//d/e",
        "f://example.org/base/b/c//d/e",
    );
}

#[test]
fn resolve_file() {
    pass(
        "file:/swap/test/animal.rdf",
        "#Animal",
        "file:/swap/test/animal.rdf#Animal",
    );
    pass("file:/e/x/y/z", "../abc", "file:/e/x/abc");
    pass("file:/example2/x/y/z", "/example/x/abc", "file:/example/x/abc");
    pass("file:/ex/x/y/z", "../r", "file:/ex/x/r");
    pass("file:/ex/x/y/z", "/r", "file:/r");
    pass("file:/ex/x/y", "q/r", "file:/ex/x/q/r");
    pass("file:/ex/x/y", "q/r#s", "file:/ex/x/q/r#s");
    pass("file:/ex/x/y", "q/r#s/t", "file:/ex/x/q/r#s/t");
    pass("file:/ex/x/y", "ftp://ex/x/q/r", "ftp://ex/x/q/r");
    pass("file:/ex/x/y", "", "file:/ex/x/y");
    pass("file:/ex/x/y/", "", "file:/ex/x/y/");
    pass("file:/ex/x/y/pdq", "", "file:/ex/x/y/pdq");
    pass("file:/ex/x/y/", "z/", "file:/ex/x/y/z/");
    pass(
        "file:/devel/WWW/2000/10/swap/test/reluri-1.n3",
        "//meetings.example.com/cal#m1",
        "file://meetings.example.com/cal#m1",
    );
    pass(
        "file:/home/connolly/w3ccvs/WWW/2000/10/swap/test/reluri-1.n3",
        "//meetings.example.com/cal#m1",
        "file://meetings.example.com/cal#m1",
    );
    pass(
        "file:/devel/WWW/2000/10/swap/test/reluri-1.n3",
        "file://meetings.example.com/cal#m1",
        "file://meetings.example.com/cal#m1",
    );
    pass("file:/some/dir/foo", "./#blort", "file:/some/dir/#blort");
    pass(
        "file:///C:/DEV/Haskell/lib/HXmlToolbox-3.01/examples/",
        "mini1.xml",
        "file:///C:/DEV/Haskell/lib/HXmlToolbox-3.01/examples/mini1.xml",
    );
}

#[test]
fn resolve_empty_fragment() {
    // A present but empty fragment is kept.
    pass("file:/ex/x/y", "q/r#", "file:/ex/x/q/r#");
    pass("file:/some/dir/foo", "./#", "file:/some/dir/#");
    pass("http://a/b#f", "#", "http://a/b#");

    // The fragment of the base is never kept.
    pass("http://a/b#f", "", "http://a/b");
    pass("http://ex#f", "/x/y?q", "http://ex/x/y?q");
    pass("http://ex#f", "x/y?q", "http://ex/x/y?q");
}

#[test]
fn resolve_rootless() {
    pass("mailto:local", "local/qual@domain.org#frag", "mailto:local/qual@domain.org#frag");
    pass(
        "mailto:local/qual1@domain1.org",
        "more/qual2@domain2.org#frag",
        "mailto:local/more/qual2@domain2.org#frag",
    );
    pass("foo:a/b", "c/d", "foo:a/c/d");
    pass("foo:a/b", "/c/d", "foo:/c/d");
    pass("foo:a/b?c#d", "", "foo:a/b?c");
    pass("foo:a", "b/c", "foo:b/c");
    pass("foo:/a/y/z", "../b/c", "foo:/a/b/c");
    pass("foo:a", "./b/c", "foo:b/c");
    pass("foo:a", "/./b/c", "foo:/b/c");
    pass("foo://a//b/c", "../../d", "foo://a/d");
    pass("foo:a", ".", "foo:");
    pass("foo:a", "..", "foo:");
    pass("foo:a/y/z", "../b/c", "foo:a/b/c");
    pass("foo:bar", "http://example/a/b?c/../d", "http://example/a/b?c/../d");
    pass("foo:bar", "http://example/a/b#c/../d", "http://example/a/b#c/../d");
    pass(
        "mid:m@example.ord/c@example.org",
        "m2@example.ord/c2@example.org",
        "mid:m@example.ord/m2@example.ord/c2@example.org",
    );
    pass("info:name/1234/../567", "name/9876/../543", "info:name/name/543");
    pass("info:/name/1234/../567", "name/9876/../543", "info:/name/name/543");
}

#[test]
fn resolve_mailto() {
    pass("mailto:local1@domain1?query1", "local2@domain2", "mailto:local2@domain2");
    pass(
        "mailto:local1@domain1",
        "local2@domain2?query2",
        "mailto:local2@domain2?query2",
    );
    pass(
        "mailto:local1@domain1?query1",
        "local2@domain2?query2",
        "mailto:local2@domain2?query2",
    );
    pass("mailto:local@domain?query1", "?query2", "mailto:local@domain?query2");
    pass("mailto:?query1", "local@domain?query2", "mailto:local@domain?query2");
    pass(
        "mailto:local/option@domain.org?notaquery#frag",
        "more@domain",
        "mailto:local/more@domain",
    );
    pass(
        "mailto:local/option@domain.org?notaquery#frag",
        "#newfrag",
        "mailto:local/option@domain.org?notaquery#newfrag",
    );
    pass(
        "mailto:local/option@domain.org?notaquery#frag",
        "l1/q1@domain",
        "mailto:local/l1/q1@domain",
    );
    pass(
        "mailto:local1@domain1?query1",
        "mailto:local2@domain2",
        "mailto:local2@domain2",
    );
    pass(
        "mailto:local@domain?query1",
        "mailto:local@domain?query2",
        "mailto:local@domain?query2",
    );
    pass(
        "mailto:?query1",
        "mailto:local@domain?query2",
        "mailto:local@domain?query2",
    );
}

#[test]
fn resolve_base_without_path() {
    pass("http://ex", "/x/y?q", "http://ex/x/y?q");
    pass("http://ex", "x/y?q", "http://ex/x/y?q");
    pass("http://ex?p", "/x/y?q", "http://ex/x/y?q");
    pass("http://ex?p", "x/y?q", "http://ex/x/y?q");
    pass("http://ex?p", "/x/y#g", "http://ex/x/y#g");
    pass("http://ex?p", "x/y#g", "http://ex/x/y#g");
    pass("http://ex", "/", "http://ex/");
    pass("http://ex", "./", "http://ex/");
    pass("http://ex", "/a/b", "http://ex/a/b");
    pass("http://ex/a/b", "./", "http://ex/a/");
}

#[test]
fn resolve_percent_encoded() {
    // Percent-encoded slashes are not segment delimiters.
    pass("http://example/x/y%2Fz", "abc", "http://example/x/abc");
    pass(
        "http://example/a/x/y/z",
        "../../x%2Fabc",
        "http://example/a/x%2Fabc",
    );
    pass("http://example/a/x/y%2Fz", "../x%2Fabc", "http://example/a/x%2Fabc");
    pass("http://example/x%2Fy/z", "abc", "http://example/x%2Fy/abc");
    pass("http://ex/x/y", "q%3Ar", "http://ex/x/q%3Ar");
    pass("http://example/x/y%2Fz", "/x%2Fabc", "http://example/x%2Fabc");
    pass("http://example/x/y/z", "/x%2Fabc", "http://example/x%2Fabc");
}

#[test]
fn resolve_dot_segments_in_absolute_reference() {
    let base = Iri::parse("ftp://example/x/y");
    base.pass("http://example/a/b/../../c", "http://example/c");
    base.pass("http://example/a/b/c/../../", "http://example/a/");
    base.pass("http://example/a/b/c/./", "http://example/a/b/c/");
    base.pass("http://example/a/b/c/.././", "http://example/a/b/");
    base.pass("http://example/a/b/c/d/../../../../e", "http://example/e");
    base.pass("http://example/a/b/c/d/../.././../../e", "http://example/e");
}

#[test]
fn resolve_reparses_target() {
    // The merged path starts with "//", which reads back as an authority.
    let target = Iri::parse("f:/a").resolve(".//g");
    assert_eq!(target, "f://g");
    assert_eq!(target.host(), Some("g"));
    assert_eq!(target.path(), "");
}

#[test]
fn resolve_relative_base() {
    // A base without scheme yields a relative target.
    pass("//a/b/c", "../d", "//a/d");
    pass("/a/b/c", "d?q", "/a/b/d?q");
    pass("a/b/c", "../d", "a/d");
    pass("", "a", "a");
}

#[test]
fn resolve_owned() {
    let base = Iri::parse(String::from("http://a/b/c/d;p?q"));
    let r = Iri::parse(String::from("../g#s"));
    assert_eq!(base.resolve(&r), "http://a/b/g#s");
    assert_eq!(base.resolve(&String::from("?y")), "http://a/b/c/d;p?y");

    // Resolution does not alter its operands.
    assert_eq!(base, "http://a/b/c/d;p?q");
    assert_eq!(r, "../g#s");
}
