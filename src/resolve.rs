//! Module for reference resolution.

use crate::{
    build::{AuthParts, Parts},
    component::Scheme,
    normalize::remove_dot_segments,
    Iri,
};
use alloc::{
    borrow::Cow,
    string::{String, ToString},
};

/// Resolves `r` against `base` and returns the recomposed target.
///
/// Implements the Transform References algorithm of
/// [Section 5.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2)
/// with the merge of Section 5.2.3.
pub(crate) fn resolve(base: &Iri<&str>, /* reference */ r: &Iri<&str>) -> String {
    let (t_scheme, t_authority, t_path, t_query);

    let r_path = r.path();

    let branch = if let Some(r_scheme) = r.scheme() {
        t_scheme = Some(r_scheme);
        t_authority = r.authority();
        t_path = Cow::Owned(remove_dot_segments(r_path.as_str()));
        t_query = r.query();
        "scheme"
    } else {
        t_scheme = base.scheme();
        if r.has_authority() {
            t_authority = r.authority();
            t_path = Cow::Owned(remove_dot_segments(r_path.as_str()));
            t_query = r.query();
            "authority"
        } else {
            t_authority = base.authority();
            if r_path.is_empty() {
                t_path = Cow::Borrowed(base.path().as_str());
                t_query = r.query().or_else(|| base.query());
                "empty path"
            } else if r_path.is_absolute() {
                t_path = Cow::Owned(remove_dot_segments(r_path.as_str()));
                t_query = r.query();
                "absolute path"
            } else {
                t_path = Cow::Owned(remove_dot_segments(&merge(base, r_path.as_str())));
                t_query = r.query();
                "merge"
            }
        }
    };

    let target = Parts {
        scheme: t_scheme.map(Scheme::as_str),
        authority: t_authority.map(AuthParts::from),
        path: &t_path,
        query: t_query,
        fragment: r.fragment(),
    }
    .recompose();

    log::trace!(
        "resolved {:?} against {:?} by {}: {:?}",
        r.as_str(),
        base.as_str(),
        branch,
        target
    );
    target
}

/// Merges a relative-path reference with the path of the base,
/// as described in [Section 5.2.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3).
fn merge(base: &Iri<&str>, r_path: &str) -> String {
    let base_path = base.path().as_str();
    if base.has_authority() && base_path.is_empty() {
        let mut buf = String::with_capacity(r_path.len() + 1);
        buf.push('/');
        buf.push_str(r_path);
        return buf;
    }
    match base_path.rfind('/') {
        Some(i) => {
            let mut buf = String::with_capacity(i + 1 + r_path.len());
            buf.push_str(&base_path[..=i]);
            buf.push_str(r_path);
            buf
        }
        None => r_path.to_string(),
    }
}
