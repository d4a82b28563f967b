//! IRI components.

use crate::parse;
use core::num::ParseIntError;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a case-insensitive
/// comparison if the scheme specification allows both letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use iri_parts::{component::Scheme, Iri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let iri = Iri::parse("HTTP://EXAMPLE.COM/");
/// let scheme = iri.scheme().unwrap();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    ///
    /// A scheme name must match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::component::Scheme;
    ///
    /// assert!(Scheme::new("svn+ssh").is_some());
    /// assert!(Scheme::new("1http").is_none());
    /// assert!(Scheme::new("").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if parse::is_scheme(s.as_bytes()) {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// An [authority] component.
///
/// An authority is always made of a host, optionally preceded by
/// userinfo and an `'@'` and optionally followed by a `':'` and a port.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    val: &'a str,
    // Relative to `val`.
    host_bounds: (usize, usize),
}

impl<'a> Authority<'a> {
    pub(crate) const fn new(val: &'a str, host_bounds: (usize, usize)) -> Self {
        Self { val, host_bounds }
    }

    /// Returns the authority component as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com:8080/");
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.as_str(), "user@example.com:8080");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the optional [userinfo] subcomponent.
    ///
    /// Userinfo extends to the last `'@'` of the authority.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::Iri;
    ///
    /// let iri = Iri::parse("http://a@b@example.com/");
    /// assert_eq!(iri.authority().unwrap().userinfo(), Some("a@b"));
    ///
    /// let iri = Iri::parse("http://example.com/");
    /// assert_eq!(iri.authority().unwrap().userinfo(), None);
    /// ```
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        let host_start = self.host_bounds.0;
        (host_start != 0).then(|| &self.val[..host_start - 1])
    }

    /// Returns the [host] subcomponent as a string slice.
    ///
    /// The host subcomponent is always present, although it may be empty.
    ///
    /// The square brackets enclosing an IP literal are included.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::Iri;
    ///
    /// let iri = Iri::parse("file:///path/to/file");
    /// assert_eq!(iri.authority().unwrap().host(), "");
    ///
    /// let iri = Iri::parse("http://[::1]:80");
    /// assert_eq!(iri.authority().unwrap().host(), "[::1]");
    /// ```
    #[must_use]
    pub fn host(&self) -> &'a str {
        let (start, end) = self.host_bounds;
        &self.val[start..end]
    }

    /// Returns the optional [port] subcomponent.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::Iri;
    ///
    /// let iri = Iri::parse("//localhost:4673/");
    /// assert_eq!(iri.authority().unwrap().port(), Some("4673"));
    ///
    /// let iri = Iri::parse("//localhost:/");
    /// assert_eq!(iri.authority().unwrap().port(), Some(""));
    ///
    /// let iri = Iri::parse("//localhost/");
    /// assert_eq!(iri.authority().unwrap().port(), None);
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        let host_end = self.host_bounds.1;
        (host_end != self.val.len()).then(|| &self.val[host_end + 1..])
    }

    /// Converts the [port] subcomponent to `u16`, if present and nonempty.
    ///
    /// Returns `Ok(None)` if the port is not present or is empty.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port cannot be parsed into `u16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::Iri;
    ///
    /// let iri = Iri::parse("//localhost:4673/");
    /// assert_eq!(iri.authority().unwrap().port_to_u16(), Ok(Some(4673)));
    ///
    /// let iri = Iri::parse("//localhost:/");
    /// assert_eq!(iri.authority().unwrap().port_to_u16(), Ok(None));
    ///
    /// let iri = Iri::parse("//localhost:123456/");
    /// assert!(iri.authority().unwrap().port_to_u16().is_err());
    /// ```
    pub fn port_to_u16(&self) -> Result<Option<u16>, ParseIntError> {
        self.port()
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }
}

/// A [path] component.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(path: &str) -> &Path;

    /// Returns the path component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the path is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the length of the path in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the path is absolute, i.e., starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Checks whether the path is rootless, i.e., not starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        !self.inner.starts_with('/')
    }

    /// Returns an iterator over the path segments, separated by `'/'`.
    ///
    /// The leading `'/'` of an absolute path is skipped.
    /// An empty path has no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_parts::Iri;
    ///
    /// let iri = Iri::parse("http://example.com/foo/bar/");
    /// assert!(iri.path().segments().eq(["foo", "bar", ""]));
    ///
    /// let iri = Iri::parse("foo:bar/baz");
    /// assert!(iri.path().segments().eq(["bar", "baz"]));
    ///
    /// let iri = Iri::parse("http://example.com");
    /// assert_eq!(iri.path().segments().count(), 0);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let path = self.inner.strip_prefix('/').unwrap_or(&self.inner);
        (!self.inner.is_empty())
            .then(|| path.split('/'))
            .into_iter()
            .flatten()
    }
}

impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Path {}

impl PartialEq<str> for Path {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Path {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
