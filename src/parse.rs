use crate::imp::{AuthMeta, Meta};
use core::num::NonZeroUsize;

/// Decomposes an IRI (reference) into component bounds.
///
/// Follows the regular expression from [Appendix B of RFC 3986], except that
/// the scheme must match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
/// Any text is accepted: whatever does not fit a delimited component
/// ends up in the path.
///
/// [Appendix B of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#appendix-B
pub(crate) fn parse(s: &str) -> Meta {
    let mut reader = Reader::new(s.as_bytes());
    let mut out = Meta::default();

    if let Some(scheme_len) = reader.read_scheme() {
        out.scheme_end = NonZeroUsize::new(scheme_len);
        // Skip the scheme and the colon.
        reader.skip(scheme_len + 1);
    }

    if reader.read_str("//") {
        let start = reader.pos;
        reader.read_until(|x| matches!(x, b'/' | b'?' | b'#'));
        out.auth_meta = Some(split_authority(reader.bytes, start, reader.pos));
    }

    let path_start = reader.pos;
    reader.read_until(|x| matches!(x, b'?' | b'#'));
    out.path_bounds = (path_start, reader.pos);

    if reader.read_str("?") {
        reader.read_until(|x| x == b'#');
        out.query_end = NonZeroUsize::new(reader.pos);
    }

    // The fragment is whatever remains after a `'#'`, so there is
    // nothing to record for it.
    debug_assert!(!reader.has_remaining() || reader.peek(0) == Some(b'#'));
    out
}

/// Splits an authority into userinfo, host and port.
///
/// `start..end` are the bounds of the authority within `bytes`,
/// excluding the leading `"//"`.
fn split_authority(bytes: &[u8], start: usize, end: usize) -> AuthMeta {
    let auth = &bytes[start..end];

    // Split at the last '@' so that an unescaped '@' stays within the userinfo.
    let host_start = match auth.iter().rposition(|&x| x == b'@') {
        Some(i) => i + 1,
        None => 0,
    };
    let rest = &auth[host_start..];

    // In an IP literal, colons before the closing bracket belong to the host.
    // A colon at the very start never begins a port.
    let bound = match rest {
        [b'[', ..] => rest.iter().position(|&x| x == b']').unwrap_or(0),
        _ => 0,
    };

    let host_end = rest
        .iter()
        .rposition(|&x| x == b':')
        .filter(|&i| i > bound)
        .map_or(auth.len(), |i| host_start + i);

    AuthMeta {
        host_bounds: (start + host_start, start + host_end),
    }
}

/// Checks whether a byte is allowed after the first one in a scheme.
pub(crate) const fn is_scheme_char(x: u8) -> bool {
    x.is_ascii_alphanumeric() || matches!(x, b'+' | b'-' | b'.')
}

/// Checks whether the bytes form a valid scheme name.
pub(crate) const fn is_scheme(bytes: &[u8]) -> bool {
    if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
        return false;
    }
    let mut i = 1;
    while i < bytes.len() {
        if !is_scheme_char(bytes[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Byte reader over the input.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing and on the boundary of a UTF-8 code point.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    /// Skips the given ASCII string if the remaining input starts with it.
    fn read_str(&mut self, s: &str) -> bool {
        let res = self.bytes[self.pos..].starts_with(s.as_bytes());
        if res {
            // INVARIANT: The remaining bytes start with `s` so `s.len()` bytes are skipped.
            self.skip(s.len());
        }
        res
    }

    /// Skips up to the first ASCII byte matching `pred` or the end of input.
    fn read_until(&mut self, pred: impl Fn(u8) -> bool) {
        let n = self.bytes[self.pos..]
            .iter()
            .position(|&x| pred(x))
            .unwrap_or(self.len() - self.pos);
        // INVARIANT: The stop byte is ASCII, so `pos` lands on a code point boundary.
        self.skip(n);
    }

    /// Returns the length of the scheme at the start of input,
    /// if it is followed by a colon.
    fn read_scheme(&self) -> Option<usize> {
        debug_assert_eq!(self.pos, 0);
        match self.peek(0) {
            Some(x) if x.is_ascii_alphabetic() => {}
            _ => return None,
        }
        let len = self.bytes[1..]
            .iter()
            .position(|&x| !is_scheme_char(x))
            .map_or(self.len(), |i| i + 1);
        (self.bytes.get(len) == Some(&b':')).then_some(len)
    }
}
