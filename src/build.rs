//! Component recomposition.

use crate::{component::Authority, parse, InvalidInput, Iri};
use alloc::string::String;

/// Checks that `value` contains none of the delimiters in `delims`.
fn check_delims(value: &str, delims: &[u8], component: &'static str) -> Result<(), InvalidInput> {
    match value.bytes().position(|x| delims.contains(&x)) {
        Some(i) => Err(InvalidInput::delimiter(i, component)),
        None => Ok(()),
    }
}

/// Components of an IRI (reference) to be recomposed.
#[derive(Clone, Copy)]
pub(crate) struct Parts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<AuthParts<'a>>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Subcomponents of an authority to be recomposed.
///
/// There is no authority without a host, so userinfo and port
/// can only be set here.
#[derive(Clone, Copy)]
pub(crate) struct AuthParts<'a> {
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> From<Authority<'a>> for AuthParts<'a> {
    fn from(auth: Authority<'a>) -> Self {
        Self {
            userinfo: auth.userinfo(),
            host: auth.host(),
            port: auth.port(),
        }
    }
}

impl AuthParts<'_> {
    fn len(&self) -> usize {
        let mut len = self.host.len();
        if let Some(userinfo) = self.userinfo {
            len += userinfo.len() + 1;
        }
        if let Some(port) = self.port {
            len += port.len() + 1;
        }
        len
    }

    /// Checks that the subcomponents split back out of `userinfo@host:port`.
    fn check(&self) -> Result<(), InvalidInput> {
        if let Some(userinfo) = self.userinfo {
            check_delims(userinfo, b"/?#", "userinfo")?;
        }
        check_delims(self.host, b"/?#@", "host")?;

        // Mirrors the bound on the port colon used by the splitter.
        let bracket_end = self.host.find(']').filter(|_| self.host.starts_with('['));
        let bound = bracket_end.unwrap_or(0);

        match self.port {
            None => match self.host.rfind(':') {
                Some(i) if i > bound => Err(InvalidInput::delimiter(i, "host")),
                _ => Ok(()),
            },
            Some(port) => {
                check_delims(port, b"/?#@:", "port")?;
                if self.host.is_empty() {
                    return Err(InvalidInput::empty_host());
                }
                if self.host.starts_with('[') && bracket_end.is_none() {
                    // The port would close the IP literal.
                    check_delims(port, b"]", "port")?;
                }
                Ok(())
            }
        }
    }
}

impl Parts<'_> {
    /// Checks that every component reads back as itself once recomposed.
    ///
    /// The path is not checked for a leading `"//"` or a scheme-like first
    /// segment, since [`build`](Self::build) prefixes it instead.
    pub fn check(&self) -> Result<(), InvalidInput> {
        if let Some(auth) = &self.authority {
            auth.check()?;
        }
        check_delims(self.path, b"?#", "path")?;
        if let Some(query) = self.query {
            check_delims(query, b"#", "query")?;
        }
        Ok(())
    }

    /// Returns what must precede the path for it to read back as the path.
    fn path_prefix(&self) -> &'static str {
        let path = self.path;
        if self.authority.is_some() {
            // A rootless path would run into the authority.
            if path.is_empty() || path.starts_with('/') {
                ""
            } else {
                "/"
            }
        } else if path.starts_with("//") {
            // Would read back as an authority.
            "/."
        } else if self.scheme.is_none() {
            // A colon in the first segment would end a scheme.
            match path.split_once(':') {
                Some((head, _)) if parse::is_scheme(head.as_bytes()) => "./",
                _ => "",
            }
        } else {
            ""
        }
    }

    fn len(&self) -> usize {
        let mut len = self.path.len();
        if let Some(scheme) = self.scheme {
            len += scheme.len() + 1;
        }
        if let Some(auth) = &self.authority {
            len += auth.len() + 2;
        }
        if let Some(query) = self.query {
            len += query.len() + 1;
        }
        if let Some(fragment) = self.fragment {
            len += fragment.len() + 1;
        }
        len
    }

    /// Recomposes the components into a string, as described in
    /// [Section 5.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-5.3).
    ///
    /// A component that is present but empty still gets its delimiter.
    pub fn recompose(&self) -> String {
        self.recompose_with("")
    }

    fn recompose_with(&self, path_prefix: &str) -> String {
        let len = self.len() + path_prefix.len();
        let mut buf = String::with_capacity(len);

        if let Some(scheme) = self.scheme {
            buf.push_str(scheme);
            buf.push(':');
        }

        if let Some(auth) = &self.authority {
            buf.push_str("//");
            if let Some(userinfo) = auth.userinfo {
                buf.push_str(userinfo);
                buf.push('@');
            }
            buf.push_str(auth.host);
            if let Some(port) = auth.port {
                buf.push(':');
                buf.push_str(port);
            }
        }

        buf.push_str(path_prefix);
        buf.push_str(self.path);

        if let Some(query) = self.query {
            buf.push('?');
            buf.push_str(query);
        }

        if let Some(fragment) = self.fragment {
            buf.push('#');
            buf.push_str(fragment);
        }

        debug_assert_eq!(buf.len(), len);
        buf
    }

    /// Recomposes the components and parses the result.
    ///
    /// The path is prefixed with `"/"`, `"/."` or `"./"` where it would
    /// otherwise read back as part of another component.
    pub fn build(&self) -> Iri<String> {
        Iri::parse(self.recompose_with(self.path_prefix()))
    }
}
