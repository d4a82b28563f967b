use core::str::Utf8Error;

/// Detailed cause of an [`InvalidInput`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InvalidInputKind {
    /// Bytes that are not valid UTF-8.
    ///
    /// The error index is where the valid text ends.
    Utf8,
    /// A delimiter that would end the named component early.
    ///
    /// The error index points to the delimiter within the new value.
    Delimiter(&'static str),
    /// A port after an empty host, which would read back as part of the host.
    ///
    /// The error index is zero.
    EmptyHost,
}

/// An error occurred when constructing an [`Iri`] from invalid input.
///
/// Text never fails to parse, so this is only returned when bytes are not
/// valid UTF-8, or when a new component value passed to one of the `with_*`
/// methods would not read back as that component.
///
/// [`Iri`]: crate::Iri
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidInput {
    pub(crate) index: usize,
    pub(crate) kind: InvalidInputKind,
}

impl InvalidInput {
    pub(crate) fn from_utf8_error(e: Utf8Error) -> Self {
        Self {
            index: e.valid_up_to(),
            kind: InvalidInputKind::Utf8,
        }
    }

    pub(crate) fn delimiter(index: usize, component: &'static str) -> Self {
        Self {
            index,
            kind: InvalidInputKind::Delimiter(component),
        }
    }

    pub(crate) fn empty_host() -> Self {
        Self {
            index: 0,
            kind: InvalidInputKind::EmptyHost,
        }
    }

    /// Returns the index in the input up to which it is valid.
    ///
    /// For a component value, this is the index of the offending delimiter.
    #[inline]
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        self.index
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidInput {}
