use crate::{InvalidInput, Iri};
use alloc::{string::String, vec::Vec};
use core::{convert::Infallible, str::FromStr};

#[cfg(feature = "serde")]
use borrow_or_share::Bos;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<'a> From<&'a str> for Iri<&'a str> {
    /// Equivalent to [`Iri::parse`].
    #[inline]
    fn from(s: &'a str) -> Self {
        Iri::parse(s)
    }
}

impl From<String> for Iri<String> {
    /// Equivalent to [`Iri::parse`].
    #[inline]
    fn from(s: String) -> Self {
        Iri::parse(s)
    }
}

impl From<Iri<&str>> for Iri<String> {
    /// Equivalent to [`Iri::to_owned`].
    #[inline]
    fn from(iri: Iri<&str>) -> Self {
        iri.to_owned()
    }
}

impl<'a> From<Iri<&'a str>> for &'a str {
    /// Equivalent to [`Iri::as_str`].
    #[inline]
    fn from(iri: Iri<&'a str>) -> Self {
        iri.val
    }
}

impl From<Iri<String>> for String {
    /// Equivalent to [`Iri::into_string`].
    #[inline]
    fn from(iri: Iri<String>) -> Self {
        iri.val
    }
}

impl<'a> TryFrom<&'a [u8]> for Iri<&'a str> {
    type Error = InvalidInput;

    /// Equivalent to [`Iri::from_utf8`].
    #[inline]
    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Iri::from_utf8(bytes)
    }
}

impl TryFrom<Vec<u8>> for Iri<String> {
    type Error = (InvalidInput, Vec<u8>);

    /// Parses bytes into an `Iri<String>`, giving the bytes back if they are not valid UTF-8.
    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        match String::from_utf8(bytes) {
            Ok(s) => Ok(Iri::parse(s)),
            Err(e) => Err((
                InvalidInput::from_utf8_error(e.utf8_error()),
                e.into_bytes(),
            )),
        }
    }
}

impl FromStr for Iri<String> {
    type Err = Infallible;

    /// Equivalent to `Iri::parse(s).to_owned()`.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Iri::parse(s).to_owned())
    }
}

#[cfg(feature = "serde")]
impl<T: Bos<str>> Serialize for Iri<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Iri<&'de str> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <&str>::deserialize(deserializer).map(Iri::parse)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Iri<String> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Iri::parse)
    }
}
