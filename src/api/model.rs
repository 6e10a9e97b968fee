use crate::error::Error;
use axum::body::Bytes;

/// A word `POST`ed to be appended to the word list.
#[derive(Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct NewWord(pub String);

impl TryFrom<&Bytes> for NewWord {
    type Error = Error;

    fn try_from(body: &Bytes) -> Result<Self, Self::Error> {
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }
        Ok(Self(std::str::from_utf8(body)?.to_string()))
    }
}
