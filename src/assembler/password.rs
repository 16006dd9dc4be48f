//! Generated password container.

use std::fmt;
use zeroize::Zeroize;

/// A freshly generated password.
///
/// The buffer is wiped on drop and `Debug` never prints the contents.
/// Use [`as_str`](Self::as_str) or `Display` to read it.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    /// Wraps assembled ASCII bytes.
    pub(crate) fn from_ascii(bytes: &[u8]) -> Self {
        let password = bytes.iter().copied().map(char::from).collect();
        Self(password)
    }

    /// Returns the password text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes the password out as a plain `String`.
    ///
    /// The caller becomes responsible for wiping it.
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
