//! Guarantee-then-shuffle assembly.

use super::GeneratedPassword;
use crate::charset::CharsetSpec;
use crate::random::SecureRandomSource;
use zeroize::Zeroize;

/// Assembles a password of exactly `length` characters.
///
/// 1. Draws one character from each enabled category, in canonical order.
/// 2. Fills the remaining positions from the union alphabet.
/// 3. Shuffles the whole buffer so the guaranteed picks carry no
///    positional signal.
///
/// Criteria are expected to be validated already; length bounds are not
/// re-checked here.
///
/// # Panics
///
/// Panics if `length` is smaller than the number of enabled categories,
/// or if the charset has no categories. Both indicate a caller bug.
pub fn assemble<R: SecureRandomSource>(
    spec: &CharsetSpec,
    length: usize,
    rng: &mut R,
) -> GeneratedPassword {
    let categories = spec.categories();
    assert!(
        !categories.is_empty(),
        "cannot assemble a password from an empty charset"
    );
    assert!(
        length >= categories.len(),
        "password length {} is shorter than the {} required categories",
        length,
        categories.len()
    );

    let mut buf: Vec<u8> = Vec::with_capacity(length);

    for category in categories {
        let alphabet = category.alphabet().as_bytes();
        buf.push(alphabet[rng.uniform_index(alphabet.len())]);
    }

    let fill = length - categories.len();
    let alphabet = spec.alphabet();
    for _ in 0..fill {
        buf.push(alphabet[rng.uniform_index(alphabet.len())]);
    }

    rng.shuffle(&mut buf);

    tracing::trace!(
        length,
        categories = categories.len(),
        fill,
        charset_size = spec.charset_size(),
        "Assembled password"
    );

    let password = GeneratedPassword::from_ascii(&buf);
    buf.zeroize();
    password
}
