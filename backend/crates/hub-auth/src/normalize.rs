use crate::MAX_ACCOUNT_NAME_LENGTH;

/// Map an identity-provider username onto a local account name.
///
/// Lowercases, drops whitespace and `(`, `)`, `,`, `.`, then keeps the first
/// [`MAX_ACCOUNT_NAME_LENGTH`] characters. Pure and infallible; the result may
/// be empty. Distinct identities can map to the same name.
///
/// ```
/// assert_eq!(hub_auth::normalize("John (Doe), Sr."), "johndoesr");
/// ```
pub fn normalize(identity: &str) -> String {
    identity
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped(*c))
        .take(MAX_ACCOUNT_NAME_LENGTH)
        .collect()
}

fn is_stripped(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',' | '.')
}

/// Form used to decide whether two identities are the same person: case
/// folded, with runs of whitespace collapsed to one space.
///
/// ```
/// assert_eq!(hub_auth::canonical_identity("  John   DOE "), "john doe");
/// ```
pub fn canonical_identity(identity: &str) -> String {
    identity
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
