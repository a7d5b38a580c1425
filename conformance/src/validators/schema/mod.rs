//! Slot table validators (inventory, slot integrity, builder scenarios).

pub mod inventory;
pub mod scenarios;
pub mod slots;

/// True if `name` can be appended to a base IRI as a local name.
pub(crate) fn is_local_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_local_name;

    #[test]
    fn local_names() {
        assert!(is_local_name("member__of"));
        assert!(is_local_name("value_"));
        assert!(!is_local_name(""));
        assert!(!is_local_name("1st"));
        assert!(!is_local_name("has space"));
        assert!(!is_local_name("a#b"));
    }
}
