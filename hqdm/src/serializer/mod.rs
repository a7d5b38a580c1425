//! Serializers for built entities and slot tables.
//!
//! The builder never serializes anything itself; these functions turn its
//! output into RDF documents for storage or exchange.
//! - **N-Triples** ([`ntriples`]): one triple per line, absolute IRIs
//! - **JSON-LD** ([`jsonld`]): a single document with `@context` and `@graph`

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod ntriples;

/// Lexical `xsd:double` form of a literal.
pub(crate) fn double_lexical(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::double_lexical;

    #[test]
    fn doubles_keep_a_decimal_point() {
        assert_eq!(double_lexical(3.0), "3.0");
        assert_eq!(double_lexical(-0.25), "-0.25");
    }

    #[test]
    fn special_doubles_use_xsd_names() {
        assert_eq!(double_lexical(f64::NAN), "NaN");
        assert_eq!(double_lexical(f64::INFINITY), "INF");
        assert_eq!(double_lexical(f64::NEG_INFINITY), "-INF");
    }
}
