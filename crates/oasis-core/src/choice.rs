//! # Closed String Literal Sets
//!
//! [`StrEnum`] is implemented by enums whose wire form is one of a fixed set
//! of string literals: union tags (`cat`/`dog`), verbosity tiers, paging
//! directions. The trait supplies parsing and the quoted `expected` lists
//! used in `enum` and `union_tag_invalid` error messages.

/// An enum with a closed set of string literal representations.
pub trait StrEnum: Copy + Eq + std::fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The literal for this variant.
    fn as_str(&self) -> &'static str;

    /// Resolve a literal to its variant; matching is exact.
    fn parse_str(raw: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == raw)
    }

    /// Quoted, comma-separated literals: `'cat', 'dog'`.
    fn expected_list() -> String {
        Self::VARIANTS
            .iter()
            .map(|variant| format!("'{}'", variant.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Quoted literals joined as prose: `'minimum', 'regular' or 'extended'`.
    fn expected_choice() -> String {
        let quoted: Vec<String> = Self::VARIANTS
            .iter()
            .map(|variant| format!("'{}'", variant.as_str()))
            .collect();
        match quoted.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tier {
        Low,
        Mid,
        High,
    }

    impl StrEnum for Tier {
        const VARIANTS: &'static [Self] = &[Self::Low, Self::Mid, Self::High];

        fn as_str(&self) -> &'static str {
            match self {
                Self::Low => "low",
                Self::Mid => "mid",
                Self::High => "high",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Only {
        One,
    }

    impl StrEnum for Only {
        const VARIANTS: &'static [Self] = &[Self::One];

        fn as_str(&self) -> &'static str {
            "one"
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(Tier::parse_str("mid"), Some(Tier::Mid));
        assert_eq!(Tier::parse_str("MID"), None);
        assert_eq!(Tier::parse_str(" mid"), None);
    }

    #[test]
    fn expected_formats() {
        assert_eq!(Tier::expected_list(), "'low', 'mid', 'high'");
        assert_eq!(Tier::expected_choice(), "'low', 'mid' or 'high'");
        assert_eq!(Only::expected_choice(), "'one'");
    }
}
