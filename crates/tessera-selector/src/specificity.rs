//! [§ 9 Calculating a selector's specificity](https://www.w3.org/TR/selectors-3/#specificity)

use crate::fragment::{Fragment, FragmentKind};

/// [§ 9 Calculating a selector's specificity](https://www.w3.org/TR/selectors-3/#specificity)
/// "A selector's specificity is calculated as follows:
///  - count the number of ID selectors in the selector (= a)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= b)
///  - count the number of type selectors and pseudo-elements in the selector (= c)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// Specificity of a fragment sequence. Combinators count for nothing.
    #[must_use]
    pub fn of(fragments: &[Fragment]) -> Self {
        fragments
            .iter()
            .fold(Self::default(), |Self(a, b, c), fragment| match fragment.kind() {
                FragmentKind::Id => Self(a + 1, b, c),
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    Self(a, b + 1, c)
                }
                FragmentKind::Element | FragmentKind::PseudoElement => Self(a, b, c + 1),
                FragmentKind::Combinator => Self(a, b, c),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 9, 9));
        assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 9));
        assert_eq!(Specificity::default(), Specificity(0, 0, 0));
    }

    #[test]
    fn test_of_counts_each_column() {
        let fragments = [
            Fragment::new(FragmentKind::Element, "li"),
            Fragment::new(FragmentKind::Id, "#x"),
            Fragment::new(FragmentKind::Class, ".a"),
            Fragment::new(FragmentKind::Attribute, "[b]"),
            Fragment::new(FragmentKind::PseudoClass, ":hover"),
            Fragment::new(FragmentKind::PseudoElement, "::before"),
            Fragment::new(FragmentKind::Combinator, " > "),
        ];
        assert_eq!(Specificity::of(&fragments), Specificity(1, 3, 2));
    }
}
