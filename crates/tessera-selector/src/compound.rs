//! Compound selector validation.
//!
//! [§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax)
//! "A sequence of simple selectors is a chain of simple selectors that are
//! not separated by a combinator."
//!
//! Each compound is checked on its own. A combinator fragment resets the
//! tracker, so parts on one side of a combinator never constrain the other.

use std::sync::Arc;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

/// What has been seen so far in the current compound selector.
///
/// `highest` is the highest-ranked kind appended; `seen` has bit `rank` set
/// for every kind that occurred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompoundState {
    highest: Option<FragmentKind>,
    seen: u8,
}

impl CompoundState {
    /// State of the last compound in an already-valid fragment sequence.
    #[must_use]
    pub fn current(fragments: &[Fragment]) -> Self {
        let start = fragments
            .iter()
            .rposition(Fragment::is_combinator)
            .map_or(0, |index| index + 1);

        let mut state = Self::default();
        for fragment in &fragments[start..] {
            state.observe(fragment.kind());
        }
        state
    }

    /// Try to move to the state after appending `kind`.
    ///
    /// On error the state is left as it was.
    ///
    /// # Errors
    ///
    /// - `DuplicateSelectorPart` if `kind` is one-time and already present.
    /// - `OutOfOrderSelectorPart` if a later-ranked kind is already present.
    pub fn accept(&mut self, kind: FragmentKind) -> Result<(), SelectorError> {
        let Some(rank) = kind.rank() else {
            *self = Self::default();
            return Ok(());
        };

        if kind.is_one_time() && self.seen & (1 << rank) != 0 {
            return Err(SelectorError::DuplicateSelectorPart { kind });
        }

        if let Some(after) = self.highest.filter(|after| after.rank() > Some(rank)) {
            return Err(SelectorError::OutOfOrderSelectorPart { kind, after });
        }

        self.observe(kind);
        Ok(())
    }

    fn observe(&mut self, kind: FragmentKind) {
        match kind.rank() {
            Some(rank) => {
                self.seen |= 1 << rank;
                if self.highest.and_then(FragmentKind::rank) < Some(rank) {
                    self.highest = Some(kind);
                }
            }
            None => *self = Self::default(),
        }
    }
}

/// Append `fragment` to `fragments` if the current compound allows it.
///
/// The input slice is never modified; the result is a fresh sequence.
///
/// # Errors
///
/// Returns the error from [`CompoundState::accept`] for the last compound.
pub fn append(
    fragments: &[Fragment],
    fragment: Fragment,
) -> Result<Arc<[Fragment]>, SelectorError> {
    CompoundState::current(fragments).accept(fragment.kind())?;
    Ok(fragments.iter().cloned().chain(Some(fragment)).collect())
}

/// Check a whole fragment sequence, compound by compound.
///
/// Every fragment's text must be what its kind renders: the kind's prefix
/// and suffix around the name, and for combinators the padded text of a
/// known combinator. Element names may not contain whitespace or a
/// combinator symbol.
///
/// # Errors
///
/// Returns the first malformed-text, ordering, cardinality or combinator
/// error found.
pub fn validate(fragments: &[Fragment]) -> Result<(), SelectorError> {
    let mut state = CompoundState::default();
    for fragment in fragments {
        check_text(fragment)?;
        state.accept(fragment.kind())?;
    }
    Ok(())
}

fn check_text(fragment: &Fragment) -> Result<(), SelectorError> {
    let kind = fragment.kind();
    let text = fragment.text();
    if kind == FragmentKind::Combinator {
        return Combinator::from_padded(text).map(drop);
    }

    let name = text
        .strip_prefix(kind.prefix())
        .and_then(|rest| rest.strip_suffix(kind.suffix()));
    let well_formed = name.is_some_and(|name| {
        kind != FragmentKind::Element
            || !name.contains(|c: char| c.is_whitespace() || matches!(c, '>' | '+' | '~'))
    });

    if well_formed {
        Ok(())
    } else {
        Err(SelectorError::MalformedFragment {
            kind,
            text: text.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(kinds: &[FragmentKind]) -> Vec<Fragment> {
        kinds
            .iter()
            .map(|&kind| match kind {
                FragmentKind::Combinator => Fragment::combinator(Combinator::Child),
                _ => Fragment::new(kind, kind.render("x")),
            })
            .collect()
    }

    #[test]
    fn test_empty_state_accepts_everything() {
        for kind in [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Class,
            FragmentKind::Attribute,
            FragmentKind::PseudoClass,
            FragmentKind::PseudoElement,
        ] {
            assert_eq!(CompoundState::default().accept(kind), Ok(()));
        }
    }

    #[test]
    fn test_duplicate_is_reported_before_order() {
        // element after class is out of order, but the repeat wins.
        let mut state = CompoundState::current(&fragments(&[
            FragmentKind::Element,
            FragmentKind::Class,
        ]));
        assert_eq!(
            state.accept(FragmentKind::Element),
            Err(SelectorError::DuplicateSelectorPart {
                kind: FragmentKind::Element
            })
        );
    }

    #[test]
    fn test_out_of_order_reports_highest_kind() {
        let mut state = CompoundState::current(&fragments(&[
            FragmentKind::Class,
            FragmentKind::PseudoClass,
        ]));
        assert_eq!(
            state.accept(FragmentKind::Attribute),
            Err(SelectorError::OutOfOrderSelectorPart {
                kind: FragmentKind::Attribute,
                after: FragmentKind::PseudoClass,
            })
        );
    }

    #[test]
    fn test_failed_accept_leaves_state_unchanged() {
        let mut state = CompoundState::current(&fragments(&[FragmentKind::PseudoElement]));
        let before = state;
        assert!(state.accept(FragmentKind::Class).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_current_only_looks_at_last_compound() {
        let state = CompoundState::current(&fragments(&[
            FragmentKind::Element,
            FragmentKind::PseudoElement,
            FragmentKind::Combinator,
            FragmentKind::Id,
        ]));
        let mut next = state;
        assert_eq!(next.accept(FragmentKind::Class), Ok(()));
        let mut next = state;
        assert!(next.accept(FragmentKind::Element).is_err());
    }

    #[test]
    fn test_append_does_not_touch_input() {
        let base = fragments(&[FragmentKind::Element]);
        let appended = append(&base, Fragment::new(FragmentKind::Class, ".a")).unwrap();
        assert_eq!(base.len(), 1);
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[1].text(), ".a");
    }

    #[test]
    fn test_validate_resets_at_combinators() {
        let sequence = fragments(&[
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Combinator,
            FragmentKind::Element,
            FragmentKind::Id,
        ]);
        assert_eq!(validate(&sequence), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_combinator_text() {
        let sequence = vec![
            Fragment::new(FragmentKind::Element, "a"),
            Fragment::new(FragmentKind::Combinator, " | "),
            Fragment::new(FragmentKind::Element, "b"),
        ];
        assert_eq!(
            validate(&sequence),
            Err(SelectorError::UnknownCombinator("|".to_owned()))
        );
    }

    #[test]
    fn test_validate_rejects_text_without_kind_prefix() {
        let sequence = vec![
            Fragment::new(FragmentKind::Id, "main"),
            Fragment::new(FragmentKind::Class, "#not-a-class"),
        ];
        assert_eq!(
            validate(&sequence),
            Err(SelectorError::MalformedFragment {
                kind: FragmentKind::Id,
                text: "main".to_owned(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_unclosed_attribute() {
        let sequence = vec![Fragment::new(FragmentKind::Attribute, "[href")];
        assert!(matches!(
            validate(&sequence),
            Err(SelectorError::MalformedFragment { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_combinator_inside_element() {
        for text in ["div > span", "a+b", "ul~li", "p\tq"] {
            let sequence = vec![Fragment::new(FragmentKind::Element, text)];
            assert_eq!(
                validate(&sequence),
                Err(SelectorError::MalformedFragment {
                    kind: FragmentKind::Element,
                    text: text.to_owned(),
                })
            );
        }
    }

    #[test]
    fn test_validate_accepts_rendered_text() {
        let sequence: Vec<Fragment> = [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Class,
            FragmentKind::Attribute,
            FragmentKind::PseudoClass,
            FragmentKind::PseudoElement,
        ]
        .into_iter()
        .map(|kind| Fragment::new(kind, kind.render("x")))
        .collect();
        assert_eq!(validate(&sequence), Ok(()));

        // Attribute specs and pseudo-class arguments may carry combinator symbols.
        let sequence = vec![
            Fragment::new(FragmentKind::Attribute, "[class~=\"a b\"]"),
            Fragment::new(FragmentKind::PseudoClass, ":nth-child(2n+1)"),
        ];
        assert_eq!(validate(&sequence), Ok(()));
    }
}
