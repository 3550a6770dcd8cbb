//! Errors raised while building a selector.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// A malformed call sequence.
///
/// Every variant is a caller error: repeating the same calls reproduces it.
/// When an operation returns one of these, no selector was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was added twice to the same
    /// compound selector.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    DuplicateSelectorPart {
        /// The kind that was repeated.
        kind: FragmentKind,
    },

    /// A part was added after a part that must come later in the same
    /// compound selector.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrderSelectorPart {
        /// The kind that was being appended.
        kind: FragmentKind,
        /// The highest-ranked kind already present in the compound.
        after: FragmentKind,
    },

    /// A fragment whose text is not what its kind renders, such as an id
    /// without `#` or an element name holding a combinator.
    #[error("malformed {kind} fragment {text:?}")]
    MalformedFragment {
        /// The fragment's declared kind.
        kind: FragmentKind,
        /// The offending text.
        text: String,
    },

    /// Text that does not name one of the four combinators.
    #[error("unknown combinator {0:?}, expected one of ' ', '>', '+', '~'")]
    UnknownCombinator(String),
}
