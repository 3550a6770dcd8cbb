//! Selector fragments: one rendered piece of a selector string.
//!
//! [§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::combinator::Combinator;

/// The kind of a [`Fragment`].
///
/// Every kind except [`FragmentKind::Combinator`] has a rank, and inside one
/// compound selector the ranks must never decrease:
/// `element < id < class < attribute < pseudo-class < pseudo-element`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "camelCase")]
pub enum FragmentKind {
    /// [§ 6.1 Type selector](https://www.w3.org/TR/selectors-3/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.5 ID selectors](https://www.w3.org/TR/selectors-3/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.4 Class selectors](https://www.w3.org/TR/selectors-3/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors-3/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    Attribute,

    /// [§ 6.6 Pseudo-classes](https://www.w3.org/TR/selectors-3/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors-3/#pseudo-elements)
    ///
    /// "Only one pseudo-element may appear per selector, and if present it
    /// must appear after the sequence of simple selectors that represents
    /// the subjects of the selector."
    ///
    /// Example: `::first-line`
    PseudoElement,

    /// [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)
    ///
    /// Example: ` > `
    Combinator,
}

impl FragmentKind {
    /// Position in the compound ordering, or `None` for combinators.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Element => Some(0),
            Self::Id => Some(1),
            Self::Class => Some(2),
            Self::Attribute => Some(3),
            Self::PseudoClass => Some(4),
            Self::PseudoElement => Some(5),
            Self::Combinator => None,
        }
    }

    /// Element, id and pseudo-element may appear at most once per compound.
    #[must_use]
    pub const fn is_one_time(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the caller-supplied name.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
            Self::Combinator => " ",
        }
    }

    /// Text written after the caller-supplied name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            Self::Combinator => " ",
            _ => "",
        }
    }

    /// Render `name` the way a fragment of this kind appears in a selector.
    ///
    /// ```
    /// use tessera_selector::FragmentKind;
    ///
    /// assert_eq!(FragmentKind::Attribute.render("href"), "[href]");
    /// assert_eq!(FragmentKind::PseudoElement.render("before"), "::before");
    /// ```
    #[must_use]
    pub fn render(self, name: &str) -> String {
        format!("{}{name}{}", self.prefix(), self.suffix())
    }
}

/// One piece of a selector: its kind and the exact text it renders as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    /// Create a fragment from already-rendered text.
    ///
    /// No validation happens here; ordering rules are checked when the
    /// fragment is added to a [`Selector`](crate::Selector).
    #[must_use]
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The separator placed between two combined selectors.
    ///
    /// Always one space, the combinator symbol, one space. The descendant
    /// combinator therefore renders as three spaces.
    #[must_use]
    pub fn combinator(combinator: Combinator) -> Self {
        let mut symbol = [0; 4];
        Self::new(
            FragmentKind::Combinator,
            FragmentKind::Combinator.render(combinator.symbol().encode_utf8(&mut symbol)),
        )
    }

    /// The fragment's kind.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this fragment separates two compound selectors.
    #[must_use]
    pub fn is_combinator(&self) -> bool {
        self.kind == FragmentKind::Combinator
    }
}
