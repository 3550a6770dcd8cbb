//! [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::SelectorError;

/// [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)
///
/// "Combinators are: whitespace, 'greater-than sign' (U+003E, >), 'plus
/// sign' (U+002B, +) and 'tilde' (U+007E, ~)."
///
/// `Display` writes the bare symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Combinator {
    /// [§ 8.1 Descendant combinator](https://www.w3.org/TR/selectors-3/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two sequences
    /// of simple selectors."
    #[strum(to_string = " ")]
    Descendant,

    /// [§ 8.2 Child combinators](https://www.w3.org/TR/selectors-3/#child-combinators)
    /// "A child combinator describes a childhood relationship between two
    /// elements."
    #[strum(to_string = ">")]
    Child,

    /// [§ 8.3.1 Next-sibling combinator](https://www.w3.org/TR/selectors-3/#adjacent-sibling-combinators)
    /// "The elements represented by the two sequences share the same parent
    /// in the document tree and the element represented by the first
    /// sequence immediately precedes the element represented by the second
    /// one."
    #[strum(to_string = "+")]
    NextSibling,

    /// [§ 8.3.2 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-3/#general-sibling-combinators)
    /// "The elements represented by the two sequences share the same parent
    /// in the document tree and the element represented by the first
    /// sequence precedes (not necessarily immediately) the element
    /// represented by the second one."
    #[strum(to_string = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The single character written for this combinator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }

    /// Recover the combinator from a separator fragment's text (`" X "`).
    pub(crate) fn from_padded(text: &str) -> Result<Self, SelectorError> {
        text.strip_prefix(' ')
            .and_then(|rest| rest.strip_suffix(' '))
            .ok_or_else(|| SelectorError::UnknownCombinator(text.to_owned()))?
            .parse()
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|combinator| combinator.symbol() == symbol)
            .ok_or_else(|| SelectorError::UnknownCombinator(symbol.to_string()))
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Parse a one-character combinator. Surrounding whitespace is not
    /// trimmed, since a lone space is the descendant combinator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(SelectorError::UnknownCombinator(s.to_owned())),
        }
    }
}
