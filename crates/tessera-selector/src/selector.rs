//! The immutable selector value and its builder operations.
//!
//! [§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax)
//! "A selector is a chain of one or more sequences of simple selectors
//! separated by combinators."
//!
//! Every operation takes `&self` and returns a new [`Selector`]. The
//! receiver keeps its fragments, so one value can be the starting point of
//! any number of independent chains:
//!
//! ```
//! use tessera_selector::builder;
//!
//! let base = builder().element("div")?;
//! let a = base.class("a")?;
//! let b = base.class("b")?;
//!
//! assert_eq!(base.stringify(), "div");
//! assert_eq!(a.stringify(), "div.a");
//! assert_eq!(b.stringify(), "div.b");
//! # Ok::<(), tessera_selector::SelectorError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tessera_common::warning::warn_once;

use crate::combinator::Combinator;
use crate::compound;
use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};
use crate::specificity::Specificity;

/// An ordered, immutable sequence of selector fragments.
///
/// Cloning is cheap: the fragments live behind an `Arc` and are copied only
/// when a new fragment is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Fragment>", try_from = "Vec<Fragment>")]
pub struct Selector {
    fragments: Arc<[Fragment]>,
}

/// The empty selector every chain starts from.
#[must_use]
pub fn builder() -> Selector {
    Selector::new()
}

/// Join two selectors with a combinator: `left`, then `" X "`, then `right`.
///
/// Never fails. Each side was validated when it was built, and the
/// combinator starts a new compound, so nothing on the left constrains the
/// right.
#[must_use]
pub fn combine(left: &Selector, combinator: Combinator, right: &Selector) -> Selector {
    left.combine(combinator, right)
}

/// Render a selector to its CSS text.
#[must_use]
pub fn stringify(selector: &Selector) -> String {
    selector.stringify()
}

impl Selector {
    /// An empty selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector: `name`.
    ///
    /// # Errors
    ///
    /// `DuplicateSelectorPart` if the current compound already has an element,
    /// `OutOfOrderSelectorPart` if it already has any other part.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an id selector: `#name`.
    ///
    /// # Errors
    ///
    /// `DuplicateSelectorPart` if the current compound already has an id,
    /// `OutOfOrderSelectorPart` if it has a class, attribute, pseudo-class or
    /// pseudo-element.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append a class selector: `.name`. May repeat.
    ///
    /// # Errors
    ///
    /// `OutOfOrderSelectorPart` if the current compound has an attribute,
    /// pseudo-class or pseudo-element.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector: `[spec]`. May repeat.
    ///
    /// # Errors
    ///
    /// `OutOfOrderSelectorPart` if the current compound has a pseudo-class or
    /// pseudo-element.
    pub fn attr(&self, spec: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, spec)
    }

    /// Append a pseudo-class: `:name`. May repeat.
    ///
    /// # Errors
    ///
    /// `OutOfOrderSelectorPart` if the current compound has a pseudo-element.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append a pseudo-element: `::name`. Must be the last part of its
    /// compound.
    ///
    /// # Errors
    ///
    /// `DuplicateSelectorPart` if the current compound already has one.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// Method form of [`combine`]: `self`, then `" X "`, then `right`.
    #[must_use]
    pub fn combine(&self, combinator: Combinator, right: &Self) -> Self {
        let fragments: Arc<[Fragment]> = self
            .fragments
            .iter()
            .cloned()
            .chain(Some(Fragment::combinator(combinator)))
            .chain(right.fragments.iter().cloned())
            .collect();

        #[cfg(feature = "builder-trace")]
        eprintln!(
            "[BUILDER] combine {:?} '{combinator}' {:?} -> {} fragments",
            self.stringify(),
            right.stringify(),
            fragments.len()
        );

        Self { fragments }
    }

    /// Concatenate every fragment's text. Never fails.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.fragments.iter().map(Fragment::text).collect()
    }

    /// The fragments in order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments, combinators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The compound selectors, left to right, without their combinators.
    ///
    /// An empty selector yields one empty compound, as does an empty side
    /// of a combination.
    #[must_use]
    pub fn compounds(&self) -> impl Iterator<Item = &[Fragment]> {
        self.fragments.split(Fragment::is_combinator)
    }

    /// [§ 9](https://www.w3.org/TR/selectors-3/#specificity) specificity of
    /// the whole chain.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity::of(&self.fragments)
    }

    fn append(&self, kind: FragmentKind, name: &str) -> Result<Self, SelectorError> {
        let fragment = Fragment::new(kind, kind.render(name));
        let fragments = compound::append(&self.fragments, fragment)?;
        check_name(kind, name);

        #[cfg(feature = "builder-trace")]
        eprintln!(
            "[BUILDER] {kind} {name:?} accepted -> {} fragments",
            fragments.len()
        );

        Ok(Self { fragments })
    }
}

/// Warn about names that are accepted verbatim but render oddly.
fn check_name(kind: FragmentKind, name: &str) {
    if name.is_empty() {
        warn_once(
            "Selector",
            &format!("empty {kind} name renders as '{}'", kind.render(name)),
        );
        return;
    }

    // The operation adds this prefix itself; a caller-supplied one doubles it.
    let lead = kind.prefix().chars().next();
    if let Some(lead) = lead.filter(|&lead| name.starts_with(lead)) {
        warn_once(
            "Selector",
            &format!("{kind} name {name:?} already starts with '{lead}'"),
        );
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments
            .iter()
            .try_for_each(|fragment| f.write_str(fragment.text()))
    }
}

impl TryFrom<Vec<Fragment>> for Selector {
    type Error = SelectorError;

    /// Accept an arbitrary fragment sequence if every fragment's text matches
    /// its kind and every compound obeys the ordering and cardinality rules.
    fn try_from(fragments: Vec<Fragment>) -> Result<Self, Self::Error> {
        compound::validate(&fragments)?;
        Ok(Self {
            fragments: fragments.into(),
        })
    }
}

impl From<Selector> for Vec<Fragment> {
    fn from(selector: Selector) -> Self {
        selector.fragments.to_vec()
    }
}
