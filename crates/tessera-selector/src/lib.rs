//! Immutable CSS selector builder for Tessera.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragments** ([§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Exact rendering of each part (`div`, `#id`, `.class`, `[attr]`, `:pc`, `::pe`)
//!
//! - **Combinators** ([§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!   - Always rendered as `" X "`, so the descendant combinator is three spaces
//!
//! - **Compound validation**
//!   - Parts ordered element, id, class, attribute, pseudo-class, pseudo-element
//!   - Element, id and pseudo-element at most once per compound
//!   - Each compound checked on its own; combinators reset the check
//!
//! - **Specificity** ([§ 9](https://www.w3.org/TR/selectors-3/#specificity))
//!
//! # Example
//!
//! ```
//! use tessera_selector::{Combinator, builder, combine};
//!
//! let left = builder().element("div")?.id("main")?;
//! let right = builder().element("table")?.id("data")?;
//!
//! assert_eq!(
//!     combine(&left, Combinator::NextSibling, &right).stringify(),
//!     "div#main + table#data"
//! );
//! # Ok::<(), tessera_selector::SelectorError>(())
//! ```
//!
//! # Not Yet Implemented
//!
//! - Universal and namespaced type selectors
//! - Selector lists (`a, b`)
//! - Escaping of identifiers

/// CSS combinators per [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators).
pub mod combinator;
/// Per-compound ordering and cardinality checks.
pub mod compound;
/// Builder errors.
pub mod error;
/// Typed selector fragments.
pub mod fragment;
/// The immutable selector value and builder operations.
pub mod selector;
/// Specificity per [§ 9](https://www.w3.org/TR/selectors-3/#specificity).
pub mod specificity;

// Re-exports for convenience
pub use combinator::Combinator;
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
pub use selector::{Selector, builder, combine, stringify};
pub use specificity::Specificity;
