//! Dialect-independent morphology: roots, the augmented-root arena, shared
//! rule helpers, irregular verbs and nominal templates.

pub mod augmented_root;
pub mod derivation;
pub mod irregular;
pub mod nominal;
pub mod root;

pub use augmented_root::{AffixSlot, AugmentedRoot, AugmentedRootSymbol, Skeleton, SkeletonSlot, SymbolName};
pub use derivation::{Derivation, Suffix};
pub use root::{classify_root, RootType, VerbRoot};
