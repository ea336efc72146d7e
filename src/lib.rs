//! Implements an arena-allocated binary search tree over a set of unique keys, with balanced construction and on-demand rebalancing.
//!
//! ------------------------
//!
//! # Overview
//! Ashtree implements a binary search tree using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the tree uses some sort of backing storage to store the nodes, a [`SlotMap`] by default, and instead of using pointers to link to children, keys into the storage are used instead. Replacing a subtree releases its nodes from the storage deterministically, and there are no reference cycles to break.
//!
//! The tree is a *set*: keys are unique, construction drops duplicates and inserting a key which is already present does nothing. It is built balanced from the start, but insertions and removals do not reshape it; [`SearchTree::is_balanced`] tells when it has degraded and [`SearchTree::rebalance`] rebuilds it.
//!
//! # Storage
//! The trait used for defining the "arena" type used is [`Storage`]. It's implemented for [`SlotMap`] and [`DenseSlotMap`], both of which hand out generational keys, so that keys of removed nodes never alias newer ones. On top of that, every tree keeps a *generation* counter, which lets [`NodeHandle`]s taken before a removal be rejected explicitly.
//!
//! # Traversal
//! The [`traversal`] module contains the [`Traversable`] trait, implemented by the tree, and a lazy [`Traverse`] iterator which walks any traversable in level order, pre-order, in-order or post-order without recursion. Callbacks are accepted through the [`Visitor`] trait, which every `FnMut` closure implements.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types. The crate always requires `alloc`.
//! - `rand`: adds the [`random`] module with a key generator taking an injected random source.
//! - `doc_cfg`: annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `slotmap` (**required**): `^1.0`
//! - `rand` (*optional*): `^0.9`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [`SearchTree::is_balanced`]: search_tree/struct.SearchTree.html#method.is_balanced " "
//! [`SearchTree::rebalance`]: search_tree/struct.SearchTree.html#method.rebalance " "
//! [`NodeHandle`]: search_tree/struct.NodeHandle.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`traversal`]: traversal/index.html " "
//! [`Traversable`]: traversal/trait.Traversable.html " "
//! [`Traverse`]: traversal/struct.Traverse.html " "
//! [`Visitor`]: traversal/trait.Visitor.html " "
//! [`random`]: random/index.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod search_tree;
#[doc(no_inline)]
pub use search_tree::{SearchTree, NodeRef, NodeHandle, HandleError, NotStrictlyAscending};

pub mod traversal;
pub use traversal::{Visitor, Traversable, TraversalOrder};

#[cfg(feature = "rand")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "rand")))]
pub mod random;

/// A prelude for using Ashtree, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::search_tree::{
        SearchTree,
        NodeRef as SearchTreeNodeRef,
        NodeHandle as SearchTreeNodeHandle,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Traversable,
        TraversalOrder,
        Visitor as TreeVisitor,
    };
}

pub(crate) mod util;
