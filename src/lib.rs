//! Contiguous and singly-linked lists with checked positional access.
//!
//! [`ArrayList`] stores its items in a single growable buffer, while
//! [`LinkedList`] chains individually allocated nodes. Both share the same
//! operations and report failures through [`ListError`].
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc;

#[macro_use]
mod macros;

pub mod array_list;

pub(crate) mod error;

pub mod index;

pub mod linked_list;

pub use self::{
    array_list::ArrayList,
    error::{ListError, UpdateError},
    index::{Grow, GrowDoubling, GrowExact, Index},
    linked_list::LinkedList,
};
