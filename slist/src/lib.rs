#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A singly-linked list whose classic operations each come in an iterative
//! form (explicit cursor, constant stack) and a recursive form (one stack
//! frame per node).
//!
//! The recursive forms exist for parity and teaching value. Their stack usage
//! grows with the list, so prefer the iterative form for unbounded input.

mod error;
mod iter;
mod list;
mod node;
mod recursive;

#[cfg(test)]
mod proptests;

pub use error::ListError;
pub use iter::{IntoIter, Iter};
pub use list::LinkedList;
pub use node::Node;
