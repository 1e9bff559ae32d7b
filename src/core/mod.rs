//! Core link model shared by the content tree and the link checker.

mod link;

pub use link::{LinkClass, LinkKind};
