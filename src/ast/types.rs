//! Type declaration nodes.
//!
//! Types only appear as annotations in `let` declarations and as closure
//! signatures. They are:
//!
//! - Named types (a bare identifier such as `int`)
//! - Closure types, `(T1, T2 -> R)`
//! - Wrapped (tuple) types, `(T,)` or `(T1, T2)`
//!
//! No type is resolved here; names are kept as written.

use std::{fmt::Display, slice::Iter};

use super::ast::TypeDecl;

/// An ordered list of component types.
///
/// Used for closure inputs and for wrapped types. Items are kept in
/// source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeList {
    pub items: Vec<TypeDecl>,
}

impl TypeList {
    pub fn new(items: Vec<TypeDecl>) -> Self {
        TypeList { items }
    }

    pub fn push(&mut self, item: TypeDecl) {
        self.items.push(item);
    }

    pub fn iter(&self) -> Iter<'_, TypeDecl> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Display for TypeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// A closure signature: ordered input types and one output type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureType {
    pub in_types: TypeList,
    pub out_type: Box<TypeDecl>,
}

impl ClosureType {
    pub fn new(in_types: TypeList, out_type: TypeDecl) -> Self {
        ClosureType {
            in_types,
            out_type: Box::new(out_type),
        }
    }
}

impl Display for ClosureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -> {})", self.in_types, self.out_type)
    }
}
