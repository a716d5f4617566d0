//! Style algebra shared by every style record.
//!
//! Records travel as `Option<Arc<T>>`: `None` is the unset sentinel and the
//! `Arc` makes record identity observable, which the inherit fast paths rely on.

use std::sync::Arc;

/// Capability implemented once per style record type.
///
/// Implementations only describe the field-wise step; unset handling and
/// identity preservation live in [`inherit`] and [`style_change`].
pub trait Cascade: PartialEq + Sized {
    /// Field-wise merge where `self` wins wherever it is set.
    fn merge_fields(&self, parent: &Self) -> Self;

    /// Field-wise change set: keeps `self`'s value only where it differs from `parent`.
    fn change_fields(&self, parent: &Self) -> Self;
}

/// Na-aware structural equality, recursive through nested records.
#[must_use]
pub fn equals<T: Cascade>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || **a == **b,
        _ => false,
    }
}

/// Cascades `child` over `parent`.
///
/// Returns `parent` itself when `child` is unset, `child` itself when
/// `parent` is unset, and `child` itself whenever the merged record would be
/// equal to it. A new record is allocated only when the merge changes
/// something.
#[must_use]
pub fn inherit<T: Cascade>(child: Option<&Arc<T>>, parent: Option<&Arc<T>>) -> Option<Arc<T>> {
    let (child, parent) = match (child, parent) {
        (None, parent) => return parent.cloned(),
        (Some(child), None) => return Some(Arc::clone(child)),
        (Some(child), Some(parent)) => (child, parent),
    };
    if Arc::ptr_eq(child, parent) {
        return Some(Arc::clone(child));
    }

    let merged = child.merge_fields(parent);
    if merged == **child {
        Some(Arc::clone(child))
    } else {
        Some(Arc::new(merged))
    }
}

/// Extracts the part of `child` that differs from `parent`.
///
/// Unset `child` yields unset; unset `parent` yields `child` itself.
#[must_use]
pub fn style_change<T: Cascade>(
    child: Option<&Arc<T>>,
    parent: Option<&Arc<T>>,
) -> Option<Arc<T>> {
    match (child, parent) {
        (None, _) => None,
        (Some(child), None) => Some(Arc::clone(child)),
        (Some(child), Some(parent)) => Some(Arc::new(child.change_fields(parent))),
    }
}

pub(crate) fn inherit_value<V: Clone>(child: &Option<V>, parent: &Option<V>) -> Option<V> {
    child.as_ref().or(parent.as_ref()).cloned()
}

pub(crate) fn changed_value<V: Clone + PartialEq>(
    child: &Option<V>,
    parent: &Option<V>,
) -> Option<V> {
    if child == parent { None } else { child.clone() }
}
