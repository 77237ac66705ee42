//! Environment for symbol resolution in the interpreter.
//!
//! An [`Environment`] is a shared handle to a [`Scope`]: an ordered list of
//! bindings plus a link to the enclosing scope. The link is a `Weak`
//! reference. A scope never keeps its parent alive; whoever created the
//! parent (the interpreter for the root, the calling frame for a closure
//! call) holds it for at least as long as the child is in use.
//!
//! Lookups return clones. A closure fetched twice is two independent
//! closures, so binding parameters into one never shows up in the other.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::errors::{undefined_symbol, EvalError};
use crate::value::release_all;
use crate::Value;

/// A single named binding.
#[derive(Clone, Debug, PartialEq)]
struct Binding {
    name: String,
    value: Value,
}

/// Ordered bindings and an optional non-owning parent link.
///
/// `Clone` deep-copies the bindings and shares the parent link, which is
/// exactly what cloning a closure requires.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: Vec<Binding>,
    parent: Option<Weak<RefCell<Scope>>>,
}

impl Scope {
    /// Create an empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Look up `name` here, then through the parent chain.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.iter().find(|b| b.name == name) {
            return Some(binding.value.clone());
        }
        self.parent()?.borrow().lookup(name)
    }

    /// Bind `name` to a clone of `value`, replacing an existing local binding.
    pub fn define(&mut self, name: &str, value: &Value) {
        if let Some(binding) = self.bindings.iter_mut().find(|b| b.name == name) {
            std::mem::replace(&mut binding.value, value.clone()).release();
        } else {
            self.bindings.push(Binding {
                name: name.to_string(),
                value: value.clone(),
            });
        }
    }

    /// Local binding names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name.as_str()).collect()
    }

    /// Number of local bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether the scope is currently linked to a live parent.
    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Consume the scope, yielding its bound values.
    pub(crate) fn into_values(mut self) -> impl Iterator<Item = Value> {
        std::mem::take(&mut self.bindings)
            .into_iter()
            .map(|b| b.value)
    }

    fn parent(&self) -> Option<Rc<RefCell<Scope>>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        release_all(self.bindings.drain(..).map(|b| b.value).collect());
    }
}

// The parent link is call-time context, not part of a scope's identity.
impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.bindings)
            .field("has_parent", &self.has_parent())
            .finish()
    }
}

/// Handle to a live scope used during evaluation.
///
/// Single-threaded by construction (`Rc<RefCell<_>>`). Handles are not
/// `Clone`: the only owners are the interpreter (root) and the frame
/// applying a closure.
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Create a root environment with no bindings.
    pub fn new() -> Self {
        Environment::from_scope(Scope::new())
    }

    /// Take ownership of `scope` as a live environment.
    pub fn from_scope(scope: Scope) -> Self {
        Environment(Rc::new(RefCell::new(scope)))
    }

    /// Create an empty environment whose parent is `self`.
    pub fn child(&self) -> Self {
        let child = Environment::new();
        child.set_parent(self);
        child
    }

    /// Resolve `name`, returning a clone of the bound value.
    pub fn get(&self, name: &str) -> Result<Value, EvalError> {
        self.0
            .borrow()
            .lookup(name)
            .ok_or_else(|| undefined_symbol(name))
    }

    /// Bind `name` in this environment.
    pub fn define_local(&self, name: &str, value: &Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Bind `name` in the root of this environment's parent chain.
    pub fn define_global(&self, name: &str, value: &Value) {
        let mut current = Rc::clone(&self.0);
        loop {
            let parent = current.borrow().parent();
            match parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current.borrow_mut().define(name, value);
    }

    /// Link this environment to `parent`, replacing any previous link.
    pub fn set_parent(&self, parent: &Environment) {
        self.0.borrow_mut().parent = Some(Rc::downgrade(&parent.0));
    }

    /// Deep copy of the local bindings, sharing the parent link.
    pub fn snapshot(&self) -> Scope {
        self.0.borrow().clone()
    }

    /// Local binding names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.0
            .borrow()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn has_parent(&self) -> bool {
        self.0.borrow().has_parent()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Environment").field(&self.0.borrow()).finish()
    }
}
