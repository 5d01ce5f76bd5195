use std::collections::HashMap;

use crate::ast::ast::VarType;

/// One lexical binding region: a label for its block kind and the variables
/// declared directly inside it.
#[derive(Debug)]
pub struct Scope {
    label: String,
    bindings: HashMap<String, VarType>,
}

impl Scope {
    pub fn new(label: &str) -> Self {
        Scope {
            label: String::from(label),
            bindings: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn declare(&mut self, name: &str, ty: VarType) {
        self.bindings.insert(String::from(name), ty);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<VarType> {
        self.bindings.get(name).copied()
    }
}

/// Owned stack of scopes, innermost last. Entered and left strictly around
/// block parsing, so the stack is empty again once the top-level program has
/// been parsed.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { scopes: vec![] }
    }

    /// Pushes a new empty scope.
    pub fn enter(&mut self, label: &str) {
        self.scopes.push(Scope::new(label));
    }

    /// Pops the innermost scope; a no-op if the stack is already empty.
    pub fn leave(&mut self) {
        self.scopes.pop();
    }

    /// Inserts unconditionally into the innermost scope. Callers check for
    /// duplicates first via `is_declared_in_current`.
    pub fn declare(&mut self, name: &str, ty: VarType) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.declare(name, ty);
        }
    }

    pub fn is_declared_in_current(&self, name: &str) -> bool {
        match self.scopes.last() {
            Some(scope) => scope.contains(name),
            None => false,
        }
    }

    /// Searches innermost to outermost for a binding.
    pub fn lookup(&self, name: &str) -> Option<VarType> {
        for scope in self.scopes.iter().rev() {
            if let Some(ty) = scope.get(name) {
                return Some(ty);
            }
        }

        None
    }

    /// The bound type of `name`, or the `none` sentinel when unbound.
    pub fn type_of(&self, name: &str) -> VarType {
        self.lookup(name).unwrap_or(VarType::None)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
