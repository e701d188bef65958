use crate::variables::VariableStore;
use indexmap::IndexMap;
use serde::Serialize;

/// Property name -> value, in order of first appearance.
pub type Declarations = IndexMap<String, String>;

/// Resolved selector -> declarations, in order of first appearance.
///
/// Writing a property that already exists replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleTree {
    rules: IndexMap<String, Declarations>,
}

impl RuleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `selector` with no declarations if it is not present yet.
    pub fn touch(&mut self, selector: &str) {
        if !self.rules.contains_key(selector) {
            self.rules.insert(selector.to_string(), Declarations::new());
        }
    }

    pub fn insert(&mut self, selector: &str, property: &str, value: &str) {
        self.touch(selector);
        if let Some(decls) = self.rules.get_mut(selector) {
            decls.insert(property.to_string(), value.to_string());
        }
    }

    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    /// Shorthand for `get(selector)?.get(property)`.
    pub fn value(&self, selector: &str, property: &str) -> Option<&str> {
        self.rules
            .get(selector)?
            .get(property)
            .map(String::as_str)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Declarations> {
        self.rules.iter()
    }

    /// Drops every selector without direct declarations.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.rules.len();
        self.rules.retain(|_, decls| !decls.is_empty());
        before - self.rules.len()
    }

    /// Substitutes variable references in every value.
    pub(crate) fn resolve_values(&mut self, variables: &VariableStore) {
        for decls in self.rules.values_mut() {
            for value in decls.values_mut() {
                if value.contains(crate::variables::MARKER) {
                    *value = variables.resolve(value);
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a RuleTree {
    type Item = (&'a String, &'a Declarations);
    type IntoIter = indexmap::map::Iter<'a, String, Declarations>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// The result of parsing one source text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stylesheet {
    pub rules: RuleTree,
    /// Final state of the global variable table.
    pub variables: VariableStore,
}
