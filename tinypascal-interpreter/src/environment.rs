use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

#[derive(Debug, PartialEq, Clone)]
pub struct Environment {
    store: HashMap<Rc<str>, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.store.get(key).copied()
    }

    pub fn set(&mut self, key: Rc<str>, value: Value) {
        self.store.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.store.iter().map(|(key, value)| (key.as_ref(), *value))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
