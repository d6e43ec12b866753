use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// A read-only source of variable values.
///
/// The evaluator only ever reads from bindings, so a single binding can be
/// shared by any number of evaluations running at once as long as nothing
/// mutates it meanwhile.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use intexpr::{Bindings, ErrorMode, parse};
///
/// let vars = HashMap::from([("x".to_string(), 4_i64)]);
/// assert_eq!(vars.get("x"), Some(&4));
/// assert_eq!(Bindings::get(&vars, "y"), None);
///
/// let expr = parse("x * x").unwrap();
/// assert_eq!(expr.eval(&vars, ErrorMode::ReturnError), Ok(16));
/// ```
pub trait Bindings {
    /// Returns the value bound to `name`, if any.
    fn get(&self, name: &str) -> Option<i64>;
}

impl<S: BuildHasher> Bindings for HashMap<String, i64, S> {
    fn get(&self, name: &str) -> Option<i64> {
        HashMap::get(self, name).copied()
    }
}

impl<S: BuildHasher> Bindings for HashMap<&str, i64, S> {
    fn get(&self, name: &str) -> Option<i64> {
        HashMap::get(self, name).copied()
    }
}

impl Bindings for BTreeMap<String, i64> {
    fn get(&self, name: &str) -> Option<i64> {
        BTreeMap::get(self, name).copied()
    }
}

impl Bindings for BTreeMap<&str, i64> {
    fn get(&self, name: &str) -> Option<i64> {
        BTreeMap::get(self, name).copied()
    }
}

/// Pairs are searched front to back; the first pair with a matching name
/// wins.
impl Bindings for [(&str, i64)] {
    fn get(&self, name: &str) -> Option<i64> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|&(_, value)| value)
    }
}

impl<const N: usize> Bindings for [(&str, i64); N] {
    fn get(&self, name: &str) -> Option<i64> {
        Bindings::get(self.as_slice(), name)
    }
}

impl<T: Bindings + ?Sized> Bindings for &T {
    fn get(&self, name: &str) -> Option<i64> {
        (**self).get(name)
    }
}
