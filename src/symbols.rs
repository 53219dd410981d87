use std::{collections::HashMap, fs, path::Path};

use log::{debug, info, warn};

/// A case-sensitive mapping from names to values.
///
/// A session keeps two of these: one for constants, fixed once the session is
/// created, and one for variables, which grows as assignments succeed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    values: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries: Vec<_> = self.values.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Parses `name=value` definitions, one per line.
    ///
    /// Whitespace around the name and the value is ignored. A line is skipped
    /// when it has no `=`, when the name is not an identifier, or when the
    /// value is not a complete floating-point number. Later definitions of the
    /// same name replace earlier ones.
    ///
    /// # Example
    /// ```
    /// use rpcalc::symbols::SymbolTable;
    ///
    /// let table = SymbolTable::parse_definitions("pi=3.14159\n# comment\ne = 2.71828\nbad");
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.get("e"), Some(2.71828));
    /// ```
    #[must_use]
    pub fn parse_definitions(text: &str) -> Self {
        let mut table = Self::new();

        for (index, line) in text.lines().enumerate() {
            let Some((name, value)) = line.split_once('=') else {
                if !line.trim().is_empty() {
                    debug!("constants line {}: no '=', skipped", index + 1);
                }
                continue;
            };

            let name = name.trim();
            if !is_identifier(name) {
                debug!("constants line {}: invalid name '{name}', skipped", index + 1);
                continue;
            }

            match value.trim().parse::<f64>() {
                Ok(value) => {
                    table.insert(name, value);
                },
                Err(_) => debug!("constants line {}: value for '{name}' is not a number, skipped",
                                 index + 1),
            }
        }

        table
    }
}

impl FromIterator<(String, f64)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect() }
    }
}

/// Reads constant definitions from a file.
///
/// See [`SymbolTable::parse_definitions`] for the format. A file that is
/// missing or unreadable is not an error: a warning is logged and the table
/// comes back empty.
pub fn load_constants(path: impl AsRef<Path>) -> SymbolTable {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => {
            let table = SymbolTable::parse_definitions(&text);
            info!("loaded {} constants from '{}'", table.len(), path.display());
            table
        },
        Err(e) => {
            warn!("could not open constants file '{}': {e}", path.display());
            SymbolTable::new()
        },
    }
}

/// Whether `name` is a valid constant or variable name:
/// `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
