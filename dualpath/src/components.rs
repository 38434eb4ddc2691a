//! The five named parts of a parsed path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Components of a path as produced by `parse` and consumed by `format`.
///
/// For a path produced by `parse`, `base == name + ext`, and a non-empty
/// `dir` starts with a non-empty `root`. Records built by hand carry no such
/// guarantee; `format` accepts any combination.
///
/// # Examples
///
/// ```
/// use dualpath::{PathComponents, PathGrammar, Posix};
///
/// let parts = Posix::new().parse("/home/user/file.txt");
/// assert_eq!(parts.root, "/");
/// assert_eq!(parts.dir, "/home/user");
/// assert_eq!(parts.base, "file.txt");
/// assert_eq!(parts.ext, ".txt");
/// assert_eq!(parts.name, "file");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathComponents {
    /// Root of the path: `/`, `C:\`, `\\server\share\`, or empty.
    pub root: String,
    /// Directory portion, including the root.
    pub dir: String,
    /// Last path component, including the extension.
    pub base: String,
    /// Extension of the last component, including its leading dot.
    pub ext: String,
    /// Last path component without its extension.
    pub name: String,
}

impl PathComponents {
    /// The field names, in the order `to_map` iterates them.
    pub const FIELDS: [&'static str; 5] = ["base", "dir", "ext", "name", "root"];

    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Set `dir`.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set `base`.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set `ext`.
    #[must_use]
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Set `name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Read a field by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for anything but the five field names.
    pub fn get(&self, field: &str) -> Result<&str> {
        match field {
            "root" => Ok(&self.root),
            "dir" => Ok(&self.dir),
            "base" => Ok(&self.base),
            "ext" => Ok(&self.ext),
            "name" => Ok(&self.name),
            _ => Err(unknown(field)),
        }
    }

    /// Write a field by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for anything but the five field names.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let slot = match field {
            "root" => &mut self.root,
            "dir" => &mut self.dir,
            "base" => &mut self.base,
            "ext" => &mut self.ext,
            "name" => &mut self.name,
            _ => return Err(unknown(field)),
        };
        *slot = value.into();
        Ok(())
    }

    /// Convert into a key-value map holding all five fields.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("base", self.base.clone()),
            ("dir", self.dir.clone()),
            ("ext", self.ext.clone()),
            ("name", self.name.clone()),
            ("root", self.root.clone()),
        ])
    }

    /// Build a record from key-value pairs. Missing fields stay empty.
    ///
    /// Every key is checked before the record is returned, so a single
    /// unknown key rejects the whole map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for the first key that is not a field name.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::PathComponents;
    ///
    /// let parts = PathComponents::from_map([("dir", "some/dir"), ("base", "a.txt")]).unwrap();
    /// assert_eq!(parts.dir, "some/dir");
    /// assert!(PathComponents::from_map([("drive", "C:")]).is_err());
    /// ```
    pub fn from_map<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut parts = Self::default();
        for (key, value) in entries {
            parts.set(key.as_ref(), value)?;
        }
        Ok(parts)
    }

    /// Interpret a loosely typed value as a record.
    ///
    /// The value must be an object whose keys are field names and whose
    /// values are strings or `null` (read as empty).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value is not an object or a
    /// field holds something other than a string, and [`Error::UnknownField`]
    /// for an unknown key.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(object) = value else {
            return Err(Error::invalid_argument(
                "format",
                format!(
                    "path data must be an object of path components, found {}",
                    value_kind(value)
                ),
            ));
        };

        let mut parts = Self::default();
        for (key, field) in object {
            match field {
                Value::String(text) => parts.set(key, text.as_str())?,
                Value::Null => parts.set(key, String::new())?,
                other => {
                    // Validate the key first so unknown keys report as such.
                    parts.get(key)?;
                    return Err(Error::invalid_argument(
                        "format",
                        format!("field '{key}' must be a string, found {}", value_kind(other)),
                    ));
                }
            }
        }
        Ok(parts)
    }

    /// Decode a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON, otherwise the errors of
    /// [`PathComponents::from_value`].
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unknown(field: &str) -> Error {
    Error::UnknownField {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        let parts = PathComponents::new();
        for field in PathComponents::FIELDS {
            assert_eq!(parts.get(field).unwrap(), "");
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut parts = PathComponents::new();
        parts.set("root", "a").unwrap();
        parts.set("dir", "b").unwrap();
        parts.set("base", "c").unwrap();
        parts.set("ext", "d").unwrap();
        parts.set("name", "e").unwrap();

        assert_eq!(parts.get("root").unwrap(), "a");
        assert_eq!(parts.get("dir").unwrap(), "b");
        assert_eq!(parts.get("base").unwrap(), "c");
        assert_eq!(parts.get("ext").unwrap(), "d");
        assert_eq!(parts.get("name").unwrap(), "e");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut parts = PathComponents::new();
        assert!(parts.get("drive").unwrap_err().is_unknown_field());
        assert!(parts.set("drive", "C:").unwrap_err().is_unknown_field());
    }

    #[test]
    fn test_to_map() {
        let parts = PathComponents::new()
            .with_root("a")
            .with_dir("b")
            .with_base("c")
            .with_ext("d")
            .with_name("e");
        let map = parts.to_map();

        assert_eq!(map.len(), 5);
        assert_eq!(map["root"], "a");
        assert_eq!(map["dir"], "b");
        assert_eq!(map["base"], "c");
        assert_eq!(map["ext"], "d");
        assert_eq!(map["name"], "e");
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), PathComponents::FIELDS);
    }

    #[test]
    fn test_from_map_round_trip() {
        let parts = PathComponents::new().with_root("/").with_dir("/tmp").with_base("x");
        let rebuilt = PathComponents::from_map(parts.to_map()).unwrap();
        assert_eq!(rebuilt, parts);
    }

    #[test]
    fn test_partial_from_map() {
        let parts = PathComponents::from_map([("root", "a"), ("dir", "b")]).unwrap();
        assert_eq!(parts.root, "a");
        assert_eq!(parts.dir, "b");
        assert_eq!(parts.base, "");
        assert_eq!(parts.ext, "");
        assert_eq!(parts.name, "");
    }

    #[test]
    fn test_from_map_rejects_unknown_key() {
        let err = PathComponents::from_map([("dir", "a"), ("folder", "b")]).unwrap_err();
        assert!(matches!(err, Error::UnknownField { field } if field == "folder"));
    }

    #[test]
    fn test_from_value() {
        let parts = PathComponents::from_value(&json!({"dir": "some/dir", "base": null})).unwrap();
        assert_eq!(parts.dir, "some/dir");
        assert_eq!(parts.base, "");
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        for value in [json!(null), json!(""), json!("string"), json!(true), json!(false), json!(1)] {
            let err = PathComponents::from_value(&value).unwrap_err();
            assert!(err.is_invalid_argument(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_from_value_rejects_non_string_fields() {
        let err = PathComponents::from_value(&json!({"base": 3})).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = PathComponents::from_value(&json!({"size": 3})).unwrap_err();
        assert!(err.is_unknown_field());
    }

    #[test]
    fn test_from_json() {
        let parts = PathComponents::from_json(r#"{"name": "index", "ext": ".html"}"#).unwrap();
        assert_eq!(parts.name, "index");
        assert_eq!(parts.ext, ".html");

        assert!(matches!(PathComponents::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_serde_denies_unknown_fields() {
        let decoded: std::result::Result<PathComponents, _> =
            serde_json::from_str(r#"{"root": "/", "extra": "x"}"#);
        assert!(decoded.is_err());

        let encoded = serde_json::to_value(PathComponents::new().with_base("a")).unwrap();
        assert_eq!(encoded["base"], "a");
        assert_eq!(encoded["root"], "");
    }
}
