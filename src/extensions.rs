use serde_json::Value;

use crate::error::WalkError;

/// The extensions argument to [`walk`](crate::walk): either one
/// extension string or a list of them.
///
/// Members are matched verbatim against an entry's extension, which
/// always starts at the final dot of the file name. `".yaml"` matches
/// `a.yaml`; `"yaml"` matches nothing. The empty string matches
/// entries whose name contains no dot at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extensions {
    Single(String),
    Many(Vec<String>),
}

impl Extensions {
    /// The canonical set to match against, in caller order. Duplicates
    /// are kept; they are harmless. An empty `Many` matches nothing.
    pub fn into_canonical(self) -> Vec<String> {
        match self {
            Extensions::Single(ext) => vec![ext],
            Extensions::Many(exts) => exts,
        }
    }
}

impl From<&str> for Extensions {
    fn from(ext: &str) -> Self {
        Extensions::Single(ext.to_string())
    }
}

impl From<String> for Extensions {
    fn from(ext: String) -> Self {
        Extensions::Single(ext)
    }
}

impl From<Vec<String>> for Extensions {
    fn from(exts: Vec<String>) -> Self {
        Extensions::Many(exts)
    }
}

impl From<&[&str]> for Extensions {
    fn from(exts: &[&str]) -> Self {
        Extensions::Many(exts.iter().map(|ext| ext.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Extensions {
    fn from(exts: [&str; N]) -> Self {
        Extensions::from(&exts[..])
    }
}

/// Validation for callers that receive the extensions argument as an
/// untyped value. A JSON string becomes [`Extensions::Single`], an
/// array of strings becomes [`Extensions::Many`]; anything else is an
/// argument error and no traversal will be attempted.
impl TryFrom<&Value> for Extensions {
    type Error = WalkError;

    fn try_from(value: &Value) -> Result<Self, WalkError> {
        match value {
            Value::String(ext) => Ok(Extensions::Single(ext.clone())),
            Value::Array(items) => {
                let mut exts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(ext) => exts.push(ext.clone()),
                        _ => return Err(WalkError::ExtensionNotString),
                    }
                }
                Ok(Extensions::Many(exts))
            }
            _ => Err(WalkError::ExtensionsNotStringOrList),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_string_normalizes_to_one_element() {
        let exts = Extensions::from(".yaml");
        assert_eq!(exts.into_canonical(), vec![".yaml".to_string()]);
    }

    #[test]
    fn list_preserves_order_and_duplicates() {
        let exts = Extensions::from([".yaml", ".meta", ".yaml"]);
        assert_eq!(exts.into_canonical(), vec![".yaml", ".meta", ".yaml"]);
    }

    #[test]
    fn json_string_accepted() {
        let exts = Extensions::try_from(&json!(".yaml")).unwrap();
        assert_eq!(exts, Extensions::Single(".yaml".to_string()));
    }

    #[test]
    fn json_string_array_accepted() {
        let exts = Extensions::try_from(&json!([".yaml", ".meta"])).unwrap();
        assert_eq!(
            exts,
            Extensions::Many(vec![".yaml".to_string(), ".meta".to_string()])
        );
    }

    #[test]
    fn json_non_string_rejected() {
        let err = Extensions::try_from(&json!(3.14)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Extensions must be specified as a single string or a list of strings!"
        );
    }

    #[test]
    fn json_array_with_non_string_element_rejected() {
        let err = Extensions::try_from(&json!([".yaml", 5])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Extensions must be based as a list of strings!"
        );
    }

    #[test]
    fn empty_json_array_is_valid_and_empty() {
        let exts = Extensions::try_from(&json!([])).unwrap();
        assert!(exts.into_canonical().is_empty());
    }
}
