use super::types::ControllerDescriptor;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// On-disk layout of a metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Yaml,
    Json,
}

impl TableFormat {
    /// `.yaml`/`.yml` are YAML, everything else is treated as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => TableFormat::Yaml,
            _ => TableFormat::Json,
        }
    }
}

/// A metadata table that breaks the descriptor preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    EmptyControllerName {
        index: usize,
    },
    EmptyMethodName {
        controller: String,
        index: usize,
    },
    EmptyParameterName {
        method: String,
        position: usize,
    },
    DuplicateParameterName {
        method: String,
        name: String,
    },
    /// A method explicitly names a declaring type other than its controller
    DeclaringTypeMismatch {
        controller: String,
        method: String,
        declared: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::EmptyControllerName { index } => {
                write!(f, "controller #{} has an empty name", index)
            }
            TableError::EmptyMethodName { controller, index } => write!(
                f,
                "method #{} of controller '{}' has an empty name",
                index, controller
            ),
            TableError::EmptyParameterName { method, position } => write!(
                f,
                "parameter #{} of '{}' has an empty name",
                position, method
            ),
            TableError::DuplicateParameterName { method, name } => write!(
                f,
                "'{}' declares parameter '{}' more than once",
                method, name
            ),
            TableError::DeclaringTypeMismatch {
                controller,
                method,
                declared,
            } => write!(
                f,
                "method '{}' is listed under controller '{}' but declares type '{}'",
                method, controller, declared
            ),
        }
    }
}

impl std::error::Error for TableError {}

#[derive(Deserialize)]
struct ActionTable {
    #[serde(default)]
    controllers: Vec<ControllerDescriptor>,
}

/// Load a controller metadata table from a YAML or JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or violates
/// the descriptor preconditions (see [`TableError`]).
pub fn load_table(path: impl AsRef<Path>) -> anyhow::Result<Vec<ControllerDescriptor>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let controllers = load_table_from_str(&content, TableFormat::from_path(path))?;
    info!(
        path = %path.display(),
        controllers = controllers.len(),
        "Loaded action metadata table"
    );
    Ok(controllers)
}

/// Parse a controller metadata table already held in memory.
///
/// Methods without an explicit `declaring_type` inherit their controller's name.
///
/// # Errors
///
/// Returns an error on malformed input or a [`TableError`].
pub fn load_table_from_str(
    content: &str,
    format: TableFormat,
) -> anyhow::Result<Vec<ControllerDescriptor>> {
    let table: ActionTable = match format {
        TableFormat::Yaml => serde_yaml::from_str(content)?,
        TableFormat::Json => serde_json::from_str(content)?,
    };
    let mut controllers = table.controllers;
    normalize_table(&mut controllers)?;
    Ok(controllers)
}

fn normalize_table(controllers: &mut [ControllerDescriptor]) -> Result<(), TableError> {
    for (index, controller) in controllers.iter_mut().enumerate() {
        if controller.name.trim().is_empty() {
            return Err(TableError::EmptyControllerName { index });
        }
        for (index, method) in controller.methods.iter_mut().enumerate() {
            if method.name.trim().is_empty() {
                return Err(TableError::EmptyMethodName {
                    controller: controller.name.clone(),
                    index,
                });
            }
            if method.declaring_type.is_empty() {
                method.declaring_type = controller.name.clone();
            } else if method.declaring_type != controller.name {
                return Err(TableError::DeclaringTypeMismatch {
                    controller: controller.name.clone(),
                    method: method.name.clone(),
                    declared: method.declaring_type.clone(),
                });
            }

            let mut seen = HashSet::with_capacity(method.parameters.len());
            for (position, parameter) in method.parameters.iter().enumerate() {
                if parameter.name.trim().is_empty() {
                    return Err(TableError::EmptyParameterName {
                        method: method.id().to_string(),
                        position,
                    });
                }
                if !seen.insert(parameter.name.as_str()) {
                    return Err(TableError::DuplicateParameterName {
                        method: method.id().to_string(),
                        name: parameter.name.clone(),
                    });
                }
            }
            debug!(
                method = %method.id(),
                attributes = method.attributes.len(),
                parameters = method.parameters.len(),
                "Registered method metadata"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_format_from_extension() {
        let format = |name: &str| TableFormat::from_path(Path::new(name));
        assert_eq!(format("a.yaml"), TableFormat::Yaml);
        assert_eq!(format("a.yml"), TableFormat::Yaml);
        assert_eq!(format("a.json"), TableFormat::Json);
        assert_eq!(format("a"), TableFormat::Json);
    }

    #[test]
    fn test_declaring_type_defaults_to_controller() {
        let yaml = r#"
controllers:
  - name: Products
    methods:
      - name: List
"#;
        let controllers = load_table_from_str(yaml, TableFormat::Yaml).unwrap();
        assert_eq!(controllers[0].methods[0].declaring_type, "Products");
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let yaml = r#"
controllers:
  - name: Products
    methods:
      - name: Get
        parameters:
          - name: id
          - name: id
"#;
        let err = load_table_from_str(yaml, TableFormat::Yaml).unwrap_err();
        let table_err = err.downcast_ref::<TableError>().unwrap();
        assert_eq!(
            table_err,
            &TableError::DuplicateParameterName {
                method: "Products::Get/2".into(),
                name: "id".into(),
            }
        );
    }

    #[test]
    fn test_empty_method_name_rejected() {
        let json = r#"{"controllers":[{"name":"Home","methods":[{"name":" "}]}]}"#;
        let err = load_table_from_str(json, TableFormat::Json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::EmptyMethodName { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_controller_name_rejected() {
        let json = r#"{"controllers":[{"name":"Home"},{"name":""}]}"#;
        let err = load_table_from_str(json, TableFormat::Json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TableError>(),
            Some(&TableError::EmptyControllerName { index: 1 })
        );
    }

    #[test]
    fn test_empty_parameter_name_rejected() {
        let yaml = r#"
controllers:
  - name: Products
    methods:
      - name: Get
        parameters:
          - name: id
          - name: ""
"#;
        let err = load_table_from_str(yaml, TableFormat::Yaml).unwrap_err();
        let table_err = err.downcast_ref::<TableError>().unwrap();
        assert_eq!(
            table_err,
            &TableError::EmptyParameterName {
                method: "Products::Get/2".into(),
                position: 1,
            }
        );
        assert_eq!(
            table_err.to_string(),
            "parameter #1 of 'Products::Get/2' has an empty name"
        );
    }

    #[test]
    fn test_declaring_type_mismatch_rejected() {
        let yaml = r#"
controllers:
  - name: Products
    methods:
      - name: Get
        declaring_type: Orders
"#;
        let err = load_table_from_str(yaml, TableFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("declares type 'Orders'"));
    }
}
