#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use brrtrouter_actions::config::BuilderConfig;
use brrtrouter_actions::descriptor::{load_table, load_table_from_str, TableError, TableFormat};
use brrtrouter_actions::linter::{has_errors, lint_application, LintSeverity};
use brrtrouter_actions::model::{ActionModel, ActionModelBuilder, ApplicationModel};
use common::tables::{BROKEN_YAML, PRODUCTS_YAML};
use common::temp_files::{create_temp_json, create_temp_toml, create_temp_yaml};

fn build(config: BuilderConfig, yaml: &str) -> ApplicationModel {
    let file = create_temp_yaml(yaml);
    let controllers = load_table(file.path()).unwrap();
    ActionModelBuilder::from_config(config).build_application(&controllers)
}

fn actions_named<'a>(app: &'a ApplicationModel, method: &str) -> Vec<&'a ActionModel> {
    app.actions().filter(|a| a.method.name == method).collect()
}

#[test]
fn test_products_table_action_counts() {
    let app = build(BuilderConfig::default(), PRODUCTS_YAML);
    assert_eq!(app.controllers.len(), 1);
    assert_eq!(app.controllers[0].name, "Products");
    assert_eq!(app.actions().count(), 6);

    assert_eq!(actions_named(&app, "Foo").len(), 1);
    assert_eq!(actions_named(&app, "Bar").len(), 2);
    assert_eq!(actions_named(&app, "Baz").len(), 1);
    assert!(actions_named(&app, "Helper").is_empty());
    assert!(actions_named(&app, "Secret").is_empty());
}

#[test]
fn test_products_table_routes_and_verbs() {
    let app = build(BuilderConfig::default(), PRODUCTS_YAML);

    let foo = actions_named(&app, "Foo");
    assert_eq!(foo[0].route_template(), Some("a"));
    assert_eq!(foo[0].http_methods, ["GET"]);

    let bar = actions_named(&app, "Bar");
    let templates: Vec<_> = bar.iter().map(|a| a.route_template()).collect();
    assert_eq!(templates, [Some("b"), Some("c")]);
    for action in &bar {
        assert_eq!(action.http_methods, ["GET", "POST"]);
        assert_eq!(action.action_name, "Bar");
    }

    let baz = actions_named(&app, "Baz");
    assert!(baz[0].attribute_route.is_none());
    assert_eq!(baz[0].filters.len(), 1);
    assert_eq!(baz[0].filters[0].filter, "authorize");
}

#[test]
fn test_http_method_attribute_with_template_routes() {
    let app = build(BuilderConfig::default(), PRODUCTS_YAML);
    let get = actions_named(&app, "Get");
    assert_eq!(get.len(), 1);
    let route = get[0].attribute_route.as_ref().unwrap();
    assert_eq!(route.template.as_deref(), Some("products/{id}"));
    assert_eq!(route.name.as_deref(), Some("product"));

    let names: Vec<_> = get[0].parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["id", "logger"]);
    for parameter in &get[0].parameters {
        assert_eq!(parameter.action, get[0].action_ref());
    }
}

#[test]
fn test_silent_route_keeps_conventional_action() {
    let app = build(BuilderConfig::default(), PRODUCTS_YAML);
    let hidden = actions_named(&app, "Hidden");
    assert_eq!(hidden.len(), 1);
    assert!(hidden[0].attribute_route.is_none());
    assert!(!hidden[0].api_explorer.is_visible);
}

#[test]
fn test_skip_service_parameters_from_toml_config() {
    let config_file = create_temp_toml("skip_service_parameters = true\n");
    let config = BuilderConfig::from_toml_file(config_file.path()).unwrap();
    if std::env::var("ACTIONS_SKIP_SERVICE_PARAMS").is_ok() {
        return;
    }

    let app = build(config, PRODUCTS_YAML);
    let get = actions_named(&app, "Get");
    let names: Vec<_> = get[0].parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["id"]);
    assert_eq!(get[0].parameters[0].position, 0);
}

#[test]
fn test_json_table_matches_yaml_table() {
    let json = r#"{
        "controllers": [{
            "name": "Products",
            "methods": [{
                "name": "Bar",
                "attributes": [
                    {"kind": "http_method", "verbs": ["GET"]},
                    {"kind": "http_method", "verbs": ["POST"]},
                    {"kind": "route", "template": "b"},
                    {"kind": "route", "template": "c"}
                ]
            }]
        }]
    }"#;
    let file = create_temp_json(json);
    let controllers = load_table(file.path()).unwrap();
    let app = ActionModelBuilder::new().build_application(&controllers);

    let yaml_app = build(BuilderConfig::default(), PRODUCTS_YAML);
    let from_json: Vec<_> = app.actions().collect();
    let from_yaml = actions_named(&yaml_app, "Bar");
    assert_eq!(from_json.len(), from_yaml.len());
    for (json_action, yaml_action) in from_json.iter().zip(from_yaml) {
        assert_eq!(json_action.attributes, yaml_action.attributes);
        assert_eq!(json_action.http_methods, yaml_action.http_methods);
    }
}

#[test]
fn test_declaring_type_filled_from_controller() {
    let controllers = load_table_from_str(PRODUCTS_YAML, TableFormat::Yaml).unwrap();
    assert!(controllers[0]
        .methods
        .iter()
        .all(|m| m.declaring_type == "Products"));
}

#[test]
fn test_table_preconditions_are_enforced() {
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
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::DuplicateParameterName { .. })
    ));

    let yaml = "controllers:\n  - name: \"\"\n";
    let err = load_table_from_str(yaml, TableFormat::Yaml).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::EmptyControllerName { index: 0 })
    ));
}

#[test]
fn test_unknown_attribute_kind_is_rejected() {
    let yaml = r#"
controllers:
  - name: Products
    methods:
      - name: Get
        attributes:
          - kind: teleport
"#;
    assert!(load_table_from_str(yaml, TableFormat::Yaml).is_err());
}

#[test]
fn test_lint_products_table() {
    let app = build(BuilderConfig::default(), PRODUCTS_YAML);
    let issues = lint_application(&app);
    assert!(!has_errors(&issues), "unexpected errors: {:?}", issues);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "silent_route_attribute");
    assert_eq!(issues[0].severity, LintSeverity::Info);
}

#[test]
fn test_lint_broken_table() {
    let app = build(BuilderConfig::default(), BROKEN_YAML);
    let issues = lint_application(&app);
    assert!(has_errors(&issues));
    assert!(issues.iter().any(|i| i.kind == "invalid_http_method"));
    assert!(issues.iter().any(|i| i.kind == "unbound_route_parameter"));
}
