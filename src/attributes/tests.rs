#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn test_route_with_template_is_not_silent() {
    let attr = Attribute::route("products/{id}");
    let provider = attr.as_route_template_provider().unwrap();
    assert_eq!(provider.template(), Some("products/{id}"));
    assert!(!provider.is_silent());
}

#[test]
fn test_empty_route_is_silent() {
    let attr = Attribute::Route(RouteAttribute::default());
    assert!(attr.as_route_template_provider().unwrap().is_silent());
}

#[test]
fn test_order_or_name_alone_is_not_silent() {
    let ordered = Attribute::Route(RouteAttribute {
        order: Some(2),
        ..RouteAttribute::default()
    });
    let named = Attribute::Route(RouteAttribute {
        name: Some("products".into()),
        ..RouteAttribute::default()
    });
    assert!(!ordered.as_route_template_provider().unwrap().is_silent());
    assert!(!named.as_route_template_provider().unwrap().is_silent());
}

#[test]
fn test_bare_http_method_is_not_a_route_provider() {
    let attr = Attribute::http_method("GET");
    assert!(attr.as_route_template_provider().is_none());
    assert_eq!(
        attr.as_http_method_provider().unwrap().http_methods(),
        Some(&["GET".to_string()][..])
    );
}

#[test]
fn test_http_method_with_template_routes() {
    let attr = Attribute::HttpMethod(HttpMethodAttribute {
        verbs: Some(vec!["DELETE".into()]),
        template: Some("items/{id}".into()),
        ..HttpMethodAttribute::default()
    });
    let provider = attr.as_route_template_provider().unwrap();
    assert_eq!(provider.template(), Some("items/{id}"));
    assert!(attr.as_http_method_provider().is_some());
}

#[test]
fn test_api_explorer_settings_provides_visibility_and_group() {
    let attr = Attribute::ApiExplorerSettings(ApiExplorerSettingsAttribute {
        ignore_api: true,
        group_name: Some("v2".into()),
    });
    assert!(attr.as_api_visibility_provider().unwrap().ignore_api());
    let group = attr.as_api_group_provider().unwrap();
    assert_eq!(group.group_name(), Some("v2"));
    assert!(attr.as_route_template_provider().is_none());
}

#[test]
fn test_capabilities_are_disjoint_for_plain_attributes() {
    let filter = Attribute::filter("authorize");
    assert!(filter.as_filter().is_some());
    assert!(filter.as_action_constraint().is_none());
    assert!(!filter.is_non_action());

    assert!(Attribute::NonAction.is_non_action());
    assert!(Attribute::custom("obsolete").as_filter().is_none());
}

#[test]
fn test_attribute_yaml_tags() {
    let yaml = r#"
- kind: route
  template: "a"
- kind: http_method
  verbs: [GET, POST]
- kind: non_action
- kind: binder
  source: query
  name: q
- kind: constraint
  constraint: consumes
  value: ["application/json"]
"#;
    let attrs: Vec<Attribute> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(attrs.len(), 5);
    assert_eq!(attrs[0], Attribute::route("a"));
    assert_eq!(attrs[1], Attribute::accept_verbs(["GET", "POST"]));
    assert!(attrs[2].is_non_action());
    let binder = attrs[3].as_binder_metadata().unwrap();
    assert_eq!(binder.binding_source(), BindingSource::Query);
    assert_eq!(binder.binder_name(), Some("q"));
    assert_eq!(
        attrs[4].as_action_constraint().unwrap().value,
        Some(serde_json::json!(["application/json"]))
    );
}
