#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Writes `content` to a temporary file with the given extension.
    ///
    /// The file is removed when the returned handle is dropped.
    pub fn create_temp_table(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("actions_table_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_table(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_table(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_table(content, "toml")
    }
}

pub mod tables {
    /// Products controller covering every split shape:
    /// one route, two routes, no routes, a silent route and a non-action.
    pub const PRODUCTS_YAML: &str = r#"
controllers:
  - name: Products
    methods:
      - name: Foo
        attributes:
          - kind: http_method
            verbs: [GET]
          - kind: route
            template: a
      - name: Bar
        attributes:
          - kind: http_method
            verbs: [GET]
          - kind: http_method
            verbs: [POST]
          - kind: route
            template: b
          - kind: route
            template: c
      - name: Baz
        attributes:
          - kind: http_method
            verbs: [GET]
          - kind: filter
            filter: authorize
      - name: Get
        attributes:
          - kind: http_method
            verbs: [GET]
            template: "products/{id}"
            name: product
        parameters:
          - name: id
          - name: logger
            attributes:
              - kind: binder
                source: services
      - name: Hidden
        attributes:
          - kind: route
          - kind: api_explorer_settings
            ignore_api: true
      - name: Helper
        attributes:
          - kind: non_action
      - name: Secret
        visibility: private
"#;

    pub const BROKEN_YAML: &str = r#"
controllers:
  - name: Users
    methods:
      - name: Index
        attributes:
          - kind: http_method
            verbs: ["GE T"]
          - kind: route
            template: "users/{id}"
"#;
}
