use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A metadata attribute attached to a controller method or one of its parameters.
///
/// Attributes are plain values tagged by `kind`, so a metadata table can be
/// written by hand in YAML/JSON or assembled in code at registration time:
///
/// ```yaml
/// attributes:
///   - kind: http_method
///     verbs: [GET]
///   - kind: route
///     template: "products/{id}"
/// ```
///
/// What an attribute *means* to the action builder is decided by the
/// capabilities it exposes (see [`super::capability`]), never by its variant
/// name alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attribute {
    /// `[Route(...)]` - route template provider
    Route(RouteAttribute),
    /// `[HttpGet]`, `[AcceptVerbs(...)]`, ... - HTTP method provider, and a route
    /// template provider when it carries a template, order or name
    HttpMethod(HttpMethodAttribute),
    /// `[ActionName("...")]`
    ActionName(ActionNameAttribute),
    /// `[NonAction]` - excludes the method from action discovery
    NonAction,
    /// `[ApiExplorerSettings(...)]` - API visibility and group provider
    ApiExplorerSettings(ApiExplorerSettingsAttribute),
    /// Action constraint metadata (e.g. `consumes`, `host`)
    Constraint(ConstraintAttribute),
    /// Action filter (e.g. `authorize`, `cache`)
    Filter(FilterAttribute),
    /// Parameter binder metadata (e.g. `[FromQuery]`)
    Binder(BinderAttribute),
    /// Anything else; carried through untouched for downstream consumers
    Custom(CustomAttribute),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// HTTP verb constraint, optionally carrying its own route template.
///
/// `verbs: None` is allowed and contributes nothing to the action's verb set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpMethodAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HttpMethodAttribute {
    /// Whether this attribute takes part in attribute routing at all.
    #[must_use]
    pub fn carries_route(&self) -> bool {
        self.template.is_some() || self.order.is_some() || self.name.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionNameAttribute {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiExplorerSettingsAttribute {
    pub ignore_api: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintAttribute {
    /// Constraint kind, e.g. `consumes` or `host`
    pub constraint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterAttribute {
    /// Filter name, e.g. `authorize`
    pub filter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

/// Where a parameter value comes from when the request is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSource {
    Route,
    Query,
    Header,
    Body,
    Form,
    /// Injected by the framework, not read from the request
    Services,
    Custom,
}

impl std::fmt::Display for BindingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BindingSource::Route => "route",
            BindingSource::Query => "query",
            BindingSource::Header => "header",
            BindingSource::Body => "body",
            BindingSource::Form => "form",
            BindingSource::Services => "services",
            BindingSource::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinderAttribute {
    pub source: BindingSource,
    /// Overrides the name used to look the value up in the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAttribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Attribute {
    /// `[Route(template)]`
    pub fn route(template: impl Into<String>) -> Self {
        Attribute::Route(RouteAttribute {
            template: Some(template.into()),
            ..RouteAttribute::default()
        })
    }

    /// `[HttpGet]`, `[HttpPost]`, ... for a single verb with no route information.
    pub fn http_method(verb: impl Into<String>) -> Self {
        Attribute::HttpMethod(HttpMethodAttribute {
            verbs: Some(vec![verb.into()]),
            ..HttpMethodAttribute::default()
        })
    }

    /// `[AcceptVerbs(...)]`
    pub fn accept_verbs<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Attribute::HttpMethod(HttpMethodAttribute {
            verbs: Some(verbs.into_iter().map(Into::into).collect()),
            ..HttpMethodAttribute::default()
        })
    }

    pub fn action_name(name: impl Into<String>) -> Self {
        Attribute::ActionName(ActionNameAttribute {
            name: Some(name.into()),
        })
    }

    pub fn filter(name: impl Into<String>) -> Self {
        Attribute::Filter(FilterAttribute {
            filter: name.into(),
            order: None,
            arguments: None,
        })
    }

    pub fn constraint(kind: impl Into<String>, value: Option<Value>) -> Self {
        Attribute::Constraint(ConstraintAttribute {
            constraint: kind.into(),
            value,
        })
    }

    pub fn binder(source: BindingSource) -> Self {
        Attribute::Binder(BinderAttribute { source, name: None })
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Attribute::Custom(CustomAttribute {
            name: name.into(),
            value: None,
        })
    }
}
