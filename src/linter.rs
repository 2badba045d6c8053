//! # Action Linter Module
//!
//! The action builder accepts any attribute combination. Whether a
//! combination is a mistake can only be judged once every action of the
//! application is known, so that judgement lives here.
//!
//! ## Checks Performed
//!
//! 1. **silent_route_attribute** - an action only has route attributes without
//!    template, order or name (often a forgotten template)
//! 2. **invalid_http_method** - a verb that is not a valid HTTP method token
//! 3. **non_canonical_http_method** - a verb that is not upper case
//! 4. **duplicate_route_name** - two actions share a route name
//! 5. **ambiguous_route** - two actions share a template and an HTTP verb
//! 6. **unbound_route_parameter** - a `{param}` in a template that no method
//!    parameter can receive
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brrtrouter_actions::linter::{lint_application, LintSeverity};
//!
//! let issues = lint_application(&app);
//! for issue in &issues {
//!     eprintln!("[{}] {}: {}", issue.severity, issue.location, issue.message);
//! }
//! ```

use crate::model::{ActionModel, ApplicationModel};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;


/// Matches `{id}`, `{id?}`, `{id:int}`, `{*path}` and `{**path}`, capturing the name.
static ROUTE_PARAMETER: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{\*{0,2}([A-Za-z_][A-Za-z0-9_]*)[^}]*\}")
        .expect("valid route parameter regex")
});

/// Verb key used for actions that accept any HTTP method.
const ANY_METHOD: &str = "*";

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - the action table cannot be routed as declared
    Error,
    /// Warning - routes will be built but probably not as intended
    Warning,
    /// Info - worth a look
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in an application model
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Action the issue refers to (e.g. `Products::Get/1#0`)
    pub location: String,
    pub severity: LintSeverity,
    /// Machine-readable kind (e.g. `ambiguous_route`)
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint every action of an application.
#[must_use]
pub fn lint_application(app: &ApplicationModel) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for action in app.actions() {
        lint_action(&mut issues, action);
    }

    lint_route_names(&mut issues, app);
    lint_ambiguous_routes(&mut issues, app);

    issues
}

fn lint_action(issues: &mut Vec<LintIssue>, action: &ActionModel) {
    let location = action.action_ref().to_string();

    let has_silent_route = action
        .attributes
        .iter()
        .filter_map(|a| a.as_route_template_provider())
        .any(|p| p.is_silent());
    if has_silent_route && action.attribute_route.is_none() {
        issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Info,
                "silent_route_attribute",
                format!(
                    "Action '{}' has route attributes without template, order or name",
                    action.action_name
                ),
            )
            .with_suggestion("Add a template, or drop it for conventional routing"),
        );
    }

    for verb in &action.http_methods {
        if http::Method::from_bytes(verb.as_bytes()).is_err() {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                "invalid_http_method",
                format!("'{}' is not a valid HTTP method", verb),
            ));
        } else if verb.chars().any(|c| c.is_ascii_lowercase()) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "non_canonical_http_method",
                    format!("HTTP method '{}' is not upper case", verb),
                )
                .with_suggestion(format!("Use '{}'", verb.to_ascii_uppercase())),
            );
        }
    }

    if let Some(template) = action.route_template() {
        for name in route_parameters(template) {
            let bound = action
                .parameters
                .iter()
                .any(|p| p.name.eq_ignore_ascii_case(name));
            if !bound {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "unbound_route_parameter",
                    format!(
                        "Route parameter '{{{}}}' in '{}' has no matching method parameter",
                        name, template
                    ),
                ));
            }
        }
    }
}

fn lint_route_names(issues: &mut Vec<LintIssue>, app: &ApplicationModel) {
    let mut seen: HashMap<&str, String> = HashMap::new();
    for action in app.actions() {
        let Some(name) = action
            .attribute_route
            .as_ref()
            .and_then(|r| r.name.as_deref())
        else {
            continue;
        };
        let location = action.action_ref().to_string();
        if let Some(first) = seen.get(name) {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                "duplicate_route_name",
                format!("Route name '{}' is already used by {}", name, first),
            ));
        } else {
            seen.insert(name, location);
        }
    }
}

fn lint_ambiguous_routes(issues: &mut Vec<LintIssue>, app: &ApplicationModel) {
    let mut seen: HashMap<(String, String), String> = HashMap::new();
    for action in app.actions() {
        let Some(template) = action.route_template() else {
            continue;
        };
        let location = action.action_ref().to_string();
        let template = normalize_template(template);
        // Verbs differing only in case are one route.
        let mut verbs: Vec<String> = Vec::new();
        for verb in &action.http_methods {
            let verb = verb.to_ascii_uppercase();
            if !verbs.contains(&verb) {
                verbs.push(verb);
            }
        }
        if verbs.is_empty() {
            verbs.push(ANY_METHOD.to_string());
        }
        for verb in verbs {
            let key = (verb, template.clone());
            if let Some(first) = seen.get(&key) {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "ambiguous_route",
                    format!("{} '{}' is also handled by {}", key.0, template, first),
                ));
            } else {
                seen.insert(key, location.clone());
            }
        }
    }
}

/// Names of the `{...}` parameters in a route template, in order.
#[must_use]
pub fn route_parameters(template: &str) -> Vec<&str> {
    ROUTE_PARAMETER
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

fn normalize_template(template: &str) -> String {
    template.trim_matches('/').to_ascii_lowercase()
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{}", heading);
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }
}

#[must_use]
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}
