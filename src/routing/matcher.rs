//! Route matching module
//!
//! Implements the path predicates used by the route table.

use super::table::Route;

/// How a single rule tests the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Whole path equals the pattern
    Exact(&'static str),
    /// Path starts with the pattern
    Prefix(&'static str),
    /// Path ends with the pattern
    Suffix(&'static str),
    /// Pattern appears anywhere in the path
    Contains(&'static str),
}

impl PathRule {
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(p) => path == p,
            Self::Prefix(p) => path.starts_with(p),
            Self::Suffix(p) => path.ends_with(p),
            Self::Contains(p) => path.contains(p),
        }
    }
}

/// Find the first route whose rules accept the path
///
/// Routes are evaluated in table order; within a route any single rule is enough.
pub fn match_route<'a, A>(path: &str, routes: &'a [Route<A>]) -> Option<&'a Route<A>> {
    routes
        .iter()
        .find(|route| route.rules.iter().any(|rule| rule.matches(path)))
}
