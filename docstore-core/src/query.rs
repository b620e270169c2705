//! Search criteria construction and the visitor used by backends to evaluate them.
//!
//! # Criteria Building
//!
//! Criteria can be constructed using the fluent builder API:
//!
//! ```ignore
//! use docstore::query::SearchCriteria;
//! use chrono::{Duration, Utc};
//!
//! let criteria = SearchCriteria::builder()
//!     .title_prefixes(["Java"])
//!     .contains_contents(["Streams"])
//!     .author_ids(["author1"])
//!     .created_from(Utc::now() - Duration::hours(1))
//!     .created_to(Utc::now())
//!     .build();
//! ```
//!
//! # Matching Rules
//!
//! A document matches when every constrained dimension matches (AND). Within a list
//! dimension a single hit is enough (OR). A dimension whose list is absent or empty
//! places no constraint on the document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A multi-criteria search request.
///
/// Every field is optional. `None` and an empty list mean the same thing: the
/// dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// The title must start with at least one of these prefixes.
    #[serde(default)]
    pub title_prefixes: Option<Vec<String>>,
    /// The content must contain at least one of these substrings.
    #[serde(default)]
    pub contains_contents: Option<Vec<String>>,
    /// The author identifier must equal one of these.
    #[serde(default)]
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on the creation timestamp.
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchCriteria {
    /// Creates criteria that match every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new criteria builder for fluent construction.
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// Returns `true` if no dimension constrains the search.
    pub fn is_unconstrained(&self) -> bool {
        non_empty(&self.title_prefixes).is_none()
            && non_empty(&self.contains_contents).is_none()
            && non_empty(&self.author_ids).is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref()
        .filter(|values| !values.is_empty())
}

fn collect_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    /// Creates a new criteria builder.
    pub fn new() -> Self {
        SearchCriteriaBuilder { criteria: SearchCriteria::default() }
    }

    /// Sets the accepted title prefixes.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.title_prefixes = Some(collect_strings(prefixes));
        self
    }

    /// Sets the accepted content substrings.
    pub fn contains_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.contains_contents = Some(collect_strings(contents));
        self
    }

    /// Sets the accepted author identifiers.
    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.author_ids = Some(collect_strings(author_ids));
        self
    }

    /// Sets the inclusive lower bound on the creation timestamp.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.criteria.created_from = Some(from);
        self
    }

    /// Sets the inclusive upper bound on the creation timestamp.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.criteria.created_to = Some(to);
        self
    }

    /// Builds and returns the final criteria.
    pub fn build(self) -> SearchCriteria {
        self.criteria
    }
}

/// Walks the constrained dimensions of a [`SearchCriteria`].
///
/// Backends implement the per-dimension methods against their own document
/// representation. [`visit_criteria`](CriteriaVisitor::visit_criteria) combines them:
/// unconstrained dimensions are skipped and evaluation stops at the first miss.
pub trait CriteriaVisitor {
    /// Called with a non-empty list of title prefixes.
    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> bool;
    /// Called with a non-empty list of content substrings.
    fn visit_contents(&mut self, contents: &[String]) -> bool;
    /// Called with a non-empty list of author identifiers.
    fn visit_author_ids(&mut self, author_ids: &[String]) -> bool;
    /// Called when at least one creation bound is set.
    fn visit_created_range(
        &mut self,
        from: Option<&DateTime<Utc>>,
        to: Option<&DateTime<Utc>>,
    ) -> bool;

    fn visit_criteria(&mut self, criteria: &SearchCriteria) -> bool {
        if let Some(prefixes) = non_empty(&criteria.title_prefixes) {
            if !self.visit_title_prefixes(prefixes) {
                return false;
            }
        }

        if let Some(contents) = non_empty(&criteria.contains_contents) {
            if !self.visit_contents(contents) {
                return false;
            }
        }

        if let Some(author_ids) = non_empty(&criteria.author_ids) {
            if !self.visit_author_ids(author_ids) {
                return false;
            }
        }

        if criteria.created_from.is_some() || criteria.created_to.is_some() {
            return self.visit_created_range(
                criteria.created_from.as_ref(),
                criteria.created_to.as_ref(),
            );
        }

        true
    }
}
