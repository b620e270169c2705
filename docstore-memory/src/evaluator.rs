//! Search criteria evaluation for in-memory document filtering.
//!
//! A missing document field never matches a constrained dimension: a document
//! without a title fails any title-prefix search, one without an author fails any
//! author search, and one without a creation timestamp fails any range with a bound.

use chrono::{DateTime, Utc};

use docstore_core::{
    document::Document,
    query::{CriteriaVisitor, SearchCriteria},
};


pub(crate) struct CriteriaEvaluator<'a> {
    document: &'a Document,
}

impl<'a> CriteriaEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, criteria: &SearchCriteria) -> bool {
        self.visit_criteria(criteria)
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        criteria: &SearchCriteria,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|doc| CriteriaEvaluator::new(doc).evaluate(criteria))
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl<'a> CriteriaVisitor for CriteriaEvaluator<'a> {
    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> bool {
        match self.document.title.as_deref() {
            Some(title) => prefixes
                .iter()
                .any(|prefix| title.starts_with(prefix.as_str())),
            None => false,
        }
    }

    fn visit_contents(&mut self, contents: &[String]) -> bool {
        match self.document.content.as_deref() {
            Some(content) => contents
                .iter()
                .any(|needle| content.contains(needle.as_str())),
            None => false,
        }
    }

    fn visit_author_ids(&mut self, author_ids: &[String]) -> bool {
        match &self.document.author {
            Some(author) => author_ids
                .iter()
                .any(|id| *id == author.id),
            None => false,
        }
    }

    fn visit_created_range(
        &mut self,
        from: Option<&DateTime<Utc>>,
        to: Option<&DateTime<Utc>>,
    ) -> bool {
        let Some(created) = self.document.created.as_ref() else {
            return false;
        };

        // Both bounds are inclusive
        from.is_none_or(|from| created >= from) && to.is_none_or(|to| created <= to)
    }
}
