use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Counts per category, as of `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_books: usize,
    pub categories: BTreeMap<String, usize>,
    pub timestamp: DateTime<Utc>,
}

/// Distinct categories in ascending order.
pub fn categories<S: DataStore>(store: &S) -> Result<CmdResult> {
    let names: BTreeSet<String> = store
        .load_books()
        .into_iter()
        .map(|book| book.category)
        .collect();

    Ok(CmdResult::default().with_categories(names.into_iter().collect()))
}

pub fn summary<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.load_books();

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for book in &books {
        *counts.entry(book.category.clone()).or_insert(0) += 1;
    }

    let summary = CatalogSummary {
        total_books: books.len(),
        categories: counts,
        timestamp: Utc::now(),
    };
    Ok(CmdResult::default().with_summary(summary))
}
