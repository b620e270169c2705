use std::collections::HashSet;

use docstore::{
    chrono::{DateTime, Duration, Utc},
    memory::InMemoryStore,
    prelude::*,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Three documents by two authors, created 1h, 2h and 30min before `now`.
fn seeded_store() -> (DocumentStore<InMemoryStore>, DateTime<Utc>) {
    init_tracing();

    let now = Utc::now();
    let author1 = Author::new("author1", "Author One");
    let author2 = Author::new("author2", "Author Two");

    let mut store = DocumentStore::new(InMemoryStore::builder().build().unwrap());

    store.save(
        Document::new()
            .with_id("doc1")
            .with_title("Introduction to Java")
            .with_content("Java is a high-level, class-based, object-oriented programming language.")
            .with_author(author1.clone())
            .with_created(now - Duration::seconds(3600)),
    );
    store.save(
        Document::new()
            .with_id("doc2")
            .with_title("Advanced section")
            .with_content("In this section, we dive deeper into Java Streams and Lambdas.")
            .with_author(author2)
            .with_created(now - Duration::seconds(7200)),
    );
    store.save(
        Document::new()
            .with_id("doc3")
            .with_title("Java Streams")
            .with_content("Streams are a new abstraction that lets you process data in a declarative way.")
            .with_author(author1)
            .with_created(now - Duration::seconds(1800)),
    );

    (store, now)
}

fn ids(documents: &[Document]) -> HashSet<&str> {
    documents
        .iter()
        .filter_map(Document::id)
        .collect()
}

#[test]
fn test_find_by_id() {
    let (store, _) = seeded_store();

    let found = store.find_by_id("doc2").expect("doc2 should be stored");

    assert_eq!(found.title.as_deref(), Some("Advanced section"));
    assert!(store.find_by_id("doc4").is_none());
}

#[test]
fn test_search_by_title_prefix() {
    let (store, _) = seeded_store();

    let results = store.search(&SearchCriteria::builder().title_prefixes(["Java"]).build());

    assert_eq!(ids(&results), HashSet::from(["doc3"]));
}

#[test]
fn test_search_by_content() {
    let (store, _) = seeded_store();

    let results = store.search(&SearchCriteria::builder().contains_contents(["Streams"]).build());

    assert_eq!(ids(&results), HashSet::from(["doc2", "doc3"]));
}

#[test]
fn test_search_by_author() {
    let (store, _) = seeded_store();

    let results = store.search(&SearchCriteria::builder().author_ids(["author1"]).build());

    assert_eq!(ids(&results), HashSet::from(["doc1", "doc3"]));
}

#[test]
fn test_search_by_multiple_criteria() {
    let (store, now) = seeded_store();

    let results = store.search(
        &SearchCriteria::builder()
            .title_prefixes(["Java"])
            .contains_contents(["Streams"])
            .author_ids(["author1"])
            .created_from(now - Duration::seconds(4000))
            .created_to(now)
            .build(),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title.as_deref(), Some("Java Streams"));
}

#[test]
fn test_search_by_all_criteria() {
    let (store, now) = seeded_store();

    let results = store.search(
        &SearchCriteria::builder()
            .title_prefixes(["Advanced"])
            .contains_contents(["we dive deeper into"])
            .author_ids(["author2"])
            .created_from(now - Duration::seconds(8000))
            .created_to(now - Duration::seconds(6000))
            .build(),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title.as_deref(), Some("Advanced section"));
}

#[test]
fn test_search_without_criteria_returns_everything() {
    let (store, _) = seeded_store();

    let results = store.search(&SearchCriteria::new());

    assert_eq!(ids(&results), HashSet::from(["doc1", "doc2", "doc3"]));
}

#[test]
fn test_empty_lists_behave_like_absent_lists() {
    let (store, _) = seeded_store();

    let empty = SearchCriteria::builder()
        .title_prefixes(Vec::<String>::new())
        .contains_contents(Vec::<String>::new())
        .author_ids(Vec::<String>::new())
        .build();

    assert_eq!(ids(&store.search(&empty)), ids(&store.search(&SearchCriteria::new())));
}

#[test]
fn test_search_with_no_match_is_empty() {
    let (store, now) = seeded_store();

    let results = store.search(
        &SearchCriteria::builder()
            .created_from(now + Duration::seconds(1))
            .build(),
    );

    assert!(results.is_empty());
}

#[test]
fn test_upsert_never_changes_created() {
    let (mut store, now) = seeded_store();
    let original = store.find_by_id("doc1").unwrap().created;

    let updated = store.save(
        Document::new()
            .with_id("doc1")
            .with_title("Introduction to Rust")
            .with_created(now + Duration::days(1)),
    );

    assert_eq!(updated.created, original);
    assert_eq!(store.find_by_id("doc1"), Some(updated));
    assert_eq!(store.len(), 3);

    // The old title no longer matches, the new one does
    let java = store.search(&SearchCriteria::builder().title_prefixes(["Introduction to Java"]).build());
    let rust = store.search(&SearchCriteria::builder().title_prefixes(["Introduction to Rust"]).build());
    assert!(java.is_empty());
    assert_eq!(ids(&rust), HashSet::from(["doc1"]));
}

#[test]
fn test_generated_ids_are_distinct() {
    init_tracing();
    let mut store = DocumentStore::new(InMemoryStore::new());

    let generated = (0..100)
        .map(|i| store.save(Document::new().with_title(format!("Note {i}"))))
        .map(|doc| doc.id.expect("id should be assigned"))
        .collect::<HashSet<_>>();

    assert_eq!(generated.len(), 100);
    assert_eq!(store.len(), 100);
}

#[test]
fn test_round_trip_through_save() {
    init_tracing();
    let mut store = DocumentStore::new(InMemoryStore::new());

    let saved = store.save(
        Document::new()
            .with_title("Round trip")
            .with_content("body")
            .with_created(Utc::now()),
    );
    let id = saved.id().expect("id should be assigned").to_string();

    assert_eq!(store.find_by_id(&id), Some(saved));
}

#[test]
fn test_custom_id_generator() {
    init_tracing();
    let counter = std::sync::atomic::AtomicUsize::new(0);
    let mut store = DocumentStore::new(InMemoryStore::new()).with_id_generator(move || {
        let n = counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("doc-{n}")
    });

    let first = store.save(Document::new());
    let second = store.save(Document::new().with_id(""));

    assert_eq!(first.id(), Some("doc-0"));
    assert_eq!(second.id(), Some("doc-1"));
}

#[test]
fn test_documents_from_json() {
    init_tracing();
    let mut store = DocumentStore::new(InMemoryStore::new());

    let doc = Document::from_json(json!({
        "id": "doc1",
        "title": "Introduction to Java",
        "author": { "id": "author1", "name": "Author One" },
        "created": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    store.save(doc);

    let criteria = SearchCriteria::from_json(json!({
        "author_ids": ["author1"],
        "created_to": "2024-06-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(ids(&store.search(&criteria)), HashSet::from(["doc1"]));
}
