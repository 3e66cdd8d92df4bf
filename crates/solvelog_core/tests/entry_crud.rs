use chrono::{Duration, Utc};
use solvelog_core::db::open_db_in_memory;
use solvelog_core::{
    Details, EntryRepository, Idea, JournalEntry, KeyLearnings, RepoError, SelfReflection,
    SqliteEntryRepository,
};

fn sample_entry(id: &str) -> JournalEntry {
    JournalEntry {
        id: id.to_string(),
        problem_name: "Two Sum".to_string(),
        problem_id: "1".to_string(),
        date_done: Utc::now(),
        topic: "Array".to_string(),
        difficulty: "Easy".to_string(),
        details: None,
    }
}

#[test]
fn create_and_list_roundtrip_preserves_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let entry = JournalEntry {
        details: Some(Details {
            inputs: "nums, target".to_string(),
            outputs: "indices of the two addends".to_string(),
            ideas: vec![Idea {
                title: "hash map".to_string(),
                pros: "single pass".to_string(),
                cons: "extra memory".to_string(),
            }],
            chosen_idea: "hash map".to_string(),
            key_learnings: KeyLearnings {
                core_idea: "complement lookup".to_string(),
                ..KeyLearnings::default()
            },
            self_reflection: SelfReflection {
                confidence_level: "high".to_string(),
                ..SelfReflection::default()
            },
            ..Details::default()
        }),
        ..sample_entry("1")
    };

    repo.create_entry(&entry).unwrap();

    let listed = repo.list_entries().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], entry);
}

#[test]
fn entry_without_details_roundtrips_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let entry = sample_entry("1");
    repo.create_entry(&entry).unwrap();

    let listed = repo.list_entries().unwrap();
    assert_eq!(listed[0], entry);
    assert!(listed[0].details.is_none());
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let listed = repo.list_entries().unwrap();
    assert!(listed.is_empty());
}

#[test]
fn duplicate_id_is_rejected_with_semantic_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    repo.create_entry(&sample_entry("1")).unwrap();
    let err = repo.create_entry(&sample_entry("1")).unwrap_err();

    assert!(matches!(err, RepoError::DuplicateId(id) if id == "1"));
    assert_eq!(repo.list_entries().unwrap().len(), 1);
}

#[test]
fn list_orders_by_date_done_descending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let now = Utc::now();
    let mut oldest = sample_entry("a");
    oldest.date_done = now - Duration::days(2);
    let mut middle = sample_entry("b");
    middle.date_done = now - Duration::days(1);
    let mut newest = sample_entry("c");
    newest.date_done = now;

    repo.create_entry(&oldest).unwrap();
    repo.create_entry(&newest).unwrap();
    repo.create_entry(&middle).unwrap();

    let ids: Vec<String> = repo
        .list_entries()
        .unwrap()
        .into_iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn entries_persist_across_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solvelog.db");

    {
        let conn = solvelog_core::db::open_db(&path).unwrap();
        let repo = SqliteEntryRepository::new(&conn);
        repo.create_entry(&sample_entry("1")).unwrap();
    }

    let conn = solvelog_core::db::open_db(&path).unwrap();
    let repo = SqliteEntryRepository::new(&conn);
    let listed = repo.list_entries().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "1");
}
