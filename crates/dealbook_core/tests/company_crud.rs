use dealbook_core::db::open_db_in_memory;
use dealbook_core::{
    CompanyPatch, CompanyRepository, CompanyStatus, NewCompany, SqliteCompanyRepository,
};
use std::collections::HashSet;

fn new_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        industry: "Technology".to_string(),
        website: "example.com".to_string(),
        size: "50-200".to_string(),
        status: CompanyStatus::Lead,
        owner: "Sarah Johnson".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let created = repo.create_company(&new_company("Acme Corp")).unwrap();
    assert_eq!(created.id, "comp-1");
    assert_eq!(created.name, "Acme Corp");
    assert_eq!(created.status, CompanyStatus::Lead);

    let loaded = repo.get_company(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn get_missing_id_is_none_not_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    assert!(repo.get_company("comp-999").unwrap().is_none());
}

#[test]
fn created_ids_are_unique_across_deletes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let mut seen = HashSet::new();
    let first = repo.create_company(&new_company("First")).unwrap();
    seen.insert(first.id.clone());

    assert!(repo.delete_company(&first.id).unwrap());

    for name in ["Second", "Third", "Fourth"] {
        let created = repo.create_company(&new_company(name)).unwrap();
        assert!(seen.insert(created.id.clone()), "id reused: {}", created.id);
    }
}

#[test]
fn update_merges_only_present_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let created = repo.create_company(&new_company("Acme Corp")).unwrap();
    let patch = CompanyPatch {
        status: Some(CompanyStatus::Customer),
        owner: Some("Michael Chen".to_string()),
        ..CompanyPatch::default()
    };

    let updated = repo.update_company(&created.id, &patch).unwrap().unwrap();
    assert_eq!(updated.status, CompanyStatus::Customer);
    assert_eq!(updated.owner, "Michael Chen");
    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.industry, created.industry);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_missing_id_is_none_and_mutates_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let created = repo.create_company(&new_company("Acme Corp")).unwrap();
    let patch = CompanyPatch {
        name: Some("Renamed".to_string()),
        ..CompanyPatch::default()
    };

    assert!(repo.update_company("comp-999", &patch).unwrap().is_none());

    let listed = repo.list_companies().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn empty_patch_returns_record_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let created = repo.create_company(&new_company("Acme Corp")).unwrap();
    let unchanged = repo
        .update_company(&created.id, &CompanyPatch::default())
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, created);
}

#[test]
fn delete_removes_exactly_one_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let first = repo.create_company(&new_company("First")).unwrap();
    let second = repo.create_company(&new_company("Second")).unwrap();

    assert!(repo.delete_company(&first.id).unwrap());
    let listed = repo.list_companies().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);

    assert!(!repo.delete_company(&first.id).unwrap());
    assert_eq!(repo.list_companies().unwrap().len(), 1);
}

#[test]
fn list_is_sorted_by_created_at_descending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    for name in ["First", "Second", "Third"] {
        repo.create_company(&new_company(name)).unwrap();
    }

    let listed = repo.list_companies().unwrap();
    assert_eq!(listed.len(), 3);
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn returned_records_are_snapshots() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::new(&conn);

    let created = repo.create_company(&new_company("Acme Corp")).unwrap();
    let mut listed = repo.list_companies().unwrap();
    listed[0].name = "Mutated Locally".to_string();

    let reloaded = repo.get_company(&created.id).unwrap().unwrap();
    assert_eq!(reloaded.name, "Acme Corp");
}
