use dealbook_core::db::open_db_in_memory;
use dealbook_core::{
    CompanyRepository, CompanyStatus, ContactPatch, ContactRepository, NewCompany, NewContact,
    SqliteCompanyRepository, SqliteContactRepository,
};

fn new_contact(first: &str, last: &str, company_id: &str, tags: &[&str]) -> NewContact {
    NewContact {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        phone: "+1-555-0100".to_string(),
        title: "Manager".to_string(),
        company_id: company_id.to_string(),
        owner: "Emily Rodriguez".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn new_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        industry: "Retail".to_string(),
        website: "example.com".to_string(),
        size: "200-500".to_string(),
        status: CompanyStatus::Prospect,
        owner: "David Kim".to_string(),
    }
}

#[test]
fn create_preserves_tag_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let created = repo
        .create_contact(&new_contact(
            "John",
            "Smith",
            "comp-1",
            &["Decision Maker", "Executive", "Technical"],
        ))
        .unwrap();
    assert_eq!(created.id, "cont-1");

    let loaded = repo.get_contact(&created.id).unwrap().unwrap();
    assert_eq!(
        loaded.tags,
        vec!["Decision Maker", "Executive", "Technical"]
    );
}

#[test]
fn tags_patch_replaces_whole_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let created = repo
        .create_contact(&new_contact("John", "Smith", "comp-1", &["Old", "Tags"]))
        .unwrap();

    let patch = ContactPatch {
        tags: Some(vec!["Fresh".to_string()]),
        ..ContactPatch::default()
    };
    let updated = repo.update_contact(&created.id, &patch).unwrap().unwrap();
    assert_eq!(updated.tags, vec!["Fresh"]);
    assert_eq!(updated.first_name, "John");
}

#[test]
fn update_without_tags_keeps_existing_tags() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let created = repo
        .create_contact(&new_contact("John", "Smith", "comp-1", &["Keep", "Me"]))
        .unwrap();

    let patch = ContactPatch {
        title: Some("VP Sales".to_string()),
        ..ContactPatch::default()
    };
    let updated = repo.update_contact(&created.id, &patch).unwrap().unwrap();
    assert_eq!(updated.title, "VP Sales");
    assert_eq!(updated.tags, vec!["Keep", "Me"]);
}

#[test]
fn update_missing_contact_is_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let patch = ContactPatch {
        title: Some("VP Sales".to_string()),
        ..ContactPatch::default()
    };
    assert!(repo.update_contact("cont-42", &patch).unwrap().is_none());
    assert!(repo.list_contacts().unwrap().is_empty());
}

#[test]
fn contacts_of_company_filters_exactly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    repo.create_contact(&new_contact("John", "Smith", "comp-1", &[]))
        .unwrap();
    repo.create_contact(&new_contact("Emma", "Wilson", "comp-1", &[]))
        .unwrap();
    repo.create_contact(&new_contact("Robert", "Brown", "comp-2", &[]))
        .unwrap();

    let matching = repo.contacts_of_company("comp-1").unwrap();
    assert_eq!(matching.len(), 2);
    assert!(matching
        .iter()
        .all(|contact| contact.company_id == "comp-1"));

    assert!(repo.contacts_of_company("comp-999").unwrap().is_empty());
}

#[test]
fn deleting_company_leaves_dangling_contact_reference() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::new(&conn);
    let contacts = SqliteContactRepository::new(&conn);

    let company = companies
        .create_company(&new_company("Retail Masters"))
        .unwrap();
    let contact = contacts
        .create_contact(&new_contact("Jennifer", "Lee", &company.id, &["Executive"]))
        .unwrap();

    assert!(companies.delete_company(&company.id).unwrap());
    assert!(companies.get_company(&company.id).unwrap().is_none());

    let survivor = contacts.get_contact(&contact.id).unwrap().unwrap();
    assert_eq!(survivor.company_id, company.id);
    assert_eq!(contacts.contacts_of_company(&company.id).unwrap().len(), 1);
}

#[test]
fn delete_contact_removes_its_tags_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let doomed = repo
        .create_contact(&new_contact("John", "Smith", "comp-1", &["Gone"]))
        .unwrap();
    let kept = repo
        .create_contact(&new_contact("Emma", "Wilson", "comp-1", &["Stays"]))
        .unwrap();

    assert!(repo.delete_contact(&doomed.id).unwrap());
    assert!(!repo.delete_contact(&doomed.id).unwrap());

    let survivor = repo.get_contact(&kept.id).unwrap().unwrap();
    assert_eq!(survivor.tags, vec!["Stays"]);
}
