use dealbook_core::db::open_db_in_memory;
use dealbook_core::{DealPatch, DealRepository, DealStage, NewDeal, SqliteDealRepository};

fn new_deal(name: &str, company_id: &str, amount: f64) -> NewDeal {
    NewDeal {
        name: name.to_string(),
        company_id: company_id.to_string(),
        amount,
        stage: DealStage::New,
        close_date: 1_900_000_000_000,
        owner: "Michael Chen".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    let created = repo
        .create_deal(&new_deal("Enterprise License Renewal", "comp-1", 150_000.0))
        .unwrap();
    assert_eq!(created.id, "deal-1");
    assert_eq!(created.stage, DealStage::New);

    let loaded = repo.get_deal(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn stage_and_amount_update_keeps_other_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    let created = repo
        .create_deal(&new_deal("Cloud Migration", "comp-2", 250_000.0))
        .unwrap();

    let patch = DealPatch {
        stage: Some(DealStage::Negotiation),
        amount: Some(275_000.0),
        ..DealPatch::default()
    };
    let updated = repo.update_deal(&created.id, &patch).unwrap().unwrap();
    assert_eq!(updated.stage, DealStage::Negotiation);
    assert_eq!(updated.amount, 275_000.0);
    assert_eq!(updated.name, "Cloud Migration");
    assert_eq!(updated.close_date, created.close_date);
}

#[test]
fn update_missing_deal_is_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    let patch = DealPatch {
        stage: Some(DealStage::Won),
        ..DealPatch::default()
    };
    assert!(repo.update_deal("deal-7", &patch).unwrap().is_none());
    assert!(repo.list_deals().unwrap().is_empty());
}

#[test]
fn negative_amount_is_stored_as_given() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    let created = repo
        .create_deal(&new_deal("Refund Adjustment", "comp-1", -500.0))
        .unwrap();
    let loaded = repo.get_deal(&created.id).unwrap().unwrap();
    assert_eq!(loaded.amount, -500.0);
}

#[test]
fn deals_of_company_returns_exactly_matching_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    let first = repo
        .create_deal(&new_deal("First", "comp-1", 10_000.0))
        .unwrap();
    let second = repo
        .create_deal(&new_deal("Second", "comp-1", 20_000.0))
        .unwrap();
    repo.create_deal(&new_deal("Other", "comp-2", 30_000.0))
        .unwrap();

    let matching = repo.deals_of_company("comp-1").unwrap();
    let ids: Vec<&str> = matching.iter().map(|deal| deal.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
}

#[test]
fn delete_deal_does_not_touch_activities_or_counters() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    let first = repo
        .create_deal(&new_deal("First", "comp-1", 10_000.0))
        .unwrap();
    assert!(repo.delete_deal(&first.id).unwrap());

    let next = repo
        .create_deal(&new_deal("Second", "comp-1", 20_000.0))
        .unwrap();
    assert_ne!(next.id, first.id);
}

#[test]
fn list_is_sorted_by_created_at_descending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDealRepository::new(&conn);

    for name in ["First", "Second", "Third"] {
        repo.create_deal(&new_deal(name, "comp-1", 1_000.0)).unwrap();
    }

    let listed = repo.list_deals().unwrap();
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}
