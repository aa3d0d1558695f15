use publicaciones_core::db::open_db_in_memory;
use publicaciones_core::{Authorship, ServiceError, SqlitePublicationService};

#[test]
fn initialize_seeds_demo_data_once() {
    let conn = open_db_in_memory().unwrap();
    let service = SqlitePublicationService::try_new(&conn).unwrap();

    service.initialize().unwrap();

    assert_eq!(service.list_persons().unwrap().len(), 4);
    assert_eq!(service.list_publications().unwrap().len(), 3);
    assert_eq!(service.list_journals().unwrap().len(), 3);
    assert_eq!(service.list_degrees().unwrap().len(), 5);

    // Every seeded publication is linked to a seeded journal.
    for publication in service.list_publications().unwrap() {
        let code = publication.journal_code.expect("seeded journal link");
        let journal = service.find_journal_by_code(&code).unwrap();
        assert!(journal.is_some(), "no journal for code {code}");
    }
}

#[test]
fn second_initialize_fails_and_leaves_data_untouched() {
    let conn = open_db_in_memory().unwrap();
    let service = SqlitePublicationService::try_new(&conn).unwrap();

    service.initialize().unwrap();
    let persons_before = service.list_persons().unwrap();
    let publications_before = service.list_publications().unwrap();
    let journals_before = service.list_journals().unwrap();
    let degrees_before = service.list_degrees().unwrap();

    let err = service.initialize().unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyInitialized));

    assert_eq!(service.list_persons().unwrap(), persons_before);
    assert_eq!(service.list_publications().unwrap(), publications_before);
    assert_eq!(service.list_journals().unwrap(), journals_before);
    assert_eq!(service.list_degrees().unwrap(), degrees_before);
}

#[test]
fn seeded_authorship_scenario_resolves_expected_counts() {
    let conn = open_db_in_memory().unwrap();
    let service = SqlitePublicationService::try_new(&conn).unwrap();
    service.initialize().unwrap();

    let lufe = seeded_rut(&service, "Lufe");
    let tomas = seeded_rut(&service, "Tomas");
    let franco = seeded_rut(&service, "Franco");
    let rodrigo = seeded_rut(&service, "Rodrigo");

    let mut publications = service.list_publications().unwrap();
    publications.sort_by_key(|p| p.id);
    let (pub1, pub2, pub3) = (
        publications[0].id.unwrap(),
        publications[1].id.unwrap(),
        publications[2].id.unwrap(),
    );

    for (rut, id) in [
        (lufe.as_str(), pub3),
        (lufe.as_str(), pub2),
        (tomas.as_str(), pub1),
        (tomas.as_str(), pub2),
        (tomas.as_str(), pub3),
        (franco.as_str(), pub3),
    ] {
        service
            .add_authorship(&Authorship::new(rut, id, "2021-05-01"))
            .unwrap();
    }

    assert_eq!(service.publications_by_author(&lufe).unwrap().len(), 2);
    assert_eq!(service.publications_by_author(&tomas).unwrap().len(), 3);
    assert_eq!(service.publications_by_author(&franco).unwrap().len(), 1);
    assert!(service.publications_by_author(&rodrigo).unwrap().is_empty());
}

#[test]
fn authors_publications_resolve_to_all_seeded_journals() {
    let conn = open_db_in_memory().unwrap();
    let service = SqlitePublicationService::try_new(&conn).unwrap();
    service.initialize().unwrap();

    let tomas = seeded_rut(&service, "Tomas");
    for publication in service.list_publications().unwrap() {
        service
            .add_authorship(&Authorship::new(
                tomas.as_str(),
                publication.id.unwrap(),
                "2021-05-01",
            ))
            .unwrap();
    }

    let mut resolved_names: Vec<String> = service
        .publications_by_author(&tomas)
        .unwrap()
        .into_iter()
        .map(|slot| slot.expect("seeded publication exists"))
        .map(|publication| {
            let code = publication.journal_code.expect("seeded journal link");
            service
                .find_journal_by_code(&code)
                .unwrap()
                .expect("seeded journal exists")
                .name
        })
        .collect();
    resolved_names.sort();

    let mut seeded_names: Vec<String> = service
        .list_journals()
        .unwrap()
        .into_iter()
        .map(|journal| journal.name)
        .collect();
    seeded_names.sort();

    assert_eq!(resolved_names, seeded_names);
}

#[test]
fn facade_find_operations_work_over_seeded_data() {
    let conn = open_db_in_memory().unwrap();
    let service = SqlitePublicationService::try_new(&conn).unwrap();
    service.initialize().unwrap();

    // Name finds are ordered ascending by first name.
    let all = service.find_persons("").unwrap();
    let names: Vec<_> = all.iter().map(|p| p.first_name.clone()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    // Degree lookup tolerates partial ruts.
    let lufe = seeded_rut(&service, "Lufe");
    let partial = &lufe[..lufe.len() - 2];
    let degrees = service.find_degrees(partial).unwrap();
    assert_eq!(degrees.len(), 2);

    // Journal lookups return None on zero matches instead of failing.
    assert!(service.find_journal_by_name("Nature").unwrap().is_none());
    assert!(service
        .find_journal_by_name("Revista Chilena")
        .unwrap()
        .is_some());
}

fn seeded_rut(service: &SqlitePublicationService<'_>, first_name: &str) -> String {
    let found = service.find_persons(first_name).unwrap();
    assert_eq!(found.len(), 1, "expected one seeded person named {first_name}");
    found[0].rut.clone()
}
