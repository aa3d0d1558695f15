use publicaciones_core::db::open_db_in_memory;
use publicaciones_core::{
    Degree, Person, PersonRepository, RepoError, SqlitePersonRepository, ValidationError,
};
use rusqlite::Connection;

#[test]
fn add_then_list_includes_person_exactly_once() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let person = Person::new("15.222.333-4", "Diego", "Urrutia");
    repo.add_person(&person).unwrap();

    let all = repo.list_persons().unwrap();
    let matches: Vec<_> = all.iter().filter(|p| p.rut == person.rut).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0], &person);
}

#[test]
fn duplicate_rut_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    repo.add_person(&Person::new("15.222.333-4", "Diego", "Urrutia"))
        .unwrap();
    let err = repo
        .add_person(&Person::new("15.222.333-4", "Otro", "Nombre"))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Duplicate { entity: "person", ref key } if key == "15.222.333-4"
    ));
}

#[test]
fn find_persons_matches_substring_and_orders_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    repo.add_person(&Person::new("1-9", "Rodrigo", "Contreras"))
        .unwrap();
    repo.add_person(&Person::new("2-7", "Franco", "Aravena"))
        .unwrap();
    repo.add_person(&Person::new("3-5", "Francisca", "Mora"))
        .unwrap();

    let found = repo.find_persons("Franc").unwrap();
    let names: Vec<_> = found.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(names, vec!["Francisca", "Franco"]);

    // A needle equal to the full stored name always matches.
    let exact = repo.find_persons("Rodrigo").unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].rut, "1-9");

    // An absent needle yields an empty list, not an error.
    assert!(repo.find_persons("Zacarias").unwrap().is_empty());
}

#[test]
fn find_persons_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    repo.add_person(&Person::new("1-9", "Tomas", "Saldivia"))
        .unwrap();

    assert_eq!(repo.find_persons("Tomas").unwrap().len(), 1);
    assert!(repo.find_persons("tomas").unwrap().is_empty());
}

#[test]
fn degrees_allow_duplicates_and_match_rut_by_substring() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let degree = Degree::new("Magister en Informatica", "2015-08-01", "12.345.678-5");
    repo.add_degree(&degree).unwrap();
    repo.add_degree(&degree).unwrap();
    repo.add_degree(&Degree::new(
        "Doctor en Ciencias",
        "2019-03-10",
        "20.111.222-3",
    ))
    .unwrap();

    assert_eq!(repo.list_degrees().unwrap().len(), 3);

    // Partial-ID lookup is part of the contract.
    let partial = repo.find_degrees("345.678").unwrap();
    assert_eq!(partial.len(), 2);
    assert!(partial.iter().all(|d| d.rut == "12.345.678-5"));

    let full = repo.find_degrees("20.111.222-3").unwrap();
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].name, "Doctor en Ciencias");

    assert!(repo.find_degrees("99.999").unwrap().is_empty());
}

#[test]
fn validation_blocks_empty_identity_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let err = repo
        .add_person(&Person::new("", "Diego", "Urrutia"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField {
            entity: "person",
            field: "rut"
        })
    ));

    let err = repo
        .add_degree(&Degree::new("", "2015-08-01", "1-9"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqlitePersonRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}
