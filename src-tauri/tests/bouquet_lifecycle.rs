use bouquet_shop_lib::db::models::{Bouquet, NewBouquet};
use bouquet_shop_lib::db::operations::DbOperations;
use bouquet_shop_lib::init_state;
use bouquet_shop_lib::settings::AppSettings;
use bouquet_shop_lib::shell::{actions, BouquetForm};

fn rose_form() -> BouquetForm {
    BouquetForm {
        name: "Rose Bundle".to_string(),
        flower_type: "Rose".to_string(),
        quantity: "12".to_string(),
        price: "29.99".to_string(),
        ..BouquetForm::default()
    }
}

#[test]
fn test_add_search_delete_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let state = init_state(dir.path()).unwrap();

    assert!(dir.path().join("bouquet_shop.db").exists());

    actions::add_bouquet(&state.db, &rose_form()).unwrap();

    let expected = Bouquet {
        id: 1,
        name: "Rose Bundle".to_string(),
        flower_type: "Rose".to_string(),
        quantity: 12,
        price: 29.99,
    };
    assert_eq!(DbOperations::list_all(&state.db).unwrap(), vec![expected.clone()]);
    assert_eq!(DbOperations::search(&state.db, "Rose").unwrap(), vec![expected]);

    let delete = BouquetForm {
        id: "1".to_string(),
        ..BouquetForm::default()
    };
    let outcome = actions::delete_bouquet(&state.db, &delete).unwrap();
    assert!(outcome.clear_fields);
    assert!(DbOperations::list_all(&state.db).unwrap().is_empty());
}

#[test]
fn test_update_through_form() {
    let dir = tempfile::tempdir().unwrap();
    let state = init_state(dir.path()).unwrap();

    actions::add_bouquet(&state.db, &rose_form()).unwrap();
    DbOperations::add(&state.db, &NewBouquet::new("Lily Vase", "Lily", 3, 40.0)).unwrap();

    let edit = BouquetForm {
        id: "1".to_string(),
        quantity: "24".to_string(),
        price: "55".to_string(),
        ..rose_form()
    };
    actions::update_bouquet(&state.db, &edit).unwrap();

    let all = DbOperations::list_all(&state.db).unwrap();
    assert_eq!(all[0], NewBouquet::new("Rose Bundle", "Rose", 24, 55.0).with_id(1));
    assert_eq!(all[1], NewBouquet::new("Lily Vase", "Lily", 3, 40.0).with_id(2));
}

#[test]
fn test_settings_choose_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = AppSettings {
        database_file: "data/stock.db".to_string(),
        ..AppSettings::default()
    };
    settings.save(dir.path()).unwrap();

    let state = init_state(dir.path()).unwrap();
    actions::add_bouquet(&state.db, &rose_form()).unwrap();

    assert_eq!(state.db.path(), dir.path().join("data").join("stock.db"));
    assert!(state.db.path().exists());
}

#[test]
fn test_bad_logging_level_stops_startup() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = AppSettings::default();
    settings.logging.level = "bouquet_shop_lib=loudest".to_string();
    settings.save(dir.path()).unwrap();

    let err = init_state(dir.path()).err().unwrap();

    assert!(format!("{:#}", err).contains("invalid logging level"));
    assert!(!dir.path().join("bouquet_shop.db").exists());
}
