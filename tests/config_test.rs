//! Integration tests for configuration loading and `open`.

use std::io::Write;

use assert_matches::assert_matches;
use formstore::config::{load_config, load_config_or_default};
use formstore::{Error, UserId};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_config_from_file() {
    let file = write_config(
        r#"
        [database]
        path = "forms.db"
        pool_size = 2
        busy_timeout_ms = 250

        [logging]
        level = "formstore=debug"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.database.path, "forms.db");
    assert_eq!(config.database.pool_size, 2);
    assert_eq!(config.database.busy_timeout_ms, 250);
    assert_eq!(config.logging.level, "formstore=debug");
}

#[test]
fn load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn load_config_or_default_prefers_explicit_path() {
    let file = write_config("[database]\npool_size = 7\n");
    let config = load_config_or_default(Some(file.path())).unwrap();
    assert_eq!(config.database.pool_size, 7);
}

#[test]
fn invalid_config_is_rejected() {
    let file = write_config("[database]\npool_size = 0\n");
    assert!(load_config(file.path()).is_err());
}

#[test]
fn open_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("forms.db");
    let file = write_config(&format!(
        "[database]\npath = {:?}\n",
        db_path.to_string_lossy()
    ));
    let config = load_config(file.path()).unwrap();

    let store = formstore::open(&config.database).unwrap();
    assert!(db_path.exists());

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute("INSERT INTO users (username) VALUES ('alice')", [])
        .unwrap();
    let user = UserId::from(conn.last_insert_rowid());
    drop(conn);

    let form = store.insert_form(user, "Survey", None, "{}").unwrap();
    assert_eq!(store.get_form(form.id).unwrap().name, "Survey");

    // Reopening runs no migrations twice and sees the same data.
    let reopened = formstore::open(&config.database).unwrap();
    assert_eq!(reopened.get_forms_by_user(user).unwrap().len(), 1);
    assert_matches!(
        reopened.insert_form(UserId::from(99), "x", None, "{}"),
        Err(Error::InvalidUserId(_))
    );
}
