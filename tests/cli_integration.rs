use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn add(dir: &Path, surname: &str, name: &str) {
    phonebook(dir)
        .args(["add", "--surname", surname, "--name", name])
        .args(["--mobile-phone", "+7 900 000-00-00"])
        .assert()
        .success();
}

#[test]
fn add_list_search_delete_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    phonebook(dir.path())
        .args(["add", "--surname", "Иванов", "--name", "Иван"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added (1): Иванов Иван"))
        .stdout(predicate::str::contains("Saved 1 record(s)"));
    add(dir.path(), "Петров", "Пётр");

    phonebook(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1, record 2"))
        .stdout(predicate::str::contains("Петров"));

    phonebook(dir.path())
        .args(["search", "--surname", "Петров"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 2 (id 2)"))
        .stdout(predicate::str::contains("Иванов").not());

    phonebook(dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record deleted (1): Иванов Иван"));

    let saved = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(!saved.contains("Иванов"));
    assert!(saved.contains("\"id\": 2"));
}

#[test]
fn store_keeps_cyrillic_keys_and_values_literal() {
    let dir = tempfile::tempdir().unwrap();
    add(dir.path(), "Сидоров", "Сидор");

    let saved = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(saved.contains("\"Фамилия\": \"Сидоров\""));
    assert!(saved.contains("\"Сотовый_телефон\": \"+7 900 000-00-00\""));
    assert!(!saved.contains("\\u"));

    let id = saved.find("\"id\"").unwrap();
    let surname = saved.find("\"Фамилия\"").unwrap();
    let mobile = saved.find("\"Сотовый_телефон\"").unwrap();
    assert!(id < surname && surname < mobile);
}

#[test]
fn missing_store_warns_and_read_only_commands_do_not_create_it() {
    let dir = tempfile::tempdir().unwrap();

    phonebook(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("created").not())
        .stdout(predicate::str::contains("No records found."))
        .stderr(predicate::str::contains("WARN").not());

    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn read_only_commands_leave_existing_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let compact = r#"[{"id":1,"Фамилия":"Иванов","Имя":"Иван","Отчество":"","Организация":"","Рабочий_телефон":"","Сотовый_телефон":""}]"#;
    let path = dir.path().join("data.json");
    fs::write(&path, compact).unwrap();

    phonebook(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved").not());
    phonebook(dir.path())
        .args(["search", "--surname", "Иванов"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved").not());

    assert_eq!(fs::read_to_string(&path).unwrap(), compact);

    phonebook(dir.path())
        .args(["add", "--surname", "Петров"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 record(s)"));
    assert_ne!(fs::read_to_string(&path).unwrap(), compact);
}

#[test]
fn malformed_store_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.json"), "{ not json").unwrap();

    phonebook(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be read"))
        .stderr(predicate::str::contains("WARN").not())
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn invalid_page_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    add(dir.path(), "Иванов", "Иван");

    phonebook(dir.path())
        .args(["list", "--page", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No such page: 3"));
}

#[test]
fn invalid_position_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    add(dir.path(), "Иванов", "Иван");
    let before = fs::read_to_string(dir.path().join("data.json")).unwrap();

    phonebook(dir.path())
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid position: 5"));

    let after = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn file_flag_overrides_location() {
    let dir = tempfile::tempdir().unwrap();
    let custom = dir.path().join("contacts.json");

    phonebook(dir.path())
        .args(["add", "--surname", "Иванов", "--file"])
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn interactive_session_pages_and_saves_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    for i in 1..=5 {
        add(dir.path(), &format!("Фамилия{}", i), &format!("Имя{}", i));
    }

    phonebook(dir.path())
        .write_stdin("1\n2\n7\n0\n2\nНовиков\nНиколай\n\n\n\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages: 2"))
        .stdout(predicate::str::contains("Page 2, record 1"))
        .stdout(predicate::str::contains("Фамилия5"))
        .stdout(predicate::str::contains("No such page"))
        .stdout(predicate::str::contains("Saved 6 record(s)"));

    let saved = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(saved.contains("\"id\": 6"));
    assert!(saved.contains("Новиков"));
}

#[test]
fn interactive_session_saves_at_end_of_input() {
    let dir = tempfile::tempdir().unwrap();

    phonebook(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 0 record(s)"));

    let saved = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert_eq!(saved.trim(), "[]");
}

#[test]
fn config_page_size_changes_paging() {
    let dir = tempfile::tempdir().unwrap();

    phonebook(dir.path())
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    phonebook(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 2"))
        .stdout(predicate::str::contains("data-file = data.json"));

    for i in 1..=3 {
        add(dir.path(), &format!("Фамилия{}", i), "Имя");
    }
    phonebook(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2, record 1"));
}

#[test]
fn init_creates_empty_store_once() {
    let dir = tempfile::tempdir().unwrap();

    phonebook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty store"))
        .stdout(predicate::str::contains("not found").not());

    phonebook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
