//! 파일 기반 계정 디렉터리/거래 장부 어댑터 테스트.

use std::fs;

use tempfile::TempDir;

use xstream::application::ports::{AccountDirectory, TransactionLedger};
use xstream::domain::session::PermissionLevel;
use xstream::domain::store::{Account, TransactionCode, TransactionRecord};
use xstream::infrastructure::adapters::{FileAccountDirectory, FileTransactionLedger};

fn seed_accounts_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn find_reads_accounts_up_to_the_end_marker() {
    let dir = TempDir::new().unwrap();
    let path = seed_accounts_file(&dir, "UserAccounts.txt", "admin admin 0\nalice standard 5\nEND\n");
    let directory = FileAccountDirectory::new(path.clone(), path);

    let admin = directory.find("admin").await.unwrap().unwrap();
    assert!(admin.permission.is_admin());

    let missing = directory.find("ghost").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn find_fails_when_the_accounts_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("UserAccounts.txt");
    let directory = FileAccountDirectory::new(path.clone(), path);

    let err = directory.find("admin").await.unwrap_err();
    assert!(format!("{err:#}").contains("failed to read accounts"), "{err:#}");
}

#[tokio::test]
async fn insert_appends_and_rewrites_the_end_marker() {
    let dir = TempDir::new().unwrap();
    let path = seed_accounts_file(&dir, "UserAccounts.txt", "admin admin 0\nEND\n");
    let directory = FileAccountDirectory::new(path.clone(), path.clone());

    directory
        .insert(Account {
            username: "bob".into(),
            permission: PermissionLevel::new("standard"),
            credit: 0,
        })
        .await
        .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "admin admin 0\nbob standard 0\nEND\n");
}

#[tokio::test]
async fn insert_rejects_a_duplicate_username() {
    let dir = TempDir::new().unwrap();
    let path = seed_accounts_file(&dir, "UserAccounts.txt", "admin admin 0\nEND\n");
    let directory = FileAccountDirectory::new(path.clone(), path);

    let err = directory
        .insert(Account {
            username: "admin".into(),
            permission: PermissionLevel::new("standard"),
            credit: 0,
        })
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("already exists"), "{err:#}");
}

#[tokio::test]
async fn remove_deletes_exactly_one_account() {
    let dir = TempDir::new().unwrap();
    let path = seed_accounts_file(
        &dir,
        "UserAccounts.txt",
        "admin admin 0\nbob standard 7\nEND\n",
    );
    let directory = FileAccountDirectory::new(path.clone(), path.clone());

    directory.remove("bob").await.unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "admin admin 0\nEND\n");

    let err = directory.remove("bob").await.unwrap_err();
    assert!(format!("{err:#}").contains("unknown account"), "{err:#}");
}

#[tokio::test]
async fn add_credit_persists_the_new_balance() {
    let dir = TempDir::new().unwrap();
    let path = seed_accounts_file(&dir, "UserAccounts.txt", "alice standard 100\nEND\n");
    let directory = FileAccountDirectory::new(path.clone(), path.clone());

    let balance = directory.add_credit("alice", 250).await.unwrap();
    assert_eq!(balance, 350);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "alice standard 350\nEND\n"
    );
}

#[tokio::test]
async fn separate_write_path_leaves_the_source_file_untouched() {
    let dir = TempDir::new().unwrap();
    let read_path = seed_accounts_file(&dir, "current.txt", "admin admin 0\nEND\n");
    let write_path = dir.path().join("next.txt");
    let directory = FileAccountDirectory::new(read_path.clone(), write_path.clone());

    directory
        .insert(Account {
            username: "bob".into(),
            permission: PermissionLevel::new("standard"),
            credit: 0,
        })
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&read_path).unwrap(), "admin admin 0\nEND\n");
    assert_eq!(
        fs::read_to_string(&write_path).unwrap(),
        "admin admin 0\nbob standard 0\nEND\n"
    );
}

#[tokio::test]
async fn ledger_appends_records_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("DailyTransactions.txt");
    let ledger = FileTransactionLedger::new(path.clone());

    ledger
        .append(&TransactionRecord::new(TransactionCode::Sell, "Unit A"))
        .await
        .unwrap();
    ledger
        .append(&TransactionRecord::new(TransactionCode::EndOfSession, "admin"))
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "03 Unit A\n00 admin\n"
    );
}

#[tokio::test]
async fn ledger_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledgers").join("today.txt");
    let ledger = FileTransactionLedger::new(path.clone());

    ledger
        .append(&TransactionRecord::new(TransactionCode::Buy, "Unit B"))
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "04 Unit B\n");
}
