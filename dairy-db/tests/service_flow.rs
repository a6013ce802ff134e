//! Service-level tests over an in-memory database.

use std::sync::Arc;

use chrono::NaiveDate;
use dairy_core::{LedgerError, MilkSession, UserId};
use dairy_db::{
    AccountService, Database, ExpenseInput, ExpenseService, MilkRecordInput, MilkService,
    RateService, StatsService, WithdrawalInput, WithdrawalService,
};
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory SQLite; the pool must stay at one connection because every
/// pooled connection would otherwise get its own empty database.
async fn test_database() -> Arc<Database> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    let database = Arc::new(Database::from_pool(pool));
    database.init_schema().await.expect("apply schema");
    database
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("date literal")
}

fn milk_input(litres: f64, fat: f64) -> MilkRecordInput {
    MilkRecordInput {
        date: date("2025-06-01"),
        session: MilkSession::Morning,
        litres,
        fat_percentage: fat,
    }
}

async fn register(database: &Arc<Database>, phone: &str) -> UserId {
    let accounts = AccountService::new(database.clone());
    let user = accounts
        .signup(phone, "argon2-hash-placeholder")
        .await
        .expect("signup");
    UserId(user.id)
}

#[tokio::test]
async fn test_duplicate_phone_is_a_conflict() {
    let database = test_database().await;
    let accounts = AccountService::new(database.clone());

    accounts
        .signup("9876543210", "hash-a")
        .await
        .expect("first signup");
    let second = accounts.signup("9876543210", "hash-b").await;

    assert!(matches!(second, Err(LedgerError::DuplicatePhone)));
}

#[tokio::test]
async fn test_rate_snapshot_survives_rate_change() {
    let database = test_database().await;
    let rates = RateService::new(database.clone());
    let milk = MilkService::new(database.clone());
    let user = register(&database, "9876543210").await;

    rates.set_rate(9.0).await.expect("set rate");
    let first = milk
        .add_record(user, milk_input(10.0, 5.0))
        .await
        .expect("add record");
    assert_eq!(first.amount, 450);
    assert_eq!(first.rate_per_fat, 9.0);

    rates.set_rate(12.0).await.expect("raise rate");

    let stored = milk.list_records(user).await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].rate_per_fat, 9.0);
    assert_eq!(stored[0].amount, 450);

    // new records pick up the new rate
    let second = milk
        .add_record(user, milk_input(10.0, 5.0))
        .await
        .expect("add second record");
    assert_eq!(second.rate_per_fat, 12.0);
    assert_eq!(second.amount, 600);
}

#[tokio::test]
async fn test_zero_rate_blocks_earnings_entry() {
    let database = test_database().await;
    let milk = MilkService::new(database.clone());
    let user = register(&database, "9876543210").await;

    // fresh database: config row auto-created with rate 0
    let result = milk.add_record(user, milk_input(10.0, 5.0)).await;
    assert!(matches!(result, Err(LedgerError::RateUnset)));
}

#[tokio::test]
async fn test_balance_may_go_negative() {
    let database = test_database().await;
    let rates = RateService::new(database.clone());
    let milk = MilkService::new(database.clone());
    let expenses = ExpenseService::new(database.clone());
    let withdrawals = WithdrawalService::new(database.clone());
    let stats = StatsService::new(database.clone());
    let user = register(&database, "9876543210").await;

    rates.set_rate(10.0).await.expect("set rate");
    milk.add_record(user, milk_input(10.0, 5.0))
        .await
        .expect("milk record"); // 500
    expenses
        .add_expense(
            user,
            ExpenseInput {
                amount: 200.0,
                description: "cattle feed".to_string(),
                date: date("2025-06-02"),
            },
        )
        .await
        .expect("expense");
    withdrawals
        .add_withdrawal(
            user,
            WithdrawalInput {
                amount: 100.0,
                date: date("2025-06-03"),
            },
        )
        .await
        .expect("withdrawal");

    let totals = stats.dashboard_totals(user).await.expect("totals");
    assert_eq!(totals.total_earning, 500);
    assert_eq!(totals.total_expenses, 200.0);
    assert_eq!(totals.total_withdrawn, 100.0);
    assert_eq!(totals.available_balance, 200.0);

    withdrawals
        .add_withdrawal(
            user,
            WithdrawalInput {
                amount: 300.0,
                date: date("2025-06-04"),
            },
        )
        .await
        .expect("overdraft withdrawal");

    let totals = stats.dashboard_totals(user).await.expect("totals");
    assert_eq!(totals.available_balance, -100.0);
}

#[tokio::test]
async fn test_cross_user_mutation_is_not_found() {
    let database = test_database().await;
    let rates = RateService::new(database.clone());
    let milk = MilkService::new(database.clone());
    let owner = register(&database, "9876543210").await;
    let intruder = register(&database, "9876543211").await;

    rates.set_rate(9.0).await.expect("set rate");
    let record = milk
        .add_record(owner, milk_input(10.0, 5.0))
        .await
        .expect("add record");

    let update = milk
        .update_record(intruder, record.id, milk_input(1.0, 1.0))
        .await;
    assert!(matches!(update, Err(LedgerError::NotFound(_))));

    let delete = milk.delete_record(intruder, record.id).await;
    assert!(matches!(delete, Err(LedgerError::NotFound(_))));

    // the owner's row is untouched
    let stored = milk.list_records(owner).await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount, record.amount);
}

#[tokio::test]
async fn test_delete_account_removes_dependents() {
    let database = test_database().await;
    let accounts = AccountService::new(database.clone());
    let rates = RateService::new(database.clone());
    let milk = MilkService::new(database.clone());
    let expenses = ExpenseService::new(database.clone());
    let user = register(&database, "9876543210").await;

    rates.set_rate(9.0).await.expect("set rate");
    milk.add_record(user, milk_input(10.0, 5.0))
        .await
        .expect("milk record");
    expenses
        .add_expense(
            user,
            ExpenseInput {
                amount: 50.0,
                description: "vet visit".to_string(),
                date: date("2025-06-02"),
            },
        )
        .await
        .expect("expense");

    accounts.delete_account(user).await.expect("delete account");

    for table in ["users", "milk_records", "expenses", "withdrawals"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(database.pool())
            .await
            .expect("count");
        assert_eq!(count, 0, "{table} not empty after account deletion");
    }
}
