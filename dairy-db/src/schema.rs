//! SQLite schema for the dairy ledger

/// Complete schema, applied idempotently at init.
///
/// `fat_rate_config` holds exactly one row (id forced to 1); a fresh
/// database has none and the rate service creates it with rate 0 on first
/// read. All owned tables cascade on user deletion as a backstop to the
/// explicit cascade in the account service.
pub const DAIRY_SCHEMA: &str = r#"
-- ============================================
-- Users
-- ============================================
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    phone_number  TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

-- ============================================
-- Global fat rate (single row)
-- ============================================
CREATE TABLE IF NOT EXISTS fat_rate_config (
    id           INTEGER PRIMARY KEY CHECK (id = 1),
    rate_per_fat REAL NOT NULL DEFAULT 0 CHECK (rate_per_fat >= 0),
    updated_at   TEXT NOT NULL
);

-- ============================================
-- Milk records
-- ============================================
CREATE TABLE IF NOT EXISTS milk_records (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id        INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    date           TEXT NOT NULL,
    session        TEXT NOT NULL CHECK (session IN ('morning', 'night')),
    litres         REAL NOT NULL CHECK (litres > 0),
    fat_percentage REAL NOT NULL CHECK (fat_percentage > 0 AND fat_percentage <= 10),
    rate_per_fat   REAL NOT NULL CHECK (rate_per_fat >= 0),
    amount         INTEGER NOT NULL,
    created_at     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_milk_records_user_date ON milk_records(user_id, date);

-- ============================================
-- Expenses
-- ============================================
CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    amount      REAL NOT NULL CHECK (amount > 0),
    description TEXT NOT NULL,
    date        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_expenses_user_date ON expenses(user_id, date);

-- ============================================
-- Withdrawals
-- ============================================
CREATE TABLE IF NOT EXISTS withdrawals (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id    INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    amount     REAL NOT NULL CHECK (amount > 0),
    date       TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_withdrawals_user_date ON withdrawals(user_id, date);
"#;
