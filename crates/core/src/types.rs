/// Inventory items and recipes are keyed by random UUIDs.
pub type ItemId = uuid::Uuid;

/// Leftover ids are derived from the creation time in milliseconds.
pub type LeftoverId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (leftover purchase / expiration) carry no time zone.
pub type Date = chrono::NaiveDate;
