/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Category id that the quiz endpoint treats as "every category".
pub const ALL_CATEGORIES: DbId = 0;
