/// All database primary keys are MySQL `BIGINT AUTO_INCREMENT`.
pub type DbId = i64;
