/// Result-set window forwarded to the store as `OFFSET` / `LIMIT`.
///
/// Values are passed through untouched: `None` means "no window" and
/// negative values are left for Postgres to reject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

impl QueryOptions {
    pub fn new(skip: Option<i64>, take: Option<i64>) -> Self {
        Self { skip, take }
    }
}
