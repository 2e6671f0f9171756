use serde::Deserialize;
use utoipa::ToSchema;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub disponible: Option<bool>,
}

impl ListQuery {
    /// Resolve defaults. An explicit `limit` outside 1..=MAX_LIMIT is an
    /// error rather than being clamped.
    pub fn normalize(&self) -> Result<(u64, u64), String> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(format!("limit must be between 1 and {MAX_LIMIT}"));
        }
        Ok((skip, limit))
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub q: String,
}

impl SearchQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.q.chars().count() < MIN_QUERY_LEN {
            return Err(format!("q must be at least {MIN_QUERY_LEN} characters"));
        }
        Ok(())
    }
}
