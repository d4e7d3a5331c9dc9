use serde::Deserialize;

/// `?page=&limit=`, both required.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: i32,
    pub limit: i32,
}
