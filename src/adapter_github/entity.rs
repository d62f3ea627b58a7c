#[derive(Debug, serde::Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, serde::Deserialize)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    pub content_type: String,
    pub download_count: u64,
    pub label: Option<String>,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Pagination {
    pub per_page: u32,
    pub page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { per_page, page }
    }
}
