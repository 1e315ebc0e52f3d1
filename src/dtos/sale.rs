use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /sales` and `PUT /sales/{id}`.
///
/// `id` is accepted so clients can echo a full `Sale` back, but the store
/// always decides the identifier.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total: i32,
}

/// Fields an update is allowed to replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleChanges {
    pub customer_name: Option<String>,
    pub total: i32,
}

impl From<SalePayload> for SaleChanges {
    fn from(payload: SalePayload) -> Self {
        Self {
            customer_name: payload.customer_name,
            total: payload.total,
        }
    }
}
