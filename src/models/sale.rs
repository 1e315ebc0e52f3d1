use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One completed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Assigned by the store on creation, never changed afterwards.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana")]
    pub customer_name: Option<String>,
    #[schema(example = 500)]
    pub total: i32,
}

/// Line item of a sale. Published in the API schema only; no route reads or
/// writes it and `sale_id` is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetail {
    pub id: i32,
    pub total_amount: i32,
    pub details: Option<String>,
    pub sale_id: i32,
}
