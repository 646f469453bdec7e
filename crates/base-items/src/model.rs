use serde::{Deserialize, Serialize};

use shoppinglist_core::{BaseItemId, UserId};

/// A shopping-list staple: something that should always be kept in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    pub id: BaseItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub min_required_quantity_in_stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl BaseItem {
    pub fn new(
        id: impl Into<BaseItemId>,
        name: impl Into<String>,
        min_required_quantity_in_stock: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_required_quantity_in_stock,
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Input for creating a base item. The identifier is assigned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateRequest {
    pub name: String,
    pub min_required_quantity_in_stock: i32,
}

impl CreateRequest {
    pub fn new(name: impl Into<String>, min_required_quantity_in_stock: i32) -> Self {
        Self {
            name: name.into(),
            min_required_quantity_in_stock,
        }
    }
}
