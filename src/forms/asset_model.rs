use serde::Deserialize;
use validator::Validate;

use crate::domain::asset_model::{NewAssetModel, UpdateAssetModel};
use crate::forms::{parse_display_date_opt, selection_opt, valid_optional_display_date};

/// Drawer form for adding or editing an asset model. Dropdown selections
/// carry backend ids; empty strings mean "not chosen".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AssetModelForm {
    #[validate(length(min = 1, message = "required"))]
    pub model_name: String,
    #[serde(default)]
    pub brand_id: String,
    #[serde(default)]
    pub category_id: String,
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120 months"))]
    pub warranty_period_months: Option<u32>,
    /// `DD-MM-YYYY`, as shown in the drawer.
    #[serde(default)]
    #[validate(custom(function = valid_optional_display_date))]
    pub warranty_start_date: String,
}

impl AssetModelForm {
    /// Builds the create payload. Call only after `validate()` has passed;
    /// an unparseable date degrades to unset rather than panicking.
    #[must_use]
    pub fn to_new(&self) -> NewAssetModel {
        NewAssetModel::new(
            self.model_name.clone(),
            selection_opt(&self.brand_id),
            selection_opt(&self.category_id),
            self.warranty_period_months,
            parse_display_date_opt(&self.warranty_start_date),
        )
    }

    /// Builds the update payload for `PUT assetModel/<id>`.
    #[must_use]
    pub fn to_update(&self) -> UpdateAssetModel {
        UpdateAssetModel::new(
            self.model_name.clone(),
            selection_opt(&self.brand_id),
            selection_opt(&self.category_id),
            self.warranty_period_months,
            parse_display_date_opt(&self.warranty_start_date),
        )
    }
}
