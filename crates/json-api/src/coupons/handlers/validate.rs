//! Validate Coupon Handler

use pharmacy_app::domain::coupons::models::CouponPreview;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{coupons::errors::into_api_error, errors::ApiError, extensions::*};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ValidateCouponRequest {
    /// Case-sensitive coupon code
    pub code: Option<String>,

    /// Cart subtotal. Without it only redeemability is checked and the discount is 0.
    #[serde(with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub subtotal: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CouponPreviewResponse {
    pub code: String,

    /// `percentage` or `fixed`
    #[serde(rename = "type")]
    pub discount_type: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub value: Decimal,

    /// Discount the coupon would grant on the supplied subtotal
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub discount: Decimal,

    pub expires_at: Option<String>,
}

impl From<CouponPreview> for CouponPreviewResponse {
    fn from(preview: CouponPreview) -> Self {
        Self {
            code: preview.code,
            discount_type: preview.discount_type.to_string(),
            value: preview.value,
            discount: preview.discount,
            expires_at: preview.expires_at.map(|at| at.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidateCouponResponse {
    pub success: bool,

    pub data: CouponPreviewResponse,
}

/// Validate Coupon Handler
///
/// Previews a coupon without redeeming it; the usage counter is left alone.
#[endpoint(tags("coupons"), summary = "Validate Coupon")]
pub(crate) async fn handler(
    json: JsonBody<ValidateCouponRequest>,
    depot: &mut Depot,
) -> Result<Json<ValidateCouponResponse>, ApiError> {
    let request = json.into_inner();

    let preview = depot
        .state()?
        .app
        .coupons
        .validate(request.code.unwrap_or_default(), request.subtotal)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ValidateCouponResponse {
        success: true,
        data: preview.into(),
    }))
}
