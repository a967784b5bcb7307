//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 商品实体
///
/// 线上 JSON 字段使用 camelCase（`productId`、`productName`、`starRating`）。
/// `product_id` 由存储层在创建时分配，分配后不可变。
/// 除主键外的字段都带 `#[serde(default)]`：请求体缺失的字段按类型默认值
/// 反序列化，更新时整体覆盖（见 [`Product::overwrite_from`]）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub product_id: Option<i32>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub star_rating: f64,
}

impl Product {
    /// 用请求体逐字段覆盖已有记录
    ///
    /// 显式赋值每个业务字段，主键保持不变（请求体里携带的
    /// `productId` 被忽略，保存时沿用已有记录的主键）。
    pub fn overwrite_from(&mut self, incoming: Product) {
        self.product_name = incoming.product_name;
        self.description = incoming.description;
        self.price = incoming.price;
        self.star_rating = incoming.star_rating;
    }
}
