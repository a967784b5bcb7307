//! 商品仓储抽象
//!
//! 处理器只依赖这里的 trait，不关心底层是内存存储还是 PostgreSQL。
//! 所有操作在底层存储不可达时返回 [`RepositoryError::Unavailable`]。

use async_trait::async_trait;
use thiserror::Error;

use super::model::Product;

/// 仓储错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Unavailable(err.to_string())
    }
}

/// 商品仓储接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按插入（主键）顺序返回全部商品
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// 按主键查找，不存在时返回 `None`
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    /// 保存一条商品记录
    ///
    /// 主键未设置时由存储层分配新主键；已设置时整体覆盖对应记录。
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    /// 按原顺序保存一批商品并返回保存结果
    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepositoryError>;

    /// 删除一条记录；记录不存在时视为空操作
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;

    /// 清空全部记录（测试夹具使用）
    async fn delete_all(&self) -> Result<(), RepositoryError>;

    /// 价格大于等于阈值的全部商品
    async fn find_by_price_greater_than_equal(
        &self,
        price: f64,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// 名称精确等于给定值，或价格精确等于给定值的全部商品（逻辑或）
    async fn find_by_product_name_or_price(
        &self,
        name: &str,
        price: f64,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// 名称包含给定子串的全部商品
    async fn find_by_product_name_like(&self, name: &str)
        -> Result<Vec<Product>, RepositoryError>;
}
