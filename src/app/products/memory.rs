//! 内存仓储实现
//!
//! 用 `Mutex<Vec<Product>>` 模拟数据库表，保持插入顺序。
//! 供测试和未启用 `database` 特性的构建使用。

use std::sync::Mutex;

use async_trait::async_trait;

use super::model::Product;
use super::repository::{ProductRepository, RepositoryError};

struct MemoryStore {
    rows: Vec<Product>,
    next_id: i32,
}

/// 内存商品仓储
pub struct MemoryProductRepository {
    inner: Mutex<MemoryStore>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryStore {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .find(|p| p.product_id == Some(id))
            .cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut store = self.inner.lock().unwrap();
        match product.product_id {
            Some(id) => {
                // 主键已设置：整体覆盖已有记录；不存在则按主键顺序插入，
                // 保证 find_all 的返回顺序与数据库实现一致
                match store.rows.iter().position(|p| p.product_id == Some(id)) {
                    Some(idx) => store.rows[idx] = product.clone(),
                    None => {
                        let idx = store
                            .rows
                            .iter()
                            .position(|p| p.product_id > Some(id))
                            .unwrap_or(store.rows.len());
                        store.rows.insert(idx, product.clone());
                    }
                }
                if id >= store.next_id {
                    store.next_id = id + 1;
                }
            }
            None => {
                let id = store.next_id;
                store.next_id += 1;
                product.product_id = Some(id);
                store.rows.push(product.clone());
            }
        }
        Ok(product)
    }

    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepositoryError> {
        let mut saved = Vec::with_capacity(products.len());
        for product in products {
            saved.push(self.save(product).await?);
        }
        Ok(saved)
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut store = self.inner.lock().unwrap();
        store.rows.retain(|p| p.product_id != product.product_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut store = self.inner.lock().unwrap();
        store.rows.clear();
        store.next_id = 1;
        Ok(())
    }

    async fn find_by_price_greater_than_equal(
        &self,
        price: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .filter(|p| p.price >= price)
            .cloned()
            .collect())
    }

    async fn find_by_product_name_or_price(
        &self,
        name: &str,
        price: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .filter(|p| p.product_name == name || p.price == price)
            .cloned()
            .collect())
    }

    async fn find_by_product_name_like(
        &self,
        name: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .iter()
            .filter(|p| p.product_name.contains(name))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: &str, price: f64, rating: f64) -> Product {
        Product {
            product_id: None,
            product_name: name.to_string(),
            description: description.to_string(),
            price,
            star_rating: rating,
        }
    }

    async fn seeded() -> MemoryProductRepository {
        let repo = MemoryProductRepository::new();
        repo.save_all(vec![
            product("Oneplus", "OnePlus9Pro", 60000.0, 4.5),
            product("Samsung", "GalaxyNote12", 50000.0, 4.1),
        ])
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids_and_round_trips() {
        let repo = seeded().await;

        let saved = repo
            .save(product("Vivo", "Vivo12pro", 37545.0, 3.9))
            .await
            .unwrap();
        assert_eq!(saved.product_id, Some(3));

        let found = repo.find_by_id(3).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.product_name, "Vivo");
        assert_eq!(found.price, 37545.0);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let repo = seeded().await;
        assert!(repo.find_by_id(100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites_record() {
        let repo = seeded().await;

        let mut updated = product("Oneplus", "OnePlus9Pro", 70000.0, 4.5);
        updated.product_id = Some(1);
        let saved = repo.save(updated).await.unwrap();

        assert_eq!(saved.price, 70000.0);
        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.price, 70000.0);
        // 覆盖不会新增记录
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn save_with_unknown_explicit_id_keeps_id_order() {
        let repo = seeded().await;

        // 越过计数器、带显式主键插入的记录也要落在主键顺序的位置上
        let mut late = product("Nokia", "Nokia8", 15000.0, 3.0);
        late.product_id = Some(7);
        repo.save(late).await.unwrap();

        let mut early = product("Vivo", "Vivo12pro", 37545.0, 3.9);
        early.product_id = Some(0);
        repo.save(early).await.unwrap();

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.product_id)
            .collect();
        assert_eq!(ids, vec![Some(0), Some(1), Some(2), Some(7)]);
    }

    #[tokio::test]
    async fn delete_then_find_returns_none() {
        let repo = seeded().await;

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        repo.delete(&stored).await.unwrap();

        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = seeded().await;
        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].product_name, "Oneplus");
        assert_eq!(all[1].product_name, "Samsung");
    }

    #[tokio::test]
    async fn price_threshold_is_inclusive() {
        let repo = seeded().await;

        let hits = repo.find_by_price_greater_than_equal(50000.0).await.unwrap();
        assert_eq!(hits.len(), 2);

        let above_all = repo.find_by_price_greater_than_equal(90000.0).await.unwrap();
        assert!(above_all.is_empty());

        let below_all = repo.find_by_price_greater_than_equal(1.0).await.unwrap();
        assert_eq!(below_all.len(), 2);
    }

    #[tokio::test]
    async fn name_or_price_matches_either_side_literally() {
        let repo = seeded().await;

        let by_name = repo
            .find_by_product_name_or_price("Samsung", 99.0)
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].product_id, Some(2));

        let by_price = repo
            .find_by_product_name_or_price("nope", 60000.0)
            .await
            .unwrap();
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price[0].product_id, Some(1));

        // 两个参数都取默认值时按字面匹配，正常数据集没有空名或零价的记录
        let defaulted = repo.find_by_product_name_or_price("", 0.0).await.unwrap();
        assert!(defaulted.is_empty());
    }

    #[tokio::test]
    async fn name_like_matches_substring() {
        let repo = seeded().await;

        let hits = repo.find_by_product_name_like("One").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Oneplus");

        // 空子串匹配所有记录
        let all = repo.find_by_product_name_like("").await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn delete_all_empties_the_store() {
        let repo = seeded().await;
        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
