//! 内存仓储实现
//!
//! 唯一性检查与追加在同一把写锁内完成

use async_trait::async_trait;
use stand_domain_core::Entity;
use stand_errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::entities::{Customer, NewCustomer, Product};
use crate::domain::repositories::{CustomerRepository, ProductRepository};
use crate::domain::value_objects::CustomerId;

// ============================================================================
// ProductRepository 实现
// ============================================================================

pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(seed: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn insert_unique(&self, product: Product) -> AppResult<Product> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(AppError::conflict("Product with this name already exists"));
        }

        products.push(product.clone());
        Ok(product)
    }
}

// ============================================================================
// CustomerRepository 实现
// ============================================================================

pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new(seed: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| *c.id() == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn insert_unique(&self, draft: NewCustomer) -> AppResult<Customer> {
        let mut customers = self.customers.write().await;
        if customers.iter().any(|c| c.email == draft.email) {
            return Err(AppError::conflict("Customer with this email already exists"));
        }

        let id = customers
            .iter()
            .map(|c| c.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(CustomerId(1));
        let customer = Customer::from_draft(id, draft);
        customers.push(customer.clone());
        Ok(customer)
    }
}
