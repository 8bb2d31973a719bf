//! Toy catalogue service implementing [`ToysQuery`] and [`ToysCommand`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::crud::CrudService;
use crate::domain::ports::{CrudRepository, ToysCommand, ToysQuery};
use crate::domain::{Error, Toy, ToyDraft, ToyId};

/// Unscoped CRUD over the shared toy catalogue.
#[derive(Clone)]
pub struct ToyCatalogueService {
    toys: CrudService<Toy, dyn CrudRepository<Toy>>,
}

impl ToyCatalogueService {
    pub fn new(toys: Arc<dyn CrudRepository<Toy>>) -> Self {
        Self {
            toys: CrudService::new(toys),
        }
    }
}

#[async_trait]
impl ToysQuery for ToyCatalogueService {
    async fn list(&self) -> Result<Vec<Toy>, Error> {
        self.toys.list().await
    }

    async fn get(&self, toy_id: ToyId) -> Result<Toy, Error> {
        self.toys.get(toy_id).await
    }
}

#[async_trait]
impl ToysCommand for ToyCatalogueService {
    async fn create(&self, toy: ToyDraft) -> Result<Toy, Error> {
        self.toys.create(&toy).await
    }

    async fn update(&self, toy_id: ToyId, toy: ToyDraft) -> Result<Toy, Error> {
        self.toys.update(toy_id, &toy).await
    }

    async fn delete(&self, toy_id: ToyId) -> Result<(), Error> {
        self.toys.delete(toy_id).await
    }
}
