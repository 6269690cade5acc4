// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCategory {
    pub id: CategoryId,
    pub name: CategoryName,
}

impl ServiceCategory {
    pub fn new(name: CategoryName) -> Self {
        Self {
            id: CategoryId::generate(),
            name,
        }
    }

    pub fn rename(&mut self, name: CategoryName) {
        self.name = name;
    }
}
