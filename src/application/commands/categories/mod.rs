// src/application/commands/categories/mod.rs
mod service;

pub use service::{
    CategoryCommandService, CreateCategoryCommand, DeleteCategoryCommand, RenameCategoryCommand,
};
