// src/application/commands/municipal/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateServiceCommand;
pub use delete::DeleteServiceCommand;
pub use service::MunicipalCommandService;
pub use update::UpdateServiceCommand;
