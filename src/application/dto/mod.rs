pub mod auth;
pub mod categories;
pub mod municipal;
pub mod news;
pub mod pagination;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use municipal::MunicipalServiceDto;
pub use news::NewsItemDto;
pub use pagination::PaginatedResult;
