mod category_dto;
mod field_violation;
mod page_dto;
mod product_dto;

pub use category_dto::*;
pub use field_violation::*;
pub use page_dto::*;
pub use product_dto::*;
