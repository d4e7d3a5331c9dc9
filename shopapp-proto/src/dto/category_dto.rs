use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::{FieldViolation, ValidateDto};

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Category's name cannot be empty"))]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ValidateDto for CategoryDto {
    fn violations(&self) -> Vec<FieldViolation> {
        match self.validate() {
            Ok(_) => Vec::new(),
            Err(e) => FieldViolation::from_errors(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::{FieldViolation, ValidateDto};

    use super::CategoryDto;

    #[test]
    pub fn test_empty_name() {
        let dto = CategoryDto::default();
        assert_eq!(
            vec![FieldViolation::new("name", "Category's name cannot be empty")],
            dto.violations()
        );
    }

    #[test]
    pub fn test_missing_name_is_empty() {
        let dto: CategoryDto = serde_json::from_str("{}").unwrap();
        assert!(!dto.is_valid());
    }

    #[test]
    pub fn test_null_name_is_empty() {
        let dto: CategoryDto = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!("", dto.name);
        assert!(!dto.is_valid());
    }

    #[test]
    pub fn test_valid_name() {
        let dto: CategoryDto = serde_json::from_str(r#"{"name":"Laptops"}"#).unwrap();
        assert_eq!("Laptops", dto.name);
        assert!(dto.is_valid());
    }
}
