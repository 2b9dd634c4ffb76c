use crate::domain::models::category::Category as DomainCategory;
use shared::Category as SharedCategory;

/// Mapper from domain categories to the shared Category DTO.
pub struct CategoryMapper;

impl CategoryMapper {
    /// The type is rendered by name; unknown codes render as "unknown".
    pub fn to_dto(domain: DomainCategory) -> SharedCategory {
        SharedCategory {
            category_id: domain.category_id,
            category_name: domain.name,
            category_type: domain.category_type.to_string(),
        }
    }

    pub fn to_dto_list(domain: Vec<DomainCategory>) -> Vec<SharedCategory> {
        domain.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::category::CategoryType;

    #[test]
    fn test_to_dto() {
        let dto = CategoryMapper::to_dto(DomainCategory {
            id: 3,
            category_id: 300,
            name: "Index fund".to_string(),
            category_type: CategoryType::Investing,
        });

        assert_eq!(dto.category_id, 300);
        assert_eq!(dto.category_name, "Index fund");
        assert_eq!(dto.category_type, "investing");
    }

    #[test]
    fn test_unknown_type_renders_as_unknown() {
        let dto = CategoryMapper::to_dto(DomainCategory {
            id: 9,
            category_id: 900,
            name: "Legacy".to_string(),
            category_type: CategoryType::Unknown(42),
        });
        assert_eq!(dto.category_type, "unknown");
    }
}
