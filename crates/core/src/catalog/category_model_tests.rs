//! Tests for category form models.

#[cfg(test)]
mod tests {
    use crate::catalog::{Category, CategoryUpdate, NewCategory};
    use crate::errors::{Error, ValidationError};

    fn validation_message(result: crate::Result<()>) -> String {
        match result {
            Err(Error::Validation(err)) => err.to_string(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_name_generates_slug() {
        let input = NewCategory::from_name("Men's Watches");
        assert_eq!(input.slug, "mens-watches");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_generate_slug_overwrites_manual_slug() {
        let mut input = NewCategory {
            name: "Smart Watches".to_string(),
            slug: "old".to_string(),
        };
        input.generate_slug();
        assert_eq!(input.slug, "smart-watches");
    }

    #[test]
    fn test_short_name_is_rejected() {
        let input = NewCategory {
            name: "W".to_string(),
            slug: "watches".to_string(),
        };
        assert_eq!(
            validation_message(input.validate()),
            "Category name must be at least 2 characters."
        );
    }

    #[test]
    fn test_short_slug_is_rejected() {
        let input = NewCategory {
            name: "Watches".to_string(),
            slug: "w".to_string(),
        };
        assert_eq!(
            validation_message(input.validate()),
            "Slug must be at least 2 characters."
        );
    }

    #[test]
    fn test_slug_shape_is_enforced() {
        let input = NewCategory {
            name: "Watches".to_string(),
            slug: "Watches_2024".to_string(),
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidSlug(ref s)) if s == "Watches_2024"
        ));
        assert_eq!(
            validation_message(input.validate()),
            "Slug must contain only lowercase letters, numbers, and hyphens."
        );
    }

    #[test]
    fn test_name_that_slugifies_to_nothing_fails_validation() {
        let input = NewCategory::from_name("!!");
        assert_eq!(input.slug, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_apply_carries_category_id() {
        let category = Category {
            id: 7,
            name: "Watches".to_string(),
            slug: "watches".to_string(),
        };
        let update = category.apply(NewCategory::from_name("Luxury Watches"));
        assert_eq!(
            update,
            CategoryUpdate {
                id: Some(7),
                name: "Luxury Watches".to_string(),
                slug: "luxury-watches".to_string(),
            }
        );
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_update_without_id_is_rejected() {
        let update = CategoryUpdate {
            id: None,
            name: "Watches".to_string(),
            slug: "watches".to_string(),
        };
        assert!(matches!(
            update.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_serializes_camel_case_payload() {
        let input = NewCategory::from_name("Wall Clocks");
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"name":"Wall Clocks","slug":"wall-clocks"}"#);
    }
}
