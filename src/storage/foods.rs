use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A synthetic food record, built per request and never stored
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Generate `total` foods with ids `1..=total` sharing one timestamp.
///
/// A non-positive `total` yields no records.
pub fn generate_foods(total: i64) -> Result<Vec<Food>> {
    let Ok(count) = usize::try_from(total) else {
        return Ok(Vec::new());
    };

    let mut foods = Vec::new();
    foods
        .try_reserve_exact(count)
        .with_context(|| format!("Cannot allocate {} food records", total))?;

    let now = Utc::now();
    foods.extend((1..=total).map(|id| Food {
        id,
        name: String::new(),
        description: None,
        created_at: now,
        updated_at: now,
    }));

    Ok(foods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_three() {
        let foods = generate_foods(3).unwrap();
        assert_eq!(foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let stamp = foods[0].created_at;
        for food in &foods {
            assert_eq!(food.created_at, stamp);
            assert_eq!(food.updated_at, stamp);
            assert!(food.description.is_none());
        }
    }

    #[test]
    fn test_non_positive_total_is_empty() {
        assert!(generate_foods(0).unwrap().is_empty());
        assert!(generate_foods(-5).unwrap().is_empty());
    }

    #[test]
    fn test_impossible_total_is_error() {
        let err = generate_foods(i64::MAX).unwrap_err();
        assert!(err.to_string().contains("Cannot allocate"));
    }

    #[test]
    fn test_description_serializes_as_null() {
        let foods = generate_foods(1).unwrap();
        let value = serde_json::to_value(&foods[0]).unwrap();
        assert!(value["description"].is_null());
        assert_eq!(value["created_at"], value["updated_at"]);
    }
}
