use crate::schema::{self, Fields, HttpUrl, Shape, ValidationError};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use utoipa::ToSchema;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Recipe {
    pub id: i64,
    pub label: String,
    pub source: String,
    #[schema(value_type = String)]
    pub url: HttpUrl,
    pub holee: String,
}

impl Recipe {
    /// Build a recipe, rejecting a malformed `url`.
    pub fn new(
        id: i64,
        label: impl Into<String>,
        source: impl Into<String>,
        url: &str,
    ) -> Result<Self, ValidationError> {
        let url = HttpUrl::parse(url).map_err(|e| ValidationError::single("url", e))?;
        Ok(Self {
            id,
            label: label.into(),
            source: source.into(),
            url,
            holee: String::new(),
        })
    }
}

impl Shape for Recipe {
    fn from_fields(fields: &mut Fields) -> Option<Self> {
        let id = fields.required("id");
        let label = fields.required("label");
        let source = fields.required("source");
        let url = fields.required("url");
        let holee = fields.optional_or("holee", String::new());
        Some(Self {
            id: id?,
            label: label?,
            source: source?,
            url: url?,
            holee,
        })
    }
}

/// Immutable, process-lifetime recipe collection.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Wrap already-validated recipes. Ids must be unique.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for (i, recipe) in recipes.iter().enumerate() {
            if !seen.insert(recipe.id) {
                return Err(ValidationError::single(
                    format!("recipes[{}].id", i),
                    format!("duplicate id {}", recipe.id),
                ));
            }
        }

        Ok(Self { recipes })
    }

    /// Validate raw records against the recipe shape and build a store.
    pub fn from_raw(raw: Vec<Value>) -> Result<Self, ValidationError> {
        let mut recipes = Vec::with_capacity(raw.len());
        let mut errors = Vec::new();

        for (i, value) in raw.into_iter().enumerate() {
            match schema::validate::<Recipe>(value) {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => errors.extend(e.nested(&format!("recipes[{}]", i)).errors),
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError { errors });
        }
        Self::new(recipes)
    }

    /// The built-in three recipes.
    pub fn seeded() -> Result<Self, ValidationError> {
        Self::new(vec![
            Recipe::new(
                1,
                "Chicken Vesuvio",
                "Serious Eats",
                "http://www.seriouseats.com/recipes/2011/12/chicken-vesuvio-recipe.html",
            )?,
            Recipe::new(
                2,
                "Chicken Paprikash",
                "No Recipes",
                "http://norecipes.com/recipe/chicken-paprikash/",
            )?,
            Recipe::new(
                3,
                "Cauliflower and Tofu Curry Recipe",
                "Serious Eats",
                "http://www.seriouseats.com/recipes/2011/02/cauliflower-and-tofu-curry-recipe.html",
            )?,
        ])
    }

    /// Every recipe, in stored order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn get(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Case-insensitive label search, preserving stored order.
    ///
    /// An absent or empty keyword matches every recipe. `max_result` caps the
    /// number returned; `None` is unbounded.
    pub fn search(&self, keyword: Option<&str>, max_result: Option<usize>) -> Vec<Recipe> {
        let limit = max_result.unwrap_or(usize::MAX);

        match keyword.filter(|k| !k.is_empty()) {
            None => self.recipes.iter().take(limit).cloned().collect(),
            Some(keyword) => {
                let needle = keyword.to_lowercase();
                self.recipes
                    .iter()
                    .filter(|r| r.label.to_lowercase().contains(&needle))
                    .take(limit)
                    .cloned()
                    .collect()
            }
        }
    }
}
