use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, SweetId};

const NAME_MAX: usize = 100;
const CATEGORY_MAX: usize = 50;

/// A sellable item in the catalog.
///
/// # Invariants
/// - `name` and `category` are non-empty.
/// - `price` is positive and finite.
/// - `stock >= 0` at all times; every mutation is checked before commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl Sweet {
    /// Case-insensitive match against name or category, used by search.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.category.to_lowercase().contains(&q)
    }
}

/// A validated draft for creating a sweet (id is store-assigned).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl NewSweet {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_category(&self.category)?;
        validate_price(self.price)?;
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        Ok(())
    }
}

/// Partial update: only fields explicitly supplied are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SweetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl SweetPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            if stock < 0 {
                return Err(DomainError::validation("stock cannot be negative"));
            }
        }
        Ok(())
    }

    /// Apply the supplied fields to `sweet`, leaving the rest unchanged.
    pub fn apply(&self, sweet: &mut Sweet) {
        if let Some(name) = &self.name {
            sweet.name = name.clone();
        }
        if let Some(category) = &self.category {
            sweet.category = category.clone();
        }
        if let Some(price) = self.price {
            sweet.price = price;
        }
        if let Some(stock) = self.stock {
            sweet.stock = stock;
        }
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if name.len() > NAME_MAX {
        return Err(DomainError::validation("name too long"));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), DomainError> {
    if category.trim().is_empty() {
        return Err(DomainError::validation("category cannot be empty"));
    }
    if category.len() > CATEGORY_MAX {
        return Err(DomainError::validation("category too long"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::validation("price must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet() -> Sweet {
        Sweet {
            id: SweetId::new(1),
            name: "Dark Chocolate".to_string(),
            category: "chocolate".to_string(),
            price: 5.99,
            stock: 10,
        }
    }

    #[test]
    fn draft_validation_accepts_well_formed_input() {
        let draft = NewSweet {
            name: "Candy".to_string(),
            category: "hard candy".to_string(),
            price: 1.99,
            stock: 0,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_validation_rejects_bad_input() {
        let base = NewSweet {
            name: "Candy".to_string(),
            category: "hard candy".to_string(),
            price: 1.99,
            stock: 0,
        };

        let mut draft = base.clone();
        draft.name = "   ".to_string();
        assert!(draft.validate().is_err());

        let mut draft = base.clone();
        draft.price = 0.0;
        assert!(draft.validate().is_err());

        let mut draft = base.clone();
        draft.price = f64::NAN;
        assert!(draft.validate().is_err());

        let mut draft = base;
        draft.stock = -1;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut s = sweet();
        let patch = SweetPatch {
            price: Some(6.49),
            ..Default::default()
        };
        patch.validate().unwrap();
        patch.apply(&mut s);

        assert_eq!(s.price, 6.49);
        assert_eq!(s.name, "Dark Chocolate");
        assert_eq!(s.stock, 10);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut s = sweet();
        let before = s.clone();
        SweetPatch::default().apply(&mut s);
        assert_eq!(s, before);
    }

    #[test]
    fn patch_rejects_invalid_fields() {
        let patch = SweetPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = SweetPatch {
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn search_matches_name_and_category_case_insensitively() {
        let s = sweet();
        assert!(s.matches_query("chocolate"));
        assert!(s.matches_query("DARK"));
        assert!(s.matches_query("choc"));
        assert!(!s.matches_query("gummy"));
    }
}
