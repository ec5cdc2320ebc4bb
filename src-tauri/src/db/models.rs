// Data models
use serde::{Deserialize, Serialize};

/// A stored bouquet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bouquet {
    pub id: i64,
    pub name: String,
    pub flower_type: String,
    pub quantity: i64,
    pub price: f64,
}

/// Bouquet fields before storage assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBouquet {
    pub name: String,
    pub flower_type: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewBouquet {
    pub fn new(name: impl Into<String>, flower_type: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            flower_type: flower_type.into(),
            quantity,
            price,
        }
    }

    pub fn with_id(self, id: i64) -> Bouquet {
        Bouquet {
            id,
            name: self.name,
            flower_type: self.flower_type,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
