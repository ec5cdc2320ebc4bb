// Raw form input and numeric field parsing
use serde::{Deserialize, Serialize};

use crate::db::models::NewBouquet;
use crate::error::ParseError;

/// Text of the five input fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BouquetForm {
    pub id: String,
    pub name: String,
    pub flower_type: String,
    pub quantity: String,
    pub price: String,
}

impl BouquetForm {
    /// The id field, needed by update and delete
    pub fn bouquet_id(&self) -> Result<i64, ParseError> {
        parse_integer("Bouquet ID", &self.id)
    }

    /// Name, flower type, quantity and price as a record to store
    pub fn draft(&self) -> Result<NewBouquet, ParseError> {
        let quantity = parse_integer("Quantity", &self.quantity)?;
        let price = parse_price(&self.price)?;

        Ok(NewBouquet::new(self.name.clone(), self.flower_type.clone(), quantity, price))
    }
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ParseError> {
    raw.trim().parse().map_err(|_| ParseError::NotAnInteger {
        field,
        value: raw.to_string(),
    })
}

fn parse_price(raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ParseError::NotANumber {
            field: "Price",
            value: raw.to_string(),
        })
}
