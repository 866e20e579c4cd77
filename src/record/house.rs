use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer, Serialize,
};

use super::{CategoricalField, Feature};
use crate::encoding::GROUND_FLOOR;

/// A single house description as submitted by a client.
///
/// All fields are required, unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HouseRecord {
    pub city: String,
    pub district: String,
    pub house_type: String,
    pub room_count: String,
    pub net_area: f64,
    pub gross_area: f64,
    pub building_age: String,
    pub floor: String,
    #[serde(deserialize_with = "whole_number")]
    pub floor_count: i64,
    #[serde(deserialize_with = "whole_number")]
    pub bathroom_count: i64,
    pub balcony: String,
    pub heating_type: String,
    pub parking: String,
    pub in_site: String,
    pub furnished: String,
}

/// Reads an integer, also accepting floats without a fractional part such as `8.0`.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(x) if x.fract() == 0.0 && x.abs() <= i64::MAX as f64 => Ok(x as i64),
        Number::Float(x) => Err(de::Error::invalid_value(
            Unexpected::Float(x),
            &"a whole number",
        )),
    }
}

/// The raw value a `HouseRecord` holds for some `Feature`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Label(CategoricalField, &'a str),
    Floor(&'a str),
    Number(f64),
}

impl HouseRecord {
    /// Returns the label this record holds for a categorical field.
    pub fn label(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::City => &self.city,
            CategoricalField::District => &self.district,
            CategoricalField::HouseType => &self.house_type,
            CategoricalField::RoomCount => &self.room_count,
            CategoricalField::BuildingAge => &self.building_age,
            CategoricalField::Balcony => &self.balcony,
            CategoricalField::HeatingType => &self.heating_type,
            CategoricalField::Parking => &self.parking,
            CategoricalField::InSite => &self.in_site,
            CategoricalField::Furnished => &self.furnished,
        }
    }

    /// Returns the raw value this record holds for `feature`.
    pub fn value(&self, feature: Feature) -> FieldValue<'_> {
        match feature {
            Feature::Categorical(field) => FieldValue::Label(field, self.label(field)),
            Feature::Floor => FieldValue::Floor(&self.floor),
            Feature::NetArea => FieldValue::Number(self.net_area),
            Feature::GrossArea => FieldValue::Number(self.gross_area),
            Feature::FloorCount => FieldValue::Number(self.floor_count as f64),
            Feature::BathroomCount => FieldValue::Number(self.bathroom_count as f64),
        }
    }

    /// A three bedroom apartment in Kadıköy, İstanbul.
    pub fn sample_apartment() -> Self {
        Self {
            city: "İstanbul".into(),
            district: "Kadıköy".into(),
            house_type: "Daire".into(),
            room_count: "3+1".into(),
            net_area: 120.0,
            gross_area: 140.0,
            building_age: "6-10".into(),
            floor: "5".into(),
            floor_count: 8,
            bathroom_count: 2,
            balcony: "Var".into(),
            heating_type: "Kombi".into(),
            parking: "Var".into(),
            in_site: "Evet".into(),
            furnished: "Eşyasız".into(),
        }
    }

    /// A ground floor villa in Çankaya, Ankara.
    pub fn sample_villa() -> Self {
        Self {
            city: "Ankara".into(),
            district: "Çankaya".into(),
            house_type: "Villa".into(),
            room_count: "4+1".into(),
            net_area: 200.0,
            gross_area: 250.0,
            building_age: "0-5".into(),
            floor: GROUND_FLOOR.into(),
            floor_count: 3,
            bathroom_count: 3,
            balcony: "Var".into(),
            heating_type: "Merkezi".into(),
            parking: "Var".into(),
            in_site: "Evet".into(),
            furnished: "Eşyalı".into(),
        }
    }
}
