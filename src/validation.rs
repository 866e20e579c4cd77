//! Request validation against the trained vocabularies.
//!
//! Checks run in a fixed order and the first failure is returned, nothing is
//! coerced or defaulted.

use crate::{
    codebook::KnownValues,
    encoding::FloorEncoder,
    error::{PredictErr, Result},
    record::{CategoricalField, HouseRecord},
};

/// Rejects records that do not match the known values before any encoding happens.
pub struct ValidationGate<'a> {
    known: &'a KnownValues,
}

impl<'a> ValidationGate<'a> {
    /// Creates a new `ValidationGate`.
    ///
    /// # Arguments
    /// * `known` - The client-facing value lists exported with the model.
    pub fn new(known: &'a KnownValues) -> Self {
        Self { known }
    }

    /// Validates `record`.
    ///
    /// 1. Every categorical value belongs to its field's known values.
    /// 2. The floor is the ground-floor sentinel or an integer.
    /// 3. Areas and counts are strictly positive.
    ///
    /// # Returns
    /// The same record if every check passes.
    ///
    /// # Errors
    /// The `PredictErr` of the first failed check.
    pub fn validate<'r>(&self, record: &'r HouseRecord) -> Result<&'r HouseRecord> {
        for field in CategoricalField::ALL {
            let value = record.label(field);
            if !self.known.contains(field, value) {
                return Err(PredictErr::unknown_category(
                    field,
                    value,
                    self.known.values(field),
                ));
            }
        }

        FloorEncoder::encode(&record.floor)?;

        positive_area("netArea", record.net_area)?;
        positive_area("grossArea", record.gross_area)?;
        positive_count("floorCount", record.floor_count)?;
        positive_count("bathroomCount", record.bathroom_count)?;

        Ok(record)
    }
}

fn positive_area(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }

    Err(PredictErr::InvalidField {
        field,
        reason: format!("must be a positive number, got {value}"),
    })
}

fn positive_count(field: &'static str, value: i64) -> Result<()> {
    if value > 0 {
        return Ok(());
    }

    Err(PredictErr::InvalidField {
        field,
        reason: format!("must be greater than zero, got {value}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::GROUND_FLOOR;

    fn known() -> KnownValues {
        let cities: Vec<String> = (0..12)
            .map(|i| format!("City{i:02}"))
            .chain(["Ankara".to_string(), "İstanbul".to_string()])
            .collect();

        let raw = CategoricalField::ALL.iter().map(|field| {
            let record_a = HouseRecord::sample_apartment();
            let record_b = HouseRecord::sample_villa();
            let mut labels = match field {
                CategoricalField::City => cities.clone(),
                _ => vec![
                    record_a.label(*field).to_string(),
                    record_b.label(*field).to_string(),
                ],
            };
            labels.dedup();
            (field.name().to_string(), labels)
        });

        KnownValues::new(raw).unwrap()
    }

    #[test]
    fn accepts_the_sample_records() {
        let known = known();
        let gate = ValidationGate::new(&known);

        assert!(gate.validate(&HouseRecord::sample_apartment()).is_ok());
        assert!(gate.validate(&HouseRecord::sample_villa()).is_ok());
    }

    #[test]
    fn unknown_city_names_the_field_and_previews_valid_values() {
        let known = known();
        let gate = ValidationGate::new(&known);
        let record = HouseRecord {
            city: "GeçersizŞehir".into(),
            ..HouseRecord::sample_apartment()
        };

        match gate.validate(&record).unwrap_err() {
            PredictErr::UnknownCategory {
                field,
                value,
                valid,
            } => {
                assert_eq!(field, CategoricalField::City);
                assert_eq!(value, "GeçersizŞehir");
                assert!(valid.starts_with("City00, City01"));
                assert!(valid.ends_with("City09..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn categorical_checks_come_before_the_floor() {
        let known = known();
        let gate = ValidationGate::new(&known);
        let record = HouseRecord {
            heating_type: "Şömine".into(),
            floor: "abc".into(),
            ..HouseRecord::sample_apartment()
        };

        let err = gate.validate(&record).unwrap_err();
        assert_eq!(err.field(), Some("heatingType"));
    }

    #[test]
    fn rejects_unparseable_floors() {
        let known = known();
        let gate = ValidationGate::new(&known);
        let record = HouseRecord {
            floor: "abc".into(),
            ..HouseRecord::sample_apartment()
        };

        assert_eq!(
            gate.validate(&record).unwrap_err(),
            PredictErr::InvalidFloorValue {
                value: "abc".into()
            }
        );

        let record = HouseRecord {
            floor: GROUND_FLOOR.into(),
            ..HouseRecord::sample_apartment()
        };
        assert!(gate.validate(&record).is_ok());
    }

    #[test]
    fn rejects_non_positive_numbers() {
        let known = known();
        let gate = ValidationGate::new(&known);

        let cases = [
            HouseRecord {
                net_area: 0.0,
                ..HouseRecord::sample_apartment()
            },
            HouseRecord {
                gross_area: f64::NAN,
                ..HouseRecord::sample_apartment()
            },
            HouseRecord {
                floor_count: 0,
                ..HouseRecord::sample_apartment()
            },
            HouseRecord {
                bathroom_count: -2,
                ..HouseRecord::sample_apartment()
            },
        ];
        let fields = ["netArea", "grossArea", "floorCount", "bathroomCount"];

        for (record, field) in cases.iter().zip(fields) {
            let err = gate.validate(record).unwrap_err();
            assert_eq!(err.kind(), "invalid_field");
            assert_eq!(err.field(), Some(field));
        }
    }
}
