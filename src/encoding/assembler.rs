use log::error;

use super::{EncodedFeatureVector, FeatureSchema, FloorEncoder};
use crate::{
    codebook::CategoricalCodebook,
    error::{PredictErr, Result},
    record::{Feature, FieldValue, HouseRecord},
};

/// Packs a validated `HouseRecord` into the vector layout the estimator expects.
pub struct FeatureVectorAssembler<'a> {
    schema: &'a FeatureSchema,
    codebook: &'a CategoricalCodebook,
}

impl<'a> FeatureVectorAssembler<'a> {
    /// Creates a new `FeatureVectorAssembler`.
    ///
    /// # Arguments
    /// * `schema` - The ordered training columns.
    /// * `codebook` - The trained categorical codes.
    pub fn new(schema: &'a FeatureSchema, codebook: &'a CategoricalCodebook) -> Self {
        Self { schema, codebook }
    }

    /// Encodes `record` following the schema order.
    ///
    /// Categorical values go through the codebook, the floor through the `FloorEncoder`
    /// and numeric values pass through unchanged.
    ///
    /// # Arguments
    /// * `record` - A record that already passed validation.
    ///
    /// # Returns
    /// A vector with exactly one entry per schema name.
    ///
    /// # Errors
    /// `MissingFeature` if the schema names a column the record does not have,
    /// `UnknownCategory` or `InvalidFloorValue` if the record was not validated.
    pub fn assemble(&self, record: &HouseRecord) -> Result<EncodedFeatureVector> {
        let mut values = Vec::with_capacity(self.schema.len());

        for name in self.schema.names() {
            let Some(feature) = Feature::from_name(name) else {
                error!(feature = name.as_str(); "feature schema references a column the record cannot provide");
                return Err(PredictErr::MissingFeature {
                    feature: name.clone(),
                });
            };

            let value = match record.value(feature) {
                FieldValue::Label(field, label) => {
                    let code = self.codebook.encode(field, label).map_err(|e| {
                        PredictErr::unknown_category(e.field, &e.label, self.codebook.known_values(field))
                    })?;
                    code as f64
                }
                FieldValue::Floor(raw) => FloorEncoder::encode(raw)? as f64,
                FieldValue::Number(x) => x,
            };

            values.push(value);
        }

        Ok(EncodedFeatureVector::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encoding::GROUND_FLOOR, record::CategoricalField};

    fn codebook() -> CategoricalCodebook {
        let raw = CategoricalField::ALL.iter().map(|field| {
            let labels: Vec<String> = match field {
                CategoricalField::City => vec!["Adana".into(), "Ankara".into(), "İstanbul".into()],
                CategoricalField::HouseType => vec!["Daire".into(), "Villa".into()],
                CategoricalField::District => vec!["Kadıköy".into(), "Çankaya".into()],
                CategoricalField::RoomCount => vec!["3+1".into(), "4+1".into()],
                CategoricalField::BuildingAge => vec!["0-5".into(), "6-10".into()],
                CategoricalField::Balcony => vec!["Var".into(), "Yok".into()],
                CategoricalField::HeatingType => vec!["Kombi".into(), "Merkezi".into()],
                CategoricalField::Parking => vec!["Var".into(), "Yok".into()],
                CategoricalField::InSite => vec!["Evet".into(), "Hayır".into()],
                CategoricalField::Furnished => vec!["Eşyalı".into(), "Eşyasız".into()],
            };
            (field.name().to_string(), labels)
        });

        CategoricalCodebook::new(raw).unwrap()
    }

    fn schema(names: &[&str]) -> FeatureSchema {
        FeatureSchema::new(names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    #[test]
    fn follows_schema_order_not_record_order() {
        let codebook = codebook();
        let schema = schema(&["netArea", "floor", "city", "bathroomCount"]);
        let assembler = FeatureVectorAssembler::new(&schema, &codebook);

        let vector = assembler.assemble(&HouseRecord::sample_apartment()).unwrap();
        assert_eq!(&*vector, &[120.0, 5.0, 2.0, 2.0]);
    }

    #[test]
    fn length_matches_the_full_schema() {
        let codebook = codebook();
        let names: Vec<&str> = CategoricalField::ALL
            .iter()
            .map(|f| f.name())
            .chain(["floor", "netArea", "grossArea", "floorCount", "bathroomCount"])
            .collect();
        let schema = schema(&names);
        let assembler = FeatureVectorAssembler::new(&schema, &codebook);

        for record in [HouseRecord::sample_apartment(), HouseRecord::sample_villa()] {
            let vector = assembler.assemble(&record).unwrap();
            assert_eq!(vector.len(), schema.len());
        }
    }

    #[test]
    fn ground_floor_encodes_to_zero() {
        let codebook = codebook();
        let schema = schema(&["bulundugu_kat"]);
        let assembler = FeatureVectorAssembler::new(&schema, &codebook);

        let record = HouseRecord {
            floor: GROUND_FLOOR.into(),
            ..HouseRecord::sample_apartment()
        };
        assert_eq!(assembler.assemble(&record).unwrap().into_inner(), vec![0.0]);
    }

    #[test]
    fn unresolvable_schema_names_are_missing_features() {
        let codebook = codebook();
        let schema = schema(&["city", "garden"]);
        let assembler = FeatureVectorAssembler::new(&schema, &codebook);

        let err = assembler.assemble(&HouseRecord::sample_apartment()).unwrap_err();
        assert_eq!(
            err,
            PredictErr::MissingFeature {
                feature: "garden".into()
            }
        );
    }

    #[test]
    fn labels_missing_from_the_codebook_are_unknown_categories() {
        let codebook = codebook();
        let schema = schema(&["city"]);
        let assembler = FeatureVectorAssembler::new(&schema, &codebook);

        let record = HouseRecord {
            city: "İzmir".into(),
            ..HouseRecord::sample_apartment()
        };
        let err = assembler.assemble(&record).unwrap_err();
        assert_eq!(err.kind(), "unknown_category");
        assert_eq!(err.field(), Some("city"));
    }
}
