use serde::{ser::SerializeMap, Serialize, Serializer};

use super::{vocabulary::resolve_fields, CodebookErr, Result, Vocabulary};
use crate::{
    encoding::GROUND_FLOOR,
    record::{CategoricalField, Feature},
};

/// The value lists clients may choose from, as exported next to the model.
///
/// These drive request validation and discovery. The floor list holds the trained
/// floor numbers as strings with the ground-floor sentinel always last.
#[derive(Debug, Clone)]
pub struct KnownValues {
    categorical: Vec<Vocabulary>,
    floors: Vec<String>,
}

impl KnownValues {
    /// Builds the known values from raw `field name -> labels` pairs.
    ///
    /// The floor list is optional in the raw input; if present it is taken as is,
    /// moving the ground-floor sentinel to the end (appending it when absent).
    ///
    /// # Returns
    /// The known values or a `CodebookErr` if a categorical field is missing or malformed.
    pub fn new<I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut floors: Option<Vec<String>> = None;
        let mut categorical = Vec::new();

        for (name, labels) in raw {
            match Feature::from_name(&name) {
                Some(Feature::Floor) if floors.is_some() => {
                    return Err(CodebookErr::DuplicateField(Feature::Floor.name()));
                }
                Some(Feature::Floor) => floors = Some(labels),
                _ => categorical.push((name, labels)),
            }
        }

        let categorical = resolve_fields(categorical)?;

        let mut floors = floors.unwrap_or_default();
        floors.retain(|floor| floor != GROUND_FLOOR);
        floors.push(GROUND_FLOOR.to_string());

        Ok(Self {
            categorical,
            floors,
        })
    }

    pub fn contains(&self, field: CategoricalField, label: &str) -> bool {
        self.categorical[field as usize].contains(label)
    }

    pub fn values(&self, field: CategoricalField) -> &[String] {
        self.categorical[field as usize].labels()
    }

    pub fn floors(&self) -> &[String] {
        &self.floors
    }
}

/// Serializes as a `field -> labels` map in validation order, floor last.
impl Serialize for KnownValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categorical.len() + 1))?;
        for field in CategoricalField::ALL {
            map.serialize_entry(field.name(), self.values(field))?;
        }
        map.serialize_entry(Feature::Floor.name(), &self.floors)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(floors: Option<Vec<&str>>) -> Vec<(String, Vec<String>)> {
        let mut raw: Vec<(String, Vec<String>)> = CategoricalField::ALL
            .iter()
            .map(|field| (field.name().to_string(), vec!["x".to_string(), "y".to_string()]))
            .collect();

        if let Some(floors) = floors {
            raw.push((
                "bulundugu_kat".to_string(),
                floors.into_iter().map(String::from).collect(),
            ));
        }

        raw
    }

    #[test]
    fn ground_floor_sentinel_goes_last() {
        let known = KnownValues::new(raw(Some(vec![GROUND_FLOOR, "1", "10", "2"]))).unwrap();
        assert_eq!(known.floors(), ["1", "10", "2", GROUND_FLOOR]);

        let known = KnownValues::new(raw(None)).unwrap();
        assert_eq!(known.floors(), [GROUND_FLOOR]);
    }

    #[test]
    fn serializes_fields_in_order_with_floor_last() {
        let known = KnownValues::new(raw(Some(vec!["1"]))).unwrap();
        let json = serde_json::to_string(&known).unwrap();

        let city = json.find("\"city\"").unwrap();
        let furnished = json.find("\"furnished\"").unwrap();
        let floor = json.find("\"floor\"").unwrap();
        assert!(city < furnished && furnished < floor);
        assert!(json.ends_with(&format!("\"floor\":[\"1\",\"{GROUND_FLOOR}\"]}}")));
    }

    #[test]
    fn floor_list_named_twice_is_rejected() {
        let mut raw = raw(Some(vec!["1"]));
        raw.push(("floor".to_string(), vec!["2".to_string()]));

        let err = KnownValues::new(raw).unwrap_err();
        assert_eq!(err, CodebookErr::DuplicateField("floor"));
    }

    #[test]
    fn membership_is_per_field() {
        let known = KnownValues::new(raw(None)).unwrap();
        assert!(known.contains(CategoricalField::City, "x"));
        assert!(!known.contains(CategoricalField::City, "z"));
    }
}
