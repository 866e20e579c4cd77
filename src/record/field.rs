use std::fmt::{self, Display};

/// The closed set of categorical house attributes.
///
/// Every variant has a vocabulary in the codebook and in the client-facing
/// known values, the order of `ALL` is the order in which they get validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoricalField {
    City,
    District,
    HouseType,
    RoomCount,
    BuildingAge,
    Balcony,
    HeatingType,
    Parking,
    InSite,
    Furnished,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 10] = [
        Self::City,
        Self::District,
        Self::HouseType,
        Self::RoomCount,
        Self::BuildingAge,
        Self::Balcony,
        Self::HeatingType,
        Self::Parking,
        Self::InSite,
        Self::Furnished,
    ];

    /// The wire name of this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::District => "district",
            Self::HouseType => "houseType",
            Self::RoomCount => "roomCount",
            Self::BuildingAge => "buildingAge",
            Self::Balcony => "balcony",
            Self::HeatingType => "heatingType",
            Self::Parking => "parking",
            Self::InSite => "inSite",
            Self::Furnished => "furnished",
        }
    }

    /// Resolves a categorical field from either its wire name or its training column name.
    ///
    /// # Arguments
    /// * `name` - A field or column name.
    ///
    /// # Returns
    /// The field, or `None` if the name is not categorical.
    pub fn from_name(name: &str) -> Option<Self> {
        match Feature::from_name(name)? {
            Feature::Categorical(field) => Some(field),
            _ => None,
        }
    }
}

impl Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single input column of the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Categorical(CategoricalField),
    Floor,
    NetArea,
    GrossArea,
    FloorCount,
    BathroomCount,
}

impl Feature {
    /// The wire name of this feature.
    pub fn name(self) -> &'static str {
        match self {
            Self::Categorical(field) => field.name(),
            Self::Floor => "floor",
            Self::NetArea => "netArea",
            Self::GrossArea => "grossArea",
            Self::FloorCount => "floorCount",
            Self::BathroomCount => "bathroomCount",
        }
    }

    /// Resolves a feature from its wire name or from the column name used by the
    /// training pipeline (`sehir`, `net_metrekare`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        use CategoricalField::*;

        let feature = match name {
            "city" | "sehir" => Self::Categorical(City),
            "district" | "semt" => Self::Categorical(District),
            "houseType" | "ev_tipi" => Self::Categorical(HouseType),
            "roomCount" | "oda_sayisi" => Self::Categorical(RoomCount),
            "buildingAge" | "bina_yasi" => Self::Categorical(BuildingAge),
            "balcony" | "balkon" => Self::Categorical(Balcony),
            "heatingType" | "isitma_tipi" => Self::Categorical(HeatingType),
            "parking" | "otopark" => Self::Categorical(Parking),
            "inSite" | "site_ici" => Self::Categorical(InSite),
            "furnished" | "esyali_durum" => Self::Categorical(Furnished),
            "floor" | "bulundugu_kat" => Self::Floor,
            "netArea" | "net_metrekare" => Self::NetArea,
            "grossArea" | "brut_metrekare" => Self::GrossArea,
            "floorCount" | "kat_sayisi" => Self::FloorCount,
            "bathroomCount" | "banyo_sayisi" => Self::BathroomCount,
            _ => return None,
        };

        Some(feature)
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_resolve_back_to_the_same_field() {
        for field in CategoricalField::ALL {
            assert_eq!(CategoricalField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn training_column_names_are_aliases() {
        assert_eq!(Feature::from_name("sehir"), Some(Feature::Categorical(CategoricalField::City)));
        assert_eq!(Feature::from_name("bulundugu_kat"), Some(Feature::Floor));
        assert_eq!(Feature::from_name("net_metrekare"), Some(Feature::NetArea));
    }

    #[test]
    fn numeric_features_are_not_categorical() {
        assert_eq!(CategoricalField::from_name("floor"), None);
        assert_eq!(CategoricalField::from_name("netArea"), None);
        assert_eq!(Feature::from_name("price"), None);
    }
}
