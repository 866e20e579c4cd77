use std::{
    error::Error,
    fmt::{self, Display},
};

/// The textual floor value meaning "at grade".
pub const GROUND_FLOOR: &str = "Bahçe Katı";

/// Returned when a floor value is neither the ground-floor sentinel nor an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFloor(pub String);

impl Display for InvalidFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid floor value: {}", self.0)
    }
}

impl Error for InvalidFloor {}

/// Maps the floor field to its numeric code.
///
/// The floor is a number with one textual exception, so it does not go through the
/// categorical codebook.
pub struct FloorEncoder;

impl FloorEncoder {
    /// Encodes a raw floor value.
    ///
    /// # Arguments
    /// * `raw` - The floor as sent by the client.
    ///
    /// # Returns
    /// `0` for the ground-floor sentinel, the parsed base-10 integer otherwise.
    ///
    /// # Errors
    /// `InvalidFloor` if the value does not parse.
    pub fn encode(raw: &str) -> Result<i64, InvalidFloor> {
        if raw == GROUND_FLOOR {
            return Ok(0);
        }

        raw.parse().map_err(|_| InvalidFloor(raw.to_string()))
    }
}
