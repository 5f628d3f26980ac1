//! Validated planet record.

use serde_json::{Map, Value};

use crate::backend::errors::{PlanetError, PlanetResult};

/// A planet in the catalogue.
///
/// Fields are private so a `Planet` can only come out of [`Planet::new`] or
/// [`Planet::from_json_value`], both of which validate every field. An invalid
/// planet is never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    name: String,
    mass_kg: f64,
    distance_from_sun_km: f64,
    moons: Vec<String>,
}

impl Planet {
    /// Build a planet, validating all fields.
    ///
    /// # Errors
    /// `DataValidation` when the name is blank, mass or distance is not a
    /// positive finite number, or any moon name is blank.
    pub fn new(
        name: impl Into<String>,
        mass_kg: f64,
        distance_from_sun_km: f64,
        moons: Vec<String>,
    ) -> PlanetResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlanetError::invalid_field(
                "name",
                "Planet name must be a non-empty string",
            ));
        }

        if !is_positive(mass_kg) {
            return Err(PlanetError::invalid_field(
                "mass_kg",
                format!("Mass must be a positive number. Got: {}", mass_kg),
            ));
        }

        if !is_positive(distance_from_sun_km) {
            return Err(PlanetError::invalid_field(
                "distance_from_sun_km",
                format!(
                    "Distance from sun must be a positive number. Got: {}",
                    distance_from_sun_km
                ),
            ));
        }

        if moons.iter().any(|moon| moon.trim().is_empty()) {
            return Err(PlanetError::invalid_field(
                "moons",
                "Each moon name must be a non-empty string",
            ));
        }

        Ok(Self {
            name,
            mass_kg,
            distance_from_sun_km,
            moons,
        })
    }

    /// Build a planet from one JSON object of the data file.
    ///
    /// `moons` is optional and defaults to no moons. Type mismatches (a string
    /// mass, a non-array `moons`, a non-string moon) are validation failures
    /// naming the field.
    pub fn from_json_value(value: &Value) -> PlanetResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| PlanetError::invalid_data("Planet entry must be a JSON object."))?;

        let name = match required(object, "name")? {
            Value::String(s) => s.clone(),
            _ => {
                return Err(PlanetError::invalid_field(
                    "name",
                    "Planet name must be a non-empty string",
                ))
            }
        };
        let mass_kg = number(object, "mass_kg", "Mass must be a positive number")?;
        let distance_from_sun_km = number(
            object,
            "distance_from_sun_km",
            "Distance from sun must be a positive number",
        )?;

        let moons = match object.get("moons") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(moon) => Ok(moon.clone()),
                    _ => Err(PlanetError::invalid_field(
                        "moons",
                        "Each moon name must be a non-empty string",
                    )),
                })
                .collect::<PlanetResult<Vec<String>>>()?,
            Some(_) => {
                return Err(PlanetError::invalid_field(
                    "moons",
                    "Moons must be a list of strings",
                ))
            }
        };

        Self::new(name, mass_kg, distance_from_sun_km, moons)
    }

    /// Display name with its original casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn distance_from_sun_km(&self) -> f64 {
        self.distance_from_sun_km
    }

    pub fn moons(&self) -> &[String] {
        &self.moons
    }

    /// Number of moons orbiting the planet.
    pub fn moon_count(&self) -> usize {
        self.moons.len()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn required<'a>(object: &'a Map<String, Value>, field: &'static str) -> PlanetResult<&'a Value> {
    object
        .get(field)
        .ok_or_else(|| PlanetError::invalid_field(field, format!("Missing required planet field '{}'", field)))
}

fn number(object: &Map<String, Value>, field: &'static str, message: &str) -> PlanetResult<f64> {
    let value = required(object, field)?;
    value
        .as_f64()
        .ok_or_else(|| PlanetError::invalid_field(field, format!("{}. Got: {}", message, value)))
}
