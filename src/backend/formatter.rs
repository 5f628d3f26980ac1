//! Answer formatting for planet records.
//!
//! Pure functions: the same planet always renders to the same text.

use itertools::Itertools;

use crate::backend::models::Planet;

/// Shown in place of the moon list when a planet has none.
const NO_MOONS: &str = "None listed";

/// Multi-line summary: name, mass, distance, moon count and moon names.
pub fn format_planet_details(planet: &Planet) -> String {
    let moons = if planet.moons().is_empty() {
        NO_MOONS.to_string()
    } else {
        planet.moons().iter().join(", ")
    };

    format!(
        "Name: {}\nMass (kg): {}\nDistance from Sun (km): {}\nMoons ({}): {}",
        planet.name(),
        scientific(planet.mass_kg()),
        grouped(planet.distance_from_sun_km()),
        planet.moon_count(),
        moons
    )
}

pub fn format_planet_mass(planet: &Planet) -> String {
    format!("{} mass (kg): {}", planet.name(), scientific(planet.mass_kg()))
}

pub fn format_planet_distance(planet: &Planet) -> String {
    format!(
        "{} distance from Sun (km): {}",
        planet.name(),
        grouped(planet.distance_from_sun_km())
    )
}

pub fn format_planet_moon_count(planet: &Planet) -> String {
    format!("{} has {} moon(s).", planet.name(), planet.moon_count())
}

/// Comma-joined moon names, or a "no moons" sentence.
pub fn format_planet_moon_list(planet: &Planet) -> String {
    if planet.moons().is_empty() {
        return format!("{} has no moons.", planet.name());
    }
    format!("{} moons: {}", planet.name(), planet.moons().iter().join(", "))
}

/// Yes/no line for whether `name` is in the planet list.
///
/// The name is trimmed; a blank name reads as "That name".
pub fn format_membership_result(name: &str, is_in_list: bool) -> String {
    let cleaned = match name.trim() {
        "" => "That name",
        trimmed => trimmed,
    };

    if is_in_list {
        format!("Yes, {} is in the planet list.", cleaned)
    } else {
        format!("No, {} is not in the planet list.", cleaned)
    }
}

/// Three-decimal scientific notation with a signed, two-digit exponent:
/// `5.972e+24`, `1.500e-03`.
fn scientific(value: f64) -> String {
    let raw = format!("{:.3e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// Rounded to a whole number with comma thousands separators: `1,433,500,000`.
fn grouped(value: f64) -> String {
    let raw = format!("{:.0}", value);
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{}{}", sign, out)
}
