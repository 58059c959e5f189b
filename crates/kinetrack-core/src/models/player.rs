use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Footedness of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Laterality {
    #[serde(rename = "zurdo")]
    Left,
    #[serde(rename = "diestro")]
    Right,
    #[serde(rename = "ambidiestro")]
    Ambidextrous,
}

impl Laterality {
    pub fn label(&self) -> &'static str {
        match self {
            Laterality::Left => "Left-footed",
            Laterality::Right => "Right-footed",
            Laterality::Ambidextrous => "Ambidextrous",
        }
    }
}

/// Health insurance scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthInsurance {
    #[serde(rename = "fonasa")]
    Fonasa,
    #[serde(rename = "isapre")]
    Isapre,
    #[serde(rename = "otra")]
    Other,
}

impl HealthInsurance {
    pub fn label(&self) -> &'static str {
        match self {
            HealthInsurance::Fonasa => "FONASA",
            HealthInsurance::Isapre => "Isapre",
            HealthInsurance::Other => "Other",
        }
    }
}

/// A club player as served by the backend. Dates come over the wire as
/// `YYYY-MM-DD` strings and are formatted at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub rut: String,
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "nacionalidad")]
    pub nationality: String,
    #[serde(rename = "foto_perfil_url", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "lateralidad")]
    pub laterality: Laterality,
    #[serde(rename = "peso_kg", default)]
    pub weight_kg: Option<f64>,
    #[serde(rename = "estatura_cm", default)]
    pub height_cm: Option<i32>,
    #[serde(rename = "prevision_salud")]
    pub health_insurance: HealthInsurance,
    /// Internal club record number, assigned by the backend (e.g. "0001")
    #[serde(rename = "numero_ficha", default)]
    pub record_number: Option<String>,
    #[serde(rename = "division", default)]
    pub division_id: Option<i64>,
    #[serde(rename = "division_nombre", default)]
    pub division_name: Option<String>,
    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
    /// Age in years, computed server-side from the birth date
    #[serde(rename = "edad", default)]
    pub age: Option<i32>,
}

fn default_true() -> bool {
    true
}

impl Player {
    /// "Last names, First names" for roster listings
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_names, self.first_names)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }

    pub fn birth_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d").ok()
    }

    /// Server-computed age, falling back to the birth date when missing
    pub fn age_years(&self) -> Option<i32> {
        self.age.or_else(|| {
            let born = self.birth_date_parsed()?;
            Utc::now().date_naive().years_since(born).map(|y| y as i32)
        })
    }

    pub fn age_str(&self) -> String {
        self.age_years()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn division_str(&self) -> String {
        self.division_name
            .clone()
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn height_str(&self) -> String {
        self.height_cm
            .map(|h| format!("{} cm", h))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn weight_str(&self) -> String {
        self.weight_kg
            .map(|w| format!("{:.1} kg", w))
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Payload for creating a player
#[derive(Debug, Clone, Serialize)]
pub struct NewPlayer {
    pub rut: String,
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    #[serde(rename = "nacionalidad")]
    pub nationality: String,
    #[serde(rename = "lateralidad")]
    pub laterality: Laterality,
    #[serde(rename = "prevision_salud")]
    pub health_insurance: HealthInsurance,
    #[serde(rename = "peso_kg", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "estatura_cm", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<i32>,
    #[serde(rename = "division", skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_decodes_wire_schema() {
        let json = r#"{
            "id": 7,
            "rut": "12.345.678-5",
            "nombres": "Juan Pablo",
            "apellidos": "Soto Rojas",
            "fecha_nacimiento": "2001-03-14",
            "nacionalidad": "Chilena",
            "foto_perfil_url": null,
            "lateralidad": "zurdo",
            "peso_kg": 74.5,
            "estatura_cm": 178,
            "prevision_salud": "fonasa",
            "numero_ficha": "0007",
            "division": 2,
            "division_nombre": "Primer Equipo",
            "activo": true,
            "edad": 24
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.display_name(), "Soto Rojas, Juan Pablo");
        assert_eq!(player.laterality, Laterality::Left);
        assert_eq!(player.health_insurance.label(), "FONASA");
        assert_eq!(player.age_str(), "24");
        assert_eq!(player.division_str(), "Primer Equipo");
    }

    #[test]
    fn test_player_tolerates_missing_optionals() {
        let json = r#"{
            "id": 1,
            "rut": "9.876.543-2",
            "nombres": "Ana",
            "apellidos": "Mora",
            "fecha_nacimiento": "1999-11-02",
            "nacionalidad": "Chilena",
            "lateralidad": "diestro",
            "prevision_salud": "isapre"
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert!(player.active);
        assert_eq!(player.height_str(), "-");
        assert_eq!(player.weight_str(), "-");
        // No "edad" in the payload; age falls back to the birth date
        assert!(player.age_years().unwrap() >= 25);
    }

    #[test]
    fn test_new_player_omits_unset_fields() {
        let payload = NewPlayer {
            rut: "12.345.678-5".to_string(),
            first_names: "Juan".to_string(),
            last_names: "Soto".to_string(),
            birth_date: "2001-03-14".to_string(),
            nationality: "Chilena".to_string(),
            laterality: Laterality::Right,
            health_insurance: HealthInsurance::Fonasa,
            weight_kg: None,
            height_cm: None,
            division_id: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["lateralidad"], "diestro");
        assert!(value.get("peso_kg").is_none());
        assert!(value.get("division").is_none());
    }
}
