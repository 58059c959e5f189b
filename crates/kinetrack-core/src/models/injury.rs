use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryType {
    #[serde(rename = "muscular")]
    Muscular,
    #[serde(rename = "ligamentosa")]
    Ligament,
    #[serde(rename = "osea")]
    Bone,
    #[serde(rename = "tendinosa")]
    Tendon,
    #[serde(rename = "articular")]
    Joint,
    #[serde(rename = "meniscal")]
    Meniscus,
    #[serde(rename = "contusion")]
    Contusion,
    #[serde(rename = "otra")]
    Other,
}

impl InjuryType {
    pub fn label(&self) -> &'static str {
        match self {
            InjuryType::Muscular => "Muscular",
            InjuryType::Ligament => "Ligament",
            InjuryType::Bone => "Bone",
            InjuryType::Tendon => "Tendon",
            InjuryType::Joint => "Joint",
            InjuryType::Meniscus => "Meniscus",
            InjuryType::Contusion => "Contusion",
            InjuryType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryMechanism {
    #[serde(rename = "contacto")]
    Contact,
    #[serde(rename = "sin_contacto")]
    NonContact,
    #[serde(rename = "sobrecarga")]
    Overload,
    #[serde(rename = "traumatico")]
    Traumatic,
    #[serde(rename = "indirecto")]
    Indirect,
    #[serde(rename = "otro")]
    Other,
}

impl InjuryMechanism {
    pub fn label(&self) -> &'static str {
        match self {
            InjuryMechanism::Contact => "Contact",
            InjuryMechanism::NonContact => "Non-contact",
            InjuryMechanism::Overload => "Overload",
            InjuryMechanism::Traumatic => "Traumatic",
            InjuryMechanism::Indirect => "Indirect",
            InjuryMechanism::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryCondition {
    #[serde(rename = "aguda")]
    Acute,
    #[serde(rename = "cronica")]
    Chronic,
    #[serde(rename = "recidivante")]
    Recurrent,
    #[serde(rename = "sobreaguda")]
    Hyperacute,
}

impl InjuryCondition {
    pub fn label(&self) -> &'static str {
        match self {
            InjuryCondition::Acute => "Acute",
            InjuryCondition::Chronic => "Chronic",
            InjuryCondition::Recurrent => "Recurrent",
            InjuryCondition::Hyperacute => "Hyperacute",
        }
    }
}

/// Point in the sporting calendar when the injury happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SportPhase {
    #[serde(rename = "pretemporada")]
    PreSeason,
    #[serde(rename = "competencia")]
    Competition,
    #[serde(rename = "posttemporada")]
    PostSeason,
    #[serde(rename = "entrenamiento")]
    Training,
    #[serde(rename = "partido")]
    OfficialMatch,
    #[serde(rename = "amistoso")]
    FriendlyMatch,
}

impl SportPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SportPhase::PreSeason => "Pre-season",
            SportPhase::Competition => "Competition",
            SportPhase::PostSeason => "Post-season",
            SportPhase::Training => "Training",
            SportPhase::OfficialMatch => "Official match",
            SportPhase::FriendlyMatch => "Friendly match",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjurySeverity {
    #[serde(rename = "leve")]
    Minor,
    #[serde(rename = "moderada")]
    Moderate,
    #[serde(rename = "grave")]
    Severe,
    #[serde(rename = "severa")]
    Surgical,
}

impl InjurySeverity {
    pub fn label(&self) -> &'static str {
        match self {
            InjurySeverity::Minor => "Minor (1-7 days)",
            InjurySeverity::Moderate => "Moderate (8-28 days)",
            InjurySeverity::Severe => "Severe (> 28 days)",
            InjurySeverity::Surgical => "Surgical",
        }
    }
}

/// Estimated recovery time left. The backend sends either a day count or a
/// human-readable label once recovery is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaysRemaining {
    Days(i64),
    Label(String),
}

impl std::fmt::Display for DaysRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaysRemaining::Days(d) => write!(f, "{} days", d),
            DaysRemaining::Label(s) => write!(f, "{}", s),
        }
    }
}

/// An injury episode for a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Injury {
    pub id: i64,
    #[serde(rename = "jugador")]
    pub player_id: i64,
    #[serde(rename = "jugador_nombre", default)]
    pub player_name: Option<String>,
    #[serde(rename = "fecha_lesion")]
    pub injured_on: String,
    #[serde(rename = "diagnostico_medico")]
    pub diagnosis: String,
    #[serde(rename = "tipo_lesion")]
    pub injury_type: InjuryType,
    /// Body-region code; open vocabulary, passed through for display
    #[serde(rename = "region_cuerpo")]
    pub body_region: String,
    #[serde(rename = "mecanismo_lesional")]
    pub mechanism: InjuryMechanism,
    #[serde(rename = "condicion_lesion")]
    pub condition: InjuryCondition,
    #[serde(rename = "etapa_deportiva_lesion")]
    pub sport_phase: SportPhase,
    #[serde(rename = "gravedad_lesion")]
    pub severity: InjurySeverity,
    #[serde(rename = "dias_recuperacion_estimados", default)]
    pub estimated_recovery_days: Option<i32>,
    #[serde(rename = "dias_recuperacion_reales", default)]
    pub actual_recovery_days: Option<i32>,
    #[serde(rename = "observaciones_lesion", default)]
    pub notes: Option<String>,
    #[serde(rename = "partidos_ausente_estimados", default)]
    pub estimated_matches_out: Option<i32>,
    #[serde(rename = "activa", default)]
    pub active: Option<bool>,
    #[serde(rename = "dias_restantes", default)]
    pub days_remaining: Option<DaysRemaining>,
}

impl Injury {
    pub fn player_str(&self) -> String {
        self.player_name
            .clone()
            .unwrap_or_else(|| format!("Player #{}", self.player_id))
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(self.actual_recovery_days.is_none())
    }

    pub fn days_remaining_str(&self) -> String {
        self.days_remaining
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Payload for registering a new injury
#[derive(Debug, Clone, Serialize)]
pub struct NewInjury {
    #[serde(rename = "jugador")]
    pub player_id: i64,
    #[serde(rename = "fecha_lesion")]
    pub injured_on: String,
    #[serde(rename = "diagnostico_medico")]
    pub diagnosis: String,
    #[serde(rename = "tipo_lesion")]
    pub injury_type: InjuryType,
    #[serde(rename = "region_cuerpo")]
    pub body_region: String,
    #[serde(rename = "mecanismo_lesional")]
    pub mechanism: InjuryMechanism,
    #[serde(rename = "condicion_lesion")]
    pub condition: InjuryCondition,
    #[serde(rename = "etapa_deportiva_lesion")]
    pub sport_phase: SportPhase,
    #[serde(rename = "gravedad_lesion")]
    pub severity: InjurySeverity,
    #[serde(rename = "dias_recuperacion_estimados", skip_serializing_if = "Option::is_none")]
    pub estimated_recovery_days: Option<i32>,
    #[serde(rename = "observaciones_lesion", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Daily treatment stage while an injury is rehabilitated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentStage {
    #[serde(rename = "camilla")]
    Table,
    #[serde(rename = "gimnasio")]
    Gym,
    #[serde(rename = "reintegro")]
    SportsReturn,
}

impl TreatmentStage {
    pub fn label(&self) -> &'static str {
        match self {
            TreatmentStage::Table => "Table treatment",
            TreatmentStage::Gym => "Gym treatment",
            TreatmentStage::SportsReturn => "Return to sport",
        }
    }
}

/// One day in an injury's rehabilitation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyState {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "lesion")]
    pub injury_id: i64,
    #[serde(rename = "estado")]
    pub stage: TreatmentStage,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

/// A selectable treatment-stage option served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injury_decodes_wire_schema() {
        let json = r#"{
            "id": 3,
            "jugador": 7,
            "jugador_nombre": "Soto (12.345.678-5)",
            "fecha_lesion": "2025-05-01",
            "diagnostico_medico": "Desgarro isquiotibial grado II",
            "tipo_lesion": "muscular",
            "region_cuerpo": "muslo_post_der",
            "mecanismo_lesional": "sin_contacto",
            "condicion_lesion": "aguda",
            "etapa_deportiva_lesion": "partido",
            "gravedad_lesion": "moderada",
            "dias_recuperacion_estimados": 21,
            "dias_recuperacion_reales": null,
            "observaciones_lesion": null,
            "partidos_ausente_estimados": 3,
            "dias_restantes": 12
        }"#;

        let injury: Injury = serde_json::from_str(json).unwrap();
        assert_eq!(injury.injury_type, InjuryType::Muscular);
        assert_eq!(injury.severity.label(), "Moderate (8-28 days)");
        assert!(injury.is_active());
        assert_eq!(injury.days_remaining_str(), "12 days");
    }

    #[test]
    fn test_days_remaining_accepts_label() {
        let injury: Injury = serde_json::from_str(
            r#"{
                "id": 4,
                "jugador": 1,
                "fecha_lesion": "2025-01-10",
                "diagnostico_medico": "Esguince",
                "tipo_lesion": "ligamentosa",
                "region_cuerpo": "tobillo_izq",
                "mecanismo_lesional": "contacto",
                "condicion_lesion": "aguda",
                "etapa_deportiva_lesion": "entrenamiento",
                "gravedad_lesion": "leve",
                "dias_recuperacion_reales": 6,
                "dias_restantes": "Recuperado"
            }"#,
        )
        .unwrap();
        assert!(!injury.is_active());
        assert_eq!(injury.days_remaining_str(), "Recuperado");
    }

    #[test]
    fn test_new_injury_serializes_spanish_field_names() {
        let payload = NewInjury {
            player_id: 7,
            injured_on: "2025-05-01".to_string(),
            diagnosis: "Desgarro isquiotibial grado II".to_string(),
            injury_type: InjuryType::Muscular,
            body_region: "muslo_post_der".to_string(),
            mechanism: InjuryMechanism::NonContact,
            condition: InjuryCondition::Acute,
            sport_phase: SportPhase::OfficialMatch,
            severity: InjurySeverity::Moderate,
            estimated_recovery_days: Some(21),
            notes: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["jugador"], 7);
        assert_eq!(value["tipo_lesion"], "muscular");
        assert_eq!(value["mecanismo_lesional"], "sin_contacto");
        assert_eq!(value["etapa_deportiva_lesion"], "partido");
        assert_eq!(value["gravedad_lesion"], "moderada");
        assert_eq!(value["dias_recuperacion_estimados"], 21);
        assert!(value.get("observaciones_lesion").is_none());
    }

    #[test]
    fn test_daily_state_serializes_spanish_field_names() {
        let state = DailyState {
            id: None,
            injury_id: 3,
            stage: TreatmentStage::Gym,
            date: "2025-05-10".to_string(),
            notes: Some("Buena tolerancia".to_string()),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["lesion"], 3);
        assert_eq!(value["estado"], "gimnasio");
        assert_eq!(value["fecha"], "2025-05-10");
    }
}
