use serde::{Deserialize, Serialize};

/// Patient status recorded at the end of a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttentionStatus {
    #[serde(rename = "tratamiento")]
    InTreatment,
    #[serde(rename = "alta")]
    Discharged,
    #[serde(rename = "derivado")]
    Referred,
    #[serde(rename = "control")]
    PeriodicCheckup,
    #[serde(rename = "otro")]
    Other,
}

impl AttentionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttentionStatus::InTreatment => "In treatment",
            AttentionStatus::Discharged => "Discharged",
            AttentionStatus::Referred => "Referred to specialist",
            AttentionStatus::PeriodicCheckup => "Periodic checkup",
            AttentionStatus::Other => "Other",
        }
    }

    /// All statuses in form order
    pub fn all() -> &'static [AttentionStatus] {
        &[
            AttentionStatus::InTreatment,
            AttentionStatus::Discharged,
            AttentionStatus::Referred,
            AttentionStatus::PeriodicCheckup,
            AttentionStatus::Other,
        ]
    }
}

/// One kinesiological (physiotherapy) visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attention {
    pub id: i64,
    #[serde(rename = "jugador")]
    pub player_id: i64,
    #[serde(rename = "jugador_nombre", default)]
    pub player_name: Option<String>,
    #[serde(rename = "profesional_a_cargo", default)]
    pub professional_id: Option<i64>,
    #[serde(rename = "profesional_nombre", default)]
    pub professional_name: Option<String>,
    #[serde(rename = "fecha_atencion")]
    pub attended_at: String,
    #[serde(rename = "motivo_consulta")]
    pub reason: String,
    #[serde(rename = "prestaciones_realizadas")]
    pub treatment: String,
    #[serde(rename = "estado_actual")]
    pub status: AttentionStatus,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl Attention {
    pub fn player_str(&self) -> String {
        self.player_name
            .clone()
            .unwrap_or_else(|| format!("Player #{}", self.player_id))
    }

    pub fn professional_str(&self) -> String {
        self.professional_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Payload for recording a new visit
#[derive(Debug, Clone, Serialize)]
pub struct NewAttention {
    #[serde(rename = "jugador")]
    pub player_id: i64,
    #[serde(rename = "motivo_consulta")]
    pub reason: String,
    #[serde(rename = "prestaciones_realizadas")]
    pub treatment: String,
    #[serde(rename = "estado_actual")]
    pub status: AttentionStatus,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attention_decodes_wire_schema() {
        let json = r#"{
            "id": 42,
            "jugador": 7,
            "jugador_nombre": "Juan Pablo Soto Rojas (12.345.678-5)",
            "profesional_a_cargo": 3,
            "profesional_nombre": "Maria Perez",
            "fecha_atencion": "2025-06-15T10:30:00-04:00",
            "motivo_consulta": "Dolor en isquiotibial derecho",
            "prestaciones_realizadas": "Masoterapia y crioterapia",
            "estado_actual": "tratamiento",
            "observaciones": null
        }"#;

        let attention: Attention = serde_json::from_str(json).unwrap();
        assert_eq!(attention.status, AttentionStatus::InTreatment);
        assert_eq!(attention.status.label(), "In treatment");
        assert_eq!(attention.professional_str(), "Maria Perez");
    }

    #[test]
    fn test_new_attention_serializes_spanish_field_names() {
        let payload = NewAttention {
            player_id: 7,
            reason: "Control semanal".to_string(),
            treatment: "Ejercicios excentricos".to_string(),
            status: AttentionStatus::PeriodicCheckup,
            notes: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["jugador"], 7);
        assert_eq!(value["estado_actual"], "control");
        assert!(value.get("observaciones").is_none());
    }
}
