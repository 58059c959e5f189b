use serde::{Deserialize, Serialize};

/// A squad division (e.g. first team, women's team, U-17 cadets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Count of active players, computed server-side
    #[serde(rename = "cantidad_jugadores", default)]
    pub active_player_count: Option<i64>,
}

impl Division {
    pub fn player_count_str(&self) -> String {
        self.active_player_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
