use serde::{Deserialize, Serialize};

/// Minimal user info returned at login and cached with the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    /// Username is the RUT on this backend
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl UserSummary {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }
}

/// Extended profile attached to a user account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub rut: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "cargo", default)]
    pub position: Option<String>,
    #[serde(rename = "activo", default)]
    pub active: Option<bool>,
}

/// A user account as listed by the user-management endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl UserAccount {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }

    pub fn role_str(&self) -> String {
        self.role.clone().unwrap_or_else(|| "-".to_string())
    }

    pub fn status_str(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Payload for creating a user account through the admin endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub rut: String,
    pub password: String,
    pub password2: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub group_name: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "cargo", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Payload for self-service account registration
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub rut: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
}

/// Response body from `POST /auth/login/` and `POST /auth/register/`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_account_decodes_wire_schema() {
        let json = r#"{
            "id": 3,
            "username": "123456785",
            "email": "kine@club.cl",
            "first_name": "Maria",
            "last_name": "Perez",
            "full_name": "Maria Perez",
            "is_active": true,
            "is_staff": false,
            "date_joined": "2024-01-15T09:00:00Z",
            "role": "Kinesiologo",
            "profile": {"rut": "12.345.678-5", "telefono": "+56 9 1234 5678", "cargo": "Kinesiologa", "activo": true}
        }"#;

        let account: UserAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.display_name(), "Maria Perez");
        assert_eq!(account.role_str(), "Kinesiologo");
        assert_eq!(account.status_str(), "Active");
    }

    #[test]
    fn test_login_response_decodes() {
        let json = r#"{
            "access_token": "tok123",
            "refresh_token": "refresh456",
            "user": {"id": 1, "username": "123456785", "full_name": "Maria Perez", "email": null, "groups": ["Kinesiologo"]}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "tok123");
        assert_eq!(response.user.unwrap().display_name(), "Maria Perez");
    }

    #[test]
    fn test_user_summary_falls_back_to_username() {
        let user = UserSummary {
            id: 1,
            username: "123456785".to_string(),
            full_name: Some("  ".to_string()),
            email: None,
            groups: vec![],
        };
        assert_eq!(user.display_name(), "123456785");
    }
}
