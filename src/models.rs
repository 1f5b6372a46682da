use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Lawyer {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub secondary_specializations: Vec<String>,
    pub experience: u32,
    pub rating: f32,
    pub reviews: u32,
    pub cases_won: u32,
    pub cases_handled: u32,
    pub city: String,
    pub state: String,
    pub location: String,
    pub court: String,
    pub bar_council_number: String,
    pub education: String,
    pub languages: Vec<String>,
    pub fee_min: u32,
    pub fee_max: u32,
    pub bio: String,
    pub image: String,
    pub availability: Vec<String>,
    pub consultation_modes: Vec<String>,
    pub verified: bool,
    pub featured: bool,
    pub joined_date: String,
}

impl Lawyer {
    pub fn fee_range(&self) -> String {
        format!("₹{} - ₹{}", self.fee_min, self.fee_max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LawFirm {
    pub id: String,
    pub firm_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub registration_number: String,
    pub established_year: u32,
    pub total_lawyers: u32,
    pub total_staff: u32,
    pub practice_areas: Vec<String>,
    pub description: String,
    pub achievements: String,
    pub rating: f32,
    pub reviews: u32,
    pub cases_handled: u32,
    pub consultation_fee: u32,
    pub logo: String,
    pub verified: bool,
    pub featured: bool,
    pub services: Vec<String>,
    pub working_hours: String,
    pub working_days: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Lawyer,
    LawFirm,
    FirmClient,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Lawyer => "lawyer",
            UserRole::LawFirm => "law_firm",
            UserRole::FirmClient => "firm_client",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "client" => Some(UserRole::Client),
            "lawyer" => Some(UserRole::Lawyer),
            "law_firm" => Some(UserRole::LawFirm),
            "firm_client" => Some(UserRole::FirmClient),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Client => "User",
            UserRole::Lawyer => "Lawyer",
            UserRole::LawFirm => "Law Firm",
            UserRole::FirmClient => "Firm Client",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub user_type: UserRole,
}

#[derive(Serialize, Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserRole,
}

#[derive(Serialize, Clone, Debug)]
pub struct FirmClientLoginRequest {
    pub email: String,
    pub password: String,
}

/// Shape persisted under the `user` storage key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StoredUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserRole>,
    #[serde(default)]
    pub law_firm_id: Option<String>,
    #[serde(default)]
    pub law_firm_name: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: StoredUser,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct WaitlistRequest {
    pub full_name: String,
    pub email: String,
    pub message: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct FirmClientApplicationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub case_type: String,
    pub case_description: String,
    pub law_firm_id: String,
    pub law_firm_name: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct RegisterPaidRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub company_name: Option<String>,
    pub case_type: String,
    pub case_description: String,
    pub law_firm_id: String,
    pub law_firm_name: String,
    pub payment_amount: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RegisterPaidResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<StoredUser>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FirmClient {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub case_description: Option<String>,
    #[serde(default)]
    pub law_firm_id: Option<String>,
    #[serde(default)]
    pub law_firm_name: Option<String>,
    #[serde(default)]
    pub assigned_lawyer_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CaseUpdate {
    pub id: String,
    pub update_type: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: String,
}

impl CaseUpdate {
    pub fn type_label(&self) -> &'static str {
        match self.update_type.as_str() {
            "hearing_date" => "Hearing",
            "document_submitted" => "Documents",
            "meeting_scheduled" => "Meeting",
            "progress_update" => "Progress",
            _ => "Update",
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct GuestChatRequest {
    pub message: String,
    pub session_id: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ChatResponse {
    pub response: String,
}

/// Lawyer account registered on the backend, as returned by `GET /lawyers`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PlatformLawyer {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Approved firm as returned by `GET /lawfirms/all`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PlatformFirm {
    pub id: String,
    #[serde(alias = "full_name")]
    pub firm_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct GuestBookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub lawyer_id: String,
    pub date: String,
    pub time: String,
    pub consultation_mode: String,
    pub description: String,
    pub amount: u32,
    pub status: String,
    pub payment_status: String,
    pub payment_method: String,
    pub card_last_four: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GuestBookingResponse {
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_as_backend_user_type() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.in".into(),
            password: "secret1".into(),
            user_type: UserRole::LawFirm,
        })
        .unwrap();
        assert_eq!(body["user_type"], "law_firm");
        assert_eq!(UserRole::parse("firm_client"), Some(UserRole::FirmClient));
        assert_eq!(UserRole::parse("admin"), None);
    }

    #[test]
    fn stored_user_tolerates_missing_fields() {
        let user: StoredUser =
            serde_json::from_str(r#"{"id":"c1","email":"x@y.in","user_type":"firm_client"}"#).unwrap();
        assert_eq!(user.id, "c1");
        assert_eq!(user.full_name, "");
        assert_eq!(user.user_type, Some(UserRole::FirmClient));
    }

    #[test]
    fn platform_firm_accepts_user_shaped_records() {
        let firm: PlatformFirm =
            serde_json::from_str(r#"{"id":"f1","full_name":"Shah & Associates","city":"Delhi"}"#).unwrap();
        assert_eq!(firm.firm_name, "Shah & Associates");
        assert_eq!(firm.state, None);
    }
}
