use web_sys::{window, Storage};

use crate::models::{StoredUser, UserRole};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "userRole";
pub const LAST_BOOKING_KEY: &str = "lastBookingId";

fn storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

fn read(key: &str) -> Option<String> {
    storage().and_then(|s| s.get_item(key).ok()).flatten()
}

fn write(key: &str, value: &str) {
    if let Some(s) = storage() {
        if s.set_item(key, value).is_err() {
            log::warn!("could not persist {}", key);
        }
    }
}

pub fn encode_user(user: &StoredUser) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Corrupt entries read as no user.
pub fn decode_user(raw: &str) -> Option<StoredUser> {
    serde_json::from_str(raw).ok()
}

/// Persists a successful login or signup.
pub fn save_auth(token: Option<&str>, user: &StoredUser, role: UserRole) {
    if let Some(token) = token {
        write(TOKEN_KEY, token);
    }
    if let Some(raw) = encode_user(user) {
        write(USER_KEY, &raw);
    }
    write(ROLE_KEY, role.as_str());
    log::info!("signed in as {}", role);
}

pub fn remember_booking(id: &str) {
    write(LAST_BOOKING_KEY, id);
}

pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn stored_user() -> Option<StoredUser> {
    read(USER_KEY).as_deref().and_then(decode_user)
}

pub fn role() -> Option<UserRole> {
    read(ROLE_KEY).as_deref().and_then(UserRole::parse)
}

pub fn is_logged_in() -> bool {
    token().is_some() || stored_user().is_some()
}

pub fn logout() {
    if let Some(s) = storage() {
        for key in [TOKEN_KEY, USER_KEY, ROLE_KEY] {
            let _ = s.remove_item(key);
        }
    }
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_survives_a_round_trip() {
        let user = StoredUser {
            id: "fc-7".into(),
            full_name: "Meera Iyer".into(),
            email: "meera@iyer.in".into(),
            phone: Some("9000000000".into()),
            user_type: Some(UserRole::FirmClient),
            law_firm_id: Some("firm_3".into()),
            law_firm_name: Some("Shah & Associates".into()),
        };
        let raw = encode_user(&user).unwrap();
        assert!(raw.contains("\"user_type\":\"firm_client\""));
        assert_eq!(decode_user(&raw), Some(user));
    }

    #[test]
    fn garbage_is_not_a_user() {
        assert_eq!(decode_user("undefined"), None);
        assert_eq!(decode_user(""), None);
    }
}
