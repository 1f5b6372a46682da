use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Form validation failures. `Display` is the text shown in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please select a date and time")]
    MissingSchedule,
    #[error("Please provide case details")]
    MissingCaseDetails,
    #[error("Please fill all payment details")]
    MissingPayment,
    #[error("Please select your role")]
    MissingRole,
    #[error("Please enter email and password")]
    MissingCredentials,
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| is_blank(v))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Confirmation is checked before length, matching the order users see the errors in.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl PersonalInfo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.full_name, &self.email, &self.phone, &self.password]) {
            return Err(ValidationError::MissingFields);
        }
        validate_email(&self.email)?;
        validate_new_password(&self.password, &self.confirm_password)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub card_name: String,
}

impl PaymentDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.card_number, &self.card_expiry, &self.card_cvv, &self.card_name]) {
            Err(ValidationError::MissingPayment)
        } else {
            Ok(())
        }
    }

    /// Last four digits of the card, ignoring spaces and dashes.
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }

    /// "**** **** **** 4242" for the confirmation screen.
    pub fn masked(&self) -> String {
        format!("**** **** **** {}", self.last_four())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> PersonalInfo {
        PersonalInfo {
            full_name: "Asha Rao".into(),
            email: "asha@example.in".into(),
            phone: "+91 9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" padded@mail.com "));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("space in@example.com"));
        assert!(!is_valid_email("nodot@example"));
    }

    #[test]
    fn personal_info_checks_in_order() {
        assert_eq!(person().validate(), Ok(()));

        let mut p = person();
        p.phone = "  ".into();
        assert_eq!(p.validate(), Err(ValidationError::MissingFields));

        let mut p = person();
        p.email = "asha".into();
        assert_eq!(p.validate(), Err(ValidationError::InvalidEmail));

        let mut p = person();
        p.confirm_password = "secret2".into();
        assert_eq!(p.validate(), Err(ValidationError::PasswordMismatch));

        let mut p = person();
        p.password = "abc".into();
        p.confirm_password = "abc".into();
        assert_eq!(p.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn six_character_password_is_enough() {
        assert_eq!(validate_new_password("abcdef", "abcdef"), Ok(()));
        assert_eq!(validate_new_password("abcde", "abcde"), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn payment_requires_every_field() {
        let full = PaymentDetails {
            card_number: "4242 4242 4242 4242".into(),
            card_expiry: "12/28".into(),
            card_cvv: "123".into(),
            card_name: "ASHA RAO".into(),
        };
        assert_eq!(full.validate(), Ok(()));
        assert_eq!(full.last_four(), "4242");
        assert_eq!(full.masked(), "**** **** **** 4242");

        let missing = PaymentDetails { card_cvv: String::new(), ..full };
        assert_eq!(missing.validate(), Err(ValidationError::MissingPayment));
    }

    #[test]
    fn short_card_number_keeps_what_it_has() {
        let card = PaymentDetails { card_number: "12".into(), ..Default::default() };
        assert_eq!(card.last_four(), "12");
    }

    #[test]
    fn messages_match_toasts() {
        assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password must be at least 6 characters");
        assert_eq!(ValidationError::MissingSchedule.to_string(), "Please select a date and time");
    }
}
