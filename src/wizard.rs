use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Asia::Kolkata;

use crate::config::{FIRM_REGISTRATION_FEE, GST_PERCENT};
use crate::models::{GuestBookingRequest, LawFirm, RegisterPaidRequest, RegisterRequest, UserRole};
use crate::validation::{is_blank, PaymentDetails, PersonalInfo, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    PersonalInfo,
    Details,
    Payment,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::PersonalInfo, Step::Details, Step::Payment, Step::Confirmation];

    pub fn number(&self) -> usize {
        match self {
            Step::PersonalInfo => 1,
            Step::Details => 2,
            Step::Payment => 3,
            Step::Confirmation => 4,
        }
    }

    fn next(self) -> Step {
        match self {
            Step::PersonalInfo => Step::Details,
            Step::Details => Step::Payment,
            Step::Payment | Step::Confirmation => Step::Confirmation,
        }
    }

    fn prev(self) -> Step {
        match self {
            Step::PersonalInfo | Step::Details => Step::PersonalInfo,
            Step::Payment => Step::Details,
            Step::Confirmation => Step::Confirmation,
        }
    }
}

/// Per-step validation for a multi-step signup form.
pub trait WizardForm {
    fn validate_step(&self, step: Step) -> Result<(), ValidationError>;

    fn step_label(step: Step) -> &'static str;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard<F> {
    pub step: Step,
    pub form: F,
}

impl<F: WizardForm + Default> Default for Wizard<F> {
    fn default() -> Self {
        Self { step: Step::PersonalInfo, form: F::default() }
    }
}

impl<F: WizardForm> Wizard<F> {
    pub fn validate_current(&self) -> Result<(), ValidationError> {
        self.form.validate_step(self.step)
    }

    /// Moves forward one step if the current one validates.
    pub fn next(&mut self) -> Result<Step, ValidationError> {
        if self.step == Step::Confirmation {
            return Ok(self.step);
        }
        self.validate_current()?;
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> Step {
        self.step = self.step.prev();
        self.step
    }

    /// Lands on confirmation after a successful (simulated) payment.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        if self.step != Step::Payment {
            return Err(ValidationError::MissingPayment);
        }
        self.validate_current()?;
        self.step = Step::Confirmation;
        Ok(())
    }

    pub fn labels() -> Vec<(usize, &'static str)> {
        Step::ALL.iter().map(|s| (s.number(), F::step_label(*s))).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsultationMode {
    #[default]
    Video,
    InPerson,
    Phone,
}

impl ConsultationMode {
    pub const ALL: [ConsultationMode; 3] = [ConsultationMode::Video, ConsultationMode::InPerson, ConsultationMode::Phone];

    pub fn value(&self) -> &'static str {
        match self {
            ConsultationMode::Video => "video",
            ConsultationMode::InPerson => "in-person",
            ConsultationMode::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsultationMode::Video => "Video Call",
            ConsultationMode::InPerson => "In-Person",
            ConsultationMode::Phone => "Phone Call",
        }
    }
}

/// Lawyer consultation booking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub personal: PersonalInfo,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub mode: ConsultationMode,
    pub case_description: String,
    pub payment: PaymentDetails,
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

impl BookingForm {
    /// The client account created alongside the booking.
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.personal.full_name.trim().to_string(),
            email: self.personal.email.trim().to_string(),
            phone: optional(&self.personal.phone),
            password: self.personal.password.clone(),
            user_type: UserRole::Client,
        }
    }

    pub fn booking_request(&self, lawyer_id: &str, amount: u32) -> GuestBookingRequest {
        GuestBookingRequest {
            full_name: self.personal.full_name.trim().to_string(),
            email: self.personal.email.trim().to_string(),
            phone: self.personal.phone.trim().to_string(),
            lawyer_id: lawyer_id.to_string(),
            date: self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            time: self.time.clone().unwrap_or_default(),
            consultation_mode: self.mode.value().to_string(),
            description: self.case_description.trim().to_string(),
            amount,
            status: "confirmed".to_string(),
            payment_status: "paid".to_string(),
            payment_method: "card".to_string(),
            card_last_four: self.payment.last_four(),
        }
    }
}

impl WizardForm for BookingForm {
    fn validate_step(&self, step: Step) -> Result<(), ValidationError> {
        match step {
            Step::PersonalInfo => self.personal.validate(),
            Step::Details => match (&self.date, &self.time) {
                (Some(_), Some(time)) if !is_blank(time) => Ok(()),
                _ => Err(ValidationError::MissingSchedule),
            },
            Step::Payment => self.payment.validate(),
            Step::Confirmation => Ok(()),
        }
    }

    fn step_label(step: Step) -> &'static str {
        match step {
            Step::PersonalInfo => "Your Details",
            Step::Details => "Schedule",
            Step::Payment => "Payment",
            Step::Confirmation => "Confirmed",
        }
    }
}

pub const FIRM_CASE_TYPES: &[&str] = &[
    "Corporate Law", "Property Law", "Family Law", "Criminal Law",
    "Civil Law", "Tax Law", "Labour Law", "Consumer Law",
    "Intellectual Property", "Banking Law", "Other",
];

/// Paid signup as a law-firm client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FirmJoinForm {
    pub personal: PersonalInfo,
    pub company_name: String,
    pub case_type: String,
    pub case_description: String,
    pub payment: PaymentDetails,
}

impl FirmJoinForm {
    pub fn register_paid_request(&self, firm: &LawFirm, payment_amount: u32) -> RegisterPaidRequest {
        RegisterPaidRequest {
            full_name: self.personal.full_name.trim().to_string(),
            email: self.personal.email.trim().to_string(),
            phone: self.personal.phone.trim().to_string(),
            password: self.personal.password.clone(),
            company_name: optional(&self.company_name),
            case_type: self.case_type.clone(),
            case_description: self.case_description.trim().to_string(),
            law_firm_id: firm.id.clone(),
            law_firm_name: firm.firm_name.clone(),
            payment_amount,
        }
    }
}

impl WizardForm for FirmJoinForm {
    fn validate_step(&self, step: Step) -> Result<(), ValidationError> {
        match step {
            Step::PersonalInfo => self.personal.validate(),
            Step::Details => {
                if is_blank(&self.case_type) || is_blank(&self.case_description) {
                    Err(ValidationError::MissingCaseDetails)
                } else {
                    Ok(())
                }
            }
            Step::Payment => self.payment.validate(),
            Step::Confirmation => Ok(()),
        }
    }

    fn step_label(step: Step) -> &'static str {
        match step {
            Step::PersonalInfo => "Your Details",
            Step::Details => "Case Details",
            Step::Payment => "Payment",
            Step::Confirmation => "Done",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub base: u32,
    pub gst: u32,
    pub total: u32,
}

/// GST rounded half-up to the rupee.
pub fn with_gst(base: u32) -> FeeBreakdown {
    let gst = (base * GST_PERCENT + 50) / 100;
    FeeBreakdown { base, gst, total: base + gst }
}

pub fn firm_registration_fee() -> FeeBreakdown {
    with_gst(FIRM_REGISTRATION_FEE)
}

/// Half-hour slots from 9:00 to 18:00 with the 13:00 lunch hour left out.
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::new();
    for hour in 9..=18 {
        if hour == 13 {
            continue;
        }
        slots.push(format!("{}:00", hour));
        if hour != 18 {
            slots.push(format!("{}:30", hour));
        }
    }
    slots
}

/// The next fourteen days after `today`, Sundays excluded.
pub fn available_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=14)
        .map(|offset| today + Duration::days(offset))
        .filter(|d| d.weekday() != Weekday::Sun)
        .collect()
}

pub fn today_in_india() -> NaiveDate {
    Utc::now().with_timezone(&Kolkata).date_naive()
}

pub fn date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn personal() -> PersonalInfo {
        PersonalInfo {
            full_name: "Ravi Menon".into(),
            email: "ravi@menon.in".into(),
            phone: "9876543210".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    fn card() -> PaymentDetails {
        PaymentDetails {
            card_number: "4111111111111111".into(),
            card_expiry: "01/29".into(),
            card_cvv: "999".into(),
            card_name: "RAVI MENON".into(),
        }
    }

    #[test]
    fn booking_wizard_blocks_each_step_until_valid() {
        let mut wizard: Wizard<BookingForm> = Wizard::default();
        assert_eq!(wizard.next(), Err(ValidationError::MissingFields));
        assert_eq!(wizard.step, Step::PersonalInfo);

        wizard.form.personal = personal();
        wizard.form.personal.confirm_password = "nope".into();
        assert_eq!(wizard.next(), Err(ValidationError::PasswordMismatch));

        wizard.form.personal = personal();
        assert_eq!(wizard.next(), Ok(Step::Details));

        wizard.form.date = NaiveDate::from_ymd_opt(2025, 3, 4);
        assert_eq!(wizard.next(), Err(ValidationError::MissingSchedule));
        wizard.form.time = Some("10:30".into());
        assert_eq!(wizard.next(), Ok(Step::Payment));

        assert_eq!(wizard.complete(), Err(ValidationError::MissingPayment));
        wizard.form.payment = card();
        assert_eq!(wizard.complete(), Ok(()));
        assert_eq!(wizard.step, Step::Confirmation);
    }

    #[test]
    fn back_never_leaves_the_first_step_or_confirmation() {
        let mut wizard: Wizard<BookingForm> = Wizard::default();
        assert_eq!(wizard.back(), Step::PersonalInfo);

        wizard.step = Step::Payment;
        assert_eq!(wizard.back(), Step::Details);

        wizard.step = Step::Confirmation;
        assert_eq!(wizard.back(), Step::Confirmation);
        assert_eq!(wizard.next(), Ok(Step::Confirmation));
    }

    #[test]
    fn complete_only_from_payment() {
        let mut wizard: Wizard<FirmJoinForm> = Wizard::default();
        wizard.form.payment = card();
        assert!(wizard.complete().is_err());
        assert_eq!(wizard.step, Step::PersonalInfo);
    }

    #[test]
    fn firm_join_requires_case_details() {
        let mut wizard: Wizard<FirmJoinForm> = Wizard::default();
        wizard.form.personal = personal();
        assert_eq!(wizard.next(), Ok(Step::Details));

        wizard.form.case_type = "Tax Law".into();
        assert_eq!(wizard.next(), Err(ValidationError::MissingCaseDetails));
        wizard.form.case_description = "Notice from the department".into();
        assert_eq!(wizard.next(), Ok(Step::Payment));
        assert_eq!(Wizard::<FirmJoinForm>::labels()[1], (2, "Case Details"));
    }

    #[test]
    fn booking_payloads_carry_form_values() {
        let form = BookingForm {
            personal: personal(),
            date: NaiveDate::from_ymd_opt(2025, 2, 3),
            time: Some("15:30".into()),
            mode: ConsultationMode::InPerson,
            case_description: " Rent dispute ".into(),
            payment: card(),
        };

        let register = form.register_request();
        assert_eq!(register.user_type, UserRole::Client);
        assert_eq!(register.phone.as_deref(), Some("9876543210"));

        let booking = form.booking_request("lawyer_12", 4000);
        assert_eq!(booking.date, "2025-02-03");
        assert_eq!(booking.consultation_mode, "in-person");
        assert_eq!(booking.description, "Rent dispute");
        assert_eq!(booking.card_last_four, "1111");
        assert_eq!(booking.payment_status, "paid");
    }

    #[test]
    fn paid_signup_names_the_firm() {
        let firm = crate::data::firms::generate_firms(&mut rand::rngs::StdRng::seed_from_u64(5), 1).remove(0);
        let form = FirmJoinForm {
            personal: personal(),
            company_name: "  ".into(),
            case_type: "Tax Law".into(),
            case_description: "Notice".into(),
            ..Default::default()
        };
        let req = form.register_paid_request(&firm, firm_registration_fee().total);
        assert_eq!(req.law_firm_id, firm.id);
        assert_eq!(req.law_firm_name, firm.firm_name);
        assert_eq!(req.company_name, None);
        assert_eq!(req.payment_amount, 1179);
    }

    #[test]
    fn registration_fee_includes_gst() {
        let fee = firm_registration_fee();
        assert_eq!(fee, FeeBreakdown { base: 999, gst: 180, total: 1179 });
        assert_eq!(with_gst(1000).total, 1180);
    }

    #[test]
    fn slots_skip_lunch_and_end_at_six() {
        let slots = time_slots();
        assert_eq!(slots.first().map(String::as_str), Some("9:00"));
        assert_eq!(slots.last().map(String::as_str), Some("18:00"));
        assert!(!slots.iter().any(|s| s.starts_with("13:")));
        assert!(slots.contains(&"12:30".to_string()));
        assert_eq!(slots.len(), 17);
    }

    #[test]
    fn dates_cover_two_weeks_without_sundays() {
        // 2025-01-05 is a Sunday
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let dates = available_dates(today);
        assert_eq!(dates.len(), 12);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert!(dates.iter().all(|d| d.weekday() != Weekday::Sun && *d > today));
        assert_eq!(date_label(dates[0]), "Mon, Jan 6");
    }
}
