use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::LAWYER_COUNT;
use crate::data::locations::{courts_for_state, COURTS, LAWYER_PLACES, SPECIALIZATIONS};
use crate::models::Lawyer;

const FIRST_NAMES: &[&str] = &[
    "Rajesh", "Priya", "Amit", "Neha", "Vikram", "Sunita", "Arun", "Kavita", "Sanjay", "Meera",
    "Rahul", "Anjali", "Deepak", "Pooja", "Suresh", "Rekha", "Vivek", "Anita", "Manish", "Seema",
    "Rakesh", "Shweta", "Ajay", "Nisha", "Vijay", "Ritu", "Ashok", "Divya", "Ramesh", "Sarita",
    "Karan", "Jyoti", "Nikhil", "Preeti", "Gaurav", "Shruti", "Alok", "Swati", "Mohit", "Pallavi",
    "Rohit", "Megha", "Tarun", "Sneha", "Pankaj", "Komal", "Harsh", "Tanvi", "Vishal", "Sakshi",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Gupta", "Singh", "Kumar", "Malhotra", "Kapoor", "Agarwal", "Jain", "Patel",
    "Shah", "Mehta", "Reddy", "Nair", "Khanna", "Bhatia", "Chopra", "Bansal", "Saxena", "Yadav",
    "Mishra", "Pandey", "Dubey", "Srivastava", "Tiwari", "Chauhan", "Rathore", "Arora", "Sethi", "Dhawan",
    "Bajaj", "Goyal", "Ahuja", "Mehra", "Tandon", "Kaul", "Dua", "Vohra", "Grover", "Bhargava",
];

const LANGUAGES: &[&str] = &[
    "Hindi", "English", "Marathi", "Tamil", "Telugu", "Bengali", "Gujarati", "Kannada", "Malayalam", "Punjabi",
];

const EDUCATIONS: &[&str] = &[
    "LLB from Delhi University",
    "LLB, LLM from NLS Bangalore",
    "BA LLB from NALSAR",
    "LLB from Mumbai University",
    "LLB, LLM from Symbiosis",
    "BA LLB from Amity University",
    "LLB from Lucknow University",
    "LLB from Gujarat University",
    "BA LLB from NLIU Bhopal",
    "LLB, LLM from Pune University",
];

const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const CONSULTATION_MODES: &[&str] = &["In-Person", "Video Call", "Phone"];

/// Reference year the bar-council enrolment year is counted back from.
const BASE_YEAR: u32 = 2024;

/// Generated once per page load.
pub static LAWYERS: Lazy<Vec<Lawyer>> =
    Lazy::new(|| generate_lawyers(&mut StdRng::from_entropy(), LAWYER_COUNT));

pub fn find_lawyer(id: &str) -> Option<&'static Lawyer> {
    LAWYERS.iter().find(|l| l.id == id)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

/// A court of the lawyer's own state, or a generic forum for states without a directory entry.
fn court_in<R: Rng + ?Sized>(rng: &mut R, state: &str) -> &'static str {
    match courts_for_state(state) {
        [] => pick(rng, COURTS),
        courts => pick(rng, courts),
    }
}

fn keep_some<R: Rng + ?Sized>(rng: &mut R, values: &[&str], odds: f64) -> Vec<String> {
    values
        .iter()
        .filter(|_| rng.gen_bool(odds))
        .map(|v| v.to_string())
        .collect()
}

pub(crate) fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("+91 {}", rng.gen_range(1_000_000_000u64..10_000_000_000))
}

pub(crate) fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let raw: f32 = rng.gen_range(3.5..5.0);
    (raw * 10.0).round() / 10.0
}

pub(crate) fn state_code(state: &str) -> String {
    state.chars().take(2).collect::<String>().to_uppercase()
}

pub fn generate_lawyers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Lawyer> {
    (1..=count).map(|i| generate_lawyer(rng, i)).collect()
}

fn generate_lawyer<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Lawyer {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let place = LAWYER_PLACES.choose(rng).unwrap_or(&LAWYER_PLACES[0]);
    let specialization = pick(rng, SPECIALIZATIONS);
    let experience = rng.gen_range(3..28);
    let rating = random_rating(rng);
    let reviews = rng.gen_range(10..210);
    let cases_won = rng.gen_range(50..350);
    let cases_handled = cases_won + rng.gen_range(0..100);
    let gender = if rng.gen_bool(0.5) { "men" } else { "women" };
    let portrait = rng.gen_range(1..=70);

    let mut secondary = Vec::new();
    for _ in 0..2 {
        let extra = pick(rng, SPECIALIZATIONS);
        if extra != specialization && !secondary.iter().any(|s: &String| s == extra) {
            secondary.push(extra.to_string());
        }
    }

    let mut languages = vec!["English".to_string(), "Hindi".to_string()];
    for extra in keep_some(rng, LANGUAGES, 0.3).into_iter().take(2) {
        if !languages.contains(&extra) {
            languages.push(extra);
        }
    }

    let bar_council_number = format!(
        "{}/{}/{}",
        state_code(place.state),
        rng.gen_range(1000..10000),
        BASE_YEAR - experience
    );

    Lawyer {
        id: format!("lawyer_{}", index),
        name: format!("Adv. {} {}", first_name, last_name),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}{}@lawmail.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            index
        ),
        phone: random_phone(rng),
        specialization: specialization.to_string(),
        secondary_specializations: secondary,
        experience,
        rating,
        reviews,
        cases_won,
        cases_handled,
        city: place.city.to_string(),
        state: place.state.to_string(),
        location: format!("{}, {}", place.city, place.state),
        court: court_in(rng, place.state).to_string(),
        bar_council_number,
        education: pick(rng, EDUCATIONS).to_string(),
        languages,
        fee_min: rng.gen_range(2..7) * 1000,
        fee_max: rng.gen_range(8..18) * 1000,
        bio: format!(
            "Experienced {} advocate with {}+ years of practice. Successfully handled {}+ cases with a strong track record. Known for dedication and client-focused approach.",
            specialization, experience, cases_won
        ),
        image: format!("https://randomuser.me/api/portraits/{}/{}.jpg", gender, portrait),
        availability: keep_some(rng, WEEKDAYS, 0.7),
        consultation_modes: keep_some(rng, CONSULTATION_MODES, 0.7),
        verified: rng.gen_bool(0.8),
        featured: rng.gen_bool(0.1),
        joined_date: format!(
            "{}-{:02}-01",
            BASE_YEAR - rng.gen_range(0..5),
            rng.gen_range(1..=12)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Vec<Lawyer> {
        generate_lawyers(&mut StdRng::seed_from_u64(7), count)
    }

    #[test]
    fn ids_are_sequential_and_names_prefixed() {
        let lawyers = sample(25);
        assert_eq!(lawyers.len(), 25);
        assert_eq!(lawyers[0].id, "lawyer_1");
        assert_eq!(lawyers[24].id, "lawyer_25");
        assert!(lawyers.iter().all(|l| l.name.starts_with("Adv. ")));
    }

    #[test]
    fn generated_values_stay_in_range() {
        for lawyer in sample(300) {
            assert!((3..=27).contains(&lawyer.experience));
            assert!(lawyer.rating >= 3.5 && lawyer.rating <= 5.0);
            assert!((2000..=6000).contains(&lawyer.fee_min));
            assert!((8000..=17000).contains(&lawyer.fee_max));
            assert!(lawyer.cases_handled >= lawyer.cases_won);
            assert_eq!(lawyer.location, format!("{}, {}", lawyer.city, lawyer.state));
            assert!(lawyer.phone.starts_with("+91 "));
        }
    }

    #[test]
    fn courts_belong_to_the_lawyers_state() {
        for lawyer in sample(200) {
            assert!(courts_for_state(&lawyer.state).contains(&lawyer.court.as_str()));
        }
    }

    #[test]
    fn secondary_specializations_exclude_primary() {
        for lawyer in sample(300) {
            assert!(lawyer.secondary_specializations.len() <= 2);
            assert!(!lawyer.secondary_specializations.contains(&lawyer.specialization));
        }
    }

    #[test]
    fn languages_lead_with_english_and_hindi_without_duplicates() {
        for lawyer in sample(200) {
            assert_eq!(&lawyer.languages[..2], &["English".to_string(), "Hindi".to_string()]);
            let mut seen = lawyer.languages.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), lawyer.languages.len());
            assert!(lawyer.languages.len() <= 4);
        }
    }

    #[test]
    fn bar_council_number_encodes_state_and_enrolment_year() {
        for lawyer in sample(50) {
            let parts: Vec<&str> = lawyer.bar_council_number.split('/').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], state_code(&lawyer.state));
            assert_eq!(parts[2], (BASE_YEAR - lawyer.experience).to_string());
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(sample(10), sample(10));
    }
}
