use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::FIRM_COUNT;
use crate::data::lawyers::{random_phone, random_rating, state_code};
use crate::models::LawFirm;

const FIRM_PREFIXES: &[&str] = &[
    "Shah", "Kumar", "Mehta", "Reddy", "Khanna", "Patel", "Singh", "Verma", "Gupta", "Agarwal",
    "Bhatia", "Chopra", "Bansal", "Saxena", "Yadav", "Mishra", "Pandey", "Srivastava", "Tiwari", "Chauhan",
    "Rathore", "Arora", "Sethi", "Dhawan", "Bajaj", "Goyal", "Ahuja", "Mehra", "Tandon", "Kaul",
    "Dua", "Vohra", "Grover", "Bhargava", "Joshi", "Sharma", "Kapoor", "Malhotra", "Jain", "Nair",
];

const FIRM_SUFFIXES: &[&str] = &[
    "& Associates", "& Partners", "Legal Solutions", "Law Chambers", "Law Group",
    "Legal Consultancy", "Legal Services", "& Co.", "Law Firm", "Legal Advisors",
];

pub const PRACTICE_AREAS: &[&str] = &[
    "Criminal Law", "Civil Law", "Family Law", "Property Law", "Corporate Law",
    "Tax Law", "Labour Law", "Consumer Law", "Constitutional Law", "Intellectual Property",
    "Banking Law", "Cyber Law", "Immigration Law", "Environmental Law", "Real Estate Law",
];

struct Office {
    city: &'static str,
    state: &'static str,
    area: &'static str,
}

const OFFICES: &[Office] = &[
    Office { city: "New Delhi", state: "Delhi", area: "Connaught Place" },
    Office { city: "New Delhi", state: "Delhi", area: "Saket" },
    Office { city: "New Delhi", state: "Delhi", area: "Dwarka" },
    Office { city: "Mumbai", state: "Maharashtra", area: "Nariman Point" },
    Office { city: "Mumbai", state: "Maharashtra", area: "Bandra" },
    Office { city: "Mumbai", state: "Maharashtra", area: "Andheri" },
    Office { city: "Pune", state: "Maharashtra", area: "Koregaon Park" },
    Office { city: "Bangalore", state: "Karnataka", area: "MG Road" },
    Office { city: "Bangalore", state: "Karnataka", area: "Koramangala" },
    Office { city: "Chennai", state: "Tamil Nadu", area: "T Nagar" },
    Office { city: "Kolkata", state: "West Bengal", area: "Park Street" },
    Office { city: "Hyderabad", state: "Telangana", area: "Banjara Hills" },
    Office { city: "Ahmedabad", state: "Gujarat", area: "CG Road" },
    Office { city: "Lucknow", state: "Uttar Pradesh", area: "Hazratganj" },
    Office { city: "Noida", state: "Uttar Pradesh", area: "Sector 62" },
    Office { city: "Gurgaon", state: "Haryana", area: "Cyber City" },
    Office { city: "Chandigarh", state: "Punjab", area: "Sector 17" },
    Office { city: "Jaipur", state: "Rajasthan", area: "MI Road" },
    Office { city: "Indore", state: "Madhya Pradesh", area: "Vijay Nagar" },
    Office { city: "Kochi", state: "Kerala", area: "MG Road" },
];

const DESCRIPTIONS: &[&str] = &[
    "Premier law firm with expertise in civil, criminal, and corporate matters.",
    "Leading legal practice providing comprehensive legal solutions.",
    "Trusted legal advisors with a proven track record of success.",
    "Modern law firm combining technology with legal expertise.",
    "Client-focused legal services with personalized attention.",
    "Established practice known for integrity and excellence.",
    "Dynamic legal team handling complex litigation matters.",
    "Full-service law firm serving individuals and businesses.",
    "Expert legal counsel with deep industry knowledge.",
    "Boutique law firm specializing in niche practice areas.",
];

const SERVICES: &[&str] = &[
    "Legal Consultation",
    "Document Drafting",
    "Court Representation",
    "Legal Research",
    "Mediation Services",
];

pub static LAW_FIRMS: Lazy<Vec<LawFirm>> =
    Lazy::new(|| generate_firms(&mut StdRng::from_entropy(), FIRM_COUNT));

pub fn find_firm(id: &str) -> Option<&'static LawFirm> {
    LAW_FIRMS.iter().find(|f| f.id == id)
}

/// Office cities, limited to one state when given.
pub fn firm_cities(state: Option<&str>) -> Vec<&'static str> {
    crate::data::locations::unique(
        OFFICES
            .iter()
            .filter(|o| state.map_or(true, |s| o.state == s))
            .map(|o| o.city),
    )
}

pub fn firm_states() -> Vec<&'static str> {
    crate::data::locations::unique(OFFICES.iter().map(|o| o.state))
}

/// Lowercase letters only, used for the firm's mail and web domain.
fn domain_slug(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| c.is_ascii_lowercase()).collect()
}

fn logo_url(name: &str) -> String {
    let initials = name
        .split(' ')
        .take(2)
        .map(|w| urlencoding::encode(w).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    format!("https://ui-avatars.com/api/?name={}&background=0F2944&color=fff&size=128", initials)
}

pub fn generate_firms<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<LawFirm> {
    let mut used = HashSet::new();
    let capacity = FIRM_PREFIXES.len() * FIRM_SUFFIXES.len();
    (1..=count.min(capacity))
        .map(|i| {
            let name = loop {
                let candidate = format!(
                    "{} {}",
                    FIRM_PREFIXES.choose(rng).copied().unwrap_or("Shah"),
                    FIRM_SUFFIXES.choose(rng).copied().unwrap_or("& Associates")
                );
                if used.insert(candidate.clone()) {
                    break candidate;
                }
            };
            generate_firm(rng, i, name)
        })
        .collect()
}

fn generate_firm<R: Rng + ?Sized>(rng: &mut R, index: usize, firm_name: String) -> LawFirm {
    let office = OFFICES.choose(rng).unwrap_or(&OFFICES[0]);
    let established_year = rng.gen_range(2005..2025);
    let total_lawyers: u32 = rng.gen_range(5..50);
    let cases_handled = rng.gen_range(200..1200);

    let area_count = rng.gen_range(2..=4);
    let practice_areas = PRACTICE_AREAS
        .choose_multiple(rng, area_count)
        .map(|a| a.to_string())
        .collect();

    let slug = domain_slug(&firm_name);
    let services = SERVICES
        .iter()
        .filter(|_| rng.gen_bool(0.7))
        .map(|s| s.to_string())
        .collect();

    LawFirm {
        id: format!("firm_{}", index),
        email: format!("contact@{}.com", slug),
        phone: random_phone(rng),
        website: format!("www.{}.com", slug),
        address: format!("{}, {}", office.area, office.city),
        city: office.city.to_string(),
        state: office.state.to_string(),
        pincode: rng.gen_range(100_000..1_000_000).to_string(),
        registration_number: format!(
            "{}/LAW/{}/{:03}",
            state_code(office.state),
            established_year,
            index
        ),
        established_year,
        total_lawyers,
        total_staff: total_lawyers * 3 / 2,
        practice_areas,
        description: DESCRIPTIONS.choose(rng).copied().unwrap_or_default().to_string(),
        achievements: format!(
            "Won {}+ cases, Featured in Legal 500, Recognized by Bar Council",
            cases_handled
        ),
        rating: random_rating(rng),
        reviews: rng.gen_range(20..320),
        cases_handled,
        consultation_fee: rng.gen_range(2..6) * 500 + 999,
        logo: logo_url(&firm_name),
        verified: rng.gen_bool(0.8),
        featured: rng.gen_bool(0.15),
        services,
        working_hours: "9:00 AM - 6:00 PM".to_string(),
        working_days: "Monday - Saturday".to_string(),
        firm_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Vec<LawFirm> {
        generate_firms(&mut StdRng::seed_from_u64(11), count)
    }

    #[test]
    fn firm_names_are_unique() {
        let firms = sample(100);
        let names: HashSet<_> = firms.iter().map(|f| f.firm_name.as_str()).collect();
        assert_eq!(names.len(), 100);
        assert_eq!(firms[99].id, "firm_100");
    }

    #[test]
    fn practice_areas_are_two_to_four_distinct() {
        for firm in sample(100) {
            assert!((2..=4).contains(&firm.practice_areas.len()));
            let distinct: HashSet<_> = firm.practice_areas.iter().collect();
            assert_eq!(distinct.len(), firm.practice_areas.len());
        }
    }

    #[test]
    fn derived_fields_follow_name_and_office() {
        for firm in sample(60) {
            assert_eq!(firm.total_staff, firm.total_lawyers * 3 / 2);
            assert!([1999, 2499, 2999, 3499].contains(&firm.consultation_fee));
            assert!(firm.email.starts_with("contact@") && firm.email.ends_with(".com"));
            assert!(firm.email[8..firm.email.len() - 4].chars().all(|c| c.is_ascii_lowercase()));
            assert!(firm.registration_number.contains("/LAW/"));
            assert!((2005..=2024).contains(&firm.established_year));
            assert!(firm.address.ends_with(&firm.city));
        }
    }

    #[test]
    fn logo_url_encodes_first_two_words() {
        let url = logo_url("Shah & Associates");
        assert!(url.contains("name=Shah+%26&"));
    }

    #[test]
    fn office_cities_follow_state() {
        assert_eq!(firm_cities(Some("Maharashtra")), vec!["Mumbai", "Pune"]);
        assert_eq!(firm_cities(None).iter().filter(|c| **c == "New Delhi").count(), 1);
        assert!(firm_states().contains(&"Kerala"));
    }

    #[test]
    fn slug_drops_non_letters() {
        assert_eq!(domain_slug("Patel & Co."), "patelco");
    }
}
