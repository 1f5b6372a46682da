pub struct Place {
    pub city: &'static str,
    pub state: &'static str,
}

pub const SPECIALIZATIONS: &[&str] = &[
    "Criminal Law", "Civil Law", "Family Law", "Property Law", "Corporate Law",
    "Tax Law", "Labour Law", "Consumer Law", "Constitutional Law", "Intellectual Property",
    "Banking Law", "Cyber Law", "Immigration Law", "Environmental Law", "Medical Negligence",
];

pub const LAWYER_PLACES: &[Place] = &[
    Place { city: "New Delhi", state: "Delhi" },
    Place { city: "North Delhi", state: "Delhi" },
    Place { city: "South Delhi", state: "Delhi" },
    Place { city: "West Delhi", state: "Delhi" },
    Place { city: "East Delhi", state: "Delhi" },
    Place { city: "Mumbai", state: "Maharashtra" },
    Place { city: "Pune", state: "Maharashtra" },
    Place { city: "Nagpur", state: "Maharashtra" },
    Place { city: "Bangalore", state: "Karnataka" },
    Place { city: "Chennai", state: "Tamil Nadu" },
    Place { city: "Kolkata", state: "West Bengal" },
    Place { city: "Hyderabad", state: "Telangana" },
    Place { city: "Ahmedabad", state: "Gujarat" },
    Place { city: "Lucknow", state: "Uttar Pradesh" },
    Place { city: "Noida", state: "Uttar Pradesh" },
    Place { city: "Ghaziabad", state: "Uttar Pradesh" },
    Place { city: "Varanasi", state: "Uttar Pradesh" },
    Place { city: "Gurgaon", state: "Haryana" },
    Place { city: "Faridabad", state: "Haryana" },
    Place { city: "Chandigarh", state: "Punjab" },
    Place { city: "Jaipur", state: "Rajasthan" },
    Place { city: "Indore", state: "Madhya Pradesh" },
    Place { city: "Bhopal", state: "Madhya Pradesh" },
    Place { city: "Patna", state: "Bihar" },
    Place { city: "Kochi", state: "Kerala" },
];

pub const COURTS: &[&str] = &[
    "Supreme Court", "High Court", "District Court", "Sessions Court", "Family Court",
    "Consumer Court", "Labour Court", "NCLT", "ITAT", "Civil Court",
];

/// Cities and courts offered by the dependent filter dropdowns once a state is picked.
const STATE_DIRECTORY: &[(&str, &[&str], &[&str])] = &[
    (
        "Delhi",
        &["New Delhi", "North Delhi", "South Delhi", "West Delhi", "East Delhi"],
        &["Delhi High Court", "Tis Hazari Courts", "Saket District Court", "Patiala House Court", "Karkardooma Court"],
    ),
    (
        "Maharashtra",
        &["Mumbai", "Pune", "Nagpur", "Thane", "Nashik"],
        &["Bombay High Court", "Mumbai City Civil Court", "Pune District Court", "NCLT Mumbai"],
    ),
    (
        "Karnataka",
        &["Bangalore", "Mysore", "Hubli", "Mangalore"],
        &["Karnataka High Court", "Bangalore City Civil Court", "District Court Bangalore"],
    ),
    (
        "Tamil Nadu",
        &["Chennai", "Coimbatore", "Madurai", "Salem"],
        &["Madras High Court", "Chennai City Civil Court", "District Court Chennai"],
    ),
    (
        "West Bengal",
        &["Kolkata", "Howrah", "Durgapur", "Siliguri"],
        &["Calcutta High Court", "City Civil Court Kolkata", "District Court Kolkata"],
    ),
    (
        "Telangana",
        &["Hyderabad", "Secunderabad", "Warangal", "Nizamabad"],
        &["Telangana High Court", "City Civil Court Hyderabad", "District Court Hyderabad"],
    ),
    (
        "Gujarat",
        &["Ahmedabad", "Surat", "Vadodara", "Rajkot"],
        &["Gujarat High Court", "City Civil Court Ahmedabad", "District Court Ahmedabad"],
    ),
    (
        "Uttar Pradesh",
        &["Lucknow", "Noida", "Ghaziabad", "Varanasi", "Kanpur", "Agra"],
        &["Allahabad High Court", "Lucknow Bench", "District Court Lucknow", "District Court Noida"],
    ),
    (
        "Haryana",
        &["Gurgaon", "Faridabad", "Chandigarh", "Rohtak", "Panipat"],
        &["Punjab and Haryana High Court", "District Court Gurgaon", "District Court Faridabad"],
    ),
    (
        "Punjab",
        &["Chandigarh", "Ludhiana", "Amritsar", "Jalandhar"],
        &["Punjab and Haryana High Court", "District Court Chandigarh", "District Court Ludhiana"],
    ),
    (
        "Rajasthan",
        &["Jaipur", "Jodhpur", "Udaipur", "Kota"],
        &["Rajasthan High Court", "District Court Jaipur", "District Court Jodhpur"],
    ),
    (
        "Madhya Pradesh",
        &["Indore", "Bhopal", "Jabalpur", "Gwalior"],
        &["Madhya Pradesh High Court", "District Court Indore", "District Court Bhopal"],
    ),
    (
        "Bihar",
        &["Patna", "Gaya", "Muzaffarpur", "Bhagalpur"],
        &["Patna High Court", "District Court Patna"],
    ),
    (
        "Kerala",
        &["Kochi", "Thiruvananthapuram", "Kozhikode", "Thrissur"],
        &["Kerala High Court", "District Court Kochi", "District Court Thiruvananthapuram"],
    ),
];

pub fn cities_for_state(state: &str) -> &'static [&'static str] {
    STATE_DIRECTORY
        .iter()
        .find(|(name, _, _)| *name == state)
        .map(|(_, cities, _)| *cities)
        .unwrap_or(&[])
}

pub fn courts_for_state(state: &str) -> &'static [&'static str] {
    STATE_DIRECTORY
        .iter()
        .find(|(name, _, _)| *name == state)
        .map(|(_, _, courts)| *courts)
        .unwrap_or(&[])
}

/// Distinct values in first-seen order.
pub fn unique<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Every court in the directory, for the court filter before a state is chosen.
pub fn all_courts() -> Vec<&'static str> {
    unique(STATE_DIRECTORY.iter().flat_map(|(_, _, courts)| courts.iter().copied()))
}

pub fn lawyer_cities() -> Vec<&'static str> {
    unique(LAWYER_PLACES.iter().map(|p| p.city))
}

pub fn lawyer_states() -> Vec<&'static str> {
    unique(LAWYER_PLACES.iter().map(|p| p.state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_deduplicated_in_order() {
        let states = lawyer_states();
        assert_eq!(states[0], "Delhi");
        assert_eq!(states[1], "Maharashtra");
        assert_eq!(states.iter().filter(|s| **s == "Uttar Pradesh").count(), 1);
        assert_eq!(states.len(), 14);
    }

    #[test]
    fn dependent_dropdowns_follow_state() {
        assert!(cities_for_state("Kerala").contains(&"Kochi"));
        assert!(courts_for_state("Delhi").contains(&"Delhi High Court"));
        assert!(cities_for_state("Atlantis").is_empty());
        assert!(courts_for_state("").is_empty());
    }

    #[test]
    fn shared_courts_listed_once() {
        let courts = all_courts();
        assert_eq!(courts.iter().filter(|c| **c == "Punjab and Haryana High Court").count(), 1);
        assert_eq!(courts[0], "Delhi High Court");
        assert!(lawyer_cities().contains(&"Noida"));
    }
}
