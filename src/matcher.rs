use std::cmp::Ordering;

use crate::models::{LawFirm, Lawyer};

pub const RECOMMENDATION_LIMIT: usize = 3;

/// Keyword to practice-area table for the firm finder.
const FIRM_KEYWORDS: &[(&str, &[&str])] = &[
    ("divorce", &["Family Law", "Divorce Law"]),
    ("family", &["Family Law", "Child Custody"]),
    ("property", &["Property Law", "Real Estate Law"]),
    ("criminal", &["Criminal Law"]),
    ("corporate", &["Corporate Law", "Business Law"]),
    ("business", &["Business Law", "Corporate Law", "Contract Law"]),
    ("tax", &["Tax Law"]),
    ("startup", &["Corporate Law", "Intellectual Property"]),
    ("ip", &["Intellectual Property"]),
    ("patent", &["Intellectual Property"]),
    ("labor", &["Labor Law", "Labour Law"]),
    ("employment", &["Labor Law", "Labour Law"]),
    ("consumer", &["Consumer Rights", "Consumer Law"]),
    ("real estate", &["Real Estate Law", "Property Law"]),
    ("contract", &["Contract Law", "Business Law"]),
];

/// Ordered case-type rules for the lawyer finder; first group with a hit wins.
const CASE_TYPE_RULES: &[(&[&str], &str)] = &[
    (&["property", "land", "real estate"], "Property Law"),
    (&["divorce", "custody", "family", "marriage"], "Family Law"),
    (&["criminal", "fir", "police", "arrest"], "Criminal Law"),
    (&["business", "company", "corporate"], "Corporate Law"),
    (&["civil", "dispute", "compensation"], "Civil Law"),
    (&["tax", "gst", "income"], "Tax Law"),
    (&["labour", "employee", "worker"], "Labour Law"),
    (&["consumer", "product", "service"], "Consumer Law"),
];

const STATE_RULES: &[(&[&str], &str)] = &[
    (&["delhi"], "Delhi"),
    (&["uttar pradesh", "up", "lucknow", "noida", "ghaziabad"], "Uttar Pradesh"),
    (&["haryana", "gurgaon", "faridabad"], "Haryana"),
    (&["maharashtra", "mumbai", "pune"], "Maharashtra"),
];

pub const SUPPORTED_STATES: &[&str] = &["Delhi", "Uttar Pradesh", "Haryana", "Maharashtra"];

fn by_rating_desc(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Practice areas implied by the query, in table order without duplicates.
pub fn matching_specializations(query: &str) -> Vec<&'static str> {
    let lower = query.to_lowercase();
    let mut specs: Vec<&'static str> = Vec::new();
    for (keyword, areas) in FIRM_KEYWORDS {
        if lower.contains(keyword) {
            for area in areas.iter() {
                if !specs.contains(area) {
                    specs.push(*area);
                }
            }
        }
    }
    specs
}

pub fn top_rated_firms(firms: &[LawFirm], limit: usize) -> Vec<&LawFirm> {
    let mut sorted: Vec<&LawFirm> = firms.iter().collect();
    sorted.sort_by(|a, b| by_rating_desc(a.rating, b.rating));
    sorted.truncate(limit);
    sorted
}

#[derive(Clone, Debug, PartialEq)]
pub struct FirmMatch<'a> {
    pub firms: Vec<&'a LawFirm>,
    pub specializations: Vec<&'static str>,
    /// True when nothing matched and top-rated firms were substituted.
    pub fallback: bool,
}

impl FirmMatch<'_> {
    pub fn reply(&self) -> String {
        if self.fallback {
            "I couldn't find specific matches for your query. Here are some highly-rated law firms that might be able to help:".to_string()
        } else {
            let count = self.firms.len();
            format!(
                "Based on your query, I've found {} law firm{} that specialize in cases like yours. Here are my top recommendations:",
                count,
                if count == 1 { "" } else { "s" }
            )
        }
    }
}

pub fn match_firms<'a>(firms: &'a [LawFirm], query: &str) -> FirmMatch<'a> {
    let specializations = matching_specializations(query);

    let mut matches: Vec<&LawFirm> = if specializations.is_empty() {
        Vec::new()
    } else {
        firms
            .iter()
            .filter(|f| {
                f.practice_areas
                    .iter()
                    .any(|a| specializations.iter().any(|s| a == s))
            })
            .collect()
    };

    if matches.is_empty() {
        return FirmMatch {
            firms: top_rated_firms(firms, RECOMMENDATION_LIMIT),
            specializations,
            fallback: true,
        };
    }

    matches.sort_by(|a, b| by_rating_desc(a.rating, b.rating));
    matches.truncate(RECOMMENDATION_LIMIT);
    FirmMatch { firms: matches, specializations, fallback: false }
}

fn first_rule_hit(message: &str, rules: &[(&[&str], &'static str)]) -> Option<&'static str> {
    let lower = message.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, value)| *value)
}

pub fn detect_case_type(message: &str) -> Option<&'static str> {
    first_rule_hit(message, CASE_TYPE_RULES)
}

pub fn detect_state(message: &str) -> Option<&'static str> {
    first_rule_hit(message, STATE_RULES)
}

pub fn recommend_lawyers<'a>(lawyers: &'a [Lawyer], case_type: Option<&str>, state: Option<&str>) -> Vec<&'a Lawyer> {
    let mut found: Vec<&Lawyer> = lawyers
        .iter()
        .filter(|l| case_type.map_or(true, |c| l.specialization == c))
        .filter(|l| state.map_or(true, |s| l.state == s))
        .collect();
    found.sort_by(|a, b| by_rating_desc(a.rating, b.rating));
    found.truncate(RECOMMENDATION_LIMIT);
    found
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Greeting,
    Question,
    Info,
    Success,
}

impl CardKind {
    pub fn class(&self) -> &'static str {
        match self {
            CardKind::Greeting => "card-greeting",
            CardKind::Question => "card-question",
            CardKind::Info => "card-info",
            CardKind::Success => "card-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReplyCard {
    pub kind: CardKind,
    pub title: String,
    pub content: String,
}

impl ReplyCard {
    fn new(kind: CardKind, title: &str, content: impl Into<String>) -> Self {
        Self { kind, title: title.to_string(), content: content.into() }
    }
}

pub fn greeting_cards() -> Vec<ReplyCard> {
    vec![
        ReplyCard::new(
            CardKind::Greeting,
            "Welcome to Nyaay Sathi AI",
            "Hello! I'm your AI legal assistant. I'll help you find the perfect lawyer for your case.",
        ),
        ReplyCard::new(
            CardKind::Question,
            "Tell Me About Your Case",
            "Please describe your legal issue. For example: \"I have a property dispute\" or \"Need help with divorce case\"",
        ),
    ]
}

/// Conversation memory for the lawyer finder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LawyerFinder {
    pub case_type: Option<&'static str>,
    pub state: Option<&'static str>,
    pub has_recommended: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinderReply<'a> {
    pub cards: Vec<ReplyCard>,
    pub lawyers: Vec<&'a Lawyer>,
}

impl LawyerFinder {
    /// Folds one user message into the conversation and produces the assistant's reply.
    pub fn respond<'a>(&mut self, lawyers: &'a [Lawyer], message: &str) -> FinderReply<'a> {
        if let Some(case_type) = detect_case_type(message) {
            self.case_type = Some(case_type);
        }
        if let Some(state) = detect_state(message) {
            self.state = Some(state);
        }

        match (self.case_type, self.state) {
            (Some(case_type), Some(state)) if !self.has_recommended => {
                let found = recommend_lawyers(lawyers, Some(case_type), Some(state));
                if found.is_empty() {
                    return FinderReply {
                        cards: vec![ReplyCard::new(
                            CardKind::Info,
                            "No Exact Matches Yet",
                            format!(
                                "I couldn't find {} lawyers in {} right now. Try browsing all lawyers or describe your case differently.",
                                case_type, state
                            ),
                        )],
                        lawyers: found,
                    };
                }
                self.has_recommended = true;
                let names: Vec<&str> = found.iter().map(|l| l.name.as_str()).collect();
                FinderReply {
                    cards: vec![
                        ReplyCard::new(
                            CardKind::Success,
                            "Perfect! I Found Lawyers For You",
                            format!(
                                "Based on your {} case in {}, I've found {} top-rated lawyers.",
                                case_type,
                                state,
                                found.len()
                            ),
                        ),
                        ReplyCard::new(
                            CardKind::Info,
                            "Recommended Lawyers",
                            format!(
                                "✓ {}\n\nView their profiles below and book a consultation!",
                                names.join("\n✓ ")
                            ),
                        ),
                    ],
                    lawyers: found,
                }
            }
            (Some(_), Some(_)) => FinderReply {
                cards: vec![ReplyCard::new(
                    CardKind::Info,
                    "Recommendations Ready",
                    "Your recommended lawyers are listed below. Start a new search to look for a different case.",
                )],
                lawyers: Vec::new(),
            },
            (Some(case_type), None) => FinderReply {
                cards: vec![
                    ReplyCard::new(
                        CardKind::Info,
                        "Great! I Understand Your Case",
                        format!("I can help you with your {} matter.", case_type),
                    ),
                    ReplyCard::new(
                        CardKind::Question,
                        "Which State Are You In?",
                        format!(
                            "To find the best lawyers near you, please tell me your state:\n• {}",
                            SUPPORTED_STATES.join("\n• ")
                        ),
                    ),
                ],
                lawyers: Vec::new(),
            },
            (None, Some(state)) => FinderReply {
                cards: vec![
                    ReplyCard::new(CardKind::Info, "Location Noted", format!("I see you're in {}.", state)),
                    ReplyCard::new(
                        CardKind::Question,
                        "What Type of Legal Help Do You Need?",
                        "Please describe your case type:\n• Civil matters\n• Criminal cases\n• Family law (divorce, custody)\n• Property disputes\n• Corporate/Business law\n• Tax issues\n• Labour/Employment\n• Other",
                    ),
                ],
                lawyers: Vec::new(),
            },
            (None, None) => FinderReply {
                cards: vec![
                    ReplyCard::new(
                        CardKind::Question,
                        "I Need More Details",
                        "Could you please tell me:\n1. What type of legal issue? (property, divorce, criminal, etc.)\n2. Which state are you in? (Delhi, UP, Haryana, Maharashtra)",
                    ),
                    ReplyCard::new(
                        CardKind::Info,
                        "Example",
                        "For example: \"I have a property dispute in Delhi\" or \"Need divorce lawyer in Mumbai\"",
                    ),
                ],
                lawyers: Vec::new(),
            },
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::firms::generate_firms;
    use crate::data::lawyers::generate_lawyers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn firm(id: &str, rating: f32, areas: &[&str]) -> LawFirm {
        let mut f = generate_firms(&mut StdRng::seed_from_u64(1), 1).remove(0);
        f.id = id.to_string();
        f.rating = rating;
        f.practice_areas = areas.iter().map(|a| a.to_string()).collect();
        f
    }

    #[test]
    fn divorce_maps_to_family_and_divorce_law() {
        let specs = matching_specializations("Need help with my DIVORCE");
        assert!(specs.contains(&"Family Law"));
        assert!(specs.contains(&"Divorce Law"));
    }

    #[test]
    fn keyword_sets_are_unioned_without_duplicates() {
        let specs = matching_specializations("startup contract and corporate structure");
        assert_eq!(specs.iter().filter(|s| **s == "Corporate Law").count(), 1);
        assert!(specs.contains(&"Intellectual Property"));
        assert!(specs.contains(&"Contract Law"));
    }

    #[test]
    fn keyword_matches_are_sorted_by_rating_and_capped() {
        let firms = vec![
            firm("a", 4.1, &["Family Law"]),
            firm("b", 4.9, &["Tax Law"]),
            firm("c", 4.7, &["Family Law", "Civil Law"]),
            firm("d", 3.9, &["Family Law"]),
            firm("e", 4.8, &["Family Law"]),
        ];
        let result = match_firms(&firms, "family dispute");
        assert!(!result.fallback);
        let ids: Vec<&str> = result.firms.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["e", "c", "a"]);
        assert!(result.reply().contains("3 law firms"));
    }

    #[test]
    fn unmatched_query_falls_back_to_top_rated() {
        let firms = vec![
            firm("a", 4.1, &["Family Law"]),
            firm("b", 4.9, &["Tax Law"]),
            firm("c", 4.7, &["Civil Law"]),
            firm("d", 4.5, &["Cyber Law"]),
        ];
        let result = match_firms(&firms, "hello there");
        assert!(result.fallback);
        assert!(result.specializations.is_empty());
        let ids: Vec<&str> = result.firms.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d"]);

        // keyword hit but no firm practising it
        let result = match_firms(&firms, "patent filing");
        assert!(result.fallback);
        assert_eq!(result.firms.len(), 3);
    }

    #[test]
    fn case_type_rules_apply_in_order() {
        assert_eq!(detect_case_type("land dispute with neighbour"), Some("Property Law"));
        assert_eq!(detect_case_type("Police filed an FIR"), Some("Criminal Law"));
        assert_eq!(detect_case_type("GST notice"), Some("Tax Law"));
        assert_eq!(detect_case_type("hello"), None);
    }

    #[test]
    fn state_detection_uses_city_names() {
        assert_eq!(detect_state("I live in Noida"), Some("Uttar Pradesh"));
        assert_eq!(detect_state("based in Pune"), Some("Maharashtra"));
        assert_eq!(detect_state("Kerala"), None);
    }

    #[test]
    fn finder_asks_for_missing_state_then_recommends() {
        let lawyers = generate_lawyers(&mut StdRng::seed_from_u64(5), 1500);
        let mut finder = LawyerFinder::default();

        let first = finder.respond(&lawyers, "I need a divorce lawyer");
        assert_eq!(finder.case_type, Some("Family Law"));
        assert!(first.lawyers.is_empty());
        assert_eq!(first.cards[1].title, "Which State Are You In?");

        let second = finder.respond(&lawyers, "Delhi please");
        assert!(finder.has_recommended);
        assert!(!second.lawyers.is_empty() && second.lawyers.len() <= RECOMMENDATION_LIMIT);
        assert!(second.lawyers.iter().all(|l| l.specialization == "Family Law" && l.state == "Delhi"));
        assert!(second.lawyers.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(second.cards[0].kind, CardKind::Success);

        let third = finder.respond(&lawyers, "anything else?");
        assert!(third.lawyers.is_empty());

        finder.reset();
        assert_eq!(finder, LawyerFinder::default());
    }

    #[test]
    fn finder_without_signal_asks_for_details() {
        let lawyers = generate_lawyers(&mut StdRng::seed_from_u64(5), 50);
        let mut finder = LawyerFinder::default();
        let reply = finder.respond(&lawyers, "hi");
        assert_eq!(reply.cards[0].title, "I Need More Details");

        let reply = finder.respond(&lawyers, "I am in Mumbai");
        assert_eq!(reply.cards[0].title, "Location Noted");
    }
}
