use crate::models::{LawFirm, Lawyer};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LawyerFilters {
    pub state: Option<String>,
    pub city: Option<String>,
    pub specialization: Option<String>,
    pub court: Option<String>,
    pub min_rating: Option<f32>,
}

impl LawyerFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// City and court depend on the state, so they are cleared with it.
    pub fn set_state(&mut self, state: Option<String>) {
        if self.state != state {
            self.city = None;
            self.court = None;
        }
        self.state = state;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FirmFilters {
    pub state: Option<String>,
    pub city: Option<String>,
    pub practice_area: Option<String>,
    pub min_rating: Option<f32>,
}

impl FirmFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_state(&mut self, state: Option<String>) {
        if self.state != state {
            self.city = None;
        }
        self.state = state;
    }
}

/// Rating select values such as "4.5"; anything else means no minimum.
pub fn parse_rating(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|r| (0.0..=5.0).contains(r))
}

/// Empty select values mean "any".
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn equals(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |wanted| wanted == value)
}

fn at_least(filter: Option<f32>, rating: f32) -> bool {
    filter.map_or(true, |min| rating >= min)
}

pub fn lawyer_matches(lawyer: &Lawyer, query: &str, filters: &LawyerFilters) -> bool {
    let q = query.trim().to_lowercase();
    if !q.is_empty() {
        let hit = lawyer.name.to_lowercase().contains(&q)
            || lawyer.specialization.to_lowercase().contains(&q)
            || lawyer.location.to_lowercase().contains(&q)
            || lawyer.city.to_lowercase().contains(&q);
        if !hit {
            return false;
        }
    }

    equals(&filters.state, &lawyer.state)
        && equals(&filters.city, &lawyer.city)
        && equals(&filters.specialization, &lawyer.specialization)
        && equals(&filters.court, &lawyer.court)
        && at_least(filters.min_rating, lawyer.rating)
}

pub fn search_lawyers<'a>(lawyers: &'a [Lawyer], query: &str, filters: &LawyerFilters) -> Vec<&'a Lawyer> {
    lawyers
        .iter()
        .filter(|l| lawyer_matches(l, query, filters))
        .collect()
}

pub fn firm_matches(firm: &LawFirm, query: &str, filters: &FirmFilters) -> bool {
    let q = query.trim().to_lowercase();
    if !q.is_empty() {
        let hit = firm.firm_name.to_lowercase().contains(&q)
            || firm.city.to_lowercase().contains(&q)
            || firm.state.to_lowercase().contains(&q)
            || firm.practice_areas.iter().any(|a| a.to_lowercase().contains(&q));
        if !hit {
            return false;
        }
    }

    let area_ok = filters
        .practice_area
        .as_deref()
        .map_or(true, |wanted| firm.practice_areas.iter().any(|a| a == wanted));

    equals(&filters.state, &firm.state)
        && equals(&filters.city, &firm.city)
        && area_ok
        && at_least(filters.min_rating, firm.rating)
}

pub fn search_firms<'a>(firms: &'a [LawFirm], query: &str, filters: &FirmFilters) -> Vec<&'a LawFirm> {
    firms.iter().filter(|f| firm_matches(f, query, filters)).collect()
}

/// One-based page window over a result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub total: usize,
    pub per_page: usize,
    pub current: usize,
}

impl Page {
    pub fn new(total: usize, per_page: usize, requested: usize) -> Self {
        let per_page = per_page.max(1);
        let mut page = Self { total, per_page, current: 1 };
        page.current = requested.clamp(1, page.total_pages().max(1));
        page
    }

    pub fn total_pages(&self) -> usize {
        (self.total + self.per_page - 1) / self.per_page
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// "Showing 21-40 of 87"
    pub fn summary(&self) -> String {
        let range = self.range();
        if range.is_empty() {
            "No results".to_string()
        } else {
            format!("Showing {}-{} of {}", range.start + 1, range.end, self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::firms::generate_firms;
    use crate::data::lawyers::generate_lawyers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lawyers() -> Vec<Lawyer> {
        generate_lawyers(&mut StdRng::seed_from_u64(42), 500)
    }

    fn ids(found: &[&Lawyer]) -> Vec<String> {
        found.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn combined_filters_equal_intersection_of_single_filters() {
        let all = lawyers();
        let state = LawyerFilters { state: Some("Delhi".into()), ..Default::default() };
        let family = LawyerFilters { specialization: Some("Family Law".into()), ..Default::default() };
        let rating = LawyerFilters { min_rating: Some(4.2), ..Default::default() };
        let combined = LawyerFilters {
            state: Some("Delhi".into()),
            specialization: Some("Family Law".into()),
            min_rating: Some(4.2),
            ..Default::default()
        };

        let by_state = ids(&search_lawyers(&all, "", &state));
        let by_area = ids(&search_lawyers(&all, "", &family));
        let by_rating = ids(&search_lawyers(&all, "", &rating));
        let expected: Vec<String> = by_state
            .iter()
            .filter(|id| by_area.contains(id) && by_rating.contains(id))
            .cloned()
            .collect();

        assert_eq!(ids(&search_lawyers(&all, "", &combined)), expected);
    }

    #[test]
    fn empty_query_and_filters_return_everything() {
        let all = lawyers();
        assert!(LawyerFilters::default().is_empty());
        assert_eq!(search_lawyers(&all, "   ", &LawyerFilters::default()).len(), all.len());
    }

    #[test]
    fn firm_filters_are_empty_until_one_is_chosen() {
        let mut filters = FirmFilters::default();
        assert!(filters.is_empty());
        filters.min_rating = parse_rating("4.0");
        assert!(!filters.is_empty());
        filters.min_rating = parse_rating("");
        filters.set_state(Some("Maharashtra".into()));
        filters.city = Some("Mumbai".into());
        assert!(!filters.is_empty());
        filters.set_state(None);
        filters.city = None;
        assert!(filters.is_empty());
    }

    #[test]
    fn query_is_case_insensitive_over_name_spec_and_location() {
        let all = lawyers();
        let hits = search_lawyers(&all, "MUMBAI", &LawyerFilters::default());
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|l| l.location.to_lowercase().contains("mumbai")
            || l.name.to_lowercase().contains("mumbai")
            || l.specialization.to_lowercase().contains("mumbai")));

        let by_area = search_lawyers(&all, "cyber", &LawyerFilters::default());
        assert!(by_area.iter().all(|l| l.specialization == "Cyber Law"));
    }

    #[test]
    fn min_rating_is_inclusive() {
        let all = lawyers();
        let threshold = all[0].rating;
        let found = search_lawyers(&all, "", &LawyerFilters { min_rating: Some(threshold), ..Default::default() });
        assert!(found.iter().any(|l| l.id == all[0].id));
        assert!(found.iter().all(|l| l.rating >= threshold));
    }

    #[test]
    fn firm_practice_area_filter_matches_any_area() {
        let firms = generate_firms(&mut StdRng::seed_from_u64(3), 100);
        let filters = FirmFilters { practice_area: Some("Tax Law".into()), ..Default::default() };
        let found = search_firms(&firms, "", &filters);
        assert!(!found.is_empty());
        assert!(found.iter().all(|f| f.practice_areas.iter().any(|a| a == "Tax Law")));
        assert_eq!(
            found.len(),
            firms.iter().filter(|f| f.practice_areas.contains(&"Tax Law".to_string())).count()
        );
    }

    #[test]
    fn page_slices_match_offsets() {
        let items: Vec<usize> = (0..87).collect();
        for k in 1..=5 {
            let page = Page::new(items.len(), 20, k);
            let expected: Vec<usize> = items[(k - 1) * 20..(k * 20).min(87)].to_vec();
            assert_eq!(page.slice(&items), expected.as_slice());
        }
        assert_eq!(Page::new(87, 20, 5).slice(&items).len(), 87 % 20);
        assert_eq!(Page::new(80, 20, 4).slice(&items[..80]).len(), 20);
        assert_eq!(Page::new(87, 20, 1).total_pages(), 5);
    }

    #[test]
    fn page_is_clamped() {
        assert_eq!(Page::new(87, 20, 9).current, 5);
        assert_eq!(Page::new(87, 20, 0).current, 1);
        let empty = Page::new(0, 20, 3);
        assert_eq!(empty.current, 1);
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.slice::<u8>(&[]).is_empty());
        assert_eq!(empty.summary(), "No results");
        assert!(!empty.has_next());
    }

    #[test]
    fn summary_reports_window() {
        assert_eq!(Page::new(87, 20, 2).summary(), "Showing 21-40 of 87");
        assert_eq!(Page::new(87, 20, 5).summary(), "Showing 81-87 of 87");
    }

    #[test]
    fn changing_state_clears_dependent_filters() {
        let mut filters = LawyerFilters {
            state: Some("Delhi".into()),
            city: Some("New Delhi".into()),
            court: Some("Delhi High Court".into()),
            ..Default::default()
        };
        filters.set_state(Some("Delhi".into()));
        assert_eq!(filters.city.as_deref(), Some("New Delhi"));

        filters.set_state(Some("Kerala".into()));
        assert_eq!(filters.city, None);
        assert_eq!(filters.court, None);
        assert_eq!(filters.state.as_deref(), Some("Kerala"));
    }

    #[test]
    fn rating_select_values() {
        assert_eq!(parse_rating("4.5"), Some(4.5));
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("9"), None);
    }

    #[test]
    fn non_empty_treats_blank_as_any() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty("Delhi".into()), Some("Delhi".into()));
    }
}
