//! Talent browse filtering.
//!
//! A browse session fetches talent profiles (per category) once and then
//! narrows that list in memory as the user toggles filters. Every filter
//! change rescans the retained base list in a single pass; clearing restores
//! the base list without a re-fetch.
//!
//! All active criteria combine with logical AND, so the result is independent
//! of the order in which criteria are applied and is always a subset of the
//! base list, in base-list order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::talent::{parse_category_list, TalentCategory};
use crate::types::DbId;

/// Lower bound used when a range filter has no minimum.
pub const RANGE_MIN_DEFAULT: f64 = 0.0;

/// Upper bound used when a range filter has no maximum.
pub const RANGE_MAX_SENTINEL: f64 = 999.0;

/// Read access to the fields the filters look at.
///
/// Implemented by the talent read model in the db crate, and by test
/// fixtures here.
pub trait FilterableTalent {
    fn user_id(&self) -> DbId;
    fn first_name(&self) -> Option<&str>;
    fn last_name(&self) -> Option<&str>;
    fn display_name(&self) -> Option<&str>;
    fn address(&self) -> Option<&str>;
    fn category(&self) -> Option<&str>;
    fn age(&self) -> Option<f64>;
    fn height(&self) -> Option<f64>;
    fn weight(&self) -> Option<f64>;
    fn has_portfolio(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Inclusive numeric range over an optional attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// A range is active once either bound is set.
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// An inactive range passes everything. An active range requires a
    /// non-null value within `[min, max]`, with unset bounds defaulting to
    /// [`RANGE_MIN_DEFAULT`] and [`RANGE_MAX_SENTINEL`].
    pub fn matches(&self, value: Option<f64>) -> bool {
        if !self.is_active() {
            return true;
        }
        let lo = self.min.unwrap_or(RANGE_MIN_DEFAULT);
        let hi = self.max.unwrap_or(RANGE_MAX_SENTINEL);
        value.is_some_and(|v| v >= lo && v <= hi)
    }

    fn validate(&self, label: &str) -> Result<(), CoreError> {
        if let (Some(lo), Some(hi)) = (self.min, self.max) {
            if lo > hi {
                return Err(CoreError::Validation(format!(
                    "{label} minimum ({lo}) exceeds maximum ({hi})"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// A single active predicate. Text needles are stored lowercased.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Name(String),
    Location(String),
    Age(RangeFilter),
    Height(RangeFilter),
    Weight(RangeFilter),
    Roles(Vec<String>),
    HasPortfolio,
}

impl Criterion {
    pub fn matches<T: FilterableTalent>(&self, talent: &T) -> bool {
        match self {
            Criterion::Name(needle) => {
                let full = format!(
                    "{} {}",
                    talent.first_name().unwrap_or_default(),
                    talent.last_name().unwrap_or_default()
                )
                .to_lowercase();
                full.contains(needle.as_str())
                    || talent
                        .display_name()
                        .is_some_and(|d| d.to_lowercase().contains(needle.as_str()))
            }
            Criterion::Location(needle) => talent
                .address()
                .is_some_and(|a| a.to_lowercase().contains(needle.as_str())),
            Criterion::Age(range) => range.matches(talent.age()),
            Criterion::Height(range) => range.matches(talent.height()),
            Criterion::Weight(range) => range.matches(talent.weight()),
            Criterion::Roles(labels) => talent.category().is_some_and(|c| {
                let category = c.to_lowercase();
                labels.iter().any(|l| category.contains(l.as_str()))
            }),
            Criterion::HasPortfolio => talent.has_portfolio(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// The full filter state of a browse session. `Default` is "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TalentFilter {
    pub name: Option<String>,
    pub location: Option<String>,
    pub age: RangeFilter,
    pub height: RangeFilter,
    pub weight: RangeFilter,
    /// Role-type labels (e.g. "Actor", "voice"); matched against the
    /// category case-insensitively by containment.
    pub roles: Vec<String>,
    pub has_portfolio: bool,
}

impl TalentFilter {
    /// Active criteria, in a fixed order.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut out = Vec::new();
        if let Some(name) = non_blank_lower(self.name.as_deref()) {
            out.push(Criterion::Name(name));
        }
        if let Some(location) = non_blank_lower(self.location.as_deref()) {
            out.push(Criterion::Location(location));
        }
        if self.age.is_active() {
            out.push(Criterion::Age(self.age));
        }
        if self.height.is_active() {
            out.push(Criterion::Height(self.height));
        }
        if self.weight.is_active() {
            out.push(Criterion::Weight(self.weight));
        }
        let roles: Vec<String> = self
            .roles
            .iter()
            .filter_map(|r| non_blank_lower(Some(r)))
            .collect();
        if !roles.is_empty() {
            out.push(Criterion::Roles(roles));
        }
        if self.has_portfolio {
            out.push(Criterion::HasPortfolio);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.criteria().is_empty()
    }

    pub fn matches<T: FilterableTalent>(&self, talent: &T) -> bool {
        self.criteria().iter().all(|c| c.matches(talent))
    }

    /// One pass over `base`, keeping profiles that satisfy every criterion.
    pub fn apply<T: FilterableTalent + Clone>(&self, base: &[T]) -> Vec<T> {
        let criteria = self.criteria();
        base.iter()
            .filter(|t| criteria.iter().all(|c| c.matches(*t)))
            .cloned()
            .collect()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.age.validate("Age")?;
        self.height.validate("Height")?;
        self.weight.validate("Weight")?;
        Ok(())
    }
}

fn non_blank_lower(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query-string form of a browse request. List values are comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalentFilterParams {
    /// Top-level categories to fetch; empty means all talents.
    pub category: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub age_min: Option<f64>,
    pub age_max: Option<f64>,
    pub height_min: Option<f64>,
    pub height_max: Option<f64>,
    pub weight_min: Option<f64>,
    pub weight_max: Option<f64>,
    pub roles: Option<String>,
    #[serde(default)]
    pub has_portfolio: bool,
}

impl TalentFilterParams {
    /// Categories to fetch, deduplicated in request order.
    pub fn categories(&self) -> Result<Vec<TalentCategory>, CoreError> {
        match self.category.as_deref() {
            Some(raw) => parse_category_list(raw),
            None => Ok(Vec::new()),
        }
    }

    /// The in-memory filter described by these parameters.
    pub fn filter(&self) -> Result<TalentFilter, CoreError> {
        let filter = TalentFilter {
            name: self.name.clone(),
            location: self.location.clone(),
            age: RangeFilter::new(self.age_min, self.age_max),
            height: RangeFilter::new(self.height_min, self.height_max),
            weight: RangeFilter::new(self.weight_min, self.weight_max),
            roles: self
                .roles
                .as_deref()
                .map(|r| r.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            has_portfolio: self.has_portfolio,
        };
        filter.validate()?;
        Ok(filter)
    }
}

// ---------------------------------------------------------------------------
// Browse session
// ---------------------------------------------------------------------------

/// Merge per-category fetch results, keeping the first occurrence of each
/// user id. Each talent has exactly one category, so in practice nothing is
/// dropped.
pub fn merge_category_results<T, I>(batches: I) -> Vec<T>
where
    T: FilterableTalent,
    I: IntoIterator<Item = Vec<T>>,
{
    let mut seen: HashSet<DbId> = HashSet::new();
    let mut merged = Vec::new();
    for batch in batches {
        for talent in batch {
            if seen.insert(talent.user_id()) {
                merged.push(talent);
            }
        }
    }
    merged
}

/// Retains the unfiltered fetch result (`all_talents`) next to the displayed
/// result (`talents`) so filter changes never need a re-fetch.
#[derive(Debug, Clone)]
pub struct TalentBrowser<T> {
    all_talents: Vec<T>,
    talents: Vec<T>,
    filter: TalentFilter,
}

impl<T> Default for TalentBrowser<T> {
    fn default() -> Self {
        Self {
            all_talents: Vec::new(),
            talents: Vec::new(),
            filter: TalentFilter::default(),
        }
    }
}

impl<T: FilterableTalent + Clone> TalentBrowser<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base list and re-apply the current filter.
    pub fn load(&mut self, talents: Vec<T>) {
        self.all_talents = talents;
        self.refresh();
    }

    /// Load a fetch result. A failed fetch leaves an empty base list (zero
    /// profiles found) and hands the error back to the caller for logging.
    pub fn load_result<E>(&mut self, result: Result<Vec<T>, E>) -> Result<(), E> {
        match result {
            Ok(talents) => {
                self.load(talents);
                Ok(())
            }
            Err(e) => {
                self.load(Vec::new());
                Err(e)
            }
        }
    }

    /// Load per-category fetch results. Successful batches are merged with
    /// [`merge_category_results`]; a failed category contributes nothing and
    /// is handed back with its error for logging.
    pub fn load_category_results<K, E, I>(&mut self, results: I) -> Vec<(K, E)>
    where
        I: IntoIterator<Item = (K, Result<Vec<T>, E>)>,
    {
        let mut batches = Vec::new();
        let mut failures = Vec::new();
        for (key, result) in results {
            match result {
                Ok(batch) => batches.push(batch),
                Err(e) => failures.push((key, e)),
            }
        }
        self.load(merge_category_results(batches));
        failures
    }

    pub fn set_filter(&mut self, filter: TalentFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Change one part of the filter and rescan.
    pub fn update_filter(&mut self, change: impl FnOnce(&mut TalentFilter)) {
        change(&mut self.filter);
        self.refresh();
    }

    /// Reset every criterion and show the unfiltered base list.
    pub fn clear(&mut self) {
        self.filter = TalentFilter::default();
        self.talents = self.all_talents.clone();
    }

    pub fn filter(&self) -> &TalentFilter {
        &self.filter
    }

    pub fn talents(&self) -> &[T] {
        &self.talents
    }

    pub fn all_talents(&self) -> &[T] {
        &self.all_talents
    }

    /// Number of profiles currently displayed.
    pub fn count(&self) -> usize {
        self.talents.len()
    }

    /// Number of profiles fetched before filtering.
    pub fn total(&self) -> usize {
        self.all_talents.len()
    }

    pub fn into_talents(self) -> Vec<T> {
        self.talents
    }

    fn refresh(&mut self) {
        self.talents = self.filter.apply(&self.all_talents);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Fixture {
        id: DbId,
        first: &'static str,
        last: &'static str,
        display: Option<&'static str>,
        category: &'static str,
        address: Option<&'static str>,
        age: Option<f64>,
        height: Option<f64>,
        weight: Option<f64>,
        portfolio: usize,
    }

    impl FilterableTalent for Fixture {
        fn user_id(&self) -> DbId {
            self.id
        }
        fn first_name(&self) -> Option<&str> {
            Some(self.first)
        }
        fn last_name(&self) -> Option<&str> {
            Some(self.last)
        }
        fn display_name(&self) -> Option<&str> {
            self.display
        }
        fn address(&self) -> Option<&str> {
            self.address
        }
        fn category(&self) -> Option<&str> {
            Some(self.category)
        }
        fn age(&self) -> Option<f64> {
            self.age
        }
        fn height(&self) -> Option<f64> {
            self.height
        }
        fn weight(&self) -> Option<f64> {
            self.weight
        }
        fn has_portfolio(&self) -> bool {
            self.portfolio > 0
        }
    }

    fn talent(id: DbId, first: &'static str, category: &'static str) -> Fixture {
        Fixture {
            id,
            first,
            last: "",
            display: None,
            category,
            address: None,
            age: None,
            height: None,
            weight: None,
            portfolio: 0,
        }
    }

    fn sarah_and_raj() -> Vec<Fixture> {
        vec![
            Fixture {
                address: Some("Mumbai"),
                age: Some(28.0),
                ..talent(1, "Sarah", "actor")
            },
            Fixture {
                address: Some("Delhi"),
                age: Some(35.0),
                ..talent(2, "Raj", "singer")
            },
        ]
    }

    fn sample() -> Vec<Fixture> {
        vec![
            Fixture {
                last: "Khan",
                address: Some("Bandra, Mumbai"),
                age: Some(28.0),
                height: Some(165.0),
                weight: Some(55.0),
                portfolio: 3,
                ..talent(1, "Sarah", "actor")
            },
            Fixture {
                last: "Mehta",
                display: Some("RJ Raj"),
                address: Some("Delhi"),
                age: Some(35.0),
                height: Some(178.0),
                portfolio: 1,
                ..talent(2, "Raj", "singer")
            },
            Fixture {
                last: "Das",
                address: Some("Kolkata"),
                age: None,
                height: Some(160.0),
                weight: Some(50.0),
                ..talent(3, "Priya", "dancer")
            },
            Fixture {
                last: "Iyer",
                address: None,
                age: Some(42.0),
                weight: Some(80.0),
                portfolio: 2,
                ..talent(4, "Arjun", "voice_artist")
            },
        ]
    }

    fn ids(list: &[Fixture]) -> Vec<DbId> {
        list.iter().map(|t| t.id).collect()
    }

    #[test]
    fn age_min_keeps_only_older_profiles() {
        let filter = TalentFilter {
            age: RangeFilter::new(Some(30.0), None),
            ..Default::default()
        };
        let result = filter.apply(&sarah_and_raj());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn location_search_is_case_insensitive() {
        let filter = TalentFilter {
            location: Some("mumbai".into()),
            ..Default::default()
        };
        let result = filter.apply(&sarah_and_raj());
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn unset_range_excludes_nothing() {
        let range = RangeFilter::default();
        assert!(!range.is_active());
        assert!(range.matches(None));
        assert!(range.matches(Some(-5.0)));
        assert_eq!(TalentFilter::default().apply(&sample()), sample());
    }

    #[test]
    fn min_only_range_excludes_nulls_and_values_below() {
        let range = RangeFilter::new(Some(30.0), None);
        assert!(!range.matches(None));
        assert!(!range.matches(Some(29.9)));
        assert!(range.matches(Some(30.0)));
        assert!(range.matches(Some(999.0)));
        assert!(!range.matches(Some(999.5)));
    }

    #[test]
    fn max_only_range_uses_zero_floor() {
        let range = RangeFilter::new(None, Some(170.0));
        assert!(range.matches(Some(0.0)));
        assert!(range.matches(Some(170.0)));
        assert!(!range.matches(Some(-1.0)));
        assert!(!range.matches(None));
    }

    #[test]
    fn name_matches_full_name_or_display_name() {
        let base = sample();
        let by_last = TalentFilter {
            name: Some("KHAN".into()),
            ..Default::default()
        };
        assert_eq!(ids(&by_last.apply(&base)), vec![1]);

        let by_full = TalentFilter {
            name: Some("sarah kh".into()),
            ..Default::default()
        };
        assert_eq!(ids(&by_full.apply(&base)), vec![1]);

        let by_display = TalentFilter {
            name: Some("rj raj".into()),
            ..Default::default()
        };
        assert_eq!(ids(&by_display.apply(&base)), vec![2]);
    }

    #[test]
    fn roles_match_any_selected_label_by_containment() {
        let filter = TalentFilter {
            roles: vec!["Dancer".into(), "Voice".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![3, 4]);
    }

    #[test]
    fn blank_text_criteria_are_inactive() {
        let filter = TalentFilter {
            name: Some("   ".into()),
            location: Some(String::new()),
            roles: vec![" ".into()],
            ..Default::default()
        };
        assert!(filter.is_empty());
    }

    #[test]
    fn has_portfolio_quick_filter() {
        let filter = TalentFilter {
            has_portfolio: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 4]);
    }

    #[test]
    fn filtered_result_is_exact_conjunction_subset() {
        let base = sample();
        let filter = TalentFilter {
            height: RangeFilter::new(Some(150.0), Some(170.0)),
            has_portfolio: true,
            ..Default::default()
        };
        let result = filter.apply(&base);
        for t in &result {
            assert!(base.contains(t));
        }
        let expected: Vec<Fixture> = base
            .iter()
            .filter(|t| filter.criteria().iter().all(|c| c.matches(*t)))
            .cloned()
            .collect();
        assert_eq!(result, expected);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn criteria_order_does_not_change_result() {
        let base = sample();
        let filter = TalentFilter {
            age: RangeFilter::new(Some(20.0), Some(50.0)),
            weight: RangeFilter::new(None, Some(90.0)),
            roles: vec!["a".into()],
            has_portfolio: true,
            ..Default::default()
        };
        let criteria = filter.criteria();
        let combined = filter.apply(&base);

        let forward = criteria.iter().fold(base.clone(), |acc, c| {
            acc.into_iter().filter(|t| c.matches(t)).collect()
        });
        let backward = criteria.iter().rev().fold(base.clone(), |acc, c| {
            acc.into_iter().filter(|t| c.matches(t)).collect()
        });
        assert_eq!(forward, combined);
        assert_eq!(backward, combined);
    }

    #[test]
    fn clear_restores_base_after_many_toggles() {
        let mut browser = TalentBrowser::new();
        browser.load(sample());
        browser.update_filter(|f| f.has_portfolio = true);
        browser.update_filter(|f| f.location = Some("delhi".into()));
        browser.update_filter(|f| f.age = RangeFilter::new(Some(50.0), None));
        assert_eq!(browser.count(), 0);
        assert_eq!(browser.total(), 4);

        browser.clear();
        assert_eq!(browser.talents(), browser.all_talents());
        assert_eq!(browser.filter(), &TalentFilter::default());

        browser.clear();
        assert_eq!(browser.talents(), &sample()[..]);
    }

    #[test]
    fn changing_filter_rescans_from_base() {
        let mut browser = TalentBrowser::new();
        browser.load(sample());
        browser.set_filter(TalentFilter {
            location: Some("mumbai".into()),
            ..Default::default()
        });
        assert_eq!(ids(browser.talents()), vec![1]);
        // A broader filter must widen the result again; it is not applied on
        // top of the previous narrowed list.
        browser.set_filter(TalentFilter {
            has_portfolio: true,
            ..Default::default()
        });
        assert_eq!(ids(browser.talents()), vec![1, 2, 4]);
    }

    #[test]
    fn failed_fetch_yields_empty_result() {
        let mut browser: TalentBrowser<Fixture> = TalentBrowser::new();
        browser.load(sample());
        let outcome = browser.load_result(Err::<Vec<Fixture>, _>("connection refused"));
        assert_eq!(outcome, Err("connection refused"));
        assert_eq!(browser.count(), 0);
        assert_eq!(browser.total(), 0);
    }

    #[test]
    fn failed_category_is_skipped_and_reported() {
        let mut browser: TalentBrowser<Fixture> = TalentBrowser::new();
        let failures = browser.load_category_results(vec![
            ("actor", Ok(vec![talent(1, "Sarah", "actor")])),
            ("singer", Err("statement timeout")),
            ("dancer", Ok(vec![talent(3, "Priya", "dancer")])),
        ]);
        assert_eq!(failures, vec![("singer", "statement timeout")]);
        assert_eq!(ids(browser.talents()), vec![1, 3]);
        assert_eq!(browser.total(), 2);
    }

    #[test]
    fn every_category_failing_yields_empty_result() {
        let mut browser: TalentBrowser<Fixture> = TalentBrowser::new();
        browser.load(sample());
        let failures = browser.load_category_results(vec![
            ("actor", Err::<Vec<Fixture>, _>("connection refused")),
            ("model", Err("connection refused")),
        ]);
        assert_eq!(failures.len(), 2);
        assert_eq!(browser.count(), 0);
        assert_eq!(browser.total(), 0);
    }

    #[test]
    fn merge_dedups_by_user_id_keeping_first() {
        let actors = vec![talent(1, "Sarah", "actor"), talent(2, "Raj", "actor")];
        let singers = vec![talent(2, "Raj", "singer"), talent(3, "Priya", "singer")];
        let merged = merge_category_results(vec![actors, singers]);
        assert_eq!(ids(&merged), vec![1, 2, 3]);
        assert_eq!(merged[1].category, "actor");
    }

    #[test]
    fn params_build_filter_and_categories() {
        let params = TalentFilterParams {
            category: Some("actor,singer".into()),
            age_min: Some(18.0),
            roles: Some("Actor, Model".into()),
            has_portfolio: true,
            ..Default::default()
        };
        assert_eq!(
            params.categories().unwrap(),
            vec![TalentCategory::Actor, TalentCategory::Singer]
        );
        let filter = params.filter().unwrap();
        assert_eq!(filter.age, RangeFilter::new(Some(18.0), None));
        assert_eq!(filter.roles, vec!["Actor".to_string(), "Model".to_string()]);
        assert!(filter.has_portfolio);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let params = TalentFilterParams {
            height_min: Some(190.0),
            height_max: Some(150.0),
            ..Default::default()
        };
        assert!(params.filter().is_err());
    }
}
