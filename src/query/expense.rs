//! Derived expense view: filter by term and date range, then sort
//!
//! The functions here never touch their inputs. They clone the matching
//! records into a fresh `Vec`, so the same slice can be queried from several
//! threads with different filter snapshots.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::error::ExpenseResult;
use crate::filters::FilterState;
use crate::models::{Expense, SortMode};

use super::matcher::{SearchMode, TermMatcher};

/// Comparator selected by a sort mode
pub type ExpenseComparator = fn(&Expense, &Expense) -> Ordering;

/// Look up the comparator for a sort mode
pub fn comparator(mode: SortMode) -> ExpenseComparator {
    match mode {
        SortMode::ByNewest => by_newest,
        SortMode::ByOldest => by_oldest,
        SortMode::ByAmountDescending => by_amount_descending,
        SortMode::ByAmountAscending => by_amount_ascending,
    }
}

fn by_newest(a: &Expense, b: &Expense) -> Ordering {
    b.date.cmp(&a.date)
}

fn by_oldest(a: &Expense, b: &Expense) -> Ordering {
    a.date.cmp(&b.date)
}

fn by_amount_descending(a: &Expense, b: &Expense) -> Ordering {
    b.amount.cmp(&a.amount)
}

fn by_amount_ascending(a: &Expense, b: &Expense) -> Ordering {
    a.amount.cmp(&b.amount)
}

/// Inclusive calendar-day range; a missing end is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    pub fn from_filters(filters: &FilterState) -> Self {
        Self {
            start: filters.start_date,
            end: filters.end_date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Filter and sort expenses with a literal search term
///
/// ```
/// use chrono::NaiveDate;
/// use expense_tracker::filters::FilterState;
/// use expense_tracker::models::{Contact, Expense, Money, SortMode};
/// use expense_tracker::query::query;
///
/// let cafe = Contact::new("Cafe", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// let coffee = Expense::new(
///     "Coffee",
///     Money::from_cents(450),
///     NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
///     &cafe,
/// );
///
/// let filters = FilterState::new().set_search_term("COFF").set_sort_by(SortMode::ByOldest);
/// let found = query(&[coffee.clone()], &filters).unwrap();
/// assert_eq!(found, vec![coffee]);
/// ```
pub fn query(expenses: &[Expense], filters: &FilterState) -> ExpenseResult<Vec<Expense>> {
    query_with(expenses, filters, SearchMode::Literal)
}

/// Filter and sort expenses, interpreting the term per `search_mode`
///
/// Keeps the expenses whose description or note matches the term and whose
/// date falls inside the inclusive bounds, ordered by the selected
/// comparator. Ties keep their input order.
///
/// # Errors
///
/// Returns [`crate::ExpenseError::InvalidSearchPattern`] when `search_mode`
/// is [`SearchMode::Pattern`] and the term does not compile.
pub fn query_with(
    expenses: &[Expense],
    filters: &FilterState,
    search_mode: SearchMode,
) -> ExpenseResult<Vec<Expense>> {
    let matcher = TermMatcher::new(&filters.term, search_mode)?;
    let bounds = DateBounds::from_filters(filters);

    let mut result: Vec<Expense> = expenses
        .iter()
        .filter(|e| bounds.contains(e.date))
        .filter(|e| matcher.matches(&e.description) || matcher.matches_opt(e.note.as_deref()))
        .cloned()
        .collect();

    // slice::sort_by is stable
    result.sort_by(comparator(filters.sort_by));

    tracing::debug!(
        sort_by = %filters.sort_by,
        ?search_mode,
        input = expenses.len(),
        output = result.len(),
        "expense query"
    );

    Ok(result)
}

/// Query with the sort mode given by name, as a UI control would send it
///
/// The name is checked before any filtering happens, so an unknown name
/// produces [`crate::ExpenseError::InvalidSortMode`] and no partial result.
pub fn query_with_sort_name(
    expenses: &[Expense],
    filters: &FilterState,
    sort_name: &str,
) -> ExpenseResult<Vec<Expense>> {
    let filters = filters.clone().set_sort_by_name(sort_name)?;
    query(expenses, &filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, ExpenseId, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact() -> Contact {
        Contact::new("Someone", date(2023, 1, 1))
    }

    fn expense(description: &str, cents: u64, on: NaiveDate) -> Expense {
        Expense::new(description, Money::from_cents(cents), on, &contact())
    }

    fn ids(expenses: &[Expense]) -> Vec<ExpenseId> {
        expenses.iter().map(|e| e.id).collect()
    }

    fn rent_and_coffee() -> (Expense, Expense) {
        (
            expense("Rent", 150000, date(2024, 1, 1)),
            expense("Coffee", 450, date(2024, 2, 15)),
        )
    }

    #[test]
    fn test_amount_descending_scenario() {
        let (rent, coffee) = rent_and_coffee();
        let expenses = vec![rent.clone(), coffee.clone()];
        let filters = FilterState::new().set_sort_by(SortMode::ByAmountDescending);

        let got = query(&expenses, &filters).unwrap();
        assert_eq!(ids(&got), vec![rent.id, coffee.id]);
    }

    #[test]
    fn test_term_scenario() {
        let (rent, coffee) = rent_and_coffee();
        let expenses = vec![rent, coffee.clone()];
        let filters = FilterState::new().set_search_term("coffee");

        let got = query(&expenses, &filters).unwrap();
        assert_eq!(ids(&got), vec![coffee.id]);
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let expenses: Vec<Expense> = (0..10)
            .map(|i| expense(&format!("item {i}"), i * 100, date(2024, 1, 1 + i as u32)))
            .collect();

        let got = query(&expenses, &FilterState::new()).unwrap();
        assert_eq!(got.len(), expenses.len());
    }

    #[test]
    fn test_case_insensitive_match() {
        let groceries = expense("Groceries", 5000, date(2024, 3, 3));
        let expenses = vec![groceries.clone(), expense("Fuel", 6000, date(2024, 3, 4))];

        let lower = query(&expenses, &FilterState::new().set_search_term("grocer")).unwrap();
        let upper = query(&expenses, &FilterState::new().set_search_term("GROCER")).unwrap();
        assert_eq!(ids(&lower), vec![groceries.id]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_term_matches_note() {
        let with_note = expense("Lunch", 1200, date(2024, 3, 3)).with_note("With Sam from work");
        let expenses = vec![with_note.clone(), expense("Dinner", 3000, date(2024, 3, 3))];

        let got = query(&expenses, &FilterState::new().set_search_term("sam")).unwrap();
        assert_eq!(ids(&got), vec![with_note.id]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let before = expense("before", 1, date(2024, 1, 9));
        let first = expense("first", 2, date(2024, 1, 10));
        let last = expense("last", 3, date(2024, 1, 20));
        let after = expense("after", 4, date(2024, 1, 21));
        let expenses = vec![before, first.clone(), last.clone(), after];

        let filters = FilterState::new()
            .set_start_date(Some(date(2024, 1, 10)))
            .set_end_date(Some(date(2024, 1, 20)))
            .set_sort_by(SortMode::ByOldest);

        let got = query(&expenses, &filters).unwrap();
        assert_eq!(ids(&got), vec![first.id, last.id]);
    }

    #[test]
    fn test_single_bound() {
        let old = expense("old", 1, date(2023, 6, 1));
        let new = expense("new", 2, date(2024, 6, 1));
        let expenses = vec![old.clone(), new.clone()];

        let from = FilterState::new().set_start_date(Some(date(2024, 1, 1)));
        assert_eq!(ids(&query(&expenses, &from).unwrap()), vec![new.id]);

        let until = FilterState::new().set_end_date(Some(date(2024, 1, 1)));
        assert_eq!(ids(&query(&expenses, &until).unwrap()), vec![old.id]);
    }

    #[test]
    fn test_contradictory_bounds_give_empty_result() {
        let expenses = vec![expense("x", 1, date(2024, 1, 15))];
        let filters = FilterState::new()
            .set_start_date(Some(date(2024, 2, 1)))
            .set_end_date(Some(date(2024, 1, 1)));
        assert!(query(&expenses, &filters).unwrap().is_empty());
    }

    #[test]
    fn test_and_semantics() {
        let start = date(2024, 1, 10);
        let end = date(2024, 1, 20);
        let passes = expense("taxi", 1, date(2024, 1, 15));
        let wrong_text = expense("bus", 2, date(2024, 1, 15));
        let too_early = expense("taxi", 3, date(2024, 1, 5));
        let too_late = expense("taxi", 4, date(2024, 1, 25));
        let expenses = vec![wrong_text, too_early, passes.clone(), too_late];

        let filters = FilterState::new()
            .set_search_term("TAXI")
            .set_start_date(Some(start))
            .set_end_date(Some(end));

        assert_eq!(ids(&query(&expenses, &filters).unwrap()), vec![passes.id]);
    }

    #[test]
    fn test_each_sort_mode_orders_and_is_idempotent() {
        let a = expense("a", 300, date(2024, 1, 2));
        let b = expense("b", 100, date(2024, 1, 3));
        let c = expense("c", 200, date(2024, 1, 1));
        let expenses = vec![a.clone(), b.clone(), c.clone()];

        let expected = [
            (SortMode::ByNewest, vec![b.id, a.id, c.id]),
            (SortMode::ByOldest, vec![c.id, a.id, b.id]),
            (SortMode::ByAmountDescending, vec![a.id, c.id, b.id]),
            (SortMode::ByAmountAscending, vec![b.id, c.id, a.id]),
        ];

        for (mode, want) in expected {
            let filters = FilterState::new().set_sort_by(mode);
            let once = query(&expenses, &filters).unwrap();
            assert_eq!(ids(&once), want, "{mode}");

            let twice = query(&once, &filters).unwrap();
            assert_eq!(once, twice, "{mode} is not idempotent");
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let day = date(2024, 5, 5);
        let first = expense("first", 500, day);
        let second = expense("second", 500, day);
        let third = expense("third", 500, day);
        let expenses = vec![first.clone(), second.clone(), third.clone()];

        for mode in SortMode::ALL {
            let got = query(&expenses, &FilterState::new().set_sort_by(mode)).unwrap();
            assert_eq!(ids(&got), vec![first.id, second.id, third.id], "{mode}");
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let (rent, coffee) = rent_and_coffee();
        let expenses = vec![coffee, rent];
        let snapshot = expenses.clone();

        let _ = query(
            &expenses,
            &FilterState::new().set_sort_by(SortMode::ByAmountDescending),
        )
        .unwrap();
        assert_eq!(expenses, snapshot);
    }

    #[test]
    fn test_unknown_sort_name_fails_without_result() {
        let (rent, coffee) = rent_and_coffee();
        let err =
            query_with_sort_name(&[rent, coffee], &FilterState::new(), "byBogus").unwrap_err();
        assert!(err.is_invalid_sort_mode());
    }

    #[test]
    fn test_sort_name_is_applied() {
        let (rent, coffee) = rent_and_coffee();
        let got = query_with_sort_name(
            &[rent.clone(), coffee.clone()],
            &FilterState::new(),
            "byAmountAscending",
        )
        .unwrap();
        assert_eq!(ids(&got), vec![coffee.id, rent.id]);
    }

    #[test]
    fn test_pattern_search_mode() {
        let (rent, coffee) = rent_and_coffee();
        let expenses = vec![rent.clone(), coffee.clone()];

        let filters = FilterState::new().set_search_term("^(rent|cof+ee)$");
        let got = query_with(&expenses, &filters, SearchMode::Pattern).unwrap();
        assert_eq!(got.len(), 2);

        // same term as a literal finds nothing
        assert!(query(&expenses, &filters).unwrap().is_empty());

        let broken = FilterState::new().set_search_term("[");
        assert!(query_with(&expenses, &broken, SearchMode::Pattern).is_err());
    }

    #[test]
    fn test_concurrent_queries() {
        let (rent, coffee) = rent_and_coffee();
        let expenses = std::sync::Arc::new(vec![rent.clone(), coffee.clone()]);

        let handles: Vec<_> = SortMode::ALL
            .into_iter()
            .map(|mode| {
                let expenses = std::sync::Arc::clone(&expenses);
                std::thread::spawn(move || {
                    query(&expenses, &FilterState::new().set_sort_by(mode)).map(|r| r.len())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 2);
        }
    }
}
