//! The in-memory ledger: both entry collections after ingest.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::entry::{CostEntry, LedgerEntry, SaleEntry};
use super::error::{EmptyDatasetWarning, ValidationError, ValidationIssue};
use crate::store::{Dataset, RawRecord};

/// Cost entries and sale entries, each sorted ascending by date.
///
/// The two collections are independent; a cost on some day says nothing
/// about sales on that day. A ledger is a read projection rebuilt for every
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    costs: Vec<CostEntry>,
    sales: Vec<SaleEntry>,
}

/// Result of a partial-acceptance load.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Ledger built from every valid row.
    pub ledger: Ledger,
    /// One error per rejected row.
    pub rejected: Vec<ValidationError>,
    /// Rows whose stored total disagreed with `quantity * unit_price`.
    pub recomputed_totals: usize,
}

impl LoadOutcome {
    /// Returns true if no row was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

struct Ingested<E> {
    entries: Vec<E>,
    rejected: Vec<ValidationError>,
    recomputed: usize,
}

fn ingest<E, F>(dataset: Dataset, rows: &[RawRecord], build: F) -> Ingested<E>
where
    E: LedgerEntry,
    F: Fn(NaiveDate, String, i64, rust_decimal::Decimal) -> Result<E, ValidationError>,
{
    let mut out = Ingested {
        entries: Vec::with_capacity(rows.len()),
        rejected: Vec::new(),
        recomputed: 0,
    };

    for (index, raw) in rows.iter().enumerate() {
        let Some(date) = raw.date.to_calendar_date() else {
            out.rejected.push(
                ValidationError::new(
                    dataset,
                    "date",
                    ValidationIssue::InvalidDate(raw.date.to_string()),
                )
                .at_row(index),
            );
            continue;
        };

        let entry = match build(date, raw.name.clone(), raw.quantity, raw.unit_price) {
            Ok(entry) => entry,
            Err(err) => {
                out.rejected.push(err.at_row(index));
                continue;
            }
        };

        if let Some(stored) = raw.total {
            if stored != entry.total() {
                warn!(
                    table = %dataset,
                    row = index,
                    stored = %stored,
                    derived = %entry.total(),
                    "Stored total disagrees with quantity x unit price, using derived total"
                );
                out.recomputed += 1;
            }
        }

        out.entries.push(entry);
    }

    out
}

impl Ledger {
    /// Creates a ledger from already validated entries.
    #[must_use]
    pub fn new(mut costs: Vec<CostEntry>, mut sales: Vec<SaleEntry>) -> Self {
        costs.sort_by_key(CostEntry::date);
        sales.sort_by_key(SaleEntry::date);
        Self { costs, sales }
    }

    /// Builds a ledger from raw store rows, keeping every valid row.
    ///
    /// Invalid rows are reported in [`LoadOutcome::rejected`] with their
    /// table, index, and field. Stored totals are recomputed.
    #[must_use]
    pub fn load(raw_costs: &[RawRecord], raw_sales: &[RawRecord]) -> LoadOutcome {
        let costs = ingest(Dataset::Cost, raw_costs, |date, name, qty, price| {
            CostEntry::new(date, name, qty, price)
        });
        let sales = ingest(Dataset::Sale, raw_sales, |date, name, qty, price| {
            SaleEntry::new(date, name, qty, price)
        });

        let mut rejected = costs.rejected;
        rejected.extend(sales.rejected);

        LoadOutcome {
            ledger: Self::new(costs.entries, sales.entries),
            rejected,
            recomputed_totals: costs.recomputed + sales.recomputed,
        }
    }

    /// Builds a ledger from raw store rows, failing on the first invalid row.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError`, cost rows before sale rows.
    pub fn load_strict(
        raw_costs: &[RawRecord],
        raw_sales: &[RawRecord],
    ) -> Result<Self, ValidationError> {
        let outcome = Self::load(raw_costs, raw_sales);
        match outcome.rejected.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(outcome.ledger),
        }
    }

    /// Cost entries, ascending by date.
    #[must_use]
    pub fn costs(&self) -> &[CostEntry] {
        &self.costs
    }

    /// Sale entries, ascending by date.
    #[must_use]
    pub fn sales(&self) -> &[SaleEntry] {
        &self.sales
    }

    /// Cost entries dated exactly `date`.
    pub fn costs_on(&self, date: NaiveDate) -> impl Iterator<Item = &CostEntry> {
        self.costs.iter().filter(move |e| e.date() == date)
    }

    /// Sale entries dated exactly `date`.
    pub fn sales_on(&self, date: NaiveDate) -> impl Iterator<Item = &SaleEntry> {
        self.sales.iter().filter(move |e| e.date() == date)
    }

    /// Sub-ledger with the entries in the inclusive range `start..=end`.
    #[must_use]
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let in_range = |date: NaiveDate| date >= start && date <= end;
        Self {
            costs: self.costs.iter().filter(|e| in_range(e.date())).cloned().collect(),
            sales: self.sales.iter().filter(|e| in_range(e.date())).cloned().collect(),
        }
    }

    /// Earliest and latest entry date over both collections.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self
            .costs
            .iter()
            .map(CostEntry::date)
            .chain(self.sales.iter().map(SaleEntry::date));

        dates.fold(None, |range, date| match range {
            None => Some((date, date)),
            Some((lo, hi)) => Some((lo.min(date), hi.max(date))),
        })
    }

    /// Returns true if both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty() && self.sales.is_empty()
    }

    /// Warning listing the empty collections, if any.
    #[must_use]
    pub fn empty_datasets(&self) -> Option<EmptyDatasetWarning> {
        let mut datasets = Vec::new();
        if self.costs.is_empty() {
            datasets.push(Dataset::Cost);
        }
        if self.sales.is_empty() {
            datasets.push(Dataset::Sale);
        }
        (!datasets.is_empty()).then_some(EmptyDatasetWarning { datasets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RawDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(date: RawDate, name: &str, quantity: i64, unit_price: Decimal) -> RawRecord {
        RawRecord {
            date,
            name: name.to_string(),
            quantity,
            unit_price,
            total: None,
        }
    }

    #[test]
    fn test_load_valid_rows() {
        let costs = vec![raw(date(2024, 1, 1).into(), "Flour", 10, dec!(5000))];
        let sales = vec![raw(date(2024, 1, 1).into(), "Bread", 20, dec!(3000))];

        let outcome = Ledger::load(&costs, &sales);
        assert!(outcome.is_clean());
        assert_eq!(outcome.ledger.costs().len(), 1);
        assert_eq!(outcome.ledger.sales()[0].total(), dec!(60000));
    }

    #[test]
    fn test_partial_acceptance() {
        let costs = vec![
            raw(date(2024, 1, 1).into(), "Flour", 10, dec!(5000)),
            raw(date(2024, 1, 2).into(), "Sugar", -2, dec!(1000)),
            raw(RawDate::Text("someday".into()), "Salt", 1, dec!(10)),
            raw(date(2024, 1, 3).into(), "Eggs", 12, dec!(2500)),
        ];

        let outcome = Ledger::load(&costs, &[]);
        assert_eq!(outcome.ledger.costs().len(), 2);
        assert_eq!(outcome.rejected.len(), 2);

        assert_eq!(outcome.rejected[0].row, Some(1));
        assert_eq!(outcome.rejected[0].field, "quantity");
        assert_eq!(outcome.rejected[1].row, Some(2));
        assert_eq!(outcome.rejected[1].field, "date");
        assert_eq!(
            outcome.rejected[1].issue,
            ValidationIssue::InvalidDate("someday".to_string())
        );
    }

    #[test]
    fn test_load_strict_fails_on_first_bad_row() {
        let costs = vec![raw(date(2024, 1, 1).into(), "Flour", 1, dec!(1))];
        let sales = vec![
            raw(date(2024, 1, 1).into(), "", 1, dec!(1)),
            raw(date(2024, 1, 1).into(), "Bread", 1, dec!(-1)),
        ];

        let err = Ledger::load_strict(&costs, &sales).unwrap_err();
        assert_eq!(err.dataset, Dataset::Sale);
        assert_eq!(err.row, Some(0));
        assert_eq!(err.field, "product");

        assert!(Ledger::load_strict(&costs, &[]).is_ok());
    }

    #[test]
    fn test_stored_total_is_recomputed() {
        let mut row = raw(date(2024, 1, 1).into(), "Flour", 10, dec!(5000));
        row.total = Some(dec!(999));

        let outcome = Ledger::load(&[row], &[]);
        assert!(outcome.is_clean());
        assert_eq!(outcome.recomputed_totals, 1);
        assert_eq!(outcome.ledger.costs()[0].total(), dec!(50000));
    }

    #[test]
    fn test_matching_stored_total_with_other_scale_is_not_recomputed() {
        let mut row = raw(date(2024, 1, 1).into(), "Flour", 10, dec!(5000));
        row.total = Some(dec!(50000.00));

        assert_eq!(Ledger::load(&[row], &[]).recomputed_totals, 0);
    }

    #[test]
    fn test_mixed_date_representations_share_a_day() {
        let sales = vec![
            raw(RawDate::Text("2024-01-05".into()), "Bread", 1, dec!(100)),
            raw(RawDate::Text("2024-01-05T09:15:00+07:00".into()), "Bread", 1, dec!(100)),
            raw(RawDate::UnixSeconds(1_704_412_800), "Bread", 1, dec!(100)),
            raw(date(2024, 1, 5).into(), "Bread", 1, dec!(100)),
        ];

        let ledger = Ledger::load(&sales.clone(), &sales).ledger;
        assert_eq!(ledger.sales_on(date(2024, 1, 5)).count(), 4);
        assert_eq!(ledger.costs_on(date(2024, 1, 5)).count(), 4);
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let sales = vec![
            raw(date(2024, 3, 1).into(), "C", 1, dec!(1)),
            raw(date(2024, 1, 1).into(), "A", 1, dec!(1)),
            raw(date(2024, 2, 1).into(), "B", 1, dec!(1)),
        ];
        let ledger = Ledger::load(&[], &sales).ledger;
        let names: Vec<&str> = ledger.sales().iter().map(SaleEntry::product).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_within_and_date_range() {
        let costs = vec![
            raw(date(2024, 1, 1).into(), "Flour", 1, dec!(1)),
            raw(date(2024, 2, 15).into(), "Sugar", 1, dec!(1)),
        ];
        let sales = vec![raw(date(2024, 3, 31).into(), "Bread", 1, dec!(1))];
        let ledger = Ledger::load(&costs, &sales).ledger;

        assert_eq!(ledger.date_range(), Some((date(2024, 1, 1), date(2024, 3, 31))));

        let feb = ledger.within(date(2024, 2, 1), date(2024, 2, 29));
        assert_eq!(feb.costs().len(), 1);
        assert!(feb.sales().is_empty());
        assert_eq!(
            feb.empty_datasets(),
            Some(EmptyDatasetWarning {
                datasets: vec![Dataset::Sale]
            })
        );
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.date_range(), None);
        assert_eq!(
            ledger.empty_datasets().unwrap().datasets,
            vec![Dataset::Cost, Dataset::Sale]
        );
    }
}
