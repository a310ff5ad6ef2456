//! Synthetic equipment and building generation.
//!
//! Generation draws from an injected random source and an injected
//! "today", so a seeded [`Generator`] reproduces the same building.

pub mod catalog;
mod hierarchy;

use crate::model::{Property, PropertyStatus, PropertyType};
use chrono::{Days, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORKING_PROBABILITY: f64 = 0.8;
const NOTES_PROBABILITY: f64 = 0.3;
const PURCHASE_WINDOW_MONTHS: u32 = 60;

pub struct Generator<R> {
    rng: R,
    today: NaiveDate,
}

impl Generator<StdRng> {
    /// A reproducible generator: the same seed and date give the same output.
    #[must_use]
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::new(StdRng::seed_from_u64(seed), today)
    }

    #[must_use]
    pub fn from_entropy(today: NaiveDate) -> Self {
        Self::new(StdRng::from_entropy(), today)
    }
}

impl<R: Rng> Generator<R> {
    #[must_use]
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Generates one piece of equipment with the caller-supplied id.
    ///
    /// Brand and model are drawn uniformly from the catalog for `property_type`,
    /// the status is working with probability 0.8, the purchase date lies in
    /// the five years up to today and a maintenance note is attached with
    /// probability 0.3.
    pub fn property(&mut self, property_type: PropertyType, id: String) -> Property {
        let brands = catalog::brands(property_type);
        let models = catalog::models(property_type);
        let brand = brands[self.rng.gen_range(0..brands.len())];
        let model = models[self.rng.gen_range(0..models.len())];

        let status = if self.rng.gen_bool(WORKING_PROBABILITY) {
            PropertyStatus::Working
        } else {
            PropertyStatus::NotWorking
        };

        let purchase_date = self.purchase_date();

        let notes = self
            .rng
            .gen_bool(NOTES_PROBABILITY)
            .then(|| maintenance_note(self.today));

        Property {
            id,
            property_type,
            brand: brand.to_string(),
            model: model.to_string(),
            status,
            purchase_date,
            notes,
        }
    }

    fn purchase_date(&mut self) -> NaiveDate {
        let start = self
            .today
            .checked_sub_months(Months::new(PURCHASE_WINDOW_MONTHS))
            .unwrap_or(self.today);
        let span = (self.today - start).num_days();
        let offset = self.rng.gen_range(0..=span);

        start
            .checked_add_days(Days::new(offset.unsigned_abs()))
            .unwrap_or(self.today)
    }
}

/// The note stamped on equipment that was serviced on `date`.
#[must_use]
pub fn maintenance_note(date: NaiveDate) -> String {
    format!("Maintenance performed on {}", date.format("%-m/%-d/%Y"))
}
