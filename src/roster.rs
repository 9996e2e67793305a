//! CSV roster pipeline.
//!
//! Reads raw user rows, keeps malformed rows as empty slots so the
//! sequence stays aligned with the input, and writes the active users'
//! display names next to their formatted prices.

use crate::currency::format_currency_str;
use crate::error::Result;
use crate::record::UserRecord;
use crate::user::{active_user, process_users, User};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// One input row. `user` is `None` when the row could not be read.
#[derive(Debug, Clone)]
struct Slot {
    user: Option<User>,
    price: Option<String>,
}

/// Collects users from CSV and renders the active ones.
///
/// # Output Ordering
///
/// Rows are written in input order; inactive users and malformed rows are
/// left out.
pub struct Roster {
    /// Currency code applied to every price.
    currency: String,

    /// Input rows, malformed ones included as empty slots.
    slots: Vec<Slot>,
}

impl Roster {
    /// Creates an empty roster pricing in `currency`.
    pub fn new(currency: impl Into<String>) -> Self {
        Roster {
            currency: currency.into(),
            slots: Vec::new(),
        }
    }

    /// Reads user rows from a CSV reader.
    ///
    /// Invalid records are logged at warn level and kept as empty slots.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<UserRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let slot = match result {
                Ok(record) => match record.parse() {
                    Some(user) => {
                        debug!(
                            "Row {}: Read user {} (active: {})",
                            row_num,
                            user.id(),
                            user.is_active()
                        );
                        Slot {
                            price: record.price().map(str::to_owned),
                            user: Some(user),
                        }
                    }
                    None => {
                        warn!("Row {}: User record has no name, skipping", row_num);
                        Slot {
                            user: None,
                            price: None,
                        }
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    Slot {
                        user: None,
                        price: None,
                    }
                }
            };
            self.slots.push(slot);
        }

        Ok(())
    }

    /// Number of rows read, malformed ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no rows have been read.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Upper-cased names of the active users, in input order.
    pub fn names(&self) -> Vec<String> {
        process_users(self.listed().map(|(user, _)| user))
    }

    /// Active users with their raw price cells, in input order.
    fn listed(&self) -> impl Iterator<Item = (&User, Option<&str>)> + '_ {
        self.slots.iter().filter_map(|slot| {
            active_user(slot.user.as_ref()).map(|user| (user, slot.price.as_deref()))
        })
    }

    /// Writes `name,price` rows for the active users.
    ///
    /// Prices that do not parse are written as the `Invalid amount`
    /// sentinel; a blank price cell stays blank.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["name", "price"])?;

        for (user, raw_price) in self.listed() {
            let price = raw_price
                .map(|raw| format_currency_str(raw, &self.currency))
                .unwrap_or_default();

            csv_writer.write_record([user.display_name(), price])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
