//! Record model representing one contact in the book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phones keep insertion order and never contain two equal values.
/// Duplicate additions and misses are reported outcomes, not errors, so
/// the mutating operations return description strings rather than
/// `Result`s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// The contact's name, also the key under which the book stores it
    name: ContactName,

    /// Phone numbers in the order they were added
    phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with an optional initial phone and birthday.
    pub fn new(name: ContactName, phone: Option<PhoneNumber>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number unless an equal value is already present.
    ///
    /// Returns a description of the outcome either way; a duplicate is a
    /// normal, reported result.
    pub fn add_phone(&mut self, phone: PhoneNumber) -> String {
        if self.phones.contains(&phone) {
            return format!("{} present in phones of contact {}", phone, self.name);
        }
        let message = format!("phone {} add to contact {}", phone, self.name);
        self.phones.push(phone);
        message
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// The replaced phone keeps its position. If `old` is not present the
    /// collection is left unchanged and the description says so.
    pub fn change_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> String {
        match self.phones.iter().position(|p| p == old) {
            Some(idx) => {
                let message = format!("old phone {} change to {}", old, new);
                self.phones[idx] = new;
                message
            }
            None => format!("{} not present in phones of contact {}", old, self.name),
        }
    }

    /// Describe how many days remain until the contact's next birthday.
    ///
    /// The next occurrence is this year when today is on or before the
    /// stored month/day, otherwise next year. A Feb 29 birthday rolls to
    /// Mar 1 in years without a leap day.
    pub fn days_to_birthday(&self) -> String {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    fn days_to_birthday_on(&self, today: NaiveDate) -> String {
        let Some(birthday) = &self.birthday else {
            return format!("No birthday set for contact {}", self.name);
        };

        let date = birthday.date();
        let next = Self::occurrence_in(today.year(), date.month(), date.day())
            .filter(|d| *d >= today)
            .or_else(|| Self::occurrence_in(today.year() + 1, date.month(), date.day()));

        match next {
            Some(next) => {
                let days_left = (next - today).num_days();
                format!(
                    "Days until the next birthday of {}: {}",
                    self.name, days_left
                )
            }
            // Unreachable for a validated birthday, but kept total.
            None => format!("No birthday set for contact {}", self.name),
        }
    }

    /// The birthday's occurrence in `year`, with Feb 29 rolling to Mar 1
    /// when `year` has no leap day.
    fn occurrence_in(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

// Display support - "name: phone1, phone2, birthday"
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}: {}", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, ", {}", birthday),
            None => write!(f, ", no birthday"),
        }
    }
}
