use std::str::FromStr;

use chrono::{Local, NaiveDate};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{BillId, BillSummary, Customer};

/// Input problems caught before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields must be filled!")]
    MissingFields,
    #[error("Date must use the YYYY-MM-DD format.")]
    InvalidDate,
    #[error("{field} must be a decimal amount.")]
    InvalidAmount { field: &'static str },
    #[error("Quantity must be a whole number greater than zero.")]
    InvalidQuantity,
}

/// A fixed set of labelled text inputs plus the index of the focused one.
#[derive(Clone)]
pub(crate) struct FormFields {
    labels: &'static [&'static str],
    values: Vec<String>,
    active: usize,
    pub(crate) error: Option<String>,
}

impl FormFields {
    fn new(labels: &'static [&'static str]) -> Self {
        Self {
            labels,
            values: vec![String::new(); labels.len()],
            active: 0,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = (self.active + 1) % self.labels.len();
    }

    pub(crate) fn prev_field(&mut self) {
        self.active = (self.active + self.labels.len() - 1) % self.labels.len();
    }

    /// Append a printable character to the focused field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.values[self.active].push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.values[self.active].pop();
    }

    fn set_value(&mut self, idx: usize, value: impl Into<String>) {
        self.values[idx] = value.into();
    }

    /// Trimmed values, or `MissingFields` if any of them is blank.
    fn required_values(&self) -> Result<Vec<&str>, ValidationError> {
        let values: Vec<&str> = self.values.iter().map(|value| value.trim()).collect();
        if values.iter().any(|value| value.is_empty()) {
            Err(ValidationError::MissingFields)
        } else {
            Ok(values)
        }
    }

    /// One rendered line per field, focused field highlighted.
    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        self.labels
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(idx, (label, value))| {
                let is_active = idx == self.active;
                let display = if value.is_empty() {
                    "<required>".to_string()
                } else {
                    value.clone()
                };
                let style = if is_active {
                    Style::default().fg(Color::Yellow)
                } else if value.is_empty() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(format!("{label}: ")),
                    Span::styled(display, style),
                ])
            })
            .collect()
    }

    /// Column and row of the text cursor relative to the form body.
    pub(crate) fn cursor_offset(&self) -> (u16, u16) {
        let label = self.labels[self.active];
        let column = label.chars().count() + 2 + self.values[self.active].chars().count();
        (
            u16::try_from(column).unwrap_or(u16::MAX),
            u16::try_from(self.active).unwrap_or(u16::MAX),
        )
    }
}

fn parse_amount(raw: &str, field: &'static str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(raw).map_err(|_| ValidationError::InvalidAmount { field })
}

/// Values ready for `Ledger::create_customer`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CustomerInput {
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) contact_info: String,
}

#[derive(Clone)]
pub(crate) struct CustomerForm {
    pub(crate) fields: FormFields,
}

impl CustomerForm {
    pub(crate) fn new() -> Self {
        Self {
            fields: FormFields::new(&["Name", "Address", "Contact"]),
        }
    }

    pub(crate) fn parse_inputs(&self) -> Result<CustomerInput, ValidationError> {
        let values = self.fields.required_values()?;
        Ok(CustomerInput {
            name: values[0].to_string(),
            address: values[1].to_string(),
            contact_info: values[2].to_string(),
        })
    }
}

/// Bill form bound to the customer it was opened for.
#[derive(Clone)]
pub(crate) struct BillForm {
    pub(crate) customer: Customer,
    pub(crate) fields: FormFields,
}

impl BillForm {
    /// Start with today's date filled in.
    pub(crate) fn for_customer(customer: Customer) -> Self {
        Self::with_date(customer, Local::now().date_naive())
    }

    pub(crate) fn with_date(customer: Customer, date: NaiveDate) -> Self {
        let mut fields = FormFields::new(&["Date", "Total"]);
        fields.set_value(0, date.format("%Y-%m-%d").to_string());
        fields.active = 1;
        Self { customer, fields }
    }

    pub(crate) fn parse_inputs(&self) -> Result<(NaiveDate, Decimal), ValidationError> {
        let values = self.fields.required_values()?;
        let date = NaiveDate::parse_from_str(values[0], "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;
        let total = parse_amount(values[1], "Total")?;
        Ok((date, total))
    }
}

/// Values ready for `Ledger::create_bill_item`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ItemInput {
    pub(crate) item_name: String,
    pub(crate) quantity: u32,
    pub(crate) price: Decimal,
}

/// Line item form bound to the bill it was opened for.
#[derive(Clone)]
pub(crate) struct ItemForm {
    pub(crate) bill_id: BillId,
    pub(crate) customer_name: String,
    pub(crate) fields: FormFields,
}

impl ItemForm {
    pub(crate) fn for_bill(bill: &BillSummary) -> Self {
        Self {
            bill_id: bill.bill_id,
            customer_name: bill.customer_name.clone(),
            fields: FormFields::new(&["Item", "Quantity", "Price"]),
        }
    }

    pub(crate) fn parse_inputs(&self) -> Result<ItemInput, ValidationError> {
        let values = self.fields.required_values()?;
        let quantity = values[1]
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(ValidationError::InvalidQuantity)?;
        Ok(ItemInput {
            item_name: values[0].to_string(),
            quantity,
            price: parse_amount(values[2], "Price")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::models::CustomerId;

    fn type_into(fields: &mut FormFields, values: &[&str]) {
        for (idx, value) in values.iter().enumerate() {
            fields.active = idx;
            for ch in value.chars() {
                fields.push_char(ch);
            }
        }
    }

    fn alice() -> Customer {
        Customer {
            id: CustomerId(1),
            name: "Alice".into(),
            address: "1 Main St".into(),
            contact_info: "555-0100".into(),
        }
    }

    #[rstest]
    #[case(["", "1 Main St", "555-0100"])]
    #[case(["Alice", "", "555-0100"])]
    #[case(["Alice", "1 Main St", ""])]
    #[case(["Alice", "   ", "555-0100"])]
    fn customer_form_requires_every_field(#[case] values: [&str; 3]) {
        let mut form = CustomerForm::new();
        type_into(&mut form.fields, &values);
        assert_eq!(form.parse_inputs(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn customer_form_trims_values() {
        let mut form = CustomerForm::new();
        type_into(&mut form.fields, &[" Alice ", "1 Main St", "555-0100 "]);
        assert_eq!(
            form.parse_inputs().unwrap(),
            CustomerInput {
                name: "Alice".into(),
                address: "1 Main St".into(),
                contact_info: "555-0100".into(),
            }
        );
    }

    #[test]
    fn bill_form_prefills_date_and_focuses_total() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut form = BillForm::with_date(alice(), date);
        for ch in "150.00".chars() {
            form.fields.push_char(ch);
        }
        assert_eq!(form.parse_inputs().unwrap(), (date, Decimal::new(15000, 2)));
    }

    #[rstest]
    #[case("2024-13-01", "10", ValidationError::InvalidDate)]
    #[case("05/01/2024", "10", ValidationError::InvalidDate)]
    #[case("2024-01-05", "ten", ValidationError::InvalidAmount { field: "Total" })]
    #[case("2024-01-05", "", ValidationError::MissingFields)]
    fn bill_form_rejects_bad_input(
        #[case] date: &str,
        #[case] total: &str,
        #[case] expected: ValidationError,
    ) {
        let mut form = BillForm::with_date(alice(), NaiveDate::default());
        form.fields.set_value(0, date);
        form.fields.set_value(1, total);
        assert_eq!(form.parse_inputs(), Err(expected));
    }

    #[rstest]
    #[case("0", ValidationError::InvalidQuantity)]
    #[case("-2", ValidationError::InvalidQuantity)]
    #[case("1.5", ValidationError::InvalidQuantity)]
    fn item_form_needs_positive_whole_quantity(
        #[case] quantity: &str,
        #[case] expected: ValidationError,
    ) {
        let bill = BillSummary {
            bill_id: BillId(1),
            customer_name: "Alice".into(),
            date: NaiveDate::default(),
            total_amount: Decimal::ZERO,
        };
        let mut form = ItemForm::for_bill(&bill);
        type_into(&mut form.fields, &["Widget", quantity, "50.00"]);
        assert_eq!(form.parse_inputs(), Err(expected));
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = CustomerForm::new();
        form.fields.prev_field();
        assert_eq!(form.fields.active, 2);
        form.fields.next_field();
        assert_eq!(form.fields.active, 0);
    }

    #[test]
    fn cursor_follows_active_field() {
        let mut form = CustomerForm::new();
        form.fields.next_field();
        for ch in "12".chars() {
            form.fields.push_char(ch);
        }
        assert_eq!(form.fields.cursor_offset(), ("Address: ".len() as u16 + 2, 1));
    }

    #[test]
    fn cursor_offset_saturates_on_huge_input() {
        let mut form = CustomerForm::new();
        form.fields.set_value(0, "x".repeat(usize::from(u16::MAX) + 10));
        assert_eq!(form.fields.cursor_offset(), (u16::MAX, 0));
    }
}
