use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;

use crate::db::Ledger;
use crate::models::{BillId, BillItem, BillSummary, Customer, CustomerId};

use super::forms::{BillForm, CustomerForm, FormFields, ItemForm};
use super::helpers::{centered_rect, format_amount, surface_error};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows given to the item pane under the bill table.
const ITEMS_PANE_HEIGHT: u16 = 9;

/// The two listings the operator switches between.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Customers,
    Bills,
}

impl Screen {
    fn index(self) -> usize {
        match self {
            Screen::Customers => 0,
            Screen::Bills => 1,
        }
    }

    fn toggled(self) -> Self {
        match self {
            Screen::Customers => Screen::Bills,
            Screen::Bills => Screen::Customers,
        }
    }
}

/// Either browsing, or one of the entry forms is open on top of the listing.
enum Mode {
    Normal,
    AddingCustomer(CustomerForm),
    AddingBill(BillForm),
    AddingItem(ItemForm),
}

/// What a keystroke did to an open form.
enum FormAction {
    Continue,
    Submit,
    Cancel,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state for the terminal front end. Listings are plain
/// snapshots; they are re-read from the ledger on every reload.
pub struct App<L: Ledger> {
    ledger: L,
    screen: Screen,
    mode: Mode,
    customers: Vec<Customer>,
    customer_selected: usize,
    bills: Vec<BillSummary>,
    bill_selected: usize,
    items: Vec<BillItem>,
    status: Option<StatusMessage>,
}

impl<L: Ledger> App<L> {
    /// Build the app and load the customer listing. A load failure is shown in
    /// the footer rather than aborting startup.
    pub fn new(ledger: L) -> Self {
        let mut app = Self {
            ledger,
            screen: Screen::Customers,
            mode: Mode::Normal,
            customers: Vec::new(),
            customer_selected: 0,
            bills: Vec::new(),
            bill_selected: 0,
            items: Vec::new(),
            status: None,
        };
        app.load_customers();
        app
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Feed one key press into the app. Returns `true` when the user asked to
    /// quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => {
                self.handle_normal_key(code, &mut exit);
                // handle_normal_key may have opened a form
                mem::replace(&mut self.mode, Mode::Normal)
            }
            Mode::AddingCustomer(form) => self.handle_add_customer(code, form),
            Mode::AddingBill(form) => self.handle_add_bill(code, form),
            Mode::AddingItem(form) => self.handle_add_item(code, form),
        };

        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.screen = self.screen.toggled();
                self.reload_current();
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Char('r') => {
                self.reload_current();
                if self.status.is_none() {
                    let message = match self.screen {
                        Screen::Customers => format!("Loaded {} customers.", self.customers.len()),
                        Screen::Bills => format!("Loaded {} bills.", self.bills.len()),
                    };
                    self.set_status(message, StatusKind::Info);
                }
            }
            KeyCode::Char('c') => {
                self.status = None;
                self.mode = Mode::AddingCustomer(CustomerForm::new());
            }
            KeyCode::Char('b') => match (self.screen, self.current_customer().cloned()) {
                (Screen::Customers, Some(customer)) => {
                    self.status = None;
                    self.mode = Mode::AddingBill(BillForm::for_customer(customer));
                }
                (Screen::Customers, None) => {
                    self.set_status("Add a customer before recording bills.", StatusKind::Error)
                }
                (Screen::Bills, _) => self.set_status(
                    "Switch to Customers and pick who the bill is for.",
                    StatusKind::Error,
                ),
            },
            KeyCode::Char('i') => match (self.screen, self.current_bill().cloned()) {
                (Screen::Bills, Some(bill)) => {
                    self.status = None;
                    self.mode = Mode::AddingItem(ItemForm::for_bill(&bill));
                }
                (Screen::Bills, None) => {
                    self.set_status("No bill selected.", StatusKind::Error)
                }
                (Screen::Customers, _) => {
                    self.set_status("Switch to Bills to add items.", StatusKind::Error)
                }
            },
            _ => {}
        }
    }

    fn handle_add_customer(&mut self, code: KeyCode, mut form: CustomerForm) -> Mode {
        match apply_form_key(&mut form.fields, code) {
            FormAction::Continue => Mode::AddingCustomer(form),
            FormAction::Cancel => {
                self.set_status("Add customer cancelled.", StatusKind::Info);
                Mode::Normal
            }
            FormAction::Submit => match self.save_customer(&form) {
                Ok(id) => {
                    self.set_status(format!("Customer saved with ID: {id}"), StatusKind::Info);
                    Mode::Normal
                }
                Err(err) => {
                    self.reject_form(&mut form.fields, &err);
                    Mode::AddingCustomer(form)
                }
            },
        }
    }

    fn handle_add_bill(&mut self, code: KeyCode, mut form: BillForm) -> Mode {
        match apply_form_key(&mut form.fields, code) {
            FormAction::Continue => Mode::AddingBill(form),
            FormAction::Cancel => {
                self.set_status("Add bill cancelled.", StatusKind::Info);
                Mode::Normal
            }
            FormAction::Submit => match self.save_bill(&form) {
                Ok(id) => {
                    self.set_status(
                        format!("Bill {id} recorded for {}.", form.customer),
                        StatusKind::Info,
                    );
                    Mode::Normal
                }
                Err(err) => {
                    self.reject_form(&mut form.fields, &err);
                    Mode::AddingBill(form)
                }
            },
        }
    }

    fn handle_add_item(&mut self, code: KeyCode, mut form: ItemForm) -> Mode {
        match apply_form_key(&mut form.fields, code) {
            FormAction::Continue => Mode::AddingItem(form),
            FormAction::Cancel => {
                self.set_status("Add item cancelled.", StatusKind::Info);
                Mode::Normal
            }
            FormAction::Submit => match self.save_item(&form) {
                Ok(()) => {
                    self.set_status(
                        format!("Item added to bill {}.", form.bill_id),
                        StatusKind::Info,
                    );
                    Mode::Normal
                }
                Err(err) => {
                    self.reject_form(&mut form.fields, &err);
                    Mode::AddingItem(form)
                }
            },
        }
    }

    fn reject_form(&mut self, fields: &mut FormFields, err: &anyhow::Error) {
        let message = surface_error(err);
        fields.error = Some(message.clone());
        self.set_status(message, StatusKind::Error);
    }

    fn save_customer(&mut self, form: &CustomerForm) -> Result<CustomerId> {
        let input = form.parse_inputs()?;
        let id = self
            .ledger
            .create_customer(&input.name, &input.address, &input.contact_info)?;
        self.load_customers();
        if let Some(idx) = self.customers.iter().position(|customer| customer.id == id) {
            self.customer_selected = idx;
        }
        Ok(id)
    }

    fn save_bill(&mut self, form: &BillForm) -> Result<BillId> {
        let (date, total) = form.parse_inputs()?;
        Ok(self.ledger.create_bill(form.customer.id, date, total)?)
    }

    fn save_item(&mut self, form: &ItemForm) -> Result<()> {
        let input = form.parse_inputs()?;
        self.ledger
            .create_bill_item(form.bill_id, &input.item_name, input.quantity, input.price)?;
        self.load_items();
        Ok(())
    }

    fn reload_current(&mut self) {
        self.status = None;
        match self.screen {
            Screen::Customers => self.load_customers(),
            Screen::Bills => self.load_bills(),
        }
    }

    fn load_customers(&mut self) {
        match self.ledger.list_customers() {
            Ok(customers) => {
                self.customers = customers;
                self.customer_selected = clamp_index(self.customer_selected, self.customers.len());
            }
            Err(err) => self.report_store_error(err.into()),
        }
    }

    fn load_bills(&mut self) {
        match self.ledger.list_bills_with_customer_names() {
            Ok(bills) => {
                self.bills = bills;
                self.bill_selected = clamp_index(self.bill_selected, self.bills.len());
                self.load_items();
            }
            Err(err) => self.report_store_error(err.into()),
        }
    }

    fn load_items(&mut self) {
        let Some(bill_id) = self.current_bill().map(|bill| bill.bill_id) else {
            self.items.clear();
            return;
        };
        match self.ledger.list_bill_items(bill_id) {
            Ok(items) => self.items = items,
            Err(err) => {
                self.items.clear();
                self.report_store_error(err.into());
            }
        }
    }

    fn report_store_error(&mut self, err: anyhow::Error) {
        self.set_status(surface_error(&err), StatusKind::Error);
    }

    fn move_selection(&mut self, delta: isize) {
        match self.screen {
            Screen::Customers => {
                self.customer_selected =
                    step_index(self.customer_selected, delta, self.customers.len());
            }
            Screen::Bills => {
                let previous = self.bill_selected;
                self.bill_selected = step_index(self.bill_selected, delta, self.bills.len());
                if previous != self.bill_selected {
                    self.load_items();
                }
            }
        }
    }

    fn current_customer(&self) -> Option<&Customer> {
        self.customers.get(self.customer_selected)
    }

    fn current_bill(&self) -> Option<&BillSummary> {
        self.bills.get(self.bill_selected)
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_tabs(frame, chunks[0]);
        match self.screen {
            Screen::Customers => self.draw_customers(frame, chunks[1]),
            Screen::Bills => self.draw_bills(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Normal => {}
            Mode::AddingCustomer(form) => {
                self.draw_form(frame, area, "New Customer".to_string(), &form.fields)
            }
            Mode::AddingBill(form) => self.draw_form(
                frame,
                area,
                format!("New Bill for {}", form.customer),
                &form.fields,
            ),
            Mode::AddingItem(form) => self.draw_form(
                frame,
                area,
                format!("Add Item to Bill {} ({})", form.bill_id, form.customer_name),
                &form.fields,
            ),
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(vec!["Customers", "Bills"])
            .select(self.screen.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_customers(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Customers");
        if self.customers.is_empty() {
            let message = Paragraph::new("No customers yet. Press 'c' to add one.").block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows = self.customers.iter().map(|customer| {
            Row::new(vec![
                customer.id.to_string(),
                customer.name.clone(),
                customer.address.clone(),
                customer.contact_info.clone(),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ],
        )
        .header(header_row(["ID", "Name", "Address", "Contact"]))
        .block(block)
        .row_highlight_style(selected_style())
        .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.customer_selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_bills(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Bills");
        if self.bills.is_empty() {
            let message = Paragraph::new("No bills yet. Pick a customer and press 'b'.").block(block);
            frame.render_widget(message, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(ITEMS_PANE_HEIGHT)])
            .split(area);

        let rows = self.bills.iter().map(|bill| {
            Row::new(vec![
                bill.bill_id.to_string(),
                bill.customer_name.clone(),
                bill.date.format("%Y-%m-%d").to_string(),
                format_amount(bill.total_amount),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(45),
                Constraint::Length(12),
                Constraint::Min(10),
            ],
        )
        .header(header_row(["Bill ID", "Customer", "Date", "Total"]))
        .block(block)
        .row_highlight_style(selected_style())
        .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.bill_selected));
        frame.render_stateful_widget(table, chunks[0], &mut state);

        self.draw_items(frame, chunks[1]);
    }

    fn draw_items(&self, frame: &mut Frame, area: Rect) {
        let title = match self.current_bill() {
            Some(bill) => format!("Items on bill {}", bill.bill_id),
            None => "Items".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        if self.items.is_empty() {
            let message = Paragraph::new("No items. Press 'i' to add one.").block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows = self.items.iter().map(|item| {
            Row::new(vec![
                item.item_name.clone(),
                item.quantity.to_string(),
                format_amount(item.price),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(60),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(header_row(["Item", "Quantity", "Price"]))
        .block(block);
        frame.render_widget(table, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        let mut push = |key: &'static str, action: &'static str| {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::raw(action));
        };

        match (&self.mode, self.screen) {
            (Mode::Normal, screen) => {
                push("[Tab]", " Switch   ");
                push("[↑↓]", " Select   ");
                push("[r]", " Reload   ");
                push("[c]", " New customer   ");
                match screen {
                    Screen::Customers => push("[b]", " New bill   "),
                    Screen::Bills => push("[i]", " Add item   "),
                }
                push("[q]", " Quit");
            }
            _ => {
                push("[Tab]", " Next field   ");
                push("[Enter]", " Save   ");
                push("[Esc]", " Cancel");
            }
        }
        Line::from(spans)
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, title: String, fields: &FormFields) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = fields.build_lines();
        lines.push(Line::from(""));
        if let Some(error) = &fields.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        // Keep the cursor inside the popup even when the text overflows it.
        let (column, row) = fields.cursor_offset();
        let column = column.min(inner.width.saturating_sub(1));
        let row = row.min(inner.height.saturating_sub(1));
        frame.set_cursor_position((
            inner.x.saturating_add(column),
            inner.y.saturating_add(row),
        ));
    }
}

/// Map a key to a form edit. Shared by all three forms.
fn apply_form_key(fields: &mut FormFields, code: KeyCode) -> FormAction {
    match code {
        KeyCode::Esc => FormAction::Cancel,
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Tab | KeyCode::Down => {
            fields.next_field();
            FormAction::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            fields.prev_field();
            FormAction::Continue
        }
        KeyCode::Backspace => {
            fields.backspace();
            FormAction::Continue
        }
        KeyCode::Char(ch) => {
            if fields.push_char(ch) {
                fields.error = None;
            }
            FormAction::Continue
        }
        _ => FormAction::Continue,
    }
}

fn header_row<const N: usize>(labels: [&'static str; N]) -> Row<'static> {
    Row::new(labels).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn clamp_index(idx: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        idx.min(len - 1)
    }
}

fn step_index(idx: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    idx.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rust_decimal::Decimal;

    use super::*;
    use crate::db::SqliteLedger;
    use crate::error::StoreError;
    use crate::models::Bill;

    fn app() -> App<SqliteLedger> {
        App::new(SqliteLedger::open_in_memory().unwrap())
    }

    fn type_text<L: Ledger>(app: &mut App<L>, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn status_text<L: Ledger>(app: &App<L>) -> &str {
        app.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }

    fn add_customer<L: Ledger>(app: &mut App<L>, name: &str, address: &str, contact: &str) {
        app.handle_key(KeyCode::Char('c'));
        type_text(app, name);
        app.handle_key(KeyCode::Tab);
        type_text(app, address);
        app.handle_key(KeyCode::Tab);
        type_text(app, contact);
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn saving_a_customer_reports_its_id() {
        let mut app = app();
        add_customer(&mut app, "Alice", "1 Main St", "555-0100");

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), "Customer saved with ID: 1");
        assert_eq!(app.customers.len(), 1);
        assert_eq!(app.customers[0].name, "Alice");
    }

    #[test]
    fn empty_field_keeps_form_open_and_writes_nothing() {
        let mut app = app();
        add_customer(&mut app, "Alice", "", "555-0100");

        match &app.mode {
            Mode::AddingCustomer(form) => {
                assert_eq!(form.fields.error.as_deref(), Some("All fields must be filled!"))
            }
            _ => panic!("form should stay open"),
        }
        assert!(app.ledger().list_customers().unwrap().is_empty());
    }

    #[test]
    fn bill_and_item_flow_through_both_screens() {
        let mut app = app();
        add_customer(&mut app, "Alice", "1 Main St", "555-0100");

        app.handle_key(KeyCode::Char('b'));
        match &mut app.mode {
            Mode::AddingBill(form) => {
                let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
                *form = BillForm::with_date(form.customer.clone(), date);
            }
            _ => panic!("bill form should be open"),
        }
        type_text(&mut app, "150.00");
        app.handle_key(KeyCode::Enter);
        assert_eq!(status_text(&app), "Bill 1 recorded for Alice.");

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.bills.len(), 1);
        assert_eq!(app.bills[0].customer_name, "Alice");

        app.handle_key(KeyCode::Char('i'));
        type_text(&mut app, "Widget");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "3");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "50.00");
        app.handle_key(KeyCode::Enter);

        assert_eq!(status_text(&app), "Item added to bill 1.");
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].item_name, "Widget");
        assert_eq!(app.bills[0].total_amount, Decimal::new(15000, 2));
    }

    #[test]
    fn bill_requires_a_customer() {
        let mut app = app();
        app.handle_key(KeyCode::Char('b'));
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), "Add a customer before recording bills.");
    }

    #[test]
    fn quit_keys_exit() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn escape_in_form_cancels_without_exiting() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        assert!(!app.handle_key(KeyCode::Esc));
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), "Add customer cancelled.");
    }

    /// Ledger double whose store is always unreachable.
    struct OfflineLedger;

    fn offline() -> StoreError {
        StoreError::unavailable(
            "failed to reach store",
            std::io::Error::new(std::io::ErrorKind::NotConnected, "connection lost"),
        )
    }

    impl Ledger for OfflineLedger {
        fn create_customer(&mut self, _: &str, _: &str, _: &str) -> Result<CustomerId, StoreError> {
            Err(offline())
        }

        fn create_bill(
            &mut self,
            _: CustomerId,
            _: NaiveDate,
            _: Decimal,
        ) -> Result<BillId, StoreError> {
            Err(offline())
        }

        fn create_bill_item(
            &mut self,
            _: BillId,
            _: &str,
            _: u32,
            _: Decimal,
        ) -> Result<(), StoreError> {
            Err(offline())
        }

        fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
            Err(offline())
        }

        fn list_bills_with_customer_names(&self) -> Result<Vec<BillSummary>, StoreError> {
            Err(offline())
        }

        fn list_bill_items(&self, _: BillId) -> Result<Vec<BillItem>, StoreError> {
            Err(offline())
        }

        fn get_bill(&self, _: BillId) -> Result<Option<Bill>, StoreError> {
            Err(offline())
        }
    }

    #[test]
    fn store_failures_surface_in_the_footer() {
        let mut app = App::new(OfflineLedger);
        assert_eq!(
            status_text(&app),
            "store unavailable: failed to reach store (connection lost)"
        );

        add_customer(&mut app, "Alice", "1 Main St", "555-0100");
        assert!(matches!(app.mode, Mode::AddingCustomer(_)));
        assert!(status_text(&app).starts_with("store unavailable"));
    }

    #[test]
    fn form_with_overlong_text_still_renders() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        type_text(&mut app, &"A".repeat(70_000));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        assert!(matches!(app.mode, Mode::AddingCustomer(_)));
    }

    #[test]
    fn customer_table_renders_rows() {
        let mut app = app();
        add_customer(&mut app, "Alice", "1 Main St", "555-0100");

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("555-0100"));
    }
}
