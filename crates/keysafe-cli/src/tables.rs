use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use keysafe_cli::report::{AccountRow, SummaryReport, TransactionRow};
use keysafe_model::Decimal;

pub fn print_onboarding() {
    println!("No accounts configured yet. Create or import a key to get started.");
}

pub fn print_summary(report: &SummaryReport) {
    let wallet = &report.wallet;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![label_cell("Account"), Cell::new(wallet.address.as_str())]);
    table.add_row(vec![label_cell("Name"), optional_cell(wallet.name.as_deref())]);
    let keyring = if wallet.imported {
        Cell::new(format!("{} (imported)", wallet.keyring_type)).fg(Color::Yellow)
    } else {
        Cell::new(&wallet.keyring_type)
    };
    table.add_row(vec![label_cell("Keyring"), keyring]);
    table.add_row(vec![label_cell("Balance"), ether_cell(wallet.balance_ether.as_ref())]);
    if let Some(fiat) = &wallet.balance_fiat {
        let currency = wallet.current_currency.as_deref().unwrap_or("fiat");
        table.add_row(vec![
            label_cell("Balance (fiat)"),
            Cell::new(format!("{fiat} {}", currency.to_uppercase())),
        ]);
    }
    table.add_row(vec![label_cell("Network"), optional_cell(report.network.as_deref())]);

    match &wallet.selected_token {
        Some(token) => {
            table.add_row(vec![
                label_cell("Token"),
                Cell::new(format!("{} ({})", token.symbol, token.address)),
            ]);
            table.add_row(vec![
                label_cell("Token rate"),
                Cell::new(&wallet.token_exchange_rate),
            ]);
            let currency = wallet.current_currency.as_deref().unwrap_or("fiat");
            table.add_row(vec![
                label_cell("Token value"),
                Cell::new(format!("{} {}", wallet.token_to_fiat_rate, currency.to_uppercase())),
            ]);
        }
        None => {
            table.add_row(vec![label_cell("Token"), dim_cell("native asset")]);
        }
    }

    table.add_row(vec![
        label_cell("Accounts"),
        Cell::new(report.account_count),
    ]);
    table.add_row(vec![
        label_cell("Pending"),
        count_cell(report.pending_count, Color::Yellow),
    ]);
    if let Some(send) = &report.send {
        let from = send.from.as_deref().unwrap_or("-");
        let amount = send.amount.as_deref().unwrap_or("-");
        let mode = if send.max_mode { " (max)" } else { "" };
        table.add_row(vec![
            label_cell("Send draft"),
            Cell::new(format!("{amount}{mode} from {from}")),
        ]);
    }
    if wallet.beta_ui_eligible {
        table.add_row(vec![
            label_cell("Beta UI"),
            Cell::new("eligible").fg(Color::Green),
        ]);
    }
    println!("{table}");
}

pub fn print_accounts(rows: &[AccountRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Address"),
        header_cell("Name"),
        header_cell("Balance (ETH)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        let marker = if row.selected {
            Cell::new("*").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            marker,
            Cell::new(&row.address),
            optional_cell(row.name.as_deref()),
            ether_cell(row.balance_ether.as_ref()),
        ]);
    }
    println!("{table}");
}

pub fn print_transactions(rows: &[TransactionRow]) {
    if rows.is_empty() {
        println!("No pending signature requests.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Created"),
        header_cell("To"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let created = match &row.created {
            Some(created) => Cell::new(created),
            None => Cell::new(row.time),
        };
        table.add_row(vec![
            Cell::new(&row.id),
            created,
            optional_cell(row.to.as_deref()),
            optional_cell(row.status.as_deref()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn ether_cell(value: Option<&Decimal>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}
