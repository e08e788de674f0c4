use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use tubig::{
    core::{Classification, PenaltyPolicy, Settlement, TariffBook},
    fmt::{FormattedPercentage, format_currency},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_tariff_table(book: &TariffBook) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Classification", "Source", "Minimum", "Flat", "Tier 1", "Rate", "Tier 2"]);
    for classification in Classification::ALL {
        let schedule = book.schedule_for(classification);
        table.add_row(vec![
            Cell::new(classification),
            if book.get(classification).is_some() {
                Cell::new("settings").fg(Color::Green)
            } else {
                Cell::new("built-in").add_attribute(Attribute::Dim)
            },
            Cell::new(schedule.min_consumption).set_alignment(CellAlignment::Right),
            Cell::new(format_currency(schedule.min_rate)).set_alignment(CellAlignment::Right),
            Cell::new(format!("≤ {}", schedule.tier1_limit)).set_alignment(CellAlignment::Right),
            Cell::new(schedule.tier1_rate).set_alignment(CellAlignment::Right),
            Cell::new(schedule.tier2_rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_penalty_table(policy: &PenaltyPolicy) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Per month", "Maximum", "Maximum months"]);
    table.add_row(vec![
        Cell::new(FormattedPercentage(policy.rate_per_month)),
        Cell::new(FormattedPercentage(policy.max_rate)),
        Cell::new(policy.max_months),
    ]);
    table
}

pub fn build_settlement_table(settlement: &Settlement) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Invoice", "Due", "Amount", "Months", "Rate", "Penalty", "Total"]);
    for line in &settlement.lines {
        table.add_row(vec![
            Cell::new(&line.invoice_id),
            Cell::new(line.due_date.format("%b %d, %Y")).add_attribute(Attribute::Dim),
            Cell::new(format_currency(line.principal)).set_alignment(CellAlignment::Right),
            Cell::new(line.penalty.months).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(line.penalty.rate)).set_alignment(CellAlignment::Right),
            Cell::new(format_currency(line.penalty.amount))
                .set_alignment(CellAlignment::Right)
                .fg(if line.penalty.months == 0 { Color::Green } else { Color::Red }),
            Cell::new(format_currency(line.total())).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(settlement.payment_date.format("%b %d, %Y")),
        Cell::new(format_currency(settlement.principal)).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format_currency(settlement.penalties)).set_alignment(CellAlignment::Right),
        Cell::new(format_currency(settlement.total))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}
