//! Drives a grid over synthetic rows and prints the windowed read model.
//!
//! Run with `cargo run --example grid_demo`.

use datagrid::column::Column;
use datagrid::column::ColumnKind;
use datagrid::config::GridOptions;
use datagrid::config::SelectionOptions;
use datagrid::events::GridEvent;
use datagrid::grid::DataGrid;
use datagrid::row::RowId;
use datagrid::selection::SelectionMode;

struct Employee {
    id: i64,
    name: String,
    department: &'static str,
    salary: f64,
}

fn employees() -> Vec<Employee> {
    let departments = ["engineering", "design", "sales", "support"];
    (0..500)
        .map(|i| Employee {
            id: i,
            name: format!("employee-{i:03}"),
            department: departments[i as usize % departments.len()],
            salary: 40_000.0 + (i as f64 * 137.0) % 60_000.0,
        })
        .collect()
}

fn main() {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("logger");

    let columns = vec![
        Column::new("name", |e: &Employee| e.name.clone().into()),
        Column::new("department", |e: &Employee| e.department.into()),
        Column::new("salary", |e: &Employee| e.salary.into()).kind(ColumnKind::Currency),
    ];
    let rows = employees();

    let mut grid = DataGrid::with_options(
        columns,
        GridOptions {
            row_height: 24,
            container_height: 240,
            overscan: 2,
            selection: SelectionOptions {
                mode: SelectionMode::Multi,
                ..Default::default()
            },
            ..Default::default()
        },
    )
    .expect("unique column ids")
    .with_row_id(|e, _| RowId::Int(e.id));

    grid.handle_event(
        &rows,
        GridEvent::SetFilters {
            filters: vec![datagrid::pipeline::Filter::new("department", "engineering")],
        },
    );
    grid.handle_event(
        &rows,
        GridEvent::SortClick {
            column: "salary".into(),
            additive: false,
        },
    );
    grid.handle_event(&rows, GridEvent::Scroll { scroll_top: 480 });
    grid.handle_event(
        &rows,
        GridEvent::SelectRow {
            id: RowId::Int(0),
            selected: true,
        },
    );

    let model = grid.view(&rows);
    println!(
        "\n{} engineers, window [{}..{}), spacer {}px of {}px total\n",
        model.processed_count,
        model.start_index,
        model.start_index + model.rows.len(),
        model.offset_top,
        model.total_height,
    );
    for row in &model.rows {
        println!(
            "{} {:<14} {:>10.2}  {}",
            if row.selected { "[x]" } else { "[ ]" },
            row.row.name,
            row.row.salary,
            row.row.department,
        );
    }
}
