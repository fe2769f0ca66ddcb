//! Plain-text rendering of the list screen

use roster_controller::{DisplayState, SortDirection};
use roster_core::{User, UserField};
use std::fmt::Write;

const LOADING_MESSAGE: &str = "Loading users...";
const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
const EMPTY_MESSAGE: &str = "No users found.";

const COLUMNS: [(&str, UserField); 5] = [
    ("FIRST NAME", UserField::FirstName),
    ("LAST NAME", UserField::LastName),
    ("EMAIL", UserField::Email),
    ("CITY", UserField::City),
    ("CREATED", UserField::CreatedAt),
];

/// Render the table area: an indicator, or the rows in display order
pub fn render_list(
    state: DisplayState,
    users: &[&User],
    sort: Option<(UserField, SortDirection)>,
) -> String {
    match state {
        DisplayState::Loading => format!("{}\n", LOADING_MESSAGE),
        DisplayState::Error => format!("{}\n", ERROR_MESSAGE),
        DisplayState::Empty => format!("{}\n", EMPTY_MESSAGE),
        DisplayState::Table => render_table(users, sort),
    }
}

fn render_table(users: &[&User], sort: Option<(UserField, SortDirection)>) -> String {
    let rows: Vec<Vec<&str>> = users
        .iter()
        .map(|user| {
            std::iter::once(user.id.as_str())
                .chain(
                    COLUMNS
                        .iter()
                        .map(|(_, field)| user.field_value(*field).unwrap_or("")),
                )
                .collect()
        })
        .collect();

    let header: Vec<&str> = std::iter::once("ID")
        .chain(COLUMNS.iter().map(|(title, _)| *title))
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(title.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    if let Some((field, direction)) = sort {
        let _ = writeln!(out, "\nSorted by {} ({})", field, direction);
    }
    let _ = writeln!(out, "{} user(s)", users.len());
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Render the info panel for one record
pub fn render_user(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", user.full_name());
    let _ = writeln!(out, "  id:       {}", user.id);
    let _ = writeln!(out, "  email:    {}", user.email);
    let _ = writeln!(out, "  phone:    {}", user.phone_number);

    if let Some(address) = &user.address {
        let _ = writeln!(
            out,
            "  address:  {} {}, {}, {}",
            address.street_number, address.street, address.city, address.country
        );
    }
    if let Some(created_at) = &user.created_at {
        let _ = writeln!(out, "  created:  {}", created_at);
    }
    if let Some(updated_at) = &user.updated_at {
        let _ = writeln!(out, "  updated:  {}", updated_at);
    }
    out
}
