use std::path::Path;

use console::Style;
use orchard_core::prediction::Prediction;
use orchard_core::session::{ResultRow, Session};

const BAR_WIDTH: usize = 30;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    active: Style,
    inactive: Style,
    disabled: Style,
    path: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            active: Style::new().green().bold(),
            inactive: Style::new().dim(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            error: Style::new().red().bold(),
        }
    }
}

fn bar(row: &ResultRow) -> String {
    let filled = (row.fill_fraction() * BAR_WIDTH as f32).round() as usize;
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

fn print_rows(s: &Styles, session: &Session) {
    for row in session.rows() {
        let style = if row.is_active() { &s.active } else { &s.inactive };
        println!(
            "    {:<14}{} {:>4}",
            style.apply_to(&row.label),
            style.apply_to(bar(row)),
            style.apply_to(row.percent_text())
        );
    }
}

pub fn print_labels(session: &Session) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Model Labels"));
    println!();
    for (i, label) in session.labels().iter().enumerate() {
        println!("    {:>3}  {}", s.label.apply_to(i + 1), s.value.apply_to(label));
    }
    if session.uses_fallback_labels() {
        println!();
        println!(
            "  {}",
            s.disabled
                .apply_to("Model reported no labels, showing the fallback set")
        );
    }
    println!();
}

pub fn print_detection(path: &Path, session: &Session) {
    let s = Styles::new();
    let summary = session.summary();

    println!();
    println!("  {}", s.path.apply_to(path.display()));
    print_rows(&s, session);
    println!(
        "    {:<14}{}",
        s.label.apply_to("Result"),
        s.value.apply_to(&summary.label)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to(""),
        s.active.apply_to(&summary.caption)
    );
}

pub fn print_failure(path: &Path, error: &anyhow::Error) {
    let s = Styles::new();
    println!();
    println!("  {}", s.path.apply_to(path.display()));
    println!("    {} {:#}", s.error.apply_to("error:"), error);
}

pub fn print_predictions(name: &str, predictions: &[Prediction]) {
    let s = Styles::new();

    println!();
    println!("  {} {}", s.title.apply_to("Raw predictions"), s.path.apply_to(name));
    println!();
    for (i, p) in predictions.iter().enumerate() {
        println!(
            "    [{}] {:<14}{}",
            i,
            s.label.apply_to(&p.label),
            s.value.apply_to(format!("{:.6}", p.probability))
        );
    }
    println!();
}
