// src/table/locate.rs

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use super::{Header, RawTable};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector should parse")
}

/// Parse `bytes` as HTML and lift the first `<table>` into a [`RawTable`].
/// Returns `None` when the document has no table at all.
pub fn extract_first_table(bytes: &[u8]) -> Option<RawTable> {
    let text = String::from_utf8_lossy(bytes);
    let doc = Html::parse_document(&text);
    let table = doc.select(&selector("table")).next()?;
    Some(read_table(table))
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let cell_sel = selector("th, td");

    let mut head_rows: Vec<Vec<(String, usize)>> = table
        .select(&selector("thead > tr"))
        .map(|tr| tr.select(&cell_sel).map(|c| (cell_text(c), colspan(c))).collect())
        .collect();

    let mut body_rows = Vec::new();
    for tr in table.select(&selector("tbody > tr")) {
        if has_class(tr, "thead") {
            trace!("skipping in-body header row");
            continue;
        }
        let mut row = Vec::new();
        for cell in tr.select(&cell_sel) {
            let text = cell_text(cell);
            row.push(if text.is_empty() { None } else { Some(text) });
            for _ in 1..colspan(cell) {
                row.push(None);
            }
        }
        body_rows.push(row);
    }

    // Tables without a <thead> carry their labels in the first body row.
    if head_rows.is_empty() && !body_rows.is_empty() {
        let first = body_rows.remove(0);
        head_rows.push(
            first
                .into_iter()
                .map(|c| (c.unwrap_or_default(), 1))
                .collect(),
        );
    }

    let header = match head_rows.len() {
        0 => Header::Flat(Vec::new()),
        1 => Header::Flat(expand_labels(&head_rows[0])),
        n => {
            let labels = expand_labels(&head_rows[n - 1]);
            let mut groups = expand_groups(&head_rows[n - 2]);
            groups.resize(labels.len(), String::new());
            Header::Grouped { groups, labels }
        }
    };

    RawTable {
        header,
        rows: body_rows,
    }
}

/// Label row: a spanning label occupies its first column, the rest are blank.
fn expand_labels(cells: &[(String, usize)]) -> Vec<String> {
    let mut out = Vec::new();
    for (label, span) in cells {
        out.push(label.clone());
        out.extend(std::iter::repeat(String::new()).take(span - 1));
    }
    out
}

/// Group row: a spanning label covers every column under it.
fn expand_groups(cells: &[(String, usize)]) -> Vec<String> {
    cells
        .iter()
        .flat_map(|(label, span)| std::iter::repeat(label.clone()).take(*span))
        .collect()
}

fn cell_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn colspan(el: ElementRef<'_>) -> usize {
    el.value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .map_or(false, |c| c.split_whitespace().any(|c| c == class))
}
