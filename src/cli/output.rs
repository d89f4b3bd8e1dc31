use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::errors::Result;
use crate::core::services::pagination::{Page, PageMarker, page_window};

/// Page numbers shown in the selector under a table.
const VISIBLE_PAGES: usize = 5;

/// Print a success message.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a secondary hint line.
pub fn info(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header line.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("  {} [y/N]: ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// `Displaying 9 - 16 of 21` plus a page selector when there is more
/// than one page.
pub fn page_footer<T>(page: &Page<'_, T>) {
    let first = if page.is_empty() { 0 } else { page.offset() + 1 };
    let last = page.offset() + page.items.len();
    println!(
        "\n  {}",
        format!("Displaying {first} - {last} of {}", page.total_items).dimmed()
    );

    if page.total_pages > 1 {
        let markers: Vec<String> = page_window(page.number, page.total_pages, VISIBLE_PAGES)
            .into_iter()
            .map(|m| match m {
                PageMarker::Number(n) if n == page.number => format!("[{n}]").bold().to_string(),
                PageMarker::Number(n) => n.to_string(),
                PageMarker::Ellipsis => "…".to_string(),
            })
            .collect();
        println!(
            "  Page {} of {}   {}",
            page.number,
            page.total_pages,
            markers.join(" ")
        );
    }
}
