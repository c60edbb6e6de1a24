use std::path::Path;

use tabmerge_core::{DocumentSet, MatchSet, Table};

pub fn format_numbers(n: usize) -> String {
    match n {
        n if n > 1_000_000_000 => format!("{:0.1}B", n as f64 / 1_000_000_000.0),
        n if n > 1_000_000 => format!("{:0.1}M", n as f64 / 1_000_000.0),
        n if n > 1_000 => format!("{:0.1}K", n as f64 / 1_000.0),
        _ => n.to_string(),
    }
}

/// Human-readable progress and summaries on standard output.
pub struct StdOutFormatter {
    intro: String,
}

impl StdOutFormatter {
    pub fn new(version: &str) -> Self {
        Self {
            intro: format!("tabmerge v{}", version),
        }
    }

    pub fn print_intro(&self) {
        println!("{}", self.intro);
        println!("{}", "=".repeat(self.intro.len()));
    }

    pub fn print_loading_progress(&self, current: usize, total: usize, path: &Path) {
        println!("  [{}/{}] {}", current, total, path.display());
    }

    pub fn print_filter(&self, filter: &MatchSet) {
        if filter.is_empty() {
            println!("Filter: none (every row kept)");
            return;
        }
        println!("Filter:");
        for (column, rule) in filter.get_rules() {
            println!("  {} -> {}", column, rule);
        }
    }

    pub fn print_documents_summary(&self, docs: &DocumentSet, output: Option<&Path>) {
        let meta = docs.meta();
        println!(
            "\n{} documents, {} columns",
            format_numbers(meta.count),
            meta.columns.len()
        );
        if let Some(output) = output {
            println!("Written to {}", output.display());
        }
    }

    pub fn print_table_summary(&self, table: &Table, files: usize) {
        println!(
            "\nMerged {} file(s): {} rows",
            files,
            format_numbers(table.len())
        );
        if !table.columns().is_empty() {
            println!("Columns: {}", table.columns().join(", "));
        }
    }
}

#[cfg(test)]
mod test {
    use super::format_numbers;

    #[test]
    fn test_format_b() {
        assert_eq!(format_numbers(2_736_123_123), "2.7B");
    }

    #[test]
    fn test_format_m() {
        assert_eq!(format_numbers(2_336_123), "2.3M");
    }

    #[test]
    fn test_format_k() {
        assert_eq!(format_numbers(4_536), "4.5K");
    }

    #[test]
    fn test_format() {
        assert_eq!(format_numbers(789), "789");
    }
}
