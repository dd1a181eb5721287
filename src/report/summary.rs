//! Run summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::GenerationRequest;

/// Summary of one generation run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub codes_generated: usize,
    pub code_length: usize,
    pub pool_size: usize,
    pub distinct_pool_size: usize,
    pub encoding: &'static str,
    pub output_path: PathBuf,
    pub generation_time: Duration,
}

impl RunSummary {
    pub fn new(
        request: &GenerationRequest,
        codes_generated: usize,
        output_path: PathBuf,
        generation_time: Duration,
    ) -> Self {
        Self {
            codes_generated,
            code_length: request.code_length,
            pool_size: request.pool.len(),
            distinct_pool_size: request.pool.distinct_len(),
            encoding: request.encoding.name(),
            output_path,
            generation_time,
        }
    }

    /// Build the summary table
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Codes generated"),
            Cell::new(self.codes_generated)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("Code length"), Cell::new(self.code_length)]);

        let pool = if self.pool_size == self.distinct_pool_size {
            self.pool_size.to_string()
        } else {
            format!("{} ({} distinct)", self.pool_size, self.distinct_pool_size)
        };
        table.add_row(vec![Cell::new("Character pool"), Cell::new(pool)]);
        table.add_row(vec![Cell::new("Encoding"), Cell::new(self.encoding)]);
        table.add_row(vec![
            Cell::new("Output file"),
            Cell::new(self.output_path.display()),
        ]);
        table.add_row(vec![
            Cell::new("Generation time"),
            Cell::new(format!("{:.2}s", self.generation_time.as_secs_f64())),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CharacterPool, TextEncoding};

    fn request(pool: &str) -> GenerationRequest {
        GenerationRequest {
            code_count: 4,
            code_length: 6,
            pool: CharacterPool::from(pool),
            output_file_name: "codes.csv".to_string(),
            encoding: TextEncoding::Windows1250,
        }
    }

    #[test]
    fn test_summary_table_rows() {
        let summary = RunSummary::new(
            &request("ABC"),
            4,
            PathBuf::from("/tmp/codes.csv"),
            Duration::from_millis(1500),
        );
        let rendered = summary.table().to_string();
        assert!(rendered.contains("Codes generated"));
        assert!(rendered.contains("Windows-1250"));
        assert!(rendered.contains("/tmp/codes.csv"));
        assert!(rendered.contains("1.50s"));
    }

    #[test]
    fn test_summary_shows_distinct_pool_size() {
        let summary = RunSummary::new(&request("AAB"), 4, PathBuf::from("x.csv"), Duration::ZERO);
        assert!(summary.table().to_string().contains("3 (2 distinct)"));
    }
}
