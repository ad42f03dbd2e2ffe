use crate::domain::model::{OutputFormat, SearchBound, Triplet, TripletRow};
use crate::utils::error::Result;
use chrono::Utc;
use serde::Serialize;

const TEXT_HEADERS: [&str; 6] = ["Nr", "x", "y", "z", "Summe", "Produkt"];

/// Search results ready for display, with derived columns filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripletTable {
    max_sum: SearchBound,
    rows: Vec<TripletRow>,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    max_sum: u64,
    count: usize,
    generated_at: String,
    triplets: &'a [TripletRow],
}

impl TripletTable {
    pub fn new(max_sum: SearchBound, triplets: &[Triplet]) -> Self {
        let rows = triplets
            .iter()
            .enumerate()
            .map(|(i, t)| TripletRow::new(i + 1, t))
            .collect();
        Self { max_sum, rows }
    }

    pub fn max_sum(&self) -> SearchBound {
        self.max_sum
    }

    pub fn rows(&self) -> &[TripletRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Csv => self.to_delimited(b','),
            OutputFormat::Tsv => self.to_delimited(b'\t'),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Right-aligned columns, one row per triplet.
    pub fn to_text(&self) -> String {
        let cells: Vec<[String; 6]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.index.to_string(),
                    r.x.to_string(),
                    r.y.to_string(),
                    r.z.to_string(),
                    r.sum.to_string(),
                    r.product.to_string(),
                ]
            })
            .collect();

        let mut widths = TEXT_HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let line = |values: &[&str]| -> String {
            values
                .iter()
                .zip(widths)
                .map(|(v, w)| format!("{:>w$}", v, w = w))
                .collect::<Vec<_>>()
                .join("  ")
        };

        let mut out = line(&TEXT_HEADERS);
        out.push('\n');
        for row in &cells {
            let refs: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&line(&refs));
            out.push('\n');
        }
        out
    }

    fn to_delimited(&self, delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());
        if self.rows.is_empty() {
            writer.write_record(["index", "x", "y", "z", "sum", "product"])?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn to_json(&self) -> Result<String> {
        let export = JsonExport {
            max_sum: self.max_sum.get(),
            count: self.rows.len(),
            generated_at: Utc::now().to_rfc3339(),
            triplets: &self.rows,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::triplets::find_triplets;

    fn table(max_sum: u64) -> TripletTable {
        TripletTable::new(SearchBound::new(max_sum).unwrap(), &find_triplets(max_sum))
    }

    #[test]
    fn test_rows_are_one_based_with_derived_values() {
        let t = table(30);
        let rows = t.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].index, 1);
        assert_eq!((rows[0].sum, rows[0].product), (12, 60));
        assert_eq!(rows[2].index, 3);
        assert_eq!((rows[2].x, rows[2].y, rows[2].z), (6, 8, 10));
        assert_eq!(rows[2].product, 480);
    }

    #[test]
    fn test_text_layout() {
        let text = table(12).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Nr  x  y  z  Summe  Produkt");
        assert_eq!(lines[1], " 1  3  4  5     12       60");
    }

    #[test]
    fn test_csv_and_tsv() {
        let t = table(24);
        let csv = t.render(OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "index,x,y,z,sum,product\n1,3,4,5,12,60\n2,6,8,10,24,480\n"
        );
        let tsv = t.render(OutputFormat::Tsv).unwrap();
        assert!(tsv.starts_with("index\tx\ty\tz\tsum\tproduct\n"));
        assert!(tsv.contains("2\t6\t8\t10\t24\t480"));
    }

    #[test]
    fn test_empty_csv_keeps_header() {
        let csv = table(5).render(OutputFormat::Csv).unwrap();
        assert_eq!(csv, "index,x,y,z,sum,product\n");
    }

    #[test]
    fn test_json_export() {
        let json = table(30).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["max_sum"], 30);
        assert_eq!(value["count"], 3);
        assert_eq!(value["triplets"][1]["y"], 12);
        assert!(value["generated_at"].is_string());
    }
}
