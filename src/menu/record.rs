//! The masked customer record shown by `Display Info`.

use std::io::{self, Write};

use serde::Serialize;

/// Header line printed above the record.
pub const RECORD_HEADER: &str = "--- Customer Information ---";

/// One labelled line of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordField {
    pub label: &'static str,
    pub value: &'static str,
}

impl RecordField {
    const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Fixed, already-masked customer record. Not backed by any real data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    fields: [RecordField; 10],
}

impl CustomerRecord {
    /// The only record the console ever shows.
    #[must_use]
    pub const fn masked() -> Self {
        Self {
            fields: [
                RecordField::new("Customer Name", "[REDACTED]"),
                RecordField::new("Account Number", "****12345"),
                RecordField::new("Status", "Active"),
                RecordField::new("Balance", "$****"),
                RecordField::new("Last Transaction", "[REDACTED]"),
                RecordField::new("Email", "[REDACTED]"),
                RecordField::new("Phone", "[REDACTED]"),
                RecordField::new("Preferred Contact", "Email"),
                RecordField::new("Membership Tier", "Gold"),
                RecordField::new("Notes", "Verified identity; no outstanding issues."),
            ],
        }
    }

    /// Fields in display order.
    #[must_use]
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Write the header and every field, one per line.
    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{RECORD_HEADER}")?;
        for field in &self.fields {
            writeln!(writer, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

impl Default for CustomerRecord {
    fn default() -> Self {
        Self::masked()
    }
}
