// src/record.rs
//
// Output data model: one listing row plus its detail view, merged into a
// twelve-column record. Column order is fixed by OUTPUT_HEADERS; the mapping
// from grid cells to RowFields is positional and lives in grid.rs.

/// Header row, written once per output file before any row processing.
pub const OUTPUT_HEADERS: [&str; 12] = [
    "Full Name",
    "Alternative Name",
    "Greek Name",
    "Phone",
    "Fax",
    "Court Deposit Box",
    "Province",
    "Address",
    "Postal Code",
    "Email",
    "URL",
    "Mobile",
];

/// The six text cells read off a listing row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowFields {
    pub full_name: String,
    pub greek_name: String,
    pub phone: String,
    pub fax: String,
    pub court_box: String,
    pub province: String,
}

/// The six input-control values read off the detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub alternative_name: String,
    pub address: String,
    pub postal_code: String,
    pub email: String,
    pub url: String,
    pub mobile: String,
}

/// Union of a listing row and its detail record. Append-only output; no
/// identity beyond the merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LawyerRecord {
    pub row: RowFields,
    pub details: DetailFields,
}

impl LawyerRecord {
    pub fn merge(row: RowFields, details: DetailFields) -> Self {
        Self { row, details }
    }

    pub fn headers() -> Vec<String> {
        OUTPUT_HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Cells in OUTPUT_HEADERS order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.row.full_name.clone(),
            self.details.alternative_name.clone(),
            self.row.greek_name.clone(),
            self.row.phone.clone(),
            self.row.fax.clone(),
            self.row.court_box.clone(),
            self.row.province.clone(),
            self.details.address.clone(),
            self.details.postal_code.clone(),
            self.details.email.clone(),
            self.details.url.clone(),
            self.details.mobile.clone(),
        ]
    }
}
