//! Rule tables shared by the claim extraction pipeline.

pub mod amounts;
pub mod patterns;

pub use amounts::{format_grouped, parse_row_amount};
pub use patterns::*;

/// Generic noise tokens rejected as field values (compared lower-cased).
pub const VALUE_STOPLIST: &[&str] = &[
    "of",
    "the",
    "of the",
    "name",
    "aadhar holder",
    "n",
    "claim",
    "-",
    "not mentioned",
    "rs",
    "no",
    "number",
    "date",
    "place",
    "contact",
    "address",
    "gender",
    "age",
    "mobile",
    "email",
    "phone",
    "details",
    "birth",
    "ion",
    "occu",
    "na",
    "nil",
];

/// Fields that receive the "Rs. " currency prefix when their value is
/// numeric (compared lower-cased).
pub const MONEY_FIELDS: &[&str] = &[
    "estimated cost of repairs",
    "total repair cost",
    "repair estimate",
    "amount claimed",
    "claim amount",
    "sum insured",
    "approved amount",
    "depreciation amount",
];

/// Markers identifying fields whose values hold raw tabular blocks; tested
/// by substring against the configured field name.
pub const RAW_BLOCK_MARKERS: &[&str] = &[
    "Bill Breakup Details Raw",
    "Medication Details Raw",
    "Repair Items Raw",
    "Loss Details Raw",
    "Cost Details Raw",
];

/// Questionnaire-backed fields surfaced in the report preamble, not in
/// section bodies.
pub const QUESTIONNAIRE_FIELDS: &[&str] = &[
    "FIR Status",
    "Hospital Type Network",
    "Cashless Facility Availed",
    "Claim Type",
];
