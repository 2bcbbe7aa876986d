//! Core types: link matches and payroll summary records
//!
//! [`PayrollLink`] is produced by the link selector and consumed by the
//! crawler. The remaining types are flat value records describing payroll
//! data per state, agency and employee; they carry no behavior and exist
//! for the downstream aggregation step that consumes this crate's output.

use serde::{Deserialize, Serialize};

/// A payroll file link found on the listing page
///
/// Derived from an anchor element inside a period container; never stored,
/// it only exists as the result of a selection over one parsed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLink {
    /// Target URL of the anchor (the PDF location)
    pub href: String,
    /// Visible text of the anchor
    pub label: String,
}

/// A state and the agencies it contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Full state name
    pub name: String,
    /// Two-letter state abbreviation
    pub short_name: String,
    /// URL of the state flag image
    pub flag_url: String,
    /// Agencies publishing payroll data in this state
    pub agencies: Vec<AgencyBasic>,
}

/// Basic information about an agency (name and category)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyBasic {
    /// Agency name
    pub name: String,
    /// Agency category (e.g. judiciary, public ministry)
    pub agency_category: String,
}

/// An employee and their salary information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee name
    pub name: String,
    /// Base wage
    pub wage: f64,
    /// Perks and benefits
    pub perks: f64,
    /// Other remuneration
    pub others: f64,
    /// Total remuneration
    pub total: f64,
}

/// Aggregated summary of one agency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencySummary {
    /// Number of employees included in the summary
    pub total_employees: u32,
    /// Sum of base wages
    pub total_wage: f64,
    /// Sum of perks
    pub total_perks: f64,
    /// Highest individual wage
    pub max_wage: f64,
}

/// Totals for an agency across one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyTotalsYear {
    /// Reference year
    pub year: i32,
    /// Per-month totals for that year
    pub month_totals: Vec<MonthTotals>,
}

/// Detailed totals of one month (wage, perks, others)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Reference month (1-12)
    pub month: u32,
    /// Sum of base wages
    pub wage: f64,
    /// Sum of perks
    pub perks: f64,
    /// Sum of other remuneration
    pub others: f64,
}
