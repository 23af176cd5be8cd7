//! Column labels of the uploaded student roster.
//!
//! The labels are fixed by the upstream administration export; the pipeline
//! matches them verbatim, including spacing and casing.

/// Required column holding the student's given name.
pub const GIVEN_NAME: &str = "GivenName";

/// Required column holding the student's family name.
pub const FAMILY_NAME: &str = "FamilyName";

/// Columns that must be present before any row processing runs.
pub const REQUIRED_COLUMNS: [&str; 2] = [GIVEN_NAME, FAMILY_NAME];

/// Columns dropped from the table when present. Absence is not an error.
pub const EXCLUDED_COLUMNS: [&str; 3] = ["IdentifierCode", "EnrollmentStatus", "TeachingOrg"];
