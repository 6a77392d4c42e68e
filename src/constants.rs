//! Application constants for the sensor processor
//!
//! File names, column names, the status threshold and output naming
//! conventions shared by every pipeline stage.

// =============================================================================
// Files
// =============================================================================

/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "test_data.csv";

/// Log file, truncated on every run
pub const DEFAULT_LOG_FILE: &str = "proc.log";

/// Output directory used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Field separator of the input file
pub const INPUT_SEPARATOR: u8 = b';';

/// Cell contents read as a missing value, alongside an empty cell
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Field separator of the CSV export
pub const OUTPUT_SEPARATOR: u8 = b',';

/// `strftime` pattern for the stem shared by both output files
pub const OUTPUT_STEM_FORMAT: &str = "%H_%M_%S_%d%m%Y";

pub const CSV_EXTENSION: &str = "csv";
pub const JSON_EXTENSION: &str = "json";

// =============================================================================
// Columns
// =============================================================================

/// Raw measurement and ordering columns expected in the input
pub mod columns {
    pub const TEMPERATURE: &str = "temperature";
    pub const UTILIZATION: &str = "utilization";
    pub const TIMESTAMP: &str = "timestamp";

    pub const TEMPERATURE_MIN: &str = "temperature_min";
    pub const TEMPERATURE_MAX: &str = "temperature_max";
    pub const TEMPERATURE_MEAN: &str = "temperature_mean";

    pub const UTILIZATION_MIN: &str = "utilization_min";
    pub const UTILIZATION_MAX: &str = "utilization_max";
    pub const UTILIZATION_MEAN: &str = "utilization_mean";

    pub const STATUS: &str = "status";
}

// =============================================================================
// Classification
// =============================================================================

/// Fraction of the peak utilization added to each mean before comparison
pub const WARNING_THRESHOLD: f64 = 0.3;

pub const STATUS_OK: &str = "OK";
pub const STATUS_WARNING: &str = "WARNING";
