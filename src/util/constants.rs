// SkinConsult - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SkinConsult";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SkinConsult";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog source
// =============================================================================

/// Catalog file looked up in the working directory when neither the CLI nor
/// config.toml names one.
pub const DEFAULT_CATALOG_FILE_NAME: &str = "indian_skincare_dataset.csv";

/// Header of the product display name column.
pub const COLUMN_PRODUCT: &str = "Product";

/// Header of the compatible skin types column.
pub const COLUMN_SKIN_TYPE: &str = "Skin type";

/// Header of the addressed concerns column.
pub const COLUMN_CONCERN: &str = "Concern";

/// Header of the product image reference column.
pub const COLUMN_PRODUCT_PIC: &str = "product_pic";

/// Header of the product detail link column.
pub const COLUMN_PRODUCT_URL: &str = "product_url";

/// Maximum catalog file size in bytes. Checked before the file is read.
pub const MAX_CATALOG_FILE_SIZE: u64 = 32 * 1024 * 1024; // 32 MiB

/// Maximum number of data rows accepted from a catalog.
pub const MAX_CATALOG_ROWS: usize = 100_000;

// =============================================================================
// Classification keywords (first matching group wins)
// =============================================================================

/// Name fragments marking a cleansing product.
pub const CLEANSE_KEYWORDS: &[&str] = &["wash", "cleanser", "soap"];

/// Name fragments marking a treatment product.
pub const TREAT_KEYWORDS: &[&str] = &["serum", "gel", "tonic", "oil"];

/// Name fragments marking a moisturiser.
pub const MOISTURIZE_KEYWORDS: &[&str] = &["cream", "moisturizer", "lotion"];

/// Name fragments marking sun protection.
pub const PROTECT_KEYWORDS: &[&str] = &["sunscreen", "spf"];

// =============================================================================
// Interactive session
// =============================================================================

/// Longest exclusion term accepted at the interactive prompt.
pub const MAX_EXCLUSION_TERM_LEN: usize = 200;

// =============================================================================
// Presentation text
// =============================================================================

/// Intro line printed above the routine.
pub const INTRO_CAPTION: &str =
    "Complete your profile to generate your professional 24-hour routine.";

/// Footer line printed below the routine.
pub const FOOTER_CAPTION: &str =
    "Developed as an AI Principles Project | Knowledge-Based Expert System";

/// Message shown when no catalog record survives the filters.
pub const NO_MATCH_MESSAGE: &str =
    "No products match your criteria. Please adjust your concerns or allergy guard.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at warn so stderr stays quiet next to the report.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Exit codes
// =============================================================================

/// Process exit code for fatal errors.
pub const EXIT_FAILURE: i32 = 1;

/// Process exit code when `recommend` finds no matching products.
pub const EXIT_NO_MATCH: i32 = 2;
