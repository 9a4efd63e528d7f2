//! VICAR format constants
//!
//! Keyword names and fixed values used by the label parser and the
//! pixel extractor, replacing magic strings with descriptive names.

/// Label prefix constants
pub mod header {
    /// Mandatory leading token of every VICAR file
    pub const LBLSIZE_PREFIX: &[u8] = b"LBLSIZE=";

    /// Upper bound on the digits read for the label size
    pub const MAX_LBLSIZE_DIGITS: usize = 20;
}

/// Label keywords consumed by the extractor
pub mod keys {
    pub const LBLSIZE: &str = "LBLSIZE"; // Size of the label in bytes
    pub const FORMAT: &str = "FORMAT";   // Pixel sample format
    pub const RECSIZE: &str = "RECSIZE"; // Bytes per record
    pub const NLB: &str = "NLB";         // Binary header records
    pub const NBB: &str = "NBB";         // Binary prefix bytes per record
    pub const N1: &str = "N1";           // Samples per line
    pub const N2: &str = "N2";           // Lines per band
    pub const N3: &str = "N3";           // Bands
    pub const INTFMT: &str = "INTFMT";   // Integer byte order
}

/// Integer byte order values of the INTFMT keyword
pub mod intfmt {
    /// Big-endian
    pub const HIGH: &str = "HIGH";
    /// Little-endian
    pub const LOW: &str = "LOW";
}

/// HALF samples are rescaled by `65536 / 4096`
pub mod half_scale {
    pub const NUMERATOR: f64 = 65536.0;
    pub const DENOMINATOR: f64 = 4096.0;
}
