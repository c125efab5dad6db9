/// Index symbol as the quote source knows it (e.g. "^N225", "000001.SS")
pub type Symbol = String;

/// Currency code (ISO 4217)
pub type CurrencyCode = String;
