use log::{info, warn};
use std::sync::OnceLock;

use super::params::WeightTable;

static WEIGHTS: OnceLock<WeightTable> = OnceLock::new();

/// Publishes the process-wide weight table. Only the first call succeeds;
/// later tables are handed back unchanged.
pub fn install(table: WeightTable) -> Result<(), WeightTable> {
    WEIGHTS.set(table)?;
    info!("BAE weight table installed");
    Ok(())
}

/// The process-wide weight table.
///
/// Falls back to an all-zero table when nothing was installed before the
/// first evaluation, which keeps every score at zero.
pub fn weights() -> &'static WeightTable {
    WEIGHTS.get_or_init(|| {
        warn!("No BAE weight table installed, evaluating with zero coefficients");
        WeightTable::zeroed()
    })
}
