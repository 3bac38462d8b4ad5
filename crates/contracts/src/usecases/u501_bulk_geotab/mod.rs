pub mod notification;
pub mod progress;
pub mod request;
pub mod result;

pub use notification::NotificationRequest;
pub use progress::BatchProgress;
pub use request::{OperationMode, COL_GEOTAB_SERIAL, COL_MAC_ADDRESS};
pub use result::{BatchError, BatchSummary, OperationResult};

use crate::usecases::common::UseCaseMetadata;

pub struct BulkGeotab;

impl UseCaseMetadata for BulkGeotab {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "bulk_geotab"
    }

    fn display_name() -> &'static str {
        "Bulk Geotab pairing"
    }

    fn description() -> &'static str {
        "Pair or unpair supertags with Geotab serial numbers from a CSV file"
    }
}
