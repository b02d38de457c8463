//! Exhibition records, batches, and the aggregations behind the chart views.

pub mod aggregation;
pub mod batch;
pub mod record;

pub use aggregation::{GroupCount, group_by_invitation_type, group_by_province};
pub use batch::{ExhibitionBatch, PlausibilityReport};
pub use record::{Exhibition, InvitationType, RecordViolation};
