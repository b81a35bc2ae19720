pub mod aggregate;
pub mod images;
pub mod rows;
pub mod shrinkage;
pub mod submission;
pub mod validation;

pub use aggregate::{FieldValue, FormState, FormStateError, WashingReportId};
pub use images::{validate_images, ImageAttachment, ImageError, ALLOWED_IMAGE_TYPES};
pub use rows::{
    ColorFastnessRow, ColorStainingRow, PassFail, PullingTestRow, ShrinkageRow, TableRows,
    Verdict, VisualAssessmentRow,
};
pub use shrinkage::{parse_fraction, requirement_limit};
pub use submission::{
    ReportListResponse, StoredReport, SubmissionPayload, SubmitReportResponse, SubmittingUser,
};
pub use validation::{validate_required, FieldIssue};
