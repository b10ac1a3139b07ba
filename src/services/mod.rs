pub mod audit;
pub mod receipts;
pub mod submissions;
pub mod workshop;

pub use audit::AuditService;
pub use receipts::ReceiptService;
pub use submissions::SubmissionService;
pub use workshop::WorkshopService;
