pub mod artisan;
pub mod audit;
pub mod dashboard;
pub mod issue;
pub mod manufacturing;
pub mod material;
pub mod material_return;
pub mod navigation;
pub mod receipt;
pub mod supplier;

pub use artisan::{Artisan, ArtisanStatus, MaterialQuantity, StatusHistoryEntry};
pub use audit::{AuditFilter, AuditLog, AuditQuery};
pub use manufacturing::{Department, ManufacturingOrder, ProcessStep};
pub use navigation::Navigation;
pub use receipt::{ReceiptData, ReceiptForm, ReceiptPayload, ReceiptResponse};
