pub mod record_material_receipt_command;

pub use record_material_receipt_command::RecordMaterialReceiptCommand;
