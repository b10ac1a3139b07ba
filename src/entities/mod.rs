pub mod material_receipt;

pub use material_receipt::Entity as MaterialReceipt;
