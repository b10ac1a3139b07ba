use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jewellery Tracker API",
        version = "1.0.0",
        description = r#"
# Jewellery Material Tracker

Tracks precious materials through a jewellery workshop.

- **Receipts**: material received from suppliers, stored and printable
- **Issues and returns**: material handed to artisans and brought back with wastage
- **Artisans**: roster with status history
- **Audit**: filterable movement log with CSV export
- **Manufacturing**: orders and their progress through departments

## Error Handling

Failures use one JSON shape:

```json
{
  "error": "Not Found",
  "message": "Artisan ART999 not found",
  "request_id": "5f0c...",
  "timestamp": "2024-02-20T10:15:00Z"
}
```

The receipt endpoint is the exception: it answers `{"success": false, "error": "..."}` with status 500.
"#
    ),
    paths(
        crate::api_status,
        crate::handlers::dashboard::navigation,
        crate::handlers::dashboard::dashboard,
        crate::handlers::materials::list_materials,
        crate::handlers::materials::receive_material,
        crate::handlers::materials::list_receipts,
        crate::handlers::materials::print_receipt,
        crate::handlers::materials::issue_form,
        crate::handlers::materials::issue_material,
        crate::handlers::materials::return_material,
        crate::handlers::suppliers::list_suppliers,
        crate::handlers::suppliers::create_supplier,
        crate::handlers::artisans::list_artisans,
        crate::handlers::artisans::get_artisan,
        crate::handlers::artisans::create_artisan,
        crate::handlers::artisans::update_artisan_status,
        crate::handlers::issues::list_issues,
        crate::handlers::returns::list_returns,
        crate::handlers::audit::list_audit_logs,
        crate::handlers::audit::export_audit_logs,
        crate::handlers::manufacturing::list_orders,
        crate::handlers::manufacturing::get_order,
    ),
    components(
        schemas(
            crate::entities::material_receipt::Model,
            crate::models::receipt::ReceiptPayload,
            crate::models::receipt::ReceiptResponse,
            crate::models::receipt::ReceiptData,
            crate::models::artisan::Artisan,
            crate::models::artisan::ArtisanStatus,
            crate::models::artisan::StatusUpdateRequest,
            crate::models::artisan::NewArtisanForm,
            crate::models::supplier::SupplierCard,
            crate::models::supplier::NewSupplierForm,
            crate::models::issue::MaterialIssue,
            crate::models::issue::IssueForm,
            crate::models::material_return::MaterialReturn,
            crate::models::material_return::ReturnForm,
            crate::models::material::MaterialStock,
            crate::models::audit::AuditLog,
            crate::models::manufacturing::OrderSummary,
            crate::models::manufacturing::OrderDetails,
            crate::models::dashboard::Dashboard,
            crate::models::navigation::Navigation,
            crate::commands::submissions::FormAcknowledgement,
            crate::handlers::common::SelectOption,
            crate::errors::ErrorResponse
        )
    ),
    tags(
        (name = "system", description = "Service status"),
        (name = "pages", description = "Layout shell and dashboard"),
        (name = "materials", description = "Inventory, receipts, issue and return forms"),
        (name = "suppliers", description = "Supplier cards and registration"),
        (name = "artisans", description = "Artisan roster and status history"),
        (name = "issues", description = "Material issued to artisans"),
        (name = "returns", description = "Material returned with wastage"),
        (name = "audit", description = "Movement log and CSV export"),
        (name = "manufacturing", description = "Orders and department progress")
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
