use crate::{
    errors::ServiceError,
    models::audit::{AuditFilter, AuditLog, AUDIT_CSV_HEADERS},
    seed,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Read-only audit trail with filtering and CSV export
#[derive(Clone)]
pub struct AuditService {
    logs: Arc<Vec<AuditLog>>,
}

impl Default for AuditService {
    fn default() -> Self {
        Self::new(seed::audit_logs())
    }
}

impl AuditService {
    pub fn new(logs: Vec<AuditLog>) -> Self {
        Self {
            logs: Arc::new(logs),
        }
    }

    /// Rows matching every set criterion, in stored order
    #[instrument(skip(self))]
    pub fn filter(&self, filter: &AuditFilter) -> Vec<AuditLog> {
        let rows: Vec<AuditLog> = self
            .logs
            .iter()
            .filter(|log| filter.matches(log))
            .cloned()
            .collect();
        debug!(matched = rows.len(), total = self.logs.len(), "Audit filter applied");
        rows
    }

    /// Header row plus one row per log
    pub fn to_csv(&self, rows: &[AuditLog]) -> Result<String, ServiceError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(AUDIT_CSV_HEADERS)?;
        for row in rows {
            writer.write_record(row.csv_record())?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ServiceError::ExportError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ServiceError::ExportError(e.to_string()))
    }

    /// Filters, then serialises the result
    pub fn export(&self, filter: &AuditFilter) -> Result<(String, usize), ServiceError> {
        let rows = self.filter(filter);
        let csv = self.to_csv(&rows)?;
        Ok((csv, rows.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::AuditQuery;

    fn filter_for(query: AuditQuery) -> AuditFilter {
        AuditFilter::try_from(query).unwrap()
    }

    #[test]
    fn issue_filter_matches_one_sample_row() {
        let svc = AuditService::default();
        let rows = svc.filter(&filter_for(AuditQuery {
            transaction_type: Some("Material Issue".into()),
            ..Default::default()
        }));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reference, "#ISS001");
    }

    #[test]
    fn export_has_header_plus_filtered_rows() {
        let svc = AuditService::default();
        let filter = filter_for(AuditQuery {
            person: Some("rahul".into()),
            ..Default::default()
        });
        let (csv, count) = svc.export(&filter).unwrap();
        assert_eq!(count, 2);
        assert_eq!(csv.lines().count(), count + 1);
        assert_eq!(
            csv.lines().next().unwrap(),
            "Timestamp,Transaction Type,Material,Material Type,Quantity,Wastage,Person Name,Person Type,Reference"
        );
    }

    #[test]
    fn missing_wastage_exports_as_empty_cell() {
        let svc = AuditService::default();
        let filter = filter_for(AuditQuery {
            transaction_type: Some("Material Receipt".into()),
            ..Default::default()
        });
        let (csv, _) = svc.export(&filter).unwrap();
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "2024-02-19 16:45,Material Receipt,Gold,22K,1000g,,Rajesh Jewellers,Supplier,#PO123"
        );
    }

    #[test]
    fn empty_result_still_has_header() {
        let svc = AuditService::default();
        let filter = filter_for(AuditQuery {
            material: Some("platinum".into()),
            ..Default::default()
        });
        let (csv, count) = svc.export(&filter).unwrap();
        assert_eq!(count, 0);
        assert_eq!(csv.lines().count(), 1);
    }
}
